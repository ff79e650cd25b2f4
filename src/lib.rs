pub mod ball;
pub mod config;
pub mod font;
pub mod game;
pub mod input;
pub mod paddle;
pub mod pixel_buffer;
pub mod timing;
pub mod util;
