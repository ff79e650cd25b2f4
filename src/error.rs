use thiserror::Error;
use winit::error::{EventLoopError, OsError};

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter found")]
    NoAdapter,
    #[error("the graphics adapter cannot present to this window")]
    UnsupportedSurface,
    #[error("failed to open graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("failed to acquire next surface texture: {0}")]
    Frame(#[from] wgpu::SurfaceError),
}
