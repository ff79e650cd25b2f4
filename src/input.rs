use crate::util::{get_flag_u8, set_flag_u8};

/// Logical keys the game reacts to, independent of any platform key codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    P1Up,
    P1Down,
    P2Up,
    P2Down,
    Serve,
    Quit,
}
impl Key {
    pub const ALL: [Key; 6] = [
        Key::P1Up,
        Key::P1Down,
        Key::P2Up,
        Key::P2Down,
        Key::Serve,
        Key::Quit,
    ];

    fn flag(self) -> u8 {
        match self {
            Key::P1Up => 0,
            Key::P1Down => 1,
            Key::P2Up => 2,
            Key::P2Down => 3,
            Key::Serve => 4,
            Key::Quit => 5,
        }
    }
}

/// Which logical keys are currently held down.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyState(u8);
impl KeyState {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn set(&mut self, key: Key, held: bool) {
        set_flag_u8(&mut self.0, key.flag(), held)
    }
    pub fn held(&self, key: Key) -> bool {
        get_flag_u8(self.0, key.flag())
    }
    pub fn release_all(&mut self) {
        self.0 = 0;
    }

    pub fn with(mut self, key: Key) -> Self {
        self.set(key, true);
        self
    }
}
