pub mod scene;
pub mod tree;

// Terminal cells reserved for the card, border excluded. Braille cells are 2x4 dots, so this keeps
// the 4:3 viewport roughly undistorted.
pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 38;

pub const TICK_RATE: f64 = 60.0;
pub const FRAME_RATE: f64 = 60.0;
