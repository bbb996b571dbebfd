use std::ops::{Range, RangeInclusive};

use ratatui::style::Color;

pub const VIEWPORT_WIDTH: f64 = 800.0;
pub const VIEWPORT_HEIGHT: f64 = 600.0;

pub const RED: Color = Color::Rgb(255, 0, 0);
pub const GREEN: Color = Color::Rgb(0, 255, 0);
pub const DARK_GREEN: Color = Color::Rgb(0, 128, 0);
pub const BROWN: Color = Color::Rgb(139, 69, 19);
pub const WHITE: Color = Color::Rgb(255, 255, 255);
pub const STAR_YELLOW: Color = Color::Rgb(255, 223, 0);

pub const SNOWFLAKE_COLORS: [Color; 2] = [RED, GREEN];
pub const SNOWFLAKE_COUNT: usize = 20;

pub const DEPTH_RANGE: RangeInclusive<u32> = 2..=5;
pub const SPAWN_SCALE_RANGE: RangeInclusive<u32> = 10..=40;
pub const RECYCLE_SCALE_RANGE: RangeInclusive<u32> = 30..=100;
pub const SPEED_RANGE: Range<f64> = 1.0..3.0;
pub const ROTATION_SPEED_RANGE: Range<f64> = -2.0..2.0;
pub const ANGLE_RANGE: Range<f64> = 0.0..360.0;
pub const RECYCLE_OFFSET: f64 = -100.0;

pub const GREETING_TEXT: &str = "Merry Christmas X!";
pub const GREETING_COLORS: [Color; 2] = [RED, DARK_GREEN];
// Relative to the horizontal center and the top edge
pub const GREETING_OFFSET: (f64, f64) = (-160.0, 200.0);
