use eframe::egui::Color32;
use std::ops::RangeInclusive;

// Game rules
pub const DICE_COUNT: usize = 10;
pub const DIE_FACES: RangeInclusive<u8> = 1..=6;

// Window settings
pub const WINDOW_TITLE: &str = "Tenzies";
pub const WINDOW_SIZE: [f32; 2] = [560.0, 460.0];

// Board layout
pub const DICE_PER_ROW: usize = 5;
pub const DIE_BUTTON_SIZE: f32 = 64.0;
pub const DIE_SPACING: f32 = 14.0;
pub const DIE_FONT_SIZE: f32 = 28.0;
pub const ROLL_BUTTON_SIZE: [f32; 2] = [180.0, 48.0];

// Colors
pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(0x0B, 0x24, 0x34);
pub const BOARD_COLOR: Color32 = Color32::from_rgb(0xF5, 0xF5, 0xF5);
pub const HELD_DIE_COLOR: Color32 = Color32::from_rgb(0x59, 0xE3, 0x91);
pub const FREE_DIE_COLOR: Color32 = Color32::WHITE;
pub const DIE_TEXT_COLOR: Color32 = Color32::from_rgb(0x2B, 0x28, 0x3A);
pub const ROLL_BUTTON_COLOR: Color32 = Color32::from_rgb(0x50, 0x35, 0xFF);

// Logging
pub const DEFAULT_LOG_FILTER: &str = "info";
