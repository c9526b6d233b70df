//! Color Constants
//!
//! Blue header and buttons on a light grey page.

use egui::Color32;

/// Header bar background - Deep blue
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x00, 0x77, 0xB6);

/// Tab bar background
pub const TAB_BAR_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Page background - Light grey
pub const PAGE_BG: Color32 = Color32::from_rgb(0xF8, 0xF8, 0xF8);

/// Card background for posts and comments
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xDD, 0xDD, 0xDD);

/// Button primary background - Medium blue
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x40, 0x8D, 0xC5);

/// Button secondary background
pub const BUTTON_SECONDARY: Color32 = Color32::from_rgb(0xE0, 0xEC, 0xF5);

/// Destructive button background
pub const BUTTON_DANGER: Color32 = Color32::from_rgb(0xD9, 0x53, 0x4F);

/// Tag chip background
pub const TAG_BG: Color32 = Color32::from_rgb(0xCA, 0xE9, 0xFF);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Primary text color
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x77, 0x77, 0x77);

/// Link and accent color
pub const ACCENT: Color32 = Color32::from_rgb(0x00, 0x77, 0xB6);

/// Field errors and error placeholders
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x39, 0x35);

/// Saved bookmark
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE0);

/// Selected tab / category background
pub const SELECTED_ITEM: Color32 = Color32::from_rgb(0xCA, 0xE9, 0xFF);
