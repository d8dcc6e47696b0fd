//! Color theme constants for the seat board
//!
//! Dark cinema palette: green free seats, deep red sold seats.

use ratatui::style::Color;

/// Canvas background
pub const COLOR_BG: Color = Color::Rgb(15, 15, 20); // #0f0f14

/// Free seat fill - green
pub const COLOR_SEAT_FREE: Color = Color::Rgb(57, 211, 83); // #39d353

/// Sold seat fill - deep red
pub const COLOR_SEAT_SOLD: Color = Color::Rgb(204, 38, 38); // #cc2626

/// Seat outline - blue
pub const COLOR_SEAT_OUTLINE: Color = Color::Rgb(31, 111, 235); // #1f6feb

/// Primary text
pub const COLOR_TEXT: Color = Color::Rgb(230, 237, 243); // #e6edf3

/// Help line and other secondary text
pub const COLOR_NOTE: Color = Color::Rgb(139, 148, 158); // #8b949e

/// Screen banner bar
pub const COLOR_SCREEN: Color = Color::Rgb(48, 54, 61); // #30363d

/// Save errors in the footer
pub const COLOR_ERROR: Color = Color::Red;
