//! Theme module for hedgehog-tui.
//!
//! Centralized color palette and styling constants for the warm
//! "autumn burrow" aesthetic.

use ratatui::style::Color;
use ratatui::symbols::border;

/// Rounded border set used by every card in the UI.
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Background Colors - Burrow Palette
// ============================================================================

/// Primary background color - dark earth (#14100c)
pub const BG_PRIMARY: Color = Color::Rgb(20, 16, 12);

/// Secondary background color - slightly lighter (#1c1712)
pub const BG_SECONDARY: Color = Color::Rgb(28, 23, 18);

/// Tertiary background color - for highlighted areas (#272019)
pub const BG_TERTIARY: Color = Color::Rgb(39, 32, 25);

/// Subtle border color (#322a20)
pub const BORDER_SUBTLE: Color = Color::Rgb(50, 42, 32);

// ============================================================================
// Accent Colors - Orange Primary
// ============================================================================

/// Primary orange accent color (#f59e0b)
pub const ORANGE_PRIMARY: Color = Color::Rgb(245, 158, 11);

/// Dimmed orange for secondary elements (#a16207)
pub const ORANGE_DIM: Color = Color::Rgb(161, 98, 7);

// ============================================================================
// Status Colors
// ============================================================================

/// Green healthy-mood color (#4ade80)
pub const GREEN_GOOD: Color = Color::Rgb(74, 222, 128);

/// Amber caution color for a mood drifting the wrong way (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

/// Red critical color for a mood at its bad end (#f87171)
pub const RED_CRITICAL: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - warm white (#f1e9dd)
pub const TEXT_PRIMARY: Color = Color::Rgb(241, 233, 221);

/// Secondary text color - muted tan (#b8a88f)
pub const TEXT_SECONDARY: Color = Color::Rgb(184, 168, 143);

/// Muted text color - for labels and hints (#7d6f5b)
pub const TEXT_MUTED: Color = Color::Rgb(125, 111, 91);

/// Alternate between two colors on the animation tick, for the busy
/// indicator pulse.
pub fn get_pulse_color(tick: u64, bright: Color, dim: Color) -> Color {
    if tick % 2 == 0 {
        bright
    } else {
        dim
    }
}
