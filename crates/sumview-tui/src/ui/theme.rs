// Centralized theme for consistent UI styling.
// All colors and semantic styles live here.

use ratatui::style::{Color, Modifier, Style};
use sumview_core::models::{Priority, ReviewBadge, Sentiment};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// App background - pure black for contrast
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Selected list row background
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Sidebar background - very dark, almost black
pub const BG_SIDEBAR: Color = Color::Rgb(12, 12, 12);

/// Primary text - off-white for readability
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dimmed text for hints, placeholders
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

/// Primary accent - muted blue (interactive elements, focus)
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

/// Success - muted green
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

/// Warning - muted amber
pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);

/// Error - muted red
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

/// Active/focused border
pub const BORDER_ACTIVE: Color = Color::Rgb(100, 100, 100);

/// Inactive border
pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

// Sentiment colors track the web tool's mapping
pub const SENTIMENT_POSITIVE: Color = Color::Rgb(16, 185, 129);
pub const SENTIMENT_NEUTRAL: Color = Color::Rgb(107, 114, 128);
pub const SENTIMENT_NEGATIVE: Color = Color::Rgb(239, 68, 68);
pub const SENTIMENT_FRUSTRATED: Color = Color::Rgb(245, 158, 11);

// =============================================================================
// SEMANTIC STYLES
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(BORDER_ACTIVE)
}

pub fn border_inactive() -> Style {
    Style::default().fg(BORDER_INACTIVE)
}

pub fn selected_row() -> Style {
    Style::default().bg(BG_SELECTED).add_modifier(Modifier::BOLD)
}

/// Color for a message card based on which side sent it
pub fn sender_color(sender: sumview_core::models::Sender) -> Color {
    match sender {
        sumview_core::models::Sender::Customer => ACCENT_PRIMARY,
        sumview_core::models::Sender::Company => ACCENT_SUCCESS,
    }
}

pub fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => SENTIMENT_POSITIVE,
        Sentiment::Neutral => SENTIMENT_NEUTRAL,
        Sentiment::Negative => SENTIMENT_NEGATIVE,
        Sentiment::Frustrated => SENTIMENT_FRUSTRATED,
    }
}

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => ACCENT_SUCCESS,
        Priority::Medium => ACCENT_WARNING,
        Priority::High => ACCENT_ERROR,
    }
}

pub fn badge_style(badge: ReviewBadge) -> Style {
    match badge {
        ReviewBadge::NoSummary => Style::default().fg(TEXT_DIM),
        ReviewBadge::Pending => Style::default().fg(ACCENT_PRIMARY),
        ReviewBadge::Edited => Style::default().fg(ACCENT_WARNING),
        ReviewBadge::Approved => Style::default().fg(ACCENT_SUCCESS),
    }
}
