// Global status bar at the very bottom of the app.
// Notifications on the left, key hints on the right.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::notifications::{Notification, NotificationLevel};
use crate::ui::theme;

/// Render the status bar: notification (flexible) | key hints (fixed width).
/// Fixed columns keep long notifications from pushing the hints off screen.
pub fn render_statusbar(
    f: &mut Frame,
    area: Rect,
    current_notification: Option<&Notification>,
    hints: &str,
) {
    let hints_width = (hints.width() + 2) as u16;
    let chunks =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).split(area);

    let notification_paragraph = if let Some(notification) = current_notification {
        let color = match notification.level {
            NotificationLevel::Info => theme::ACCENT_PRIMARY,
            NotificationLevel::Success => theme::ACCENT_SUCCESS,
            NotificationLevel::Warning => theme::ACCENT_WARNING,
            NotificationLevel::Error => theme::ACCENT_ERROR,
        };
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", notification.level.icon()),
                Style::default().fg(color),
            ),
            Span::styled(notification.message.clone(), Style::default().fg(color)),
        ]))
    } else {
        Paragraph::new(Line::raw(""))
    };
    f.render_widget(notification_paragraph, chunks[0]);

    let hints_paragraph =
        Paragraph::new(Line::styled(format!("{hints}  "), theme::text_dim())).right_aligned();
    f.render_widget(hints_paragraph, chunks[1]);
}
