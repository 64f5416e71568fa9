use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::ui::components::statusbar::render_statusbar;
use crate::ui::views::{thread_detail, thread_list};
use crate::ui::{theme, App};

pub fn render(f: &mut Frame, app: &mut App) {
    f.render_widget(
        Block::default().style(Style::default().bg(theme::BG_APP)),
        f.area(),
    );

    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(f.area());
    let body = Layout::horizontal([Constraint::Length(38), Constraint::Min(0)]).split(chunks[0]);

    thread_list::render_thread_list(f, app, body[0]);
    thread_detail::render_thread_detail(f, app, body[1]);

    let hints = if app.pending_quit {
        "Ctrl+C again to quit"
    } else if app.editor.is_some() {
        "Ctrl+S save · Esc cancel"
    } else {
        "j/k select · g generate · e edit · a approve · q quit"
    };
    render_statusbar(f, chunks[1], app.current_notification(), hints);
}
