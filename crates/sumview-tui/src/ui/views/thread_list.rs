use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use sumview_core::models::ReviewBadge;

use crate::ui::format::truncate_with_ellipsis;
use crate::ui::{theme, App};

pub fn render_thread_list(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme::border_inactive())
        .style(Style::default().bg(theme::BG_SIDEBAR))
        .title(format!(" Email Threads ({}) ", app.store.len()));

    if app.store.is_empty() {
        let text = if app.loading_threads {
            "Loading threads..."
        } else {
            "No threads loaded."
        };
        let empty = Paragraph::new(text).style(theme::text_dim()).block(block);
        f.render_widget(empty, area);
        return;
    }

    // Subject column budget: area width minus borders and padding
    let subject_width = area.width.saturating_sub(5) as usize;

    let items: Vec<ListItem> = app
        .store
        .records()
        .map(|record| {
            let id = record.thread_id();
            let is_selected = app.selected.as_deref() == Some(id);
            let prefix = if is_selected { "▶ " } else { "  " };
            let badge = ReviewBadge::of(record.summary.as_ref());

            let row_style = if is_selected {
                theme::selected_row()
            } else {
                theme::text_primary()
            };

            let mut lines = vec![
                Line::from(vec![
                    Span::styled(format!("{prefix}{id}"), row_style),
                    Span::raw("  "),
                    Span::styled(format!("[{}]", badge.label()), theme::badge_style(badge)),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  {}",
                        truncate_with_ellipsis(&record.thread.subject, subject_width)
                    ),
                    if is_selected {
                        row_style
                    } else {
                        theme::text_muted()
                    },
                )),
                Line::from(Span::styled(
                    format!(
                        "  {} · {} messages",
                        record.thread.product,
                        record.message_count()
                    ),
                    theme::text_dim(),
                )),
            ];

            if let Some(summary) = record.summary.as_ref() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {}", summary.issue_category),
                        theme::text_muted(),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        summary.priority.label(),
                        Style::default().fg(theme::priority_color(summary.priority)),
                    ),
                ]));
            }
            lines.push(Line::raw(""));

            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::selected_row());

    let mut state = ListState::default();
    state.select(app.selected_index());
    f.render_stateful_widget(list, area, &mut state);
}
