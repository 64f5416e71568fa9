use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use sumview_core::models::ThreadRecord;

use crate::ui::format::format_message_timestamp;
use crate::ui::views::summary_panel;
use crate::ui::{theme, App};

pub fn render_thread_detail(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(record) = app.selected_record().cloned() else {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::styled("Select a thread to view details", theme::text_muted()),
            Line::styled(
                "Choose an email thread from the left panel to start reviewing",
                theme::text_dim(),
            ),
        ])
        .centered();
        f.render_widget(empty, area);
        return;
    };

    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);
    render_header(f, &record, chunks[0]);

    // Messages on the left, summary panel on the right, like the web layout
    let body = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    render_messages(f, app, &record, body[0]);
    summary_panel::render_summary_panel(f, app, &record, body[1]);
}

fn render_header(f: &mut Frame, record: &ThreadRecord, area: Rect) {
    let thread = &record.thread;
    let header = Paragraph::new(vec![
        Line::styled(
            thread.subject.clone(),
            theme::text_primary().add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::styled(format!("Order: {}", thread.order_id), theme::text_muted()),
            Span::styled(" · ", theme::text_dim()),
            Span::styled(thread.product.clone(), theme::text_muted()),
            Span::styled(" · ", theme::text_dim()),
            Span::styled(thread.topic.clone(), theme::text_muted()),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border_inactive()),
    );
    f.render_widget(header, area);
}

fn render_messages(f: &mut Frame, app: &mut App, record: &ThreadRecord, area: Rect) {
    let mut lines: Vec<Line> = vec![Line::styled(
        "Email Thread",
        theme::text_muted().add_modifier(Modifier::BOLD),
    )];

    for message in &record.thread.messages {
        let color = theme::sender_color(message.sender);
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!("▌ {}", message.sender.label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", format_message_timestamp(&message.timestamp)),
                theme::text_dim(),
            ),
        ]));
        for body_line in message.body.lines() {
            lines.push(Line::styled(
                format!("  {body_line}"),
                theme::text_primary(),
            ));
        }
    }

    // Clamp the scroll so the pane can't run past the content
    let max_scroll = (lines.len() as u16).saturating_sub(area.height.saturating_sub(2));
    if app.message_scroll > max_scroll {
        app.message_scroll = max_scroll;
    }

    let messages = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.message_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(theme::border_inactive()),
        );
    f.render_widget(messages, area);
}
