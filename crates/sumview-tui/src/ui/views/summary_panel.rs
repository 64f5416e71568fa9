use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use sumview_core::models::{ReviewBadge, ThreadRecord, ThreadSummary};

use crate::ui::editor::{DraftField, SummaryDraft};
use crate::ui::text_editor::TextEditor;
use crate::ui::{theme, App};

pub fn render_summary_panel(f: &mut Frame, app: &App, record: &ThreadRecord, area: Rect) {
    let block = Block::default()
        .borders(Borders::NONE)
        .style(Style::default().bg(theme::BG_APP));

    let lines = match (&app.editor, record.summary.as_ref()) {
        (Some(draft), Some(_)) if draft.thread_id == record.thread_id() => editing_lines(draft),
        (_, Some(summary)) => viewing_lines(summary),
        (_, None) => placeholder_lines(app, record),
    };

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    f.render_widget(panel, area);
}

fn placeholder_lines(app: &App, record: &ThreadRecord) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            " No Summary Generated",
            theme::text_muted().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
    ];
    if app.summarizing.contains(record.thread_id()) {
        lines.push(Line::styled(
            format!(" {} Summarizing this thread...", app.spinner()),
            Style::default().fg(theme::ACCENT_PRIMARY),
        ));
    } else {
        lines.push(Line::styled(
            " Press g to analyze this thread with AI",
            theme::text_dim(),
        ));
    }
    lines
}

fn viewing_lines(summary: &ThreadSummary) -> Vec<Line<'static>> {
    let badge = ReviewBadge::of(Some(summary));
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                " AI Summary ",
                theme::text_primary().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("[{}]", badge.label()), theme::badge_style(badge)),
        ]),
        Line::raw(""),
        metadata_line("Category ", summary.issue_category.clone(), theme::TEXT_PRIMARY),
        metadata_line(
            "Sentiment",
            summary.sentiment.label().to_string(),
            theme::sentiment_color(summary.sentiment),
        ),
        metadata_line("Status   ", summary.status.label().to_string(), theme::TEXT_PRIMARY),
        metadata_line(
            "Priority ",
            summary.priority.label().to_string(),
            theme::priority_color(summary.priority),
        ),
        Line::raw(""),
        Line::styled(" Summary", theme::text_muted().add_modifier(Modifier::BOLD)),
    ];

    for text_line in summary.summary.lines() {
        lines.push(Line::styled(format!(" {text_line}"), theme::text_primary()));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        " Action Items",
        theme::text_muted().add_modifier(Modifier::BOLD),
    ));
    if summary.action_items.is_empty() {
        lines.push(Line::styled(" (none)", theme::text_dim()));
    }
    for item in &summary.action_items {
        lines.push(Line::styled(format!(" □ {item}"), theme::text_primary()));
    }

    lines.push(Line::raw(""));
    if summary.review.is_approved() {
        lines.push(Line::styled(
            " ✓ Approved - ready for CRM export",
            Style::default()
                .fg(theme::ACCENT_SUCCESS)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        lines.push(Line::styled(
            " e edit · a approve",
            theme::text_dim(),
        ));
    }
    lines
}

fn editing_lines(draft: &SummaryDraft) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            " Editing Summary",
            Style::default()
                .fg(theme::ACCENT_WARNING)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(" Summary", theme::text_muted().add_modifier(Modifier::BOLD)),
    ];

    lines.extend(editor_lines(
        &draft.summary,
        draft.field == DraftField::Summary,
    ));

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        " Action Items",
        theme::text_muted().add_modifier(Modifier::BOLD),
    ));
    if draft.items.is_empty() {
        lines.push(Line::styled(
            " (none - Ctrl+N adds one)",
            theme::text_dim(),
        ));
    }
    for (i, item) in draft.items.iter().enumerate() {
        let focused = draft.field == DraftField::Item(i);
        let marker = if focused { "▶" } else { " " };
        let mut spans = vec![Span::styled(
            format!(" {marker} "),
            Style::default().fg(theme::ACCENT_PRIMARY),
        )];
        spans.extend(field_spans(item, focused));
        lines.push(Line::from(spans));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        " Tab field · Ctrl+N add · Ctrl+D remove · Ctrl+S save · Esc cancel",
        theme::text_dim(),
    ));
    lines
}

fn metadata_line(label: &str, value: String, color: ratatui::style::Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {label} "), theme::text_dim()),
        Span::styled(value, Style::default().fg(color)),
    ])
}

/// Render a multi-line editor field, drawing the cursor as a reversed cell
/// when the field has focus.
fn editor_lines(editor: &TextEditor, focused: bool) -> Vec<Line<'static>> {
    if !focused {
        let lines: Vec<Line<'static>> = editor
            .text
            .lines()
            .map(|l| Line::styled(format!(" {l}"), theme::text_primary()))
            .collect();
        if lines.is_empty() {
            return vec![Line::raw(" ")];
        }
        return lines;
    }

    let mut lines = Vec::new();
    let mut line_start = 0usize;
    let mut placed_cursor = false;

    for segment in editor.text.split('\n') {
        let line_end = line_start + segment.len();
        if editor.cursor >= line_start && editor.cursor <= line_end && !placed_cursor {
            let col = editor.cursor - line_start;
            let mut spans = vec![Span::raw(" ")];
            spans.extend(cursor_spans(segment, col));
            lines.push(Line::from(spans));
            placed_cursor = true;
        } else {
            lines.push(Line::styled(
                format!(" {segment}"),
                theme::text_primary(),
            ));
        }
        line_start = line_end + 1;
    }
    lines
}

/// Spans for a single field line with the cursor at byte offset `col`
fn cursor_spans(segment: &str, col: usize) -> Vec<Span<'static>> {
    let before = &segment[..col];
    let mut rest = segment[col..].chars();
    let at_cursor = rest.next();
    let after: String = rest.collect();

    let mut spans = vec![Span::styled(before.to_string(), theme::text_primary())];
    spans.push(Span::styled(
        at_cursor.map(String::from).unwrap_or_else(|| " ".to_string()),
        theme::text_primary().add_modifier(Modifier::REVERSED),
    ));
    if !after.is_empty() {
        spans.push(Span::styled(after, theme::text_primary()));
    }
    spans
}

/// Spans for a single-line item field (items never contain newlines)
fn field_spans(editor: &TextEditor, focused: bool) -> Vec<Span<'static>> {
    if focused {
        cursor_spans(&editor.text, editor.cursor)
    } else {
        vec![Span::styled(editor.text.clone(), theme::text_primary())]
    }
}
