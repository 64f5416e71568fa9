use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::editor::DraftField;
use crate::ui::App;

/// Top-level key dispatch. An open draft makes the app modal: every key goes
/// to the editor until save or cancel.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.editor.is_some() {
        handle_editor_key(app, key);
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('g') => app.generate_summary(),
        KeyCode::Char('e') => app.begin_edit(),
        KeyCode::Char('a') => app.approve_summary(),
        KeyCode::PageDown => app.scroll_down(10),
        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_down(10)
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => app.scroll_up(10),
        KeyCode::Esc => app.dismiss_notification(),
        _ => {}
    }
    Ok(())
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    // Draft-level commands first
    match (key.code, key.modifiers) {
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            app.save_edit();
            return;
        }
        (KeyCode::Esc, _) => {
            app.cancel_edit();
            return;
        }
        (KeyCode::Tab, _) => {
            if let Some(draft) = app.editor.as_mut() {
                draft.focus_next();
            }
            return;
        }
        (KeyCode::BackTab, _) => {
            if let Some(draft) = app.editor.as_mut() {
                draft.focus_prev();
            }
            return;
        }
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => {
            if let Some(draft) = app.editor.as_mut() {
                draft.add_item();
            }
            return;
        }
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
            if let Some(draft) = app.editor.as_mut() {
                draft.remove_focused_item();
            }
            return;
        }
        _ => {}
    }

    let Some(draft) = app.editor.as_mut() else {
        return;
    };

    // Enter means newline in the summary body, "next field" on an item
    if key.code == KeyCode::Enter {
        match draft.field {
            DraftField::Summary => draft.active_editor().insert_newline(),
            DraftField::Item(_) => draft.focus_next(),
        }
        return;
    }

    let editor = draft.active_editor();
    match (key.code, key.modifiers) {
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => editor.move_home(),
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => editor.move_end(),
        (KeyCode::Char('k'), KeyModifiers::CONTROL) => editor.kill_to_end(),
        // Unbound Ctrl/Alt chords must not type their base character
        (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            editor.insert_char(c)
        }
        (KeyCode::Backspace, _) => editor.backspace(),
        (KeyCode::Delete, _) => editor.delete_forward(),
        (KeyCode::Left, _) => editor.move_left(),
        (KeyCode::Right, _) => editor.move_right(),
        (KeyCode::Home, _) => editor.move_home(),
        (KeyCode::End, _) => editor.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use std::sync::mpsc;
    use sumview_core::config::CoreConfig;
    use sumview_core::runtime::{CoreRuntime, DataChange};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with_summary() -> (App, CoreRuntime) {
        let mut runtime = CoreRuntime::new(CoreConfig::default()).unwrap();
        let _ = runtime.take_data_rx();
        let (data_tx, data_rx) = mpsc::channel::<DataChange>();
        let mut app = App::new(runtime.handle(), data_rx);

        let record = serde_json::from_value(serde_json::json!({
            "thread_id": "T1",
            "topic": "refund request",
            "subject": "Refund please",
            "initiated_by": "customer",
            "order_id": "ORD-T1",
            "product": "Desk Lamp",
            "messages": [],
            "summary": {
                "thread_id": "T1",
                "order_id": "ORD-T1",
                "product": "Desk Lamp",
                "issue_category": "refund",
                "summary": "Wants a refund.",
                "sentiment": "neutral",
                "status": "pending",
                "action_items": ["a", "b"],
                "priority": "low"
            }
        }))
        .unwrap();
        data_tx.send(DataChange::ThreadsLoaded(vec![record])).unwrap();
        app.check_for_data_updates();
        (app, runtime)
    }

    #[test]
    fn test_q_quits_in_normal_mode() {
        let (mut app, mut runtime) = app_with_summary();
        handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(!app.running);
        runtime.shutdown();
    }

    #[test]
    fn test_e_opens_editor_and_q_types_into_it() {
        let (mut app, mut runtime) = app_with_summary();
        handle_key(&mut app, key(KeyCode::Char('e'))).unwrap();
        assert!(app.editor.is_some());

        // Modal: 'q' is now text, not quit
        handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.running);
        assert!(app.editor.as_ref().unwrap().summary.text.ends_with('q'));
        runtime.shutdown();
    }

    #[test]
    fn test_unbound_chord_does_not_type_into_editor() {
        let (mut app, mut runtime) = app_with_summary();
        handle_key(&mut app, key(KeyCode::Char('e'))).unwrap();

        handle_key(&mut app, ctrl('x')).unwrap();
        let alt_y = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::ALT);
        handle_key(&mut app, alt_y).unwrap();

        assert_eq!(app.editor.as_ref().unwrap().summary.text, "Wants a refund.");
        runtime.shutdown();
    }

    #[test]
    fn test_remove_item_then_save_commits_remaining() {
        let (mut app, mut runtime) = app_with_summary();
        handle_key(&mut app, key(KeyCode::Char('e'))).unwrap();
        handle_key(&mut app, key(KeyCode::Tab)).unwrap(); // focus item 0
        handle_key(&mut app, ctrl('d')).unwrap(); // remove it
        handle_key(&mut app, ctrl('s')).unwrap(); // save

        let committed = app.store.get("T1").unwrap().summary.as_ref().unwrap();
        assert_eq!(committed.action_items, vec!["b"]);
        runtime.shutdown();
    }

    #[test]
    fn test_esc_cancels_without_committing() {
        let (mut app, mut runtime) = app_with_summary();
        handle_key(&mut app, key(KeyCode::Char('e'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();

        assert!(app.editor.is_none());
        let committed = app.store.get("T1").unwrap().summary.as_ref().unwrap();
        assert_eq!(committed.summary, "Wants a refund.");
        runtime.shutdown();
    }

    #[test]
    fn test_approve_then_edit_is_refused() {
        let (mut app, mut runtime) = app_with_summary();
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('e'))).unwrap();
        assert!(app.editor.is_none());
        runtime.shutdown();
    }
}
