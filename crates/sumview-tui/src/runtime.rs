use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use futures::StreamExt;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

pub(crate) async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();

    // Tick drives data-channel polling, notification expiry, and the spinner
    let mut tick_interval = tokio::time::interval(Duration::from_millis(50));

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                if app.pending_quit {
                                    // Second Ctrl+C - quit immediately
                                    app.quit();
                                } else {
                                    // First Ctrl+C - arm (footer shows warning)
                                    app.pending_quit = true;
                                }
                            } else {
                                app.pending_quit = false;
                                handle_key(app, key)?;
                            }
                        }
                        Event::Mouse(mouse) => match mouse.kind {
                            MouseEventKind::ScrollUp => app.scroll_up(3),
                            MouseEventKind::ScrollDown => app.scroll_down(3),
                            _ => {}
                        },
                        Event::Paste(text) => app.handle_paste(&text),
                        _ => {}
                    }
                }
            }

            _ = tick_interval.tick() => {
                app.tick();
                app.check_for_data_updates();
            }
        }
    }
    Ok(())
}
