pub mod app;
pub mod components;
pub mod editor;
pub mod format;
pub mod notifications;
pub mod terminal;
pub mod text_editor;
pub mod theme;
pub mod views;

pub use app::App;
pub use terminal::{init as init_terminal, restore as restore_terminal, Tui};
