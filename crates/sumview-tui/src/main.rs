mod input;
mod render;
mod runtime;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sumview_core::config::CoreConfig;
use sumview_core::constants::DEFAULT_API_BASE;
use sumview_core::runtime::CoreRuntime;
use sumview_core::tracing_setup::init_tracing;

use crate::runtime::run_app;
use ui::App;

#[derive(Parser, Debug)]
#[command(name = "sumview", about = "Terminal review tool for AI-generated email thread summaries")]
struct Args {
    /// Base URL of the summarization backend
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Append tracing output to this file (controlled by SUMVIEW_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before showing panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        // Print panic info to stderr
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        // Call original hook
        original_hook(panic_info);
    }));

    init_tracing(args.log_file.as_deref())?;

    let mut config = CoreConfig::new(args.api_base);
    config.log_file = args.log_file;
    let mut core_runtime = CoreRuntime::new(config)?;
    let core_handle = core_runtime.handle();
    let data_rx = core_runtime
        .take_data_rx()
        .ok_or_else(|| anyhow::anyhow!("Core runtime already has active data receiver"))?;

    let mut app = App::new(core_handle, data_rx);
    let mut terminal = ui::init_terminal()?;

    app.request_threads();

    let result = run_app(&mut terminal, &mut app).await;

    core_runtime.shutdown();

    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
