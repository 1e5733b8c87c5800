//! clubdeck binary: terminal setup, config merge and the effect handler

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use clubdeck_tui::action::Action;
use clubdeck_tui::config::DeckConfig;
use clubdeck_tui::dispatch::{EffectContext, Runtime, TaskKey};
use clubdeck_tui::effect::Effect;
use clubdeck_tui::error::Result;
use clubdeck_tui::export;
use clubdeck_tui::reducer::reducer;
use clubdeck_tui::state::AppState;
use clubdeck_tui::ui::DeckUi;

const SYNC_TASK: &str = "partner_sync";
const SYNC_DELAY: Duration = Duration::from_millis(800);
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Terminal admin console for the clubdeck membership platform
#[derive(Parser, Debug)]
#[command(name = "clubdeck", version)]
struct Args {
    /// Path to a JSON config file
    #[arg(long, default_value = "clubdeck.json")]
    config: PathBuf,

    /// Directory CSV exports are written into (overrides the config file)
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Rows per table page (overrides the config file)
    #[arg(long)]
    page_size: Option<usize>,

    /// Log file; logging stays off when unset (overrides the config file)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn apply_overrides(config: &mut DeckConfig, args: &Args) {
    if let Some(dir) = &args.export_dir {
        config.export_dir = dir.clone();
    }
    if let Some(size) = args.page_size {
        config.page_size = size;
    }
    if let Some(path) = &args.log_file {
        config.log_file = Some(path.clone());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = DeckConfig::load(&args.config)?;
    apply_overrides(&mut config, &args);

    // Logs go to a file or nowhere; stdout belongs to the terminal UI.
    if let Some(path) = &config.log_file {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }
    tracing::info!(?config, "starting clubdeck");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}

async fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &DeckConfig,
) -> io::Result<()> {
    let today = chrono::Local::now().date_naive();
    let mut runtime = Runtime::new(AppState::new(config.page_size, today), reducer);

    // Drives the studio clock; the reducer ignores ticks while off air.
    runtime.interval("studio_clock", Duration::from_secs(1), || Action::Tick);
    // Expires toasts; a no-op while none is showing.
    runtime.interval("toast", TOAST_TTL, || Action::ToastClear);

    let ui = RefCell::new(DeckUi::new());
    let export_dir = config.export_dir.clone();

    runtime
        .run(
            terminal,
            |frame, area, state| ui.borrow_mut().render(frame, area, state),
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &export_dir),
        )
        .await
}

fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, export_dir: &Path) {
    match effect {
        Effect::WriteCsv { prefix, csv } => {
            let dir = export_dir.to_path_buf();
            ctx.tasks().spawn("export", async move {
                let date = chrono::Local::now().date_naive();
                match export::write_csv(&dir, prefix, &csv, date) {
                    Ok(path) => Action::ExportDidWrite(path),
                    Err(e) => {
                        tracing::warn!(error = %e, "export failed");
                        Action::ExportDidError(e.to_string())
                    }
                }
            });
        }

        Effect::StartPartnerSync => {
            ctx.tasks().spawn_after(SYNC_TASK, SYNC_DELAY, async {
                Action::SyncDidFinish {
                    finished_at: chrono::Local::now().naive_local(),
                    message: "Synced successfully: fetched 1 new offer, updated 2.".into(),
                }
            });
        }

        Effect::CancelPartnerSync => {
            ctx.tasks().cancel(&TaskKey::new(SYNC_TASK));
        }
    }
}
