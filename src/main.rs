use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;

use promptdeck::api::{ApiClient, ChatModel, spawn_worker};
use promptdeck::app::App;
use promptdeck::config::load_config;
use promptdeck::prefs::{Prefs, default_prefs_path, load_prefs, save_prefs};
use promptdeck::transcript::import_from_path;

/// Terminal chat console with live prompt suggestions
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file (default: ~/.config/promptdeck/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the completion service
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Model to send completions to
    #[arg(long, value_enum)]
    model: Option<ChatModel>,

    /// Open an existing conversation and load its history
    #[arg(long, value_name = "ID", conflicts_with = "import")]
    conversation: Option<i64>,

    /// Load a previously exported transcript
    #[arg(long, value_name = "FILE")]
    import: Option<PathBuf>,

    /// API key for this session
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Also store --api-key in the preferences file
    #[arg(long, requires = "api_key")]
    save_api_key: bool,

    /// Disable the prompt suggestion dropdown
    #[arg(long)]
    no_suggest: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logger();

    let config_result = load_config(args.config.as_deref());
    let mut config = config_result.config;
    let mut warnings: Vec<String> = config_result.warning.into_iter().collect();

    let prefs_path = default_prefs_path();
    let mut prefs = match prefs_path.as_deref().map(load_prefs) {
        Some(result) => {
            warnings.extend(result.warning);
            result.prefs
        }
        None => Prefs::default(),
    };

    // CLI flags > prefs > config > defaults
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    if let Some(model) = args.model {
        config.chat.model = model;
    }
    if args.no_suggest {
        config.suggest.enabled = false;
    }
    let api_key = args
        .api_key
        .clone()
        .or_else(|| prefs.api_key.clone())
        .or_else(|| config.api.api_key.clone());

    if args.save_api_key {
        prefs.api_key = args.api_key.clone();
        match &prefs_path {
            Some(path) => {
                if let Err(e) = save_prefs(path, &prefs) {
                    warnings.push(e.to_string());
                }
            }
            None => warnings.push("No home directory; API key not saved".to_string()),
        }
    }

    let transcript = args.import.as_deref().map(import_from_path).transpose()?;

    let client = ApiClient::new(
        &config.api.base_url,
        api_key,
        Duration::from_secs(config.api.timeout_secs),
    )?;
    log::debug!("Using service at {}", client.base_url());

    let mut app = App::new(spawn_worker(client), &config, prefs, prefs_path);
    for warning in warnings {
        app.notification.show_warning(warning);
    }
    if let Some(transcript) = transcript {
        app.import_transcript(transcript);
    } else if let Some(id) = args.conversation {
        app.open_conversation(id);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = run(terminal, &mut app);

    let cleanup = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    ratatui::restore();

    result?;
    cleanup?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.poll_api();
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

/// Log to a file in the temp dir; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_logger() {
    use std::io::Write;

    let path = std::env::temp_dir().join("promptdeck-debug.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
