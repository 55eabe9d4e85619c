mod config;
mod logging;
mod store;
mod tui;

use clap::{Parser, Subcommand, Command, CommandFactory};
use clap_complete::{generate, Generator, Shell};
use config::{Config, ConfigError, KEYS};
use std::io;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use store::{container::Store, models::AppState, reducer::ToDoReducer};
use tui::{app::App, ui};

#[derive(Parser)]
#[command(name = "todo-store")]
#[command(about = "A terminal to-do list driven by a single action-dispatching store")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key (insert_position, log_level or log_file)")]
        key: String,
        #[arg(help = "Configuration value")]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
        None => {
            if let Err(e) = run_main_app() {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default()?;
            config.set(&key, value)?;
            config.save()?;
            println!("Configuration saved successfully.");
        }
        ConfigAction::Get { key } => {
            let config = Config::load_or_default()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::List => {
            let config = Config::load_or_default()?;
            for key in KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
    }
    Ok(())
}

fn run_main_app() -> Result<()> {
    let config = Config::load_or_default()
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    let log_path = logging::init(&config)?;
    tracing::info!(
        log = %log_path.display(),
        insert_position = %config.insert_position,
        "starting todo-store"
    );

    let store = Store::new(AppState::new(), ToDoReducer::new(config.insert_position));
    let mut app = App::new(store);

    let result = run_tui(&mut app);
    tracing::info!(ok = result.is_ok(), "exiting todo-store");

    result
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key)?;
            if app.should_quit {
                break;
            }
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
