mod config;
mod cookie;
mod logging;
mod page;
mod session;
mod tui;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Command, CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::{Generator, Shell, generate};
use config::{CONFIG_KEYS, Config, ConfigError};
use cookie::COURSES_COOKIE;
use cookie::jar::CookieJar;
use cookie::persistence::Persistence;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use page::parser::parse_catalog_file;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use session::PageSession;
use std::io;
use tracing::{error, info};
use tui::{app::App, ui};

#[derive(Parser)]
#[command(name = "course-picker")]
#[command(about = "A TUI for filtering a course list and remembering the picked courses")]
struct Cli {
    #[arg(
        long,
        help = "Course catalog to open instead of the configured one",
        value_hint = ValueHint::FilePath
    )]
    catalog: Option<String>,

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
    #[command(about = "Inspect or clear the saved course selection")]
    Cookie {
        #[command(subcommand)]
        action: CookieAction,
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
        #[arg(help = "Configuration key (catalog_path, cookie_path or save_on_quit)")]
        key: String,
        #[arg(help = "Configuration value", value_hint = ValueHint::FilePath)]
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

#[derive(Subcommand)]
enum CookieAction {
    #[command(about = "Print the saved course ids")]
    Show,
    #[command(about = "Forget the saved course ids")]
    Clear,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Config { action }) => {
            logging::init_stderr();
            handle_config_command(action).map_err(anyhow::Error::from)
        }
        Some(Commands::Cookie { action }) => {
            logging::init_stderr();
            handle_cookie_command(action)
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
            Ok(())
        }
        None => run_main_app(cli.catalog),
    };

    if let Err(e) = result {
        error!(error = %e, "exiting with error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
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
            let config = Config::load()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for key in CONFIG_KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
    }
    Ok(())
}

fn handle_cookie_command(action: CookieAction) -> Result<()> {
    let config = Config::load_or_default()?;
    let jar_path = config.cookie_file_path()?;
    let now = Utc::now();
    let mut jar = CookieJar::load_from_file(&jar_path, now)?;

    match action {
        CookieAction::Show => match jar.get(COURSES_COOKIE, now) {
            Some(cookie) => println!("{}", cookie.value),
            None => println!("No saved selection."),
        },
        CookieAction::Clear => {
            if jar.remove(COURSES_COOKIE) {
                jar.save_to_file(&jar_path)?;
                info!(path = %jar_path.display(), "saved selection cleared");
            }
            println!("Saved selection cleared.");
        }
    }
    Ok(())
}

fn run_main_app(catalog_override: Option<String>) -> Result<()> {
    let config = Config::load_or_default()
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;
    let catalog_path = match catalog_override {
        Some(path) => path,
        None => config.require_catalog()?.to_string(),
    };

    logging::init_file(&config::get_data_dir()?.join("course-picker.log"))?;

    let page = parse_catalog_file(&catalog_path)?;
    let jar_path = config.cookie_file_path()?;
    let jar = CookieJar::load_from_file(&jar_path, Utc::now())
        .context("Could not load saved selection")?;
    info!(catalog = %catalog_path, rows = page.total_rows(), "page loaded");

    let mut app = App::new(PageSession::new(page, jar), Some(jar_path), config.save_on_quit);

    run_tui(&mut app)
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
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
