mod terminal;
mod token_file;
mod transport;


use std::path::PathBuf;

use clap::{Parser, Subcommand};
use regret_client::config::{ClientConfig, DEFAULT_API_URL};
use regret_client::controller::Controller;
use regret_client::net::api::ApiClient;
use regret_client::net::error::RequestError;
use regret_client::net::transport::Transport;
use regret_client::session::{Session, TokenStore};
use regret_client::state::forms::MessageDraft;
use regret_client::state::tones::ToneLoad;
use regret_client::state::view::ViewState;
use tracing_subscriber::EnvFilter;

use crate::terminal::{TerminalSurface, tone_lines};
use crate::token_file::FileTokenStore;
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("no config directory for the token file; pass --token-file or set REGRET_TOKEN_FILE")]
    MissingTokenPath,
    #[error("http client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("{0}")]
    Request(#[from] RequestError),
    #[error("failed to load tones: {0}")]
    Tones(String),
}

#[derive(Parser, Debug)]
#[command(name = "regret-cli", about = "Regret board API client")]
struct Cli {
    #[arg(long, env = "REGRET_BASE_URL", default_value = DEFAULT_API_URL)]
    base_url: String,

    #[arg(long, env = "REGRET_TOKEN_FILE", help = "Where the session token is kept")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Create an account (does not log in).
    Register { username: String, password: String },
    /// Log in and keep the session token.
    Login { username: String, password: String },
    /// Forget the session token.
    Logout,
    /// List selectable tones.
    Tones,
    /// Show the regret feed.
    Messages,
    /// Post a regret.
    Post {
        #[arg(long, default_value = "")]
        tone: String,
        #[arg(long)]
        anonymous: bool,
        text: String,
    },
    /// Validate the stored session the way the web client does at startup.
    Status,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let token_path = match cli.token_file {
        Some(path) => path,
        None => FileTokenStore::default_path().ok_or(CliError::MissingTokenPath)?,
    };
    let config = ClientConfig::default().with_api_url(&cli.base_url);
    let store = FileTokenStore::new(token_path);
    tracing::debug!(base_url = %config.api_url, token_file = %store.path().display(), "starting");

    let controller = Controller::new(
        ApiClient::new(ReqwestTransport::new()?, &config.api_url),
        Session::restore(store),
        TerminalSurface::default(),
    );

    for line in run(&controller, cli.command).await? {
        println!("{line}");
    }
    Ok(())
}

/// Drive one command through the controller and collect what to print.
async fn run<T, S>(
    controller: &Controller<T, S, TerminalSurface>,
    command: Command,
) -> Result<Vec<String>, CliError>
where
    T: Transport,
    S: TokenStore,
{
    let lines = match command {
        Command::Register { username, password } => {
            controller.register(&username, &password).await?;
            controller.surface().screen().notices
        }
        Command::Login { username, password } => {
            controller.login(&username, &password).await?;
            let mut lines = vec!["Logged in.".to_owned()];
            lines.extend(controller.surface().screen().notices);
            lines
        }
        Command::Logout => {
            controller.logout();
            vec!["Logged out.".to_owned()]
        }
        Command::Tones => match controller.load_tones().await {
            ToneLoad::Failed(message) => return Err(CliError::Tones(message)),
            ToneLoad::Loaded(_) | ToneLoad::Empty => tone_lines(&controller.surface().screen().tone_options),
        },
        Command::Messages => {
            controller.load_messages().await?;
            controller.surface().screen().messages
        }
        Command::Post { tone, anonymous, text } => {
            let draft = MessageDraft {
                text,
                tone,
                is_anonymous: anonymous,
            };
            controller.create_message(&draft).await?;
            let mut lines = vec!["Posted.".to_owned()];
            lines.extend(controller.surface().screen().messages);
            lines
        }
        Command::Status => {
            let view = controller.startup().await;
            let screen = controller.surface().screen();
            let mut lines = screen.notices;
            lines.push(format!("view: {}", view.label()));
            if view == ViewState::App {
                lines.extend(screen.messages);
            }
            lines
        }
    };
    Ok(lines)
}
