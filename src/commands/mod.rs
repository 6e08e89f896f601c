//! CLI command definitions and dispatch.

pub mod config;
pub mod console;
pub mod login;
pub mod logout;
pub mod resource;
pub mod whoami;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use remit_api::ApiClient;
use remit_auth::{DurableStorage, FileStorage, RouteGuard, SessionManager, SessionStore};
use remit_core::config::AppConfig;
use remit_core::error::AppError;
use remit_entity::session::Session;

/// Remit back-office console
#[derive(Debug, Parser)]
#[command(name = "remit-console", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Configuration overlay name (defaults to $REMIT_ENV, then "development")
    #[arg(short, long)]
    pub env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in as an administrator
    Login(login::LoginArgs),
    /// Forget the stored session
    Logout,
    /// Show the logged-in administrator
    Whoami,
    /// List and edit back-office resources
    Resource(resource::ResourceArgs),
    /// Configuration management
    Config(config::ConfigArgs),
    /// Interactive console with live transaction notifications
    Console(console::ConsoleArgs),
}

impl Cli {
    /// Name of the configuration overlay to load.
    pub fn environment(&self) -> String {
        self.env
            .clone()
            .or_else(|| std::env::var("REMIT_ENV").ok())
            .unwrap_or_else(|| "development".to_string())
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        let ctx = Context::new(config)?;
        match &self.command {
            Commands::Login(args) => login::execute(args, &ctx).await,
            Commands::Logout => logout::execute(&ctx).await,
            Commands::Whoami => whoami::execute(&ctx, self.format).await,
            Commands::Resource(args) => resource::execute(args, &ctx, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, &ctx.config, self.format),
            Commands::Console(args) => console::execute(args, ctx).await,
        }
    }
}

/// Services shared by the commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Effective configuration.
    pub config: AppConfig,
    /// REST client.
    pub api: ApiClient,
    /// Persisted session.
    pub store: SessionStore,
    /// Login/logout flow.
    pub sessions: SessionManager,
}

impl Context {
    /// Wire the services for `config`.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let storage = Arc::new(FileStorage::new(&config.session.storage_path));
        Self::with_storage(config, storage)
    }

    /// Wire the services for `config` over an existing storage.
    pub fn with_storage(
        config: AppConfig,
        storage: Arc<dyn DurableStorage>,
    ) -> Result<Self, AppError> {
        let api = ApiClient::new(&config.api)?;
        let store = SessionStore::new(storage, &config.session);
        let sessions = SessionManager::new(api.clone(), store.clone());

        Ok(Self {
            config,
            api,
            store,
            sessions,
        })
    }

    /// A route guard reading the same storage.
    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.store.clone(), self.config.session.login_path.clone())
    }

    /// The stored admin session, or a session error.
    pub async fn require_session(&self) -> Result<Session, AppError> {
        self.store
            .load_session()
            .await
            .filter(Session::is_admin)
            .ok_or_else(|| AppError::session("Not logged in. Run `remit-console login` first."))
    }
}
