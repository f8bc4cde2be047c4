//! CLI administration tool for analytics-console.
//!
//! Provides commands for managing users, API tokens and mobile messaging
//! settings, and for database checks, without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create or update a user
//! cargo run --bin admin -- user add alice --superuser --language fr
//!
//! # Create a new API token for a user
//! cargo run --bin admin -- token create alice
//!
//! # List all tokens
//! cargo run --bin admin -- token list
//!
//! # Revoke a token
//! cargo run --bin admin -- token revoke "Production API"
//!
//! # Configure the SMS provider account
//! cargo run --bin admin -- sms set-credentials Clockwork <api-key>
//! cargo run --bin admin -- sms set-credentials Clockwork <api-key> --skip-check
//!
//! # Register a phone number
//! cargo run --bin admin -- phone add alice +33612345678
//!
//! # View statistics
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `TOKEN_SIGNING_SECRET` (required for `token create`): key for token hashes
//! - `CLOCKWORK_API_URL`, `SMS_STUB_CREDIT` (optional, `sms set-credentials`):
//!   provider access, as for the server

use analytics_console::application::services::hash_token;
use analytics_console::domain::entities::{Actor, SmsCredentials};
use analytics_console::domain::ports::SmsGateway;
use analytics_console::domain::repositories::{MessagingRepository, TokenRepository};
use analytics_console::infrastructure::persistence::{PgMessagingRepository, PgTokenRepository};
use analytics_console::infrastructure::sms::{CLOCKWORK_API_URL, ClockworkClient, ProviderSmsGateway};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing analytics-console.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Manage the SMS provider account
    Sms {
        #[command(subcommand)]
        action: SmsAction,
    },

    /// Manage phone numbers
    Phone {
        #[command(subcommand)]
        action: PhoneAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a user, or update an existing one
    Add {
        login: String,

        /// Grant superuser access
        #[arg(long)]
        superuser: bool,

        /// Preferred UI language, e.g. "en" or "pt-br"
        #[arg(short, long, default_value = "en")]
        language: String,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Create a new API token
    Create {
        /// Login of the user the token authenticates
        login: String,

        /// Token name (e.g., "Production API", "Mobile App")
        #[arg(short, long)]
        name: Option<String>,

        /// Custom token value (optional, auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token
    Revoke {
        /// Token name or ID to revoke
        name_or_id: String,
    },
}

#[derive(Subcommand)]
enum SmsAction {
    /// Check provider credentials against the provider and store them
    SetCredentials {
        provider: String,
        api_key: String,

        /// Store without asking the provider for the account credit
        #[arg(long)]
        skip_check: bool,
    },

    /// Allow or forbid non-superusers to manage the account
    Delegate {
        #[arg(value_parser = clap::builder::BoolishValueParser::new())]
        enabled: bool,
    },
}

#[derive(Subcommand)]
enum PhoneAction {
    /// Register a phone number for a user
    Add { login: String, number: String },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Token { action } => handle_token_action(action, &pool).await?,
        Commands::Sms { action } => handle_sms_action(action, &pool).await?,
        Commands::Phone { action } => handle_phone_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn token_repository(pool: &PgPool) -> Arc<PgTokenRepository> {
    Arc::new(PgTokenRepository::new(Arc::new(pool.clone())))
}

fn sms_gateway() -> Result<ProviderSmsGateway> {
    let base_url =
        std::env::var("CLOCKWORK_API_URL").unwrap_or_else(|_| CLOCKWORK_API_URL.to_string());
    let clockwork = ClockworkClient::new(base_url)
        .map_err(|e| anyhow::anyhow!("Failed to create Clockwork client: {}", e))?;

    Ok(ProviderSmsGateway::new(
        clockwork,
        std::env::var("SMS_STUB_CREDIT").ok(),
    ))
}

fn messaging_repository(pool: &PgPool) -> Arc<PgMessagingRepository> {
    Arc::new(PgMessagingRepository::new(Arc::new(pool.clone())))
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = token_repository(pool);

    match action {
        UserAction::Add {
            login,
            superuser,
            language,
        } => {
            let actor = Actor::new(login, superuser, language.to_lowercase());
            if actor.is_anonymous() {
                anyhow::bail!("'{}' is reserved", actor.login);
            }

            let actor = repo
                .upsert_user(actor)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to save user: {}", e))?;

            println!("{}", "User saved".green().bold());
            println!("  Login:     {}", actor.login.cyan());
            println!("  Superuser: {}", actor.is_superuser);
            println!("  Language:  {}", actor.language);
        }
    }

    Ok(())
}

/// Dispatches token management commands.
async fn handle_token_action(action: TokenAction, pool: &PgPool) -> Result<()> {
    let repo = token_repository(pool);

    match action {
        TokenAction::Create {
            login,
            name,
            token,
            yes,
        } => {
            create_token(repo, login, name, token, yes).await?;
        }
        TokenAction::List => {
            list_tokens(repo).await?;
        }
        TokenAction::Revoke { name_or_id } => {
            revoke_token(repo, name_or_id).await?;
        }
    }

    Ok(())
}

/// Creates a new API token with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for token name (or use provided)
/// 2. Generate random token or use provided value
/// 3. Display token details with warning
/// 4. Confirm creation (unless `--yes` flag)
/// 5. Hash token with HMAC-SHA256 keyed by `TOKEN_SIGNING_SECRET`
/// 6. Store in database
///
/// Only the hash is stored; the raw token is displayed once.
async fn create_token(
    repo: Arc<PgTokenRepository>,
    login: String,
    name: Option<String>,
    token: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create API Token".bright_blue().bold());
    println!();

    let signing_secret =
        std::env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;

    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text("Production API")
            .interact_text()?,
    };

    let token_value = match token {
        Some(t) => {
            println!("{}", "Using provided token value".yellow());
            t
        }
        None => {
            let generated = generate_token();
            println!("{}", "Generated new token".green());
            generated
        }
    };

    println!();
    println!("{}", "Token details:".bright_white().bold());
    println!("  User:  {}", login.cyan());
    println!("  Name:  {}", token_name.cyan());
    println!("  Token: {}", token_value.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let token_hash = hash_token(&signing_secret, &token_value)
        .map_err(|e| anyhow::anyhow!("Failed to hash token: {}", e))?;

    repo.create_token(&login, &token_name, &token_hash)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!();
    println!("{}", "Token created successfully!".green().bold());
    println!();
    println!("{}", "API requests:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" \"http://localhost:3000/api/visit-frequency?idSite=1&period=day&date=today\"",
        token_value.bright_yellow()
    );
    println!();
    println!("{}", "Dashboard login:".bright_white());
    println!("  http://localhost:3000/dashboard/login");
    println!();

    Ok(())
}

/// Lists all API tokens with status indicators.
///
/// # Output Format
///
/// ```text
///   ID  Name                      User              Created              Status
///   1   Production API            alice             2024-01-15 10:30     ACTIVE
///   2   Mobile App                bob               2024-01-16 14:20     REVOKED
/// ```
async fn list_tokens(repo: Arc<PgTokenRepository>) -> Result<()> {
    println!("{}", "API Tokens".bright_blue().bold());
    println!();

    let tokens = repo
        .list_tokens()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin token create <login>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<25} {:<17} {:<20} {:<10}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "User".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "-".repeat(80).bright_black());

    for token in &tokens {
        let status = if token.revoked_at.is_some() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<3} {:<25} {:<17} {:<20} {}",
            token.id.to_string().bright_black(),
            token.name.cyan(),
            token.login,
            token
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        tokens.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Revokes a token by name or ID with confirmation prompt.
///
/// A numeric argument is looked up as an ID, anything else as an exact name.
async fn revoke_token(repo: Arc<PgTokenRepository>, name_or_id: String) -> Result<()> {
    println!("{}", "Revoke API Token".bright_blue().bold());
    println!();

    let token = match name_or_id.parse::<i64>() {
        Ok(id) => repo
            .find_by_id(id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
        Err(_) => repo
            .find_by_name(&name_or_id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
    };

    let token = token.context("Token not found")?;

    if token.revoked_at.is_some() {
        println!("{}", "This token is already revoked".yellow());
        return Ok(());
    }

    println!("  Token: {}", token.name.cyan());
    println!("  User:  {}", token.login);
    println!("  ID:    {}", token.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "Cancelled".red());
        return Ok(());
    }

    repo.revoke_token(token.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    println!();
    println!("{}", "Token revoked successfully!".green().bold());
    println!();

    Ok(())
}

async fn handle_sms_action(action: SmsAction, pool: &PgPool) -> Result<()> {
    let repo = messaging_repository(pool);

    match action {
        SmsAction::SetCredentials {
            provider,
            api_key,
            skip_check,
        } => {
            let gateway = sms_gateway()?;
            let providers = gateway.available_providers();
            let known = providers.iter().find(|p| p.name.eq_ignore_ascii_case(&provider));
            let Some(known) = known else {
                let names: Vec<&str> = providers.iter().map(|p| p.name.as_str()).collect();
                anyhow::bail!(
                    "Unknown provider '{}', expected one of: {}",
                    provider,
                    names.join(", ")
                );
            };

            let credentials = SmsCredentials {
                provider: known.name.clone(),
                api_key,
            };

            if !skip_check {
                let credit = gateway
                    .credit_left(&credentials)
                    .await
                    .map_err(|e| anyhow::anyhow!("Provider refused the credentials: {}", e))?;
                println!("{} {}", "Provider answered:".green(), credit);
            }

            repo.set_sms_credentials(credentials)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to save credentials: {}", e))?;

            println!(
                "{} {}",
                "SMS provider set to".green().bold(),
                known.name.cyan()
            );
        }
        SmsAction::Delegate { enabled } => {
            repo.set_delegated_management(enabled)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to save setting: {}", e))?;

            if enabled {
                println!("{}", "Every user may now manage the SMS account".green());
            } else {
                println!("{}", "Only superusers may manage the SMS account".green());
            }
        }
    }

    Ok(())
}

async fn handle_phone_action(action: PhoneAction, pool: &PgPool) -> Result<()> {
    let repo = messaging_repository(pool);

    match action {
        PhoneAction::Add { login, number } => {
            let phone = repo
                .add_phone_number(&login, &number)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to add phone number: {}", e))?;

            println!(
                "{} {} ({})",
                "Phone number added:".green().bold(),
                phone.number.cyan(),
                login
            );
        }
    }

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Number of sites and recorded visits
/// - Number of users and active API tokens
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let sites_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sites")
        .fetch_one(pool)
        .await?;

    let visits_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM log_visit")
        .fetch_one(pool)
        .await?;

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let tokens_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM api_tokens WHERE revoked_at IS NULL")
            .fetch_one(pool)
            .await?;

    println!(
        "  Sites:         {}",
        sites_count.to_string().bright_green().bold()
    );
    println!(
        "  Visits:        {}",
        visits_count.to_string().bright_green().bold()
    );
    println!(
        "  Users:         {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Active tokens: {}",
        tokens_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

/// Generates a cryptographically random token.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
