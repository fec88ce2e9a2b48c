//! CLI administration tool for shortlink.
//!
//! Provides commands for provisioning accounts, viewing totals, and
//! checking the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create an account interactively
//! cargo run --bin admin -- account create
//!
//! # List registered accounts
//! cargo run --bin admin -- account list
//!
//! # View totals
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use shortlink::domain::entities::NewUser;
use shortlink::domain::repositories::UserRepository;
use shortlink::infrastructure::persistence::PgUserRepository;
use shortlink::utils::password::hash_password;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use sqlx::Row;
use std::sync::Arc;

/// CLI tool for managing shortlink.
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
    /// Manage accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Show totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum AccountAction {
    /// Create a new account interactively
    Create,

    /// List registered accounts
    List,
}

/// Database subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Account { action } => match action {
            AccountAction::Create => create_account(pool).await,
            AccountAction::List => list_accounts(pool).await,
        },
        Commands::Stats => show_stats(pool).await,
        Commands::Db { action } => match action {
            DbAction::Check => check_db(pool).await,
        },
    }
}

/// Prompts for account details and inserts the user.
async fn create_account(pool: PgPool) -> Result<()> {
    let first_name: String = Input::new().with_prompt("First name").interact_text()?;

    let last_name: String = Input::new()
        .with_prompt("Last name (empty to skip)")
        .allow_empty(true)
        .interact_text()?;

    let email: String = Input::new().with_prompt("Email").interact_text()?;
    let email = email.trim().to_lowercase();

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    if !Confirm::new()
        .with_prompt(format!("Create account {email}?"))
        .interact()?
    {
        println!("{}", "Aborted".yellow());
        return Ok(());
    }

    let repository = PgUserRepository::new(Arc::new(pool));
    let (salt, password_hash) = hash_password(&password, None);

    let user = repository
        .create(NewUser {
            email,
            first_name,
            last_name: if last_name.is_empty() {
                None
            } else {
                Some(last_name)
            },
            salt,
            password_hash,
        })
        .await?;

    println!(
        "{} account {} (id {})",
        "Created".green().bold(),
        user.email.cyan(),
        user.id
    );

    Ok(())
}

/// Lists registered accounts with their link counts.
async fn list_accounts(pool: PgPool) -> Result<()> {
    let rows = sqlx::query(
        r#"
        SELECT u.id, u.email, u.created_at::text AS created_at, COUNT(l.id) AS links
        FROM users u
        LEFT JOIN links l ON l.user_id = u.id
        GROUP BY u.id, u.email, u.created_at
        ORDER BY u.created_at
        "#,
    )
    .fetch_all(&pool)
    .await?;

    if rows.is_empty() {
        println!("{}", "No accounts registered".yellow());
        return Ok(());
    }

    for row in rows {
        let id: i64 = row.get("id");
        let email: String = row.get("email");
        let created_at: String = row.get("created_at");
        let links: i64 = row.get("links");

        println!(
            "{:>6}  {}  {} links  since {}",
            id,
            email.cyan(),
            links,
            created_at
        );
    }

    Ok(())
}

/// Prints user, link, and visit totals.
async fn show_stats(pool: PgPool) -> Result<()> {
    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await?;
    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(&pool)
        .await?;
    let visits: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(visits), 0)::bigint FROM links")
        .fetch_one(&pool)
        .await?;

    println!("{}", "Totals".bold());
    println!("  Accounts: {}", users.to_string().cyan());
    println!("  Links:    {}", links.to_string().cyan());
    println!("  Visits:   {}", visits.to_string().cyan());

    Ok(())
}

/// Verifies connectivity with a trivial round trip.
async fn check_db(pool: PgPool) -> Result<()> {
    sqlx::query("SELECT 1").execute(&pool).await?;
    println!("{}", "Database connection OK".green().bold());
    Ok(())
}
