//! Operator CLI for the open-source projects backend.
//!
//! Runs the same services as the HTTP API, straight from a terminal. Useful
//! for checking how a shortener resolves or why a preview fails.
//!
//! # Usage
//!
//! ```bash
//! # Show every redirect hop of a shortened link
//! cargo run --bin osp -- resolve https://bit.ly/xyz
//!
//! # Build a link preview
//! cargo run --bin osp -- preview https://bit.ly/xyz
//!
//! # Subscribe an address (prompts when omitted)
//! cargo run --bin osp -- subscribe reader@example.com -y
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `opensourceprojects::config`.

use opensourceprojects::application::services::RedirectResolver;
use opensourceprojects::config::{self, Config};
use opensourceprojects::infrastructure::http::ReqwestRedirectProbe;
use opensourceprojects::server::build_state;
use opensourceprojects::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;

/// CLI tool for the open-source projects backend.
#[derive(Parser)]
#[command(name = "osp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Follow the redirect chain of a URL
    Resolve {
        url: String,

        /// Maximum redirects to follow (defaults to MAX_REDIRECT_HOPS)
        #[arg(long)]
        max_hops: Option<usize>,
    },

    /// Build the link preview of a URL
    Preview { url: String },

    /// Subscribe an email address to the newsletter
    Subscribe {
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let state = build_state(&config)?;

    match cli.command {
        Commands::Resolve { url, max_hops } => resolve(&state, &config, &url, max_hops).await,
        Commands::Preview { url } => preview(&state, &url).await,
        Commands::Subscribe { email, yes } => subscribe(&state, email, yes).await,
    }
}

/// Prints each hop and the final URL.
///
/// Walks the chain even for hosts outside the shortener list.
async fn resolve(
    state: &AppState,
    config: &Config,
    url: &str,
    max_hops: Option<usize>,
) -> Result<()> {
    let shorteners = state.preview_service.shorteners();
    let default_resolver = state.preview_service.resolver();

    let resolution = match max_hops {
        Some(hops) if hops != default_resolver.max_hops() => {
            let probe = ReqwestRedirectProbe::new(&config.user_agent)?;
            RedirectResolver::new(Arc::new(probe), hops)
                .resolve_chain(url)
                .await
        }
        _ => default_resolver.resolve_chain(url).await,
    };

    println!("{}", "🔗 Redirect chain".bright_blue().bold());
    println!();

    if shorteners.is_shortener(url) {
        println!("  {}", "Known shortener".green());
    } else {
        println!(
            "  {}",
            "Not a known shortener: previews will not resolve it".yellow()
        );
    }
    println!();

    if resolution.hops.is_empty() {
        println!("  {}", "No redirects".bright_black());
    }

    for (i, hop) in resolution.hops.iter().enumerate() {
        println!(
            "  {}. {} {} {}",
            i + 1,
            hop.status.to_string().bright_yellow(),
            hop.from.bright_black(),
            format!("→ {}", hop.to).cyan()
        );
    }

    println!();
    println!(
        "{} {}",
        "Final URL:".bright_white().bold(),
        resolution.final_url.green().bold()
    );

    Ok(())
}

/// Prints the preview as pretty JSON, or the error the API would return.
async fn preview(state: &AppState, url: &str) -> Result<()> {
    match state.preview_service.preview(url).await {
        Ok(preview) => {
            println!("{}", serde_json::to_string_pretty(&preview)?);
            Ok(())
        }
        Err(e) => anyhow::bail!("Preview failed: {}", e),
    }
}

/// Subscribes an address with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for the email (or use provided)
/// 2. Confirm (unless `--yes` flag)
/// 3. Relay to the mailing list provider
async fn subscribe(state: &AppState, email: Option<String>, skip_confirm: bool) -> Result<()> {
    println!("{}", "📬 Newsletter subscription".bright_blue().bold());
    println!();

    if !state.subscription_service.is_configured() {
        println!(
            "{}",
            "⚠️  BREVO_API_KEY is not set, the request will fail".yellow()
        );
        println!();
    }

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Subscribe {}?", email))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    state
        .subscription_service
        .subscribe(&email)
        .await
        .map_err(|e| anyhow::anyhow!("Subscription failed: {}", e))?;

    println!("{}", "✅ Subscription successful!".green().bold());

    Ok(())
}
