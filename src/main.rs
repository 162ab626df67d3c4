// Copyright 2026 Artlink Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use artlink::cli;
use artlink::config::{HarvestConfig, MatchConfig};

#[derive(Parser)]
#[command(
    name = "artlink",
    about = "Artlink — link museum catalog records to Google Arts & Culture pages",
    version,
    after_help = "Run 'artlink <command> --help' for details on each command."
)]
struct Cli {
    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Harvest the collection page and annotate a catalog CSV with asset URLs
    Link {
        /// Path to the catalog CSV (must contain a `title/en` column)
        input: PathBuf,
        /// Path to write the annotated CSV
        output: PathBuf,
        #[command(flatten)]
        harvest: HarvestArgs,
        /// Similarity floor in [0, 100]; matches must score strictly above it
        #[arg(long, default_value_t = MatchConfig::default().threshold)]
        threshold: f64,
    },
    /// Harvest the collection page and print the discovered items
    Harvest {
        #[command(flatten)]
        harvest: HarvestArgs,
        /// Output items as JSON (machine-readable)
        #[arg(long)]
        json: bool,
    },
    /// Check environment and diagnose issues
    Doctor,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[derive(clap::Args)]
struct HarvestArgs {
    /// Collection page to harvest
    #[arg(long, default_value_t = HarvestConfig::default().collection_url)]
    collection_url: String,

    /// Maximum scroll rounds before extraction proceeds regardless
    #[arg(long, default_value_t = HarvestConfig::default().max_scroll_rounds)]
    max_scroll_rounds: u32,

    /// Pause after each scroll so lazily-loaded content can arrive (ms)
    #[arg(long, default_value_t = HarvestConfig::default().settle_ms)]
    settle_ms: u64,

    /// Navigation timeout (ms)
    #[arg(long, default_value_t = HarvestConfig::default().nav_timeout_ms)]
    nav_timeout_ms: u64,
}

impl HarvestArgs {
    fn into_config(self) -> HarvestConfig {
        HarvestConfig {
            collection_url: self.collection_url,
            max_scroll_rounds: self.max_scroll_rounds,
            settle_ms: self.settle_ms,
            nav_timeout_ms: self.nav_timeout_ms,
            ..HarvestConfig::default()
        }
    }
}

fn init_tracing(verbose: bool) {
    let directive = if verbose { "artlink=debug" } else { "artlink=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Link {
            input,
            output,
            harvest,
            threshold,
        } => {
            cli::link_cmd::run(
                &input,
                &output,
                &harvest.into_config(),
                &MatchConfig { threshold },
                cli.quiet,
            )
            .await
        }
        Commands::Harvest { harvest, json } => {
            cli::harvest_cmd::run(&harvest.into_config(), json, cli.quiet).await
        }
        Commands::Doctor => cli::doctor::run().await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "artlink", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        eprintln!("  Error: {e:#}");
        std::process::exit(1);
    }

    result
}
