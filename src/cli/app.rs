//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use vulsconf::output::OutputMode;

/// vulsconf - Validate vulnerability scanner settings
#[derive(Parser, Debug)]
#[command(
    name = "vulsconf",
    version,
    about = "Validate vulnerability scanner settings",
    long_about = "Load a scanner settings file and check it before scanning.\n\n\
                  Every violation is reported at once: bad URLs, relative paths,\n\
                  malformed mail addresses and incomplete notification blocks."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a settings file
    Validate {
        /// Settings file
        #[arg(short, long, default_value = "config.toml")]
        config: PathBuf,

        /// Validate the mail block (as when reports are e-mailed)
        #[arg(long)]
        mail: bool,

        /// Validate the slack block (as when reports are posted to chat)
        #[arg(long)]
        slack: bool,
    },

    /// List configured servers
    Servers {
        /// Settings file
        #[arg(short, long, default_value = "config.toml")]
        config: PathBuf,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Validate {
            config,
            mail,
            slack,
        }) => commands::validate(&config, mail, slack, output_mode),
        Some(Command::Servers { config }) => commands::servers(&config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": vulsconf::VERSION
                    })
                );
            } else {
                println!("vulsconf v{}", vulsconf::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": vulsconf::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("vulsconf v{}", vulsconf::VERSION);
                println!("\nRun 'vulsconf --help' for usage");
                println!("Run 'vulsconf validate -c config.toml' to check a settings file");
            }
            Ok(())
        },
    }
}
