use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parse_time::config::AppConfig;
use parse_time::{parse_time_in, LocaleRegistry};

#[derive(Parser)]
#[command(name = "parse-time")]
#[command(about = "Convert human-readable durations into milliseconds")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./parse-time.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one or more duration expressions
    Parse {
        /// Expressions such as "1.5h" or "2 days 4 hours"
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,

        /// Locale to resolve units with
        #[arg(long)]
        locale: Option<String>,

        /// Add the current time to the result
        #[arg(long)]
        from_now: bool,

        /// Fail on the first unparseable expression instead of printing null
        #[arg(long)]
        strict: bool,
    },

    /// List registered locales
    Locales,

    /// Print the unit table of a locale as JSON
    Show {
        /// Locale id, e.g. "en-US"
        locale: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    // Initialize tracing
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!("Starting parse-time v{}", env!("CARGO_PKG_VERSION"));

    let mut registry = LocaleRegistry::with_defaults();
    config.apply(&mut registry)?;
    if !config.locales.is_empty() {
        tracing::info!("Registered {} configured locale(s)", config.locales.len());
    }

    match cli.command {
        Commands::Parse {
            inputs,
            locale,
            from_now,
            strict,
        } => {
            let mut options = config.parse_options();
            if let Some(locale) = locale {
                options = options.locale(locale);
            }
            options.from_now |= from_now;
            options.throw_error |= strict;

            for input in &inputs {
                match parse_time_in(&registry, input, &options)
                    .with_context(|| format!("Failed to parse {:?}", input))?
                {
                    Some(millis) => println!("{}", millis),
                    None => {
                        tracing::warn!("Could not parse {:?}", input);
                        println!("null");
                    }
                }
            }
        }

        Commands::Locales => {
            for locale in registry.locales() {
                println!("{}", locale);
            }
        }

        Commands::Show { locale } => {
            let table = registry
                .get(&locale)
                .with_context(|| format!("Locale {} is not registered", locale))?;
            println!("{}", serde_json::to_string_pretty(table)?);
        }
    }

    Ok(())
}
