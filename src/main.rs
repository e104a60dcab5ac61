//! mathpipe command-line front end.
//!
//! # Commands
//!
//! - `mathpipe solve "x^2 - 4 = 0"` - solve an equation
//! - `mathpipe optimize "x^2" --low -10 --high 10` - locate extrema on a domain
//! - `mathpipe route '{"type": "equation", "expression": "2x = 4"}'` - route an extracted query

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mathpipe::{
    EquationRequest, ExtractedQuery, LogLevel, MathService, OptimizationRequest, Response,
    ServiceConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Normalize informal math notation, then solve or optimize it
#[derive(Parser, Debug)]
#[command(name = "mathpipe")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", env = "MATHPIPE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "MATHPIPE_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve an equation such as "x^2 - 4 = 0"
    Solve {
        equation: String,
    },

    /// Find a minimum and a maximum of a function over a domain
    Optimize {
        function: String,

        /// Lower bound of the domain
        #[arg(long, allow_hyphen_values = true, requires = "high")]
        low: Option<f64>,

        /// Upper bound of the domain
        #[arg(long, allow_hyphen_values = true, requires = "low")]
        high: Option<f64>,
    },

    /// Dispatch a query produced by the extraction service (JSON)
    Route {
        query: String,
    },
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_config(cli: &Cli) -> anyhow::Result<ServiceConfig> {
    let mut config = match &cli.config {
        Some(path) => ServiceConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ServiceConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.log_level = level.parse()?;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    init_tracing(config.log_level);

    tracing::debug!(
        symbol = %config.symbol,
        low = config.default_domain.low,
        high = config.default_domain.high,
        "configuration loaded"
    );

    let service = MathService::new(config);
    let response = match cli.command {
        Commands::Solve { equation } => service.handle_solve(&EquationRequest::new(equation)),
        Commands::Optimize {
            function,
            low,
            high,
        } => {
            let mut request = OptimizationRequest::new(function);
            if let (Some(low), Some(high)) = (low, high) {
                request = request.with_domain(low, high);
            }
            service.handle_optimize(&request)
        }
        Commands::Route { query } => match ExtractedQuery::from_model_reply(&query) {
            Ok(query) => service.handle_query(&query),
            Err(err) => Err(err.into()),
        },
    };

    report(response)
}

fn report(response: Response) -> anyhow::Result<()> {
    match response {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Err(failure) => {
            println!("{}", serde_json::to_string_pretty(&failure)?);
            std::process::exit(2);
        }
    }
}
