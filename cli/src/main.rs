//! PSP command-line tool.

use anyhow::Context;
use clap::Parser;
use psp_distribution::{Confirmations, DistributionEngine, ServiceEvent, DEFAULT_DAPP_ORIGIN};
use psp_genesis::{genesis_info, verify_against, verify_genesis};
use psp_registry::{ConstantRegistry, RegistryConfig};
use psp_types::{GenesisHash, UsdAmount};
use psp_utils::LogFormat;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "psp", about = "Proof Of Service Protocol core tool")]
struct Cli {
    /// Path to a TOML registry file. Defaults to the shipped constants.
    #[arg(long, global = true, env = "PSP_REGISTRY")]
    registry: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, default_value = "warn", env = "PSP_LOG_LEVEL")]
    log_level: String,

    /// Log output: "human" or "json". Logs go to stderr.
    #[arg(long, global = true, default_value_t = LogFormat::Human, env = "PSP_LOG_FORMAT")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Recompute the genesis digest and compare it to the anchor.
    #[command(name = "verify-genesis")]
    VerifyGenesis {
        /// Hex digest to compare against instead of the shipped one.
        #[arg(long)]
        expect: Option<GenesisHash>,
    },

    /// Compute the distribution for one service.
    Distribute {
        #[arg(long)]
        worker: u64,

        #[arg(long)]
        client: u64,

        #[arg(long)]
        property: Option<u64>,

        #[arg(long)]
        certificate: Option<u64>,

        /// Service value in USD, e.g. "150.00". Informational only.
        #[arg(long, default_value = "0")]
        value_usd: UsdAmount,

        #[arg(long, default_value = DEFAULT_DAPP_ORIGIN)]
        dapp: String,

        #[arg(long)]
        unverified_worker: bool,

        #[arg(long)]
        unverified_client: bool,

        /// The service was not bilaterally confirmed.
        #[arg(long)]
        unconfirmed: bool,
    },

    /// The plain 7.500 PSP split.
    Classic,

    /// Every wallet with its share and destination.
    Wallets,

    /// Registry summary, including the eternal rules.
    Summary,

    /// Public genesis information.
    #[command(name = "genesis-info")]
    GenesisInfo,

    /// Print the active registry as a TOML config file.
    #[command(name = "export-registry")]
    ExportRegistry,
}

/// What a command prints, and whether it succeeded.
#[derive(Debug, PartialEq)]
enum Report {
    Json { body: Value, ok: bool },
    Text(String),
}

impl Report {
    fn json(body: impl serde::Serialize) -> anyhow::Result<Self> {
        Ok(Self::Json {
            body: serde_json::to_value(body)?,
            ok: true,
        })
    }
}

fn load_registry(path: &Path) -> anyhow::Result<ConstantRegistry> {
    ConstantRegistry::from_toml_file(path)
        .with_context(|| format!("failed to load registry from {}", path.display()))
}

fn execute(command: &Command, registry: &ConstantRegistry) -> anyhow::Result<Report> {
    let engine = DistributionEngine::new(registry);
    match command {
        Command::VerifyGenesis { expect } => {
            let result = match expect {
                Some(expected) => verify_against(registry, *expected),
                None => verify_genesis(registry),
            };
            Ok(Report::Json {
                ok: result.valid,
                body: serde_json::to_value(&result)?,
            })
        }
        Command::Distribute {
            worker,
            client,
            property,
            certificate,
            value_usd,
            dapp,
            unverified_worker,
            unverified_client,
            unconfirmed,
        } => {
            let event = ServiceEvent {
                worker_id: *worker,
                client_id: *client,
                property_id: *property,
                certificate_id: *certificate,
                service_value_usd: *value_usd,
                dapp_origin: dapp.clone(),
            };
            let confirmations = Confirmations {
                performed_by_verified_worker: !unverified_worker,
                received_by_verified_client: !unverified_client,
                bilaterally_confirmed: !unconfirmed,
            };
            Report::json(engine.distribute_for_service(&event, confirmations)?)
        }
        Command::Classic => Report::json(engine.classic_distribution()?),
        Command::Wallets => Report::json(registry.all_wallets()),
        Command::Summary => Report::json(registry.summary()),
        Command::GenesisInfo => Report::json(genesis_info(registry)),
        Command::ExportRegistry => Ok(Report::Text(
            RegistryConfig::from(registry).to_toml_string()?,
        )),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    psp_utils::init_logging(cli.log_format, &cli.log_level);

    let loaded;
    let registry = match &cli.registry {
        Some(path) => {
            tracing::info!(path = %path.display(), "using registry override");
            loaded = load_registry(path)?;
            &loaded
        }
        None => ConstantRegistry::shipped()?,
    };

    match execute(&cli.command, registry)? {
        Report::Json { body, ok } => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            if !ok {
                anyhow::bail!("genesis mismatch: registry does not hash to the expected anchor");
            }
        }
        Report::Text(text) => print!("{text}"),
    }
    Ok(())
}
