//! Insurance Client - Command Line Binary
//!
//! Runs backend calls from the terminal and prints the results as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Load the data behind a client view
//! insurance-cli view /policy/pol-1
//!
//! # Pending claims for one insurance plan
//! insurance-cli claims --status PENDING --insurance-plan-id plan-7
//!
//! # Twelve-month breakdown for flights
//! INSURANCE_BASE_URL=http://backend:8080 insurance-cli statistics --period 12_MONTHS --service FLIGHT
//! ```
//!
//! # Environment Variables
//!
//! * `INSURANCE_BASE_URL` - Backend origin (default: http://localhost:8080)
//! * `INSURANCE_TIMEOUT_SECS` - Request timeout in seconds, 0 disables it (default: 30)
//! * `INSURANCE_HEADERS__<NAME>` - Extra header sent with every request
//! * `INSURANCE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::{BaseResponse, ClaimId, InsurancePlanId, PolicyId, ServiceFilter, TimePeriod};
use interface_client::dto::{AcceptClaimRequest, ClaimFilter, RejectClaimRequest};
use interface_client::{load_view, ClientConfig, InsuranceClient, Route};

#[derive(Debug, Parser)]
#[command(name = "insurance-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Command line client for the insurance management backend")]
struct Cli {
    /// Configuration file, overridden by INSURANCE_* variables
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend origin, overrides the configured one
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the data behind a client route, e.g. /claim/process/c1
    View { path: Route },
    /// Headline counts
    Dashboard,
    /// Ordered plans bought within a time window
    Statistics {
        #[arg(long, default_value = "6_MONTHS")]
        period: TimePeriod,
        /// Service token, or ALL_SERVICES
        #[arg(long, default_value = "ALL_SERVICES")]
        service: ServiceFilter,
    },
    /// List claims
    Claims {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        insurance_plan_id: Option<InsurancePlanId>,
    },
    /// Accept a pending claim
    AcceptClaim {
        id: ClaimId,
        #[arg(long)]
        note: String,
    },
    /// Reject a pending claim
    RejectClaim {
        id: ClaimId,
        #[arg(long)]
        reason: String,
        #[arg(long)]
        description: String,
    },
    /// Mark a policy as paid
    PayPolicy { id: PolicyId },
    /// Remove an insurance plan from the catalogue
    DeletePlan { id: InsurancePlanId },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ClientConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }

    init_tracing(&config.log_level);

    let client = InsuranceClient::new(config)?;
    run(&client, cli.command).await
}

async fn run(client: &InsuranceClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::View { path } => {
            let view = load_view(client, &path).await?;
            print_json(&view)?;
            if let Some((status, message)) = view.envelope_error() {
                bail!("{} returned status {status}: {message}", path.name());
            }
        }
        Command::Dashboard => print_json(&client.statistics().dashboard().await?)?,
        Command::Statistics { period, service } => {
            print_json(&client.statistics().breakdown(period, service).await?)?
        }
        Command::Claims {
            status,
            insurance_plan_id,
        } => {
            let filter = ClaimFilter {
                status,
                insurance_plan_id,
            };
            print_json(&client.claims().list(&filter).await?)?
        }
        Command::AcceptClaim { id, note } => {
            let body = AcceptClaimRequest { accepted_note: note };
            print_envelope(client.claims().accept(&id, &body).await?)?
        }
        Command::RejectClaim {
            id,
            reason,
            description,
        } => {
            let body = RejectClaimRequest {
                rejection_reason: reason,
                rejection_description: description,
            };
            print_envelope(client.claims().reject(&id, &body).await?)?
        }
        Command::PayPolicy { id } => print_envelope(client.policies().pay(&id).await?)?,
        Command::DeletePlan { id } => {
            client.insurance_plans().delete(&id).await?;
            tracing::info!(%id, "Insurance plan deleted");
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints the envelope, then fails if the backend reported an error in it
fn print_envelope<T: Serialize>(envelope: BaseResponse<T>) -> anyhow::Result<()> {
    print_json(&envelope)?;
    if !envelope.is_success() {
        bail!("backend returned status {}: {}", envelope.status, envelope.message);
    }
    Ok(())
}

/// Logs go to stderr so stdout stays valid JSON
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
