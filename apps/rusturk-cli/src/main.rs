//! Rusturk CLI - requester tasks from the command line.
//!
//! Every command is one API call whose result is printed as pretty JSON on
//! stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```text
//! MTURK_SANDBOX=true rusturk balance
//! rusturk get-hit 3XJOUITW8URHJMX7F00H20LGRIAQTF
//! rusturk statistic NumberAssignmentsApproved SevenDays
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MTURK_ACCESS_KEY_ID` | `AWS_ACCESS_KEY_ID` | Requester access key id |
//! | `MTURK_SECRET_ACCESS_KEY` | `AWS_SECRET_ACCESS_KEY` | Requester secret key |
//! | `MTURK_SANDBOX` | `false` | Use the sandbox marketplace |
//! | `MTURK_ENDPOINT` | *(unset)* | Override the endpoint URL |
//! | `MTURK_TIMEOUT_SECS` | `30` | Request timeout |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rusturk_client::input::{
    GetAssignmentsForHitInput, GetRequesterStatisticInput, GetReviewableHitsInput, SearchHitsInput,
};
use rusturk_client::types::{Paging, TimePeriod};
use rusturk_client::{MTurkClient, MTurkConfig};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rusturk")]
#[command(about = "Requester tasks for the Mechanical Turk API")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Available account balance
    Balance,

    /// List your HITs, newest expiration first
    SearchHits {
        /// Page number, starting at 1
        #[arg(default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// List HITs ready for review
    ReviewableHits {
        /// Page number, starting at 1
        #[arg(default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Describe a HIT
    GetHit {
        /// HIT identifier
        hit_id: String,
    },

    /// List a HIT's assignments
    Assignments {
        /// HIT identifier
        hit_id: String,
        /// Page number, starting at 1
        #[arg(default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Approve and pay an assignment
    Approve {
        /// Assignment identifier
        assignment_id: String,
        /// Feedback shown to the worker
        feedback: Option<String>,
    },

    /// Reject an assignment
    Reject {
        /// Assignment identifier
        assignment_id: String,
        /// Feedback shown to the worker
        feedback: Option<String>,
    },

    /// Expire a HIT immediately
    Expire {
        /// HIT identifier
        hit_id: String,
    },

    /// Read a requester statistic
    Statistic {
        /// Statistic name, e.g. NumberAssignmentsApproved
        name: String,
        /// OneDay, SevenDays, ThirtyDays or LifeToDate
        #[arg(default_value = "OneDay", value_parser = parse_time_period)]
        time_period: TimePeriod,
    },
}

fn parse_time_period(value: &str) -> Result<TimePeriod, String> {
    TimePeriod::from_name(value).ok_or_else(|| format!("unknown time period: {value}"))
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to encode result as JSON")?;
    println!("{json}");
    Ok(())
}

fn paging(page: u32) -> Paging {
    Paging {
        page_number: page,
        ..Paging::default()
    }
}

async fn run(client: &MTurkClient, command: Command) -> Result<()> {
    match command {
        Command::Balance => print_json(&client.get_account_balance().await?)?,
        Command::SearchHits { page } => {
            let input = SearchHitsInput {
                paging: paging(page),
                ..SearchHitsInput::default()
            };
            print_json(&client.search_hits(&input).await?)?;
        }
        Command::ReviewableHits { page } => {
            let input = GetReviewableHitsInput {
                paging: paging(page),
                ..GetReviewableHitsInput::default()
            };
            print_json(&client.get_reviewable_hits(&input).await?)?;
        }
        Command::GetHit { hit_id } => print_json(&client.get_hit(&hit_id).await?)?,
        Command::Assignments { hit_id, page } => {
            let mut input = GetAssignmentsForHitInput::new(hit_id);
            input.paging = paging(page);
            print_json(&client.get_assignments_for_hit(&input).await?)?;
        }
        Command::Approve {
            assignment_id,
            feedback,
        } => print_json(
            &client
                .approve_assignment(&assignment_id, feedback.as_deref())
                .await?,
        )?,
        Command::Reject {
            assignment_id,
            feedback,
        } => print_json(
            &client
                .reject_assignment(&assignment_id, feedback.as_deref())
                .await?,
        )?,
        Command::Expire { hit_id } => print_json(&client.force_expire_hit(&hit_id).await?)?,
        Command::Statistic { name, time_period } => {
            let mut input = GetRequesterStatisticInput::new(name);
            input.time_period = time_period;
            print_json(&client.get_requester_statistic(&input).await?)?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command;

    let config = MTurkConfig::from_env();
    init_tracing(&config.log_level)?;

    let client = MTurkClient::new(&config).context("failed to create requester client")?;
    tracing::info!(endpoint = %client.endpoint(), ?command, "running command");
    run(&client, command).await
}
