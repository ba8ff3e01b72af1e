//! OpenCGA command-line client
//!
//! Thin CLI over the library: log in, search panels, inspect cases.
//! Connection settings come from flags or the environment
//! (`OPENCGA_URL`, `OPENCGA_STUDY`, `OPENCGA_TOKEN`, `OPENCGA_PASSWORD`),
//! with a `.env` file honoured when present.
//!
//! Usage:
//!   opencga --url https://ws.opencb.org/opencga-prod login --user demo
//!   opencga panels search --genes BRCA2 --limit 5
//!   opencga clinical info CA-7

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use opencga_client::catalog::PanelSearchParams;
use opencga_client::clinical::ClinicalSearchParams;
use opencga_client::{ClientConfig, QueryOptions, Session};

#[derive(Parser, Debug)]
#[command(name = "opencga")]
#[command(about = "Command-line client for an OpenCGA server")]
struct Args {
    /// Server URL (defaults to OPENCGA_URL)
    #[arg(long, env = "OPENCGA_URL")]
    url: String,

    /// Default study scope (defaults to OPENCGA_STUDY)
    #[arg(long, env = "OPENCGA_STUDY")]
    study: Option<String>,

    /// Session token (defaults to OPENCGA_TOKEN); not needed for `login`
    #[arg(long, env = "OPENCGA_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Authenticate and print a session token
    Login {
        /// User id
        #[arg(long, short = 'u')]
        user: String,
        /// Password (defaults to OPENCGA_PASSWORD)
        #[arg(long, env = "OPENCGA_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Disease panel operations
    Panels {
        #[command(subcommand)]
        command: PanelCommand,
    },
    /// Clinical analysis operations
    Clinical {
        #[command(subcommand)]
        command: ClinicalCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PanelCommand {
    /// Search panels in the study
    Search {
        /// Gene filter, comma-separated
        #[arg(long)]
        genes: Option<String>,
        /// Disorder filter, comma-separated
        #[arg(long)]
        disorders: Option<String>,
        /// Maximum results
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Subcommand, Debug)]
enum ClinicalCommand {
    /// Fetch cases by id
    Info {
        /// Case ids
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Search cases in the study
    Search {
        /// Proband id filter
        #[arg(long)]
        proband: Option<String>,
        /// Maximum results
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = ClientConfig::new(&args.url);
    if let Some(study) = &args.study {
        config = config.with_study(study);
    }

    match args.command {
        Command::Login { user, password } => {
            let session = Session::login(config, &user, &password)
                .await
                .context("login failed")?;
            println!("{}", session.token()?);
        }
        Command::Panels { command } => {
            let session = open_session(config, args.token)?;
            match command {
                PanelCommand::Search {
                    genes,
                    disorders,
                    limit,
                } => {
                    let mut params = PanelSearchParams::new()
                        .with_options(QueryOptions::new().with_limit(limit).with_count());
                    params.genes = genes;
                    params.disorders = disorders;

                    let response = session.panels().search(&params).await?;
                    if let Some(total) = response.total_matches() {
                        eprintln!("{total} matching panels");
                    }
                    for panel in response.results() {
                        println!("{}", serde_json::to_string(panel)?);
                    }
                }
            }
        }
        Command::Clinical { command } => {
            let session = open_session(config, args.token)?;
            match command {
                ClinicalCommand::Info { ids } => {
                    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
                    let response = session
                        .clinical()
                        .info(&ids, &QueryOptions::new())
                        .await?;
                    for case in response.results() {
                        println!("{}", serde_json::to_string(case)?);
                    }
                }
                ClinicalCommand::Search { proband, limit } => {
                    let mut params = ClinicalSearchParams::new()
                        .with_options(QueryOptions::new().with_limit(limit).with_count());
                    params.proband = proband;

                    let response = session.clinical().search(&params).await?;
                    for case in response.results() {
                        println!("{}", serde_json::to_string(case)?);
                    }
                }
            }
        }
    }

    Ok(())
}

fn open_session(config: ClientConfig, token: Option<String>) -> Result<Session> {
    match token {
        Some(token) => Ok(Session::from_token(config, token)?),
        None => bail!("no session token: pass --token, set OPENCGA_TOKEN, or run `opencga login`"),
    }
}
