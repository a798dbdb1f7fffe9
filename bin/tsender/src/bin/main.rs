//! Command line front end for TSender airdrops.
//!
//! The token address, recipients and amounts fields are cached between runs;
//! any field passed on the command line replaces the cached value. Values
//! starting with `@` are read from the named file.
//!
//! - `total`: print the total of the amounts field
//! - `info`: show name, symbol and decimals of the token, and the amounts
//!   total in whole tokens
//! - `send`: approve the TSender contract if needed and airdrop
//! - `form`: show, set or clear the cached fields

use airdrop::TransferRequest;
use clap::{Args, Parser, Subcommand};
use eyre::{bail, eyre};
use form::{FileStore, FormState};
use tracing::{error, info};
use tsender::{apply_form_update, config::Config, metrics::Metrics, FormUpdate};

#[derive(Parser)]
#[command(name = "tsender")]
#[command(about = "Batch-send ERC20 tokens through the TSender contract")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "tsender.toml")]
    config: String,

    /// Private key for signing transactions (hex string, with or without 0x prefix)
    #[arg(short = 'k', long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Fields {
    /// Token contract address
    #[arg(long)]
    token: Option<String>,

    /// Recipient addresses, separated by commas or newlines
    #[arg(long)]
    recipients: Option<String>,

    /// Amounts in token base units, aligned with the recipients
    #[arg(long)]
    amounts: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the total of the amounts field
    Total(Fields),

    /// Show name, symbol and decimals of the token
    Info(Fields),

    /// Approve the TSender contract if needed and airdrop
    Send(Fields),

    /// Inspect or edit the cached form fields
    #[command(subcommand)]
    Form(FormCommand),
}

#[derive(Subcommand)]
enum FormCommand {
    /// Print the cached fields
    Show,

    /// Replace cached fields
    Set(Fields),

    /// Remove all cached fields
    Clear,
}

fn read_field(value: Option<String>) -> eyre::Result<Option<String>> {
    match value {
        Some(value) => match value.strip_prefix('@') {
            Some(path) => Ok(Some(std::fs::read_to_string(path)?)),
            None => Ok(Some(value)),
        },
        None => Ok(None),
    }
}

impl Fields {
    fn into_update(self) -> eyre::Result<FormUpdate> {
        Ok(FormUpdate {
            token_address: read_field(self.token)?,
            recipients: read_field(self.recipients)?,
            amounts: read_field(self.amounts)?,
        })
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    let mut form = FormState::load(FileStore::new(&config.form_path))?;

    match cli.command {
        Command::Total(fields) => {
            apply_form_update(&mut form, fields.into_update()?)?;
            println!("{}", form.total());
        }
        Command::Info(fields) => {
            apply_form_update(&mut form, fields.into_update()?)?;

            match tsender::token_info(&config, form.token_address()).await? {
                Some(info) => {
                    println!("Address:  {}", info.address);
                    println!("Name:     {}", info.name);
                    println!("Symbol:   {}", info.symbol);
                    println!("Decimals: {}", info.decimals);
                    println!(
                        "Total:    {} {}",
                        tsender::total_in_tokens(&info, form.amounts())?,
                        info.symbol
                    );
                }
                None => println!("No token info for {:?}", form.token_address()),
            }
        }
        Command::Send(fields) => {
            apply_form_update(&mut form, fields.into_update()?)?;

            let private_key = cli
                .private_key
                .ok_or_else(|| eyre!("A private key is required to send (--private-key or PRIVATE_KEY)"))?;

            let request =
                TransferRequest::new(form.token_address(), form.recipients(), form.amounts());
            if !request.is_aligned() {
                bail!(
                    "{} recipients but {} amounts",
                    request.recipients().len(),
                    request.amounts().len()
                );
            }

            info!("Running: {}", request.description());
            let metrics = Metrics::new();
            match tsender::send_airdrop(&config, &private_key, &request, &metrics).await {
                Ok(outcome) => {
                    if let Some(approval) = &outcome.approval {
                        println!("Approval: {}", approval.tx_hash);
                    }
                    println!("Airdrop:  {}", outcome.airdrop.tx_hash);
                    if let Some(block_number) = outcome.airdrop.block_number {
                        println!("Block:    {}", block_number);
                    }
                }
                Err(e) => {
                    error!("Airdrop failed: {e:#}");
                    return Err(e);
                }
            }
        }
        Command::Form(FormCommand::Show) => {
            println!("Token address: {}", form.token_address());
            println!("Recipients:\n{}", form.recipients());
            println!("Amounts:\n{}", form.amounts());
            println!("Total: {}", form.total());
        }
        Command::Form(FormCommand::Set(fields)) => {
            apply_form_update(&mut form, fields.into_update()?)?;
            info!("Saved form fields to {}", config.form_path.display());
        }
        Command::Form(FormCommand::Clear) => {
            form.clear()?;
            info!("Cleared form fields in {}", config.form_path.display());
        }
    }

    Ok(())
}
