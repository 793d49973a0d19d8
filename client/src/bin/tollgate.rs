//! Command-line frontend for the message board and fortune cookie programs.

use std::path::{
    Path,
    PathBuf,
};

use anyhow::Context;
use chrono::{
    DateTime,
    SecondsFormat,
};
use clap::{
    Parser,
    Subcommand,
    ValueEnum,
};
use client::{
    context::{
        fortune_cookie::FortuneCookieContext,
        message_board::MessageBoardContext,
    },
    logs::{
        log_divider,
        log_info,
        log_success,
        log_warning,
    },
    pda::FortuneRequest,
    print_kv,
    transactions::{
        CustomRpcClient,
        DEFAULT_RPC_URL,
    },
    views::{
        FortuneView,
        MessageView,
    },
    LogColor,
};
use serde::Serialize;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::signature::{
    Keypair,
    Signer,
};

#[derive(Parser, Debug)]
#[command(name = "tollgate", about = "Post to the message board and open fortune cookies")]
struct Cli {
    /// RPC endpoint.
    #[arg(long, env = "TOLLGATE_RPC_URL", default_value = DEFAULT_RPC_URL)]
    url: String,

    /// Path to a JSON keypair file. Defaults to `~/.config/solana/id.json`.
    #[arg(long, env = "TOLLGATE_KEYPAIR")]
    keypair: Option<PathBuf>,

    #[arg(long, env = "TOLLGATE_COMMITMENT", value_enum, default_value_t = Commitment::Confirmed)]
    commitment: Commitment,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the message counter and treasury if they don't exist yet.
    Initialize,
    /// Post a message for 69 lamports.
    Post { content: String },
    /// List every message, newest first.
    Messages {
        /// Print JSON instead of log lines.
        #[arg(long)]
        json: bool,
    },
    /// Show the message counter.
    Counter,
    /// Buy a fortune for 2 lamports.
    Fortune {
        /// First request counter to try. Taken counters are skipped.
        #[arg(long, default_value_t = 0, conflicts_with = "per_user")]
        counter: u64,
        /// Request the single fortune tied to this wallet instead of a numbered one.
        #[arg(long)]
        per_user: bool,
    },
    /// Show a fortune that was already bought.
    ShowFortune {
        #[arg(long, default_value_t = 0, conflicts_with = "per_user")]
        counter: u64,
        #[arg(long)]
        per_user: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(value: Commitment) -> Self {
        match value {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

#[derive(Serialize)]
struct MessageRow<'a> {
    index: u64,
    poster: String,
    timestamp: String,
    content: &'a str,
}

fn default_keypair_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var_os("HOME").context("HOME isn't set; pass --keypair")?;
    Ok(PathBuf::from(home).join(".config/solana/id.json"))
}

/// Reads a keypair stored as a JSON array of 64 bytes, as written by `solana-keygen`.
fn read_keypair(path: &Path) -> anyhow::Result<Keypair> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Couldn't read keypair file {}", path.display()))?;
    let bytes: Vec<u8> = serde_json::from_str(&contents)
        .with_context(|| format!("Keypair file {} isn't a JSON byte array", path.display()))?;
    Keypair::try_from(bytes.as_slice())
        .with_context(|| format!("Keypair file {} isn't a valid keypair", path.display()))
}

fn format_timestamp(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0).map_or_else(
        || timestamp.to_string(),
        |dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}

fn print_message(message: &MessageView) {
    log_divider();
    print_kv!("Index", message.index, LogColor::Header);
    print_kv!("Poster", message.poster, LogColor::Info);
    print_kv!("Posted", format_timestamp(message.timestamp), LogColor::Info);
    print_kv!("Content", &message.content, LogColor::Highlight);
}

fn print_fortune(fortune: &FortuneView) {
    print_kv!("Fortune", &fortune.fortune, LogColor::Highlight);
    print_kv!("Address", fortune.address, LogColor::Info);
    print_kv!("Selection", fortune.selection, LogColor::Info);
    print_kv!("Counter", fortune.counter, LogColor::Info);
}

fn fortune_request(counter: u64, per_user: bool) -> FortuneRequest {
    if per_user {
        FortuneRequest::PerUser
    } else {
        FortuneRequest::PerRequest { counter }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let rpc = CustomRpcClient::new_from_url(&cli.url, cli.commitment.into());
    let keypair_path = match cli.keypair {
        Some(path) => path,
        None => default_keypair_path()?,
    };

    match cli.command {
        Command::Initialize => {
            let payer = read_keypair(&keypair_path)?;
            if rpc.initialize_if_needed(&payer).await?.is_none() {
                log_info("Message board", "nothing to do");
            }
            let board = MessageBoardContext::new();
            print_kv!("Counter", board.counter, LogColor::Info);
            print_kv!("Treasury", board.treasury, LogColor::Info);
        }
        Command::Post { content } => {
            let payer = read_keypair(&keypair_path)?;
            let (index, sig) = rpc.post_message(&payer, &content).await?;
            log_success("Posted", format!("message #{index} ({sig})"));
        }
        Command::Messages { json } => {
            let messages = rpc.list_messages()?;
            if json {
                let rows = messages
                    .iter()
                    .map(|m| MessageRow {
                        index: m.index,
                        poster: m.poster.to_string(),
                        timestamp: format_timestamp(m.timestamp),
                        content: &m.content,
                    })
                    .collect::<Vec<_>>();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if messages.is_empty() {
                log_info("Messages", "none yet");
            } else {
                messages.iter().for_each(print_message);
                log_divider();
            }
        }
        Command::Counter => match rpc.fetch_counter()? {
            Some(counter) => {
                print_kv!("Counter", counter.address, LogColor::Info);
                print_kv!("Messages", counter.count, LogColor::Highlight);
                print_kv!("Treasury", MessageBoardContext::new().treasury, LogColor::Info);
            }
            None => log_warning("Message board", "not initialized"),
        },
        Command::Fortune { counter, per_user } => {
            let user = read_keypair(&keypair_path)?;
            let fortune = if per_user {
                rpc.get_fortune(&user, FortuneRequest::PerUser).await?
            } else {
                rpc.get_next_fortune(&user, counter).await?.1
            };
            print_fortune(&fortune);
        }
        Command::ShowFortune { counter, per_user } => {
            let user = read_keypair(&keypair_path)?;
            let address = FortuneCookieContext::new()
                .fortune_address(&user.pubkey(), fortune_request(counter, per_user));
            match rpc.fetch_fortune(&address)? {
                Some(fortune) => print_fortune(&fortune),
                None => log_warning("No fortune at", address),
            }
        }
    }

    Ok(())
}
