//! Log query commands

use crate::client::{Client, LogEntry};
use crate::config::Settings;
use crate::query::{LogQueryRequest, TopicPair};
use clap::Args;

/// Parameters shared by `query` and `fetch`
#[derive(Args, Debug, Clone)]
pub struct LogsArgs {
    /// Contract address to read logs from
    #[arg(short, long)]
    pub address: String,

    /// Start block number (or "latest")
    #[arg(short = 'f', long, default_value = "0")]
    pub from_block: String,

    /// End block number (or "latest")
    #[arg(short = 't', long, default_value = "latest")]
    pub to_block: String,

    /// Topic 0 (usually the event signature hash)
    #[arg(long)]
    pub topic0: Option<String>,

    /// Topic 1
    #[arg(long)]
    pub topic1: Option<String>,

    /// Topic 2
    #[arg(long)]
    pub topic2: Option<String>,

    /// Topic 3
    #[arg(long)]
    pub topic3: Option<String>,

    /// Operator between topic 0 and 1 (and, or)
    #[arg(long = "topic0-1-opr")]
    pub topic0_1_opr: Option<String>,

    /// Operator between topic 0 and 2 (and, or)
    #[arg(long = "topic0-2-opr")]
    pub topic0_2_opr: Option<String>,

    /// Operator between topic 0 and 3 (and, or)
    #[arg(long = "topic0-3-opr")]
    pub topic0_3_opr: Option<String>,

    /// Operator between topic 1 and 2 (and, or)
    #[arg(long = "topic1-2-opr")]
    pub topic1_2_opr: Option<String>,

    /// Operator between topic 1 and 3 (and, or)
    #[arg(long = "topic1-3-opr")]
    pub topic1_3_opr: Option<String>,

    /// Operator between topic 2 and 3 (and, or)
    #[arg(long = "topic2-3-opr")]
    pub topic2_3_opr: Option<String>,
}

impl LogsArgs {
    /// Convert command-line arguments into a request
    pub fn to_request(&self) -> LogQueryRequest {
        let operators = [
            &self.topic0_1_opr,
            &self.topic0_2_opr,
            &self.topic0_3_opr,
            &self.topic1_2_opr,
            &self.topic1_3_opr,
            &self.topic2_3_opr,
        ];

        let mut request = LogQueryRequest::new(&self.from_block, &self.to_block)
            .with_address(self.address.clone());
        request.topics = [
            self.topic0.clone(),
            self.topic1.clone(),
            self.topic2.clone(),
            self.topic3.clone(),
        ];

        for (pair, value) in TopicPair::ALL.iter().zip(operators) {
            if let Some(value) = value {
                request = request.with_operator(*pair, value.clone());
            }
        }

        request
    }
}

#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    #[command(flatten)]
    pub query: LogsArgs,

    /// Output format (pretty, json)
    #[arg(long, short, default_value = "pretty")]
    pub output: String,
}

/// Print the query string for the given arguments
pub fn handle_query(args: &LogsArgs) -> anyhow::Result<()> {
    let query = args.to_request().build()?;
    println!("{}", query);
    Ok(())
}

/// Fetch logs and print them
pub async fn handle_fetch(
    args: &FetchArgs,
    settings: &Settings,
    api_key: Option<String>,
    quiet: bool,
) -> anyhow::Result<()> {
    let request = args.query.to_request();
    // Validate before touching the network
    request.build()?;

    if api_key.is_none() {
        tracing::warn!("No API key configured; BscScan may rate limit or reject the request");
    }

    let client = Client::new(settings, api_key)?;

    if !quiet {
        eprintln!(
            "Fetching logs for {} on {}...",
            args.query.address,
            settings.network.display_name()
        );
    }

    let logs = client.get_logs(&request).await?;

    if args.output == "json" {
        println!("{}", serde_json::to_string_pretty(&logs)?);
    } else {
        print_logs(&logs);
    }

    if !quiet {
        eprintln!("{} log(s)", logs.len());
    }

    Ok(())
}

fn print_logs(logs: &[LogEntry]) {
    for log in logs {
        let block = log
            .block_number()
            .map(|n| n.to_string())
            .unwrap_or_else(|| log.block_number.clone());

        println!("Block {}  tx {}  index {}", block, log.transaction_hash, log.log_index);
        for (i, topic) in log.topics.iter().enumerate() {
            println!("  topic{}: {}", i, topic);
        }
        println!("  data:   {}", log.data);
    }
}
