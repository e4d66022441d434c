use crate::config::toml_config::TomlConfig;
use crate::config::ClientConfig;
use crate::core::language_id::DEFAULT_MAX_SAMPLE_COUNT;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "nlp-rpc")]
#[command(about = "Call the remote NLP service: segmentation, morphology, language id, normalization")]
pub struct CliConfig {
    /// Service endpoint, `host:port` or an http(s) URL
    #[arg(long, env = "NLP_RPC_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Path to a TOML file with a [client] section
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Connect timeout in seconds
    #[arg(long)]
    pub connect_timeout: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Split a document into sentences
    Segment {
        /// Text to process, or `-` to read stdin
        text: String,
        /// Do not split inside double quotes
        #[arg(long)]
        no_split_in_quotes: bool,
    },
    /// Morphological analysis of a sentence
    Analyze {
        text: String,
        /// Include every candidate analysis, not only the best one
        #[arg(long)]
        all_analyses: bool,
    },
    /// Language identification scores
    Langid {
        text: String,
        #[arg(long, default_value_t = DEFAULT_MAX_SAMPLE_COUNT)]
        max_samples: u32,
        /// Use the faster, less precise scorer
        #[arg(long)]
        fast: bool,
    },
    /// Normalize noisy text and report the edit distance
    Normalize { text: String },
}

impl Command {
    pub fn text(&self) -> &str {
        match self {
            Command::Segment { text, .. }
            | Command::Analyze { text, .. }
            | Command::Langid { text, .. }
            | Command::Normalize { text } => text,
        }
    }
}

impl CliConfig {
    /// 優先順序：命令列 > TOML 檔案 > 預設值
    pub fn resolve(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_client_config(),
            None => ClientConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }
        if let Some(connect_timeout) = self.connect_timeout {
            config.connect_timeout_secs = connect_timeout;
        }

        Ok(config)
    }
}
