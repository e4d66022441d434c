use anyhow::Context;
use clap::Parser;
use nlp_rpc_client::utils::error::ErrorSeverity;
use nlp_rpc_client::utils::{logger, validation::Validate};
use nlp_rpc_client::{
    CliConfig, ClientError, Command, HttpTransport, LanguageIdentifier, MorphologyAnalyzer,
    Normalizer, SentenceSegmenter,
};
use std::io::Read;
use std::sync::Arc;

fn read_input(text: &str) -> anyhow::Result<String> {
    if text != "-" {
        return Ok(text.to_string());
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read input from stdin")?;
    Ok(buffer.trim_end_matches(['\n', '\r']).to_string())
}

async fn run(cli: &CliConfig, transport: Arc<HttpTransport>) -> anyhow::Result<serde_json::Value> {
    let text = read_input(cli.command.text())?;

    let output = match &cli.command {
        Command::Segment {
            no_split_in_quotes, ..
        } => {
            let sentences = SentenceSegmenter::new(transport)
                .extract_sentences(&text, *no_split_in_quotes)
                .await?;
            serde_json::to_value(sentences)?
        }
        Command::Analyze { all_analyses, .. } => {
            let analysis = MorphologyAnalyzer::new(transport)
                .with_all_analyses(*all_analyses)
                .analyze_sentence(&text)
                .await?;
            serde_json::to_value(analysis)?
        }
        Command::Langid {
            max_samples, fast, ..
        } => {
            let scores = LanguageIdentifier::new(transport)
                .with_fast_scoring(*fast)
                .identify(&text, *max_samples)
                .await?;
            serde_json::to_value(scores)?
        }
        Command::Normalize { .. } => {
            let result = Normalizer::new(transport).normalize(&text).await?;
            serde_json::to_value(result)?
        }
    };

    Ok(output)
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ClientError>().map(ClientError::severity) {
        Some(ErrorSeverity::Low) => 0,
        Some(ErrorSeverity::Medium) => 2, // 可重試
        Some(ErrorSeverity::High) | None => 1,
        Some(ErrorSeverity::Critical) => 3,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let config = cli.resolve()?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    tracing::debug!("Client config: {:?}", config);
    let transport = Arc::new(HttpTransport::from_config(&config)?);

    match run(&cli, transport).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            if let Some(client_error) = e.downcast_ref::<ClientError>() {
                tracing::error!(
                    "❌ Call failed: {} (Category: {:?}, Severity: {:?})",
                    client_error,
                    client_error.category(),
                    client_error.severity()
                );
                eprintln!("❌ {}", client_error.user_friendly_message());
                eprintln!("💡 {}", client_error.recovery_suggestion());
            } else {
                eprintln!("❌ {:#}", e);
            }

            let code = exit_code(&e);
            if code > 0 {
                std::process::exit(code);
            }
            Ok(())
        }
    }
}
