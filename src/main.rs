use clap::Parser;
use content_types::utils::{logger, validation::Validate};
use content_types::{CliArgs, GetContentTypes, SnippetConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => match SnippetConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => SnippetConfig::default(),
    };

    if config.json_logs() {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(args.verbose, config.log_level());
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_message());
        std::process::exit(1);
    }

    let chunks = config.chunk_library()?;
    tracing::debug!("{} chunks available", chunks.len());

    let snippet = GetContentTypes::new(config.content_type_source(), chunks);
    let properties = config.apply_defaults(args.properties());

    println!("{}", snippet.run(&properties).await);
    Ok(())
}
