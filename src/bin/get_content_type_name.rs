use clap::Parser;
use content_types::utils::{logger, validation::Validate};
use content_types::{GetContentTypeName, NameArgs, SnippetConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = NameArgs::parse();

    let config = match &args.config {
        Some(path) => SnippetConfig::from_file(path)?,
        None => SnippetConfig::default(),
    };
    if config.json_logs() {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(args.verbose, config.log_level());
    }
    config.validate()?;

    let snippet = GetContentTypeName::new(config.content_type_source());
    println!("{}", snippet.run(args.id, args.current_content_type).await);
    Ok(())
}
