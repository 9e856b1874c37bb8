use clap::Parser;
use idea_fetcher::core::render::render;
use idea_fetcher::utils::{logger, validation::Validate};
use idea_fetcher::{
    CliConfig, ConfigProvider, GeminiClient, IdeaFetcher, IdeaSource, OutputFormat, TomlConfig,
};

async fn run<C: ConfigProvider + Validate>(config: C, format: OutputFormat) -> i32 {
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        return 1;
    }

    let generator = GeminiClient::new(config.api_endpoint());
    let fetcher = IdeaFetcher::new(generator, config);

    let outcome = fetcher.fetch_with_source().await;
    match outcome.source {
        IdeaSource::Live => tracing::info!("✅ Received {} live app ideas", outcome.ideas.len()),
        IdeaSource::Fallback => tracing::warn!("⚠️ Serving the built-in fallback list"),
    }

    match render(&outcome.ideas, format) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            0
        }
        Err(e) => {
            tracing::error!("❌ Rendering failed: {} (kind: {:?})", e, e.kind());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            2
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting idea-fetcher");
    tracing::debug!(
        "CLI config: endpoint={} model={} format={:?}",
        cli.endpoint,
        cli.model,
        cli.format
    );

    let exit_code = match cli.config.clone() {
        Some(path) => match TomlConfig::from_file(&path) {
            Ok(mut file_config) => {
                // 檔案沒有提供 api_key 時沿用命令列 / 環境變數
                if file_config.api_key().is_none() {
                    file_config.service.api_key = cli.api_key.clone();
                }
                let format = file_config.output_format().unwrap_or(cli.format);
                tracing::info!("📄 Loaded configuration from {}", path);
                run(file_config, format).await
            }
            Err(e) => {
                tracing::error!("❌ Failed to load {}: {}", path, e);
                eprintln!("❌ {}", e);
                eprintln!("💡 {}", e.recovery_suggestion());
                1
            }
        },
        None => {
            let format = cli.format;
            run(cli, format).await
        }
    };

    std::process::exit(exit_code);
}
