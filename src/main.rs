use clap::{CommandFactory, Parser};
use wallsy::cli::{self, Cli};
use wallsy::utils::{logger, validation::Validate};
use wallsy::{MediaStore, PipelineEngine, WallsyConfig, WallsyError, WallsyPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting wallsy");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let parsed = match cli::build(args, cli::read_stdin_path()) {
        Ok(parsed) => parsed,
        Err(e) => fail(&e),
    };

    // bare `wallsy` prints help, like any chained-command tool
    if parsed.spec.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    if let Err(e) = parsed.spec.validate() {
        tracing::error!("❌ Pipeline validation failed: {}", e);
        fail(&e);
    }

    let config = match WallsyConfig::load_or_init(parsed.config_dir.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    tracing::debug!("Using media dir {}", config.media_dir.display());

    let store = MediaStore::new(config.media_dir.clone());
    let repeat = parsed.spec.repeat;
    let pipeline = WallsyPipeline::new(store, config, parsed.spec);
    let engine = PipelineEngine::with_repeat(pipeline, repeat);

    match engine.run().await {
        Ok(output) => {
            tracing::info!("✅ Pipeline completed");
            for action in &output.delivered {
                tracing::debug!("{}", action);
            }
            if output.delivered.is_empty() {
                for image in &output.images {
                    println!("✅ {}", image.path.display());
                }
            }
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &WallsyError) -> ! {
    tracing::error!(
        "❌ wallsy failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        wallsy::utils::error::ErrorSeverity::Low => 0,
        wallsy::utils::error::ErrorSeverity::Medium => 2,
        wallsy::utils::error::ErrorSeverity::High => 1,
        wallsy::utils::error::ErrorSeverity::Critical => 3,
    };

    std::process::exit(exit_code);
}
