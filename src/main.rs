use anyhow::Context;
use book_catalog::utils::error::{CatalogError, ErrorSeverity};
use book_catalog::utils::logger;
use book_catalog::{CatalogDemo, CliConfig, DelayedLookup, LogOptions, Settings};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let log_options = LogOptions::from_cli(&cli);
    if log_options.json {
        logger::init_json_logger(log_options.verbose);
    } else {
        logger::init_cli_logger(log_options.verbose);
    }

    tracing::info!("Starting book-catalog");

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(
                "❌ Invalid configuration: {} (Category: {:?})",
                e,
                e.category()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(err) = run(settings).await {
        match err.downcast_ref::<CatalogError>() {
            Some(e) => {
                tracing::error!(
                    "❌ {:#} (Category: {:?}, Severity: {:?})",
                    err,
                    e.category(),
                    e.severity()
                );
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            }
            None => {
                tracing::error!("❌ {:#}", err);
                eprintln!("❌ {:#}", err);
            }
        }

        let exit_code = exit_code(&err);
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(settings: Settings) -> anyhow::Result<()> {
    let catalog = Arc::new(settings.catalog.clone());
    let lookup = DelayedLookup::new(Arc::clone(&catalog), settings.lookup_delay);
    let sink = settings.sink.build();

    let demo = CatalogDemo::new(catalog, lookup, settings, sink);
    demo.run().await.context("catalog demo failed")?;

    tracing::info!("✅ Catalog demo completed");
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<CatalogError>().map(CatalogError::severity) {
        Some(ErrorSeverity::Low) => 0,
        Some(ErrorSeverity::Medium) => 2,
        Some(ErrorSeverity::High) => 1,
        Some(ErrorSeverity::Critical) | None => 3,
    }
}
