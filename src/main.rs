use chrono::{DateTime, Local};
use clap::Parser;
use flyover::domain::model::PassWindow;
use flyover::utils::{logger, validation::Validate};
use flyover::{CliConfig, FlyoverEngine, HttpLookupChain};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting flyover CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let chain = HttpLookupChain::new(config);
    let engine = FlyoverEngine::new_with_monitoring(chain, monitor_enabled);

    match engine.run().await {
        Ok(passes) => {
            tracing::info!("✅ Lookup chain completed successfully!");
            if passes.is_empty() {
                println!("No upcoming passes reported for your location.");
            } else {
                for pass in &passes {
                    println!("{}", describe_pass(pass));
                }
            }
        }
        Err(e) => {
            tracing::error!("❌ Lookup chain failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn describe_pass(pass: &PassWindow) -> String {
    match DateTime::from_timestamp(pass.risetime, 0) {
        Some(risetime) => format!(
            "Next pass at {} for {} seconds!",
            risetime.with_timezone(&Local).format("%a %b %d %Y %H:%M:%S"),
            pass.duration
        ),
        None => format!(
            "Next pass at epoch {} for {} seconds!",
            pass.risetime, pass.duration
        ),
    }
}
