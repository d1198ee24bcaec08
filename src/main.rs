use clap::Parser;
use veloventure::utils::{logger, validation::Validate};
use veloventure::{
    CliConfig, Command, GeminiClient, LocalStorage, Planner, PlannerError, Settings, TripEngine,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting veloventure");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut settings = match &cli.config {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!("❌ Failed to load settings from {}: {}", path, e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };
    if let Some(path) = &cli.output_path {
        settings.output.path = path.clone();
    }

    let api_key = match settings.api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let client = GeminiClient::from_config(&settings, api_key);
    let planner = Planner::new(client);

    if let Some(request) = cli.command.trip_request() {
        if let Err(e) = request.validate() {
            tracing::error!("❌ Request validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }

        let storage = LocalStorage::new(settings.output.path.clone());
        let engine = TripEngine::new(planner, storage, settings);

        match engine.run(&request).await {
            Ok(output_path) => {
                tracing::info!("✅ Trip plan completed successfully!");
                println!("✅ Trip plan completed successfully!");
                println!("📁 Reports saved to: {}", output_path);
            }
            Err(e) => {
                report_failure(&e);
                std::process::exit(1);
            }
        }
    } else if let Command::Place { query } = &cli.command {
        match planner.place_details(query).await {
            Ok(lookup) => {
                println!("📍 {}", lookup.details.name);
                if let Some(rating) = lookup.details.rating {
                    println!("⭐ {:.1}", rating);
                }
                if let Some(address) = &lookup.details.address {
                    println!("🏠 {}", address);
                }
                if let Some(summary) = &lookup.details.summary {
                    println!("{}", summary);
                }
                for source in &lookup.sources {
                    let title = source.title.as_deref().unwrap_or("Untitled source");
                    let uri = source.uri.as_deref().unwrap_or("");
                    println!("🔗 {} {}", title, uri);
                }
            }
            Err(e) => {
                report_failure(&e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn report_failure(e: &PlannerError) {
    tracing::error!("❌ Planning failed: {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}
