use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use venue_match::config::{LoggingSettings, Settings};
use venue_match::handlers::{find_group_matches, load_scenario};

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Unknown welfare schemes and bad resolver parameters fail here
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);
    info!("Starting Venue Match with {} welfare by default", settings.matching.scheme);

    let matcher = match settings.matcher() {
        Ok(matcher) => matcher,
        Err(e) => {
            error!("Invalid matching configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(path) = std::env::args()
        .nth(1)
        .or_else(|| settings.input.scenario_path.clone())
    else {
        error!("No scenario given: pass a path or set input.scenario_path");
        return ExitCode::FAILURE;
    };

    info!("Reading scenario from {}", path);

    let result = load_scenario(&path)
        .and_then(|scenario| scenario.into_state(matcher))
        .and_then(|(mut state, request)| find_group_matches(&mut state, &request));

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            error!("Matching failed: {}", e);
            if let Ok(json) = serde_json::to_string(&e.to_response()) {
                error!("{}", json);
            }
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Returning {} ranked venues for {} participants",
        response.matches.len(),
        response.participants
    );

    let stdout = std::io::stdout();
    if let Err(e) = serde_json::to_writer_pretty(stdout.lock(), &response) {
        error!("Failed to write response: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
