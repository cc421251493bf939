use skimate::config::{LoggingSettings, Settings};
use skimate::console;
use skimate::core::{RandomSource, SeededRandom, SwipeSession, ThreadRandom};
use skimate::models::MatchSummary;
use skimate::services::{default_deck, load_deck};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // Environment wins over the config file
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match log_format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

fn run_session<R: RandomSource>(session: SwipeSession<R>) -> std::io::Result<()> {
    let mut session = session.with_chat_hook(Box::new(|summary: &MatchSummary| {
        info!("Chat requested with {} ({})", summary.name, summary.candidate_id);
    }));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    console::run(&mut session, stdin.lock(), stdout.lock())?;

    info!(
        "Session ended at cursor {}/{} with {} matches",
        session.cursor(),
        session.queue().len(),
        session.matches().len()
    );
    Ok(())
}

fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);
    info!("Starting SkiMate swipe session...");

    let profiles = match settings.deck.path.as_deref() {
        Some(path) => load_deck(path).map_err(|e| {
            error!("Failed to load deck {}: {}", path, e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?,
        None => {
            info!("No deck configured, using built-in deck");
            default_deck()
        }
    };

    match settings.session.rng_seed {
        Some(seed) => {
            info!("Using seeded like draws (seed {})", seed);
            let session = SwipeSession::new(profiles, SeededRandom::new(seed)).map_err(invalid_data)?;
            run_session(session)
        }
        None => {
            let session = SwipeSession::new(profiles, ThreadRandom).map_err(invalid_data)?;
            run_session(session)
        }
    }
}

fn invalid_data(e: skimate::QueueError) -> std::io::Error {
    error!("{}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
}
