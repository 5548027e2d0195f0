use actix_web::{middleware as actix_middleware, App, HttpServer};
use std::time::Duration;
use tokio::time;

use mockapi::{MockApi, MockApiConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if it exists (for development)
    // Try loading from current directory first, then from mockapi/ directory
    if dotenvy::dotenv().is_err() {
        dotenvy::from_filename("mockapi/.env").ok();
    }

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    log::info!("Starting Melio mock API...");
    log::info!("Contracts version: {}", contracts::contracts_version());

    // Load configuration
    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "mockapi/config/mockapi.toml".to_string());

    let config = MockApiConfig::load_from_file(&config_path).unwrap_or_else(|e| {
        eprintln!(
            "Failed to load mock API configuration from '{}': {}",
            config_path, e
        );
        eprintln!("Hint: Set CONFIG_PATH environment variable or run from the repository root");
        std::process::exit(1);
    });
    log::info!(
        "Loaded configuration with {} demo accounts",
        config.accounts.len()
    );

    let api = MockApi::bootstrap(&config).unwrap_or_else(|e| {
        eprintln!("Failed to bootstrap mock API: {}", e);
        std::process::exit(1);
    });

    // Spawn background cleanup of expired refresh tokens
    let registry = api.registry.clone();
    tokio::spawn(async move {
        let mut interval = time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            let removed = registry.cleanup_expired();
            if removed > 0 {
                log::info!(
                    "Background cleanup: removed {} expired refresh tokens",
                    removed
                );
            }
        }
    });

    // Server configuration
    let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| config.server.host.clone());
    let port: u16 = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.server.port);

    log::info!("Starting HTTP server at {}:{}...", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(actix_middleware::Logger::default())
            .configure(|cfg| api.configure(cfg))
    })
    .bind((host, port))?
    .run()
    .await
}
