use carbonserver::{config::Config, logging, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init_tracing("info");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = startup::connect_to_database(&config).await {
        tracing::error!("Failed to prepare database: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Database is ready");
}
