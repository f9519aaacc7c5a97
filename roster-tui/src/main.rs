use roster_tui::{Config, logging, run};

#[tokio::main]
async fn main() {
    let config = Config::from_args();

    let log_path = match logging::init(&config) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::info!(
        "roster starting, endpoint {}, logging to {}",
        config.endpoint,
        log_path.display()
    );

    if let Err(e) = run(config).await {
        log::error!("{e}");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
