use crate::api::RestClient;
use crate::app::App;
use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;

mod api;
mod app;
mod auth;
mod config;
mod domain;
mod errors;
mod handlers;
mod responses;
mod router;
mod spreadsheets;
mod templates;


fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Load configuration (.env + environment)
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the platform API client
    let api = match RestClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Could not create API client: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Using platform API at {}", config.api_base_url);

    let addr = config.addr;
    let workers = config.max_workers;
    let app = App::new(config, Box::new(api));

    // 3️⃣ Start the server
    log::info!("Starting server at http://{addr}");
    let server = Server::bind(&addr).max_workers(workers);

    // 4️⃣ Serve requests, passing the app into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
