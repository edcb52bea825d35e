mod errors;
mod logging;
mod initialization;
mod dashboard;
mod handlers;
mod manager_forecast;
mod manager_owm;

use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::manager_forecast::models::InsightThresholds;
use crate::manager_owm::OWM;

struct AppState {
    owm: OWM,
    thresholds: InsightThresholds,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;

    let owm = OWM::new(&config.owm.api_key, &config.owm.base_url, config.owm.timeout_secs)?;
    let state = web::Data::new(AppState { owm, thresholds: config.insights });

    info!("listening on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(handlers::routes)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
