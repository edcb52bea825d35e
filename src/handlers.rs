use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse, Responder};
use log::{error, info};
use serde::{Deserialize, Serialize};
use crate::AppState;
use crate::dashboard::{dashboard, DashboardOptions};
use crate::errors::DashboardError;
use crate::manager_forecast::errors::ForecastError;
use crate::manager_owm::errors::OWMError;

fn yes() -> bool {
    true
}

#[derive(Deserialize, Debug)]
struct DashboardParams {
    #[serde(default)]
    city: String,
    #[serde(default = "yes")]
    hourly: bool,
    #[serde(default)]
    raw: bool,
}

#[derive(Serialize)]
struct ErrorBody {
    stage: &'static str,
    message: String,
}

/// Registers the dashboard routes
///
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_dashboard);
}

// city=London&hourly=true&raw=false
#[get("/dashboard")]
async fn get_dashboard(params: web::Query<DashboardParams>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let options = DashboardOptions { hourly: params.hourly, raw: params.raw };

    match dashboard(&data.owm, &params.city, &data.thresholds, options).await {
        Ok(dash) => HttpResponse::Ok().json(dash),
        Err(e) => {
            error!("failed to build dashboard for '{}': {}", params.city, e);
            HttpResponse::build(status_for(&e)).json(ErrorBody { stage: e.stage(), message: e.to_string() })
        }
    }
}

fn status_for(e: &DashboardError) -> StatusCode {
    match e {
        DashboardError::BlankCity => StatusCode::BAD_REQUEST,
        DashboardError::Owm(OWMError::LocationNotFound(_)) => StatusCode::NOT_FOUND,
        DashboardError::Owm(_) => StatusCode::BAD_GATEWAY,
        DashboardError::Forecast(ForecastError::EmptyForecast { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}
