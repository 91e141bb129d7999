use super::config::Config;
use super::request::SimulateRequest;
use super::response::ErrorResponse;
use super::response::SimulateResponse;
use crate::simulation::Cancel;
use crate::simulation::Simulation;
use crate::simulation::SimulationError;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

/// Run one simulation on the blocking pool, cancelling it if it outlives
/// the configured deadline.
pub async fn simulate(config: web::Data<Config>, req: web::Json<SimulateRequest>) -> impl Responder {
    let cancel = Cancel::default();
    let simulation = match Simulation::try_from(req.into_inner()) {
        Err(e) => return failure(e),
        Ok(simulation) => simulation.cancellable(cancel.clone()),
    };
    match tokio::time::timeout(config.timeout, web::block(move || simulation.run())).await {
        Err(_) => {
            cancel.cancel();
            log::warn!("simulation exceeded {:?}", config.timeout);
            failure(SimulationError::Cancelled)
        }
        Ok(Err(e)) => {
            log::error!("simulation task failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::from("Simulation failed"))
        }
        Ok(Ok(Err(e))) => failure(e),
        Ok(Ok(Ok(outcome))) => HttpResponse::Ok().json(SimulateResponse::from(outcome)),
    }
}

fn failure(e: SimulationError) -> HttpResponse {
    match e {
        SimulationError::InvalidInput(msg) => HttpResponse::BadRequest().json(ErrorResponse::from(msg)),
        SimulationError::Cancelled => HttpResponse::GatewayTimeout().json(ErrorResponse::from("Simulation timed out")),
        SimulationError::NoValidSplit => {
            log::error!("simulation failed: no valid splits");
            HttpResponse::InternalServerError().json(ErrorResponse::from("Simulation failed"))
        }
    }
}

/// Malformed bodies get the same `{"error": ..}` shape as every other 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::from(err.to_string()));
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

#[rustfmt::skip]
pub async fn run(config: Config) -> Result<(), std::io::Error> {
    let bind = config.bind.clone();
    let workers = config.workers;
    log::info!("{:<32}{}", "starting server on", bind);
    log::info!("{:<32}{}", "allowed origins", config.origins.join(","));
    let config = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(config.cors())
            .app_data(config.clone())
            .app_data(json_config())
            .route("/simulate", web::post().to(simulate))
    })
    .workers(workers)
    .bind(bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use std::time::Duration;

    const HAND: &str = r#"["AS","AD","KH","KC","9S","9D","7H","5C","4S","3D","2H","JC","QS"]"#;

    fn app_config(timeout: Duration) -> web::Data<Config> {
        web::Data::new(Config {
            timeout,
            ..Config::default()
        })
    }

    async fn post(config: web::Data<Config>, body: String) -> (StatusCode, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(config)
                .app_data(json_config())
                .route("/simulate", web::post().to(simulate)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/simulate")
            .insert_header(("content-type", "application/json"))
            .set_payload(body)
            .to_request();
        let res = test::call_service(&app, req).await;
        let status = res.status();
        let body = test::read_body(res).await;
        (status, serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null))
    }

    #[actix_web::test]
    async fn simulate_ok() {
        let body = format!(r#"{{"myCards":{},"iterations":10}}"#, HAND);
        let (status, json) = post(app_config(Duration::from_secs(30)), body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["iterations"], 10);
        assert_eq!(json["middle"].as_array().unwrap().len(), 5);
        assert!(json.get("autoWin").is_none());
    }

    #[actix_web::test]
    async fn simulate_wrong_count() {
        let body = r#"{"myCards":["AS","KD"]}"#.to_string();
        let (status, json) = post(app_config(Duration::from_secs(30)), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Provide exactly 13 cards");
    }

    #[actix_web::test]
    async fn simulate_mistyped_body() {
        let body = format!(r#"{{"myCards":{},"iterations":"100"}}"#, HAND);
        let (status, json) = post(app_config(Duration::from_secs(30)), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    #[actix_web::test]
    async fn simulate_duplicates() {
        let body = r#"{"myCards":["AS","AS","KH","KC","9S","9D","7H","5C","4S","3D","2H","JC","QS"]}"#;
        let (status, _) = post(app_config(Duration::from_secs(30)), body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn simulate_times_out() {
        let body = format!(r#"{{"myCards":{},"iterations":1000000}}"#, HAND);
        let (status, json) = post(app_config(Duration::ZERO), body).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(json["error"], "Simulation timed out");
    }
}
