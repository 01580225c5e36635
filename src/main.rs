use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use std::sync::Arc;

use tijara_backend::{
    config::Config,
    external::{CarrierApi, CarrierValidator, OrderStoreApi, OrderStorePort},
    handlers,
    middlewares::create_cors,
    services::{CarrierService, OrderService},
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().expect("Failed to load configuration file");

    // External collaborators
    let order_store: Arc<dyn OrderStorePort> =
        Arc::new(OrderStoreApi::new(config.order_store.clone()));
    let carrier_validator: Arc<dyn CarrierValidator> =
        Arc::new(CarrierApi::new(config.carrier.clone()));

    // Services
    let order_service = OrderService::new(order_store.clone());
    let carrier_service = CarrierService::new(order_store.clone(), carrier_validator.clone());

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(order_service.clone()))
            .app_data(web::Data::new(carrier_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::order_config)
                    .configure(handlers::carrier_config)
                    .configure(handlers::geo_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
