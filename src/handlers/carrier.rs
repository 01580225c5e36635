use crate::models::*;
use crate::services::CarrierService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/carrier/bind",
    tag = "carrier",
    request_body = BindCarrierRequest,
    responses(
        (status = 200, description = "Credentials accepted, binding persisted on the store"),
        (status = 400, description = "Missing fields or credentials rejected"),
        (status = 502, description = "Validation endpoint unreachable (retryable)")
    )
)]
pub async fn bind_carrier(
    carrier_service: web::Data<CarrierService>,
    request: web::Json<BindCarrierRequest>,
) -> Result<HttpResponse> {
    match carrier_service.bind_carrier(request.into_inner()).await {
        Ok(store) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": store
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/carrier/dispatch",
    tag = "carrier",
    request_body = DispatchRequest,
    responses(
        (status = 200, description = "Order handed to the carrier (status in_carrier)"),
        (status = 400, description = "Order not dispatchable"),
        (status = 404, description = "Unknown order id"),
        (status = 409, description = "Order already handed to the carrier")
    )
)]
pub async fn dispatch_order(
    carrier_service: web::Data<CarrierService>,
    request: web::Json<DispatchRequest>,
) -> Result<HttpResponse> {
    match carrier_service.dispatch_order(request.into_inner()).await {
        Ok(order) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": order
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn carrier_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/carrier")
            .route("/bind", web::post().to(bind_carrier))
            .route("/dispatch", web::post().to(dispatch_order)),
    );
}
