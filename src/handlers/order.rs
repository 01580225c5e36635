use crate::models::*;
use crate::services::OrderService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/orders/{store_id}",
    tag = "order",
    params(
        ("store_id" = String, Path, description = "Store id"),
        ("status" = Option<String>, Query, description = "Status filter (`all` or a status value)"),
        ("region" = Option<String>, Query, description = "Region code filter"),
        ("mode" = Option<String>, Query, description = "Delivery mode filter (`all`/`home`/`pickup`)"),
        ("product" = Option<String>, Query, description = "Product id filter"),
        ("q" = Option<String>, Query, description = "Customer name search"),
        ("sort" = Option<String>, Query, description = "`newest`/`oldest`/`price_high`/`price_low`"),
        ("paid" = Option<bool>, Query, description = "Current subscription state of the store"),
        ("carrier_bound" = Option<bool>, Query, description = "Whether the store has a carrier binding")
    ),
    responses(
        (status = 200, description = "Filtered order list with filter-option projections"),
        (status = 400, description = "Unknown filter value")
    )
)]
pub async fn list_orders(
    order_service: web::Data<OrderService>,
    path: web::Path<String>,
    query: web::Query<OrderListQuery>,
) -> Result<HttpResponse> {
    let store_id = path.into_inner();
    match order_service.list_orders(&store_id, &query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/orders",
    tag = "order",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created with status pending"),
        (status = 400, description = "Missing required customer/product fields"),
        (status = 404, description = "Unknown region or city")
    )
)]
pub async fn create_order(
    order_service: web::Data<OrderService>,
    request: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse> {
    match order_service.create_order(request.into_inner()).await {
        Ok(order) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": order
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/orders/{store_id}/{order_id}",
    tag = "order",
    request_body = UpdateOrderRequest,
    params(
        ("store_id" = String, Path, description = "Store id"),
        ("order_id" = String, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Order updated, fee and total recomputed"),
        (status = 404, description = "Unknown order, region or city"),
        (status = 409, description = "Order already handed to the carrier")
    )
)]
pub async fn update_order(
    order_service: web::Data<OrderService>,
    path: web::Path<(String, String)>,
    request: web::Json<UpdateOrderRequest>,
) -> Result<HttpResponse> {
    let (store_id, order_id) = path.into_inner();
    match order_service
        .update_order(&store_id, &order_id, request.into_inner())
        .await
    {
        Ok(order) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": order
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/orders/{store_id}/{order_id}/status",
    tag = "order",
    request_body = StatusChangeRequest,
    params(
        ("store_id" = String, Path, description = "Store id"),
        ("order_id" = String, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Status (and optional note) persisted in one update"),
        (status = 404, description = "Unknown order id"),
        (status = 409, description = "Transition rejected by the state machine")
    )
)]
pub async fn change_status(
    order_service: web::Data<OrderService>,
    path: web::Path<(String, String)>,
    request: web::Json<StatusChangeRequest>,
) -> Result<HttpResponse> {
    let (store_id, order_id) = path.into_inner();
    match order_service
        .change_status(&store_id, &order_id, request.into_inner())
        .await
    {
        Ok(order) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": order
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/orders/{store_id}/{order_id}/note",
    tag = "order",
    request_body = NoteUpdateRequest,
    params(
        ("store_id" = String, Path, description = "Store id"),
        ("order_id" = String, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Note updated"),
        (status = 404, description = "Unknown order id")
    )
)]
pub async fn update_note(
    order_service: web::Data<OrderService>,
    path: web::Path<(String, String)>,
    request: web::Json<NoteUpdateRequest>,
) -> Result<HttpResponse> {
    let (store_id, order_id) = path.into_inner();
    match order_service
        .update_note(&store_id, &order_id, request.into_inner())
        .await
    {
        Ok(order) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": order
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/orders/{store_id}/{order_id}/reveal",
    tag = "order",
    params(
        ("store_id" = String, Path, description = "Store id"),
        ("order_id" = String, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Per-order contact reveal override persisted"),
        (status = 404, description = "Unknown order id"),
        (status = 409, description = "Order already handed to the carrier")
    )
)]
pub async fn mark_contact_viewed(
    order_service: web::Data<OrderService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (store_id, order_id) = path.into_inner();
    match order_service.mark_contact_viewed(&store_id, &order_id).await {
        Ok(order) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": order
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/orders/{order_id}",
    tag = "order",
    params(
        ("order_id" = String, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 404, description = "Unknown order id")
    )
)]
pub async fn delete_order(
    order_service: web::Data<OrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let order_id = path.into_inner();
    match order_service.delete_order(&order_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": { "deleted": order_id }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn order_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::post().to(create_order))
            // GET takes a store id, DELETE an order id; both are one path
            // segment so they share a resource
            .service(
                web::resource("/{id}")
                    .route(web::get().to(list_orders))
                    .route(web::delete().to(delete_order)),
            )
            .route("/{store_id}/{order_id}", web::put().to(update_order))
            .route("/{store_id}/{order_id}/status", web::put().to(change_status))
            .route("/{store_id}/{order_id}/note", web::put().to(update_note))
            .route(
                "/{store_id}/{order_id}/reveal",
                web::put().to(mark_contact_viewed),
            ),
    );
}
