use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::order::list_orders,
        handlers::order::create_order,
        handlers::order::update_order,
        handlers::order::change_status,
        handlers::order::update_note,
        handlers::order::mark_contact_viewed,
        handlers::order::delete_order,
        handlers::carrier::bind_carrier,
        handlers::carrier::dispatch_order,
        handlers::geo::list_regions,
        handlers::geo::region_cities,
        handlers::geo::region_fees,
    ),
    components(
        schemas(
            Order,
            OrderResponse,
            OrderListResponse,
            OrderListQuery,
            OrderStatus,
            DeliveryMode,
            ProductSnapshot,
            ProductOption,
            CreateOrderRequest,
            UpdateOrderRequest,
            StatusChangeRequest,
            NoteUpdateRequest,
            Store,
            CarrierBinding,
            BindCarrierRequest,
            DispatchRequest,
            RegionResponse,
            RegionFeesResponse,
        )
    ),
    tags(
        (name = "order", description = "Order lifecycle"),
        (name = "carrier", description = "Carrier binding and dispatch"),
        (name = "geo", description = "Delivery regions, cities and fees")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
