use crate::geo;
use crate::models::{RegionFeesResponse, RegionResponse};
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/geo/regions",
    tag = "geo",
    responses(
        (status = 200, description = "All delivery regions with their fees")
    )
)]
pub async fn list_regions() -> Result<HttpResponse> {
    let regions: Vec<RegionResponse> = geo::all_regions().iter().map(RegionResponse::from).collect();
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": regions
    })))
}

#[utoipa::path(
    get,
    path = "/geo/regions/{code}/cities",
    tag = "geo",
    params(
        ("code" = String, Path, description = "Region code")
    ),
    responses(
        (status = 200, description = "Cities of the region"),
        (status = 404, description = "Unknown region code")
    )
)]
pub async fn region_cities(path: web::Path<String>) -> Result<HttpResponse> {
    let code = path.into_inner();
    match geo::cities_of_region(&code) {
        Ok(cities) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": cities
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/geo/regions/{code}/fees",
    tag = "geo",
    params(
        ("code" = String, Path, description = "Region code")
    ),
    responses(
        (status = 200, description = "Home and pickup-desk fees of the region"),
        (status = 404, description = "Unknown region code")
    )
)]
pub async fn region_fees(path: web::Path<String>) -> Result<HttpResponse> {
    let code = path.into_inner();
    match geo::fees_for_region(&code) {
        Ok(fees) => {
            let response = RegionFeesResponse {
                home_fee: fees.home,
                desk_fee: fees.desk,
            };
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": response
            })))
        }
        Err(e) => Ok(e.error_response()),
    }
}

pub fn geo_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/geo")
            .route("/regions", web::get().to(list_regions))
            .route("/regions/{code}/cities", web::get().to(region_cities))
            .route("/regions/{code}/fees", web::get().to(region_fees)),
    );
}
