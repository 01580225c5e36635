use crate::error::{AppError, AppResult};
use crate::models::{DeliveryMode, OrderStatus};
use serde::Deserialize;
use utoipa::ToSchema;

/// Raw query string of the order list endpoint. `all`, empty, or absent
/// values mean "no filter on this dimension".
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct OrderListQuery {
    pub status: Option<String>,
    pub region: Option<String>,
    pub mode: Option<String>,
    pub product: Option<String>,
    /// Case-insensitive substring match on the customer name.
    pub q: Option<String>,
    pub sort: Option<String>,
    /// Current subscription state of the store, supplied by the caller so
    /// phone masking reflects the present tier, never a stored one.
    #[serde(default)]
    pub paid: bool,
    /// Whether the store has a carrier binding with a non-empty name.
    #[serde(default)]
    pub carrier_bound: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderSort {
    #[default]
    Newest,
    Oldest,
    PriceHigh,
    PriceLow,
}

impl OrderSort {
    pub fn parse(s: &str) -> Option<OrderSort> {
        match s {
            "newest" => Some(OrderSort::Newest),
            "oldest" => Some(OrderSort::Oldest),
            "price_high" => Some(OrderSort::PriceHigh),
            "price_low" => Some(OrderSort::PriceLow),
            _ => None,
        }
    }
}

/// Immutable filter/sort value handed to the query engine on each call.
#[derive(Debug, Clone, Default)]
pub struct OrderFilterSet {
    pub status: Option<OrderStatus>,
    pub region: Option<String>,
    pub mode: Option<DeliveryMode>,
    pub product: Option<String>,
    pub customer: Option<String>,
    pub sort: OrderSort,
}

fn active(value: &Option<String>) -> Option<&str> {
    match value.as_deref() {
        None | Some("") | Some("all") => None,
        Some(v) => Some(v),
    }
}

impl OrderFilterSet {
    pub fn from_query(query: &OrderListQuery) -> AppResult<Self> {
        let status = active(&query.status)
            .map(|s| {
                OrderStatus::parse(s)
                    .ok_or_else(|| AppError::ValidationError(format!("Unknown status filter: {s}")))
            })
            .transpose()?;

        let mode = active(&query.mode)
            .map(|s| {
                DeliveryMode::parse(s).ok_or_else(|| {
                    AppError::ValidationError(format!("Unknown delivery mode filter: {s}"))
                })
            })
            .transpose()?;

        let sort = match active(&query.sort) {
            Some(s) => OrderSort::parse(s)
                .ok_or_else(|| AppError::ValidationError(format!("Unknown sort key: {s}")))?,
            None => OrderSort::default(),
        };

        Ok(Self {
            status,
            region: active(&query.region).map(str::to_string),
            mode,
            product: active(&query.product).map(str::to_string),
            customer: active(&query.q).map(str::to_string),
            sort,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_empty_mean_no_filter() {
        let query = OrderListQuery {
            status: Some("all".to_string()),
            region: Some(String::new()),
            mode: None,
            product: Some("all".to_string()),
            q: None,
            sort: None,
            ..Default::default()
        };
        let filter = OrderFilterSet::from_query(&query).unwrap();
        assert!(filter.status.is_none());
        assert!(filter.region.is_none());
        assert!(filter.mode.is_none());
        assert!(filter.product.is_none());
        assert!(filter.customer.is_none());
        assert_eq!(filter.sort, OrderSort::Newest);
    }

    #[test]
    fn test_exact_filters_parse() {
        let query = OrderListQuery {
            status: Some("confirmed".to_string()),
            region: Some("31".to_string()),
            mode: Some("pickup".to_string()),
            product: Some("p-7".to_string()),
            q: Some("ami".to_string()),
            sort: Some("price_low".to_string()),
            ..Default::default()
        };
        let filter = OrderFilterSet::from_query(&query).unwrap();
        assert_eq!(filter.status, Some(OrderStatus::Confirmed));
        assert_eq!(filter.region.as_deref(), Some("31"));
        assert_eq!(filter.mode, Some(DeliveryMode::Pickup));
        assert_eq!(filter.product.as_deref(), Some("p-7"));
        assert_eq!(filter.customer.as_deref(), Some("ami"));
        assert_eq!(filter.sort, OrderSort::PriceLow);
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        let bad_status = OrderListQuery {
            status: Some("shipped".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            OrderFilterSet::from_query(&bad_status),
            Err(AppError::ValidationError(_))
        ));

        let bad_mode = OrderListQuery {
            mode: Some("drone".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            OrderFilterSet::from_query(&bad_mode),
            Err(AppError::ValidationError(_))
        ));

        let bad_sort = OrderListQuery {
            sort: Some("cheapest".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            OrderFilterSet::from_query(&bad_sort),
            Err(AppError::ValidationError(_))
        ));
    }
}
