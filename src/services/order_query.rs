//! In-memory filtering and sorting over an order collection.
//!
//! Filters are conjunctive; sorts are stable so ties keep their original
//! relative order. The distinct-product/-region projections feed the filter
//! dropdowns and are always computed from the full collection, never the
//! filtered subset, so options never shrink as filters are applied.

use crate::models::{Order, OrderFilterSet, OrderSort, ProductOption};

pub fn apply(orders: &[Order], filter: &OrderFilterSet) -> Vec<Order> {
    let mut result: Vec<Order> = orders
        .iter()
        .filter(|o| matches(o, filter))
        .cloned()
        .collect();
    sort_orders(&mut result, filter.sort);
    result
}

fn matches(order: &Order, filter: &OrderFilterSet) -> bool {
    if let Some(status) = filter.status
        && order.status != status
    {
        return false;
    }
    if let Some(region) = &filter.region
        && order.region != *region
    {
        return false;
    }
    if let Some(mode) = filter.mode
        && order.delivery_mode() != mode
    {
        return false;
    }
    if let Some(product_id) = &filter.product {
        match &order.product {
            Some(snapshot) if snapshot.product_id == *product_id => {}
            _ => return false,
        }
    }
    if let Some(fragment) = &filter.customer
        && !order
            .customer_name
            .to_lowercase()
            .contains(&fragment.to_lowercase())
    {
        return false;
    }
    true
}

fn sort_orders(orders: &mut [Order], sort: OrderSort) {
    match sort {
        OrderSort::Newest => orders.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        OrderSort::Oldest => orders.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        OrderSort::PriceHigh => orders.sort_by(|a, b| b.total.cmp(&a.total)),
        OrderSort::PriceLow => orders.sort_by(|a, b| a.total.cmp(&b.total)),
    }
}

/// Distinct product snapshots by id; the first-seen name wins.
pub fn distinct_products(orders: &[Order]) -> Vec<ProductOption> {
    let mut products: Vec<ProductOption> = Vec::new();
    for order in orders {
        if let Some(snapshot) = &order.product
            && !products.iter().any(|p| p.product_id == snapshot.product_id)
        {
            products.push(ProductOption {
                product_id: snapshot.product_id.clone(),
                name: snapshot.name.clone(),
            });
        }
    }
    products
}

/// Distinct region codes, in first-seen order.
pub fn distinct_regions(orders: &[Order]) -> Vec<String> {
    let mut regions: Vec<String> = Vec::new();
    for order in orders {
        if !regions.contains(&order.region) {
            regions.push(order.region.clone());
        }
    }
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeliveryMode, OrderStatus, ProductSnapshot};
    use chrono::{TimeZone, Utc};

    fn order(
        id: &str,
        name: &str,
        status: OrderStatus,
        region: &str,
        home: bool,
        product_id: Option<(&str, &str)>,
        total: i64,
        minute: u32,
    ) -> Order {
        Order {
            id: id.to_string(),
            store_id: "s1".to_string(),
            product: product_id.map(|(pid, pname)| ProductSnapshot {
                product_id: pid.to_string(),
                name: pname.to_string(),
                unit_price: total,
                image: None,
            }),
            customer_name: name.to_string(),
            customer_phone: "0555123456".to_string(),
            region: region.to_string(),
            city: String::new(),
            delivery_home: home,
            unit_price: total,
            quantity: 1,
            delivery_fee: 0,
            total,
            status,
            note: String::new(),
            offer: None,
            reveal_contact: false,
            created_at: Utc.with_ymd_and_hms(2024, 5, 10, 9, minute, 0).unwrap(),
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order("o1", "Amine", OrderStatus::Pending, "16", true, Some(("p1", "Montre")), 2300, 1),
            order("o2", "Sarah", OrderStatus::Confirmed, "31", false, Some(("p2", "Sac")), 1800, 2),
            order("o3", "Karim", OrderStatus::Confirmed, "16", true, Some(("p1", "Montre renommée")), 3100, 3),
            order("o4", "amina", OrderStatus::Ready, "09", false, None, 900, 4),
        ]
    }

    #[test]
    fn test_status_filter_is_exact() {
        let orders = sample();
        let filter = OrderFilterSet {
            status: Some(OrderStatus::Confirmed),
            ..Default::default()
        };
        let result = apply(&orders, &filter);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|o| o.status == OrderStatus::Confirmed));
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let orders = sample();
        let filter = OrderFilterSet {
            status: Some(OrderStatus::Confirmed),
            region: Some("16".to_string()),
            mode: Some(DeliveryMode::Home),
            product: Some("p1".to_string()),
            ..Default::default()
        };
        let result = apply(&orders, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "o3");
    }

    #[test]
    fn test_customer_search_is_case_insensitive_substring() {
        let orders = sample();
        let filter = OrderFilterSet {
            customer: Some("AMI".to_string()),
            ..Default::default()
        };
        let result = apply(&orders, &filter);
        let ids: Vec<_> = result.iter().map(|o| o.id.as_str()).collect();
        // Amine and amina both contain "ami"; newest first
        assert_eq!(ids, vec!["o4", "o1"]);
    }

    #[test]
    fn test_sort_keys() {
        let orders = sample();
        let ids = |sort: OrderSort| {
            let filter = OrderFilterSet {
                sort,
                ..Default::default()
            };
            apply(&orders, &filter)
                .iter()
                .map(|o| o.id.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(OrderSort::Newest), vec!["o4", "o3", "o2", "o1"]);
        assert_eq!(ids(OrderSort::Oldest), vec!["o1", "o2", "o3", "o4"]);
        assert_eq!(ids(OrderSort::PriceHigh), vec!["o3", "o1", "o2", "o4"]);
        assert_eq!(ids(OrderSort::PriceLow), vec!["o4", "o2", "o1", "o3"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut orders = sample();
        for o in &mut orders {
            o.total = 1000;
        }
        let filter = OrderFilterSet {
            sort: OrderSort::PriceLow,
            ..Default::default()
        };
        let ids: Vec<_> = apply(&orders, &filter)
            .iter()
            .map(|o| o.id.clone())
            .collect();
        assert_eq!(ids, vec!["o1", "o2", "o3", "o4"]);
    }

    #[test]
    fn test_projections_come_from_full_collection() {
        let orders = sample();
        // regardless of any active filter, projections are computed on the
        // full collection by the caller
        let products = distinct_products(&orders);
        assert_eq!(products.len(), 2);
        // first-seen name wins for p1
        assert_eq!(products[0].product_id, "p1");
        assert_eq!(products[0].name, "Montre");
        assert_eq!(products[1].product_id, "p2");

        let regions = distinct_regions(&orders);
        assert_eq!(regions, vec!["16", "31", "09"]);
    }
}
