use crate::error::{AppError, AppResult};
use crate::external::OrderStorePort;
use crate::geo;
use crate::models::*;
use crate::services::order_query;
use crate::utils::phone::{normalize_phone, validate_algerian_phone};
use crate::utils::pricing::compute_total;
use chrono::Utc;
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStorePort>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStorePort>) -> Self {
        Self { store }
    }

    pub async fn list_orders(
        &self,
        store_id: &str,
        query: &OrderListQuery,
    ) -> AppResult<OrderListResponse> {
        let filter = OrderFilterSet::from_query(query)?;
        let all = self.store.list_orders(store_id).await?;

        // projections are built from the full collection so the filter
        // dropdowns never shrink while other filters are active
        let products = order_query::distinct_products(&all);
        let regions = order_query::distinct_regions(&all);

        let orders = order_query::apply(&all, &filter)
            .iter()
            .map(|o| OrderResponse::from_order(o, query.paid, query.carrier_bound))
            .collect();

        Ok(OrderListResponse {
            orders,
            products,
            regions,
        })
    }

    pub async fn create_order(&self, request: CreateOrderRequest) -> AppResult<Order> {
        let customer_name = request.customer_name.trim().to_string();
        let customer_phone = normalize_phone(&request.customer_phone);
        validate_required(
            &customer_name,
            &customer_phone,
            &request.region,
            request.product.as_ref(),
        )?;
        validate_algerian_phone(&customer_phone)?;

        let fees = geo::fees_for_region(&request.region)?;
        let city = validated_city(&request.region, &request.city)?;
        let delivery_fee = fees.for_mode(request.delivery_home);

        let order = Order {
            id: String::new(),
            store_id: request.store_id,
            product: request.product,
            customer_name,
            customer_phone,
            region: request.region,
            city,
            delivery_home: request.delivery_home,
            unit_price: request.unit_price,
            quantity: request.quantity,
            delivery_fee,
            total: compute_total(request.unit_price, request.quantity, delivery_fee),
            status: OrderStatus::Pending,
            note: request.note,
            offer: request.offer,
            reveal_contact: false,
            created_at: Utc::now(),
        };

        let created = self.store.create_order(&order).await?;
        log::info!("Created order {} for store {}", created.id, created.store_id);
        Ok(created)
    }

    /// Full edit of an open order. The merged object is persisted in one
    /// update; fee and total are re-resolved server-side.
    pub async fn update_order(
        &self,
        store_id: &str,
        order_id: &str,
        request: UpdateOrderRequest,
    ) -> AppResult<Order> {
        let mut order = self.fetch_order(store_id, order_id).await?;
        if order.status.is_locked() {
            return Err(AppError::LockedState(
                "an order handed to the carrier only accepts note edits".to_string(),
            ));
        }

        let customer_name = request.customer_name.trim().to_string();
        let customer_phone = normalize_phone(&request.customer_phone);
        validate_required(
            &customer_name,
            &customer_phone,
            &request.region,
            request.product.as_ref(),
        )?;
        validate_algerian_phone(&customer_phone)?;

        let fees = geo::fees_for_region(&request.region)?;
        // the city list is region-scoped: a region change always clears the
        // city, a same-region edit revalidates it
        let city = if request.region != order.region {
            String::new()
        } else {
            validated_city(&request.region, &request.city)?
        };

        order.customer_name = customer_name;
        order.customer_phone = customer_phone;
        order.region = request.region;
        order.city = city;
        order.delivery_home = request.delivery_home;
        order.product = request.product;
        order.unit_price = request.unit_price;
        order.quantity = request.quantity;
        order.delivery_fee = fees.for_mode(request.delivery_home);
        order.total = compute_total(order.unit_price, order.quantity, order.delivery_fee);
        order.note = request.note;
        order.offer = request.offer;
        if let Some(reveal) = request.reveal_contact {
            order.reveal_contact = reveal;
        }

        self.store.update_order(&order).await
    }

    /// Merchant status transition with an optional coalesced note edit;
    /// both are persisted together in a single update.
    pub async fn change_status(
        &self,
        store_id: &str,
        order_id: &str,
        request: StatusChangeRequest,
    ) -> AppResult<Order> {
        let mut order = self.fetch_order(store_id, order_id).await?;
        order.status.merchant_transition(request.status)?;

        order.status = request.status;
        if let Some(note) = request.note {
            order.note = note;
        }

        let updated = self.store.update_order(&order).await?;
        log::info!("Order {} status -> {}", updated.id, updated.status);
        Ok(updated)
    }

    /// Note-only edit; the one mutation an `in_carrier` order still accepts.
    pub async fn update_note(
        &self,
        store_id: &str,
        order_id: &str,
        request: NoteUpdateRequest,
    ) -> AppResult<Order> {
        let mut order = self.fetch_order(store_id, order_id).await?;
        order.note = request.note;
        self.store.update_order(&order).await
    }

    /// Persists the per-order reveal override after the merchant viewed the
    /// customer contact.
    pub async fn mark_contact_viewed(&self, store_id: &str, order_id: &str) -> AppResult<Order> {
        let mut order = self.fetch_order(store_id, order_id).await?;
        if order.status.is_locked() {
            return Err(AppError::LockedState(
                "an order handed to the carrier only accepts note edits".to_string(),
            ));
        }
        order.reveal_contact = true;
        self.store.update_order(&order).await
    }

    pub async fn delete_order(&self, order_id: &str) -> AppResult<()> {
        self.store.delete_order(order_id).await?;
        log::info!("Deleted order {order_id}");
        Ok(())
    }

    async fn fetch_order(&self, store_id: &str, order_id: &str) -> AppResult<Order> {
        self.store
            .list_orders(store_id)
            .await?
            .into_iter()
            .find(|o| o.id == order_id)
            .ok_or_else(|| AppError::NotFound(format!("Unknown order id: {order_id}")))
    }
}

fn validate_required(
    customer_name: &str,
    customer_phone: &str,
    region: &str,
    product: Option<&ProductSnapshot>,
) -> AppResult<()> {
    if customer_name.is_empty() {
        return Err(AppError::ValidationError("Customer name is required".to_string()));
    }
    if customer_phone.is_empty() {
        return Err(AppError::ValidationError("Customer phone is required".to_string()));
    }
    if region.is_empty() {
        return Err(AppError::ValidationError("Delivery region is required".to_string()));
    }
    if product.is_none() {
        return Err(AppError::ValidationError("A product must be selected".to_string()));
    }
    Ok(())
}

fn validated_city(region: &str, city: &str) -> AppResult<String> {
    let city = city.trim();
    if city.is_empty() {
        return Ok(String::new());
    }
    if !geo::city_belongs_to(region, city) {
        return Err(AppError::NotFound(format!(
            "Unknown city {city} in region {region}"
        )));
    }
    Ok(city.to_string())
}
