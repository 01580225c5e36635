use crate::models::OrderStatus;
use crate::utils::phone::display_phone;
use crate::utils::pricing::amount_or_zero;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Delivery mode of an order: to the customer's door or to a carrier desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    Home,
    Pickup,
}

impl DeliveryMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryMode::Home => "home",
            DeliveryMode::Pickup => "pickup",
        }
    }

    pub fn parse(s: &str) -> Option<DeliveryMode> {
        match s {
            "home" => Some(DeliveryMode::Home),
            "pickup" => Some(DeliveryMode::Pickup),
            _ => None,
        }
    }
}

/// Denormalized copy of the product attributes at order time.
///
/// Copied once when the order is created and never resynced, so product
/// edits after the fact do not alter historical orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductSnapshot {
    pub product_id: String,
    pub name: String,
    pub unit_price: i64,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Assigned by the order store on create; empty until then.
    #[serde(default)]
    pub id: String,
    pub store_id: String,
    #[serde(default)]
    pub product: Option<ProductSnapshot>,
    pub customer_name: String,
    pub customer_phone: String,
    /// Region code from the geography table.
    pub region: String,
    /// May be empty; reset whenever the region changes.
    #[serde(default)]
    pub city: String,
    /// true = home delivery, false = carrier pickup desk.
    pub delivery_home: bool,
    pub unit_price: i64,
    pub quantity: i64,
    /// Region fee cached at selection time (DZD).
    pub delivery_fee: i64,
    /// Always unit_price * quantity + delivery_fee.
    pub total: i64,
    pub status: OrderStatus,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub offer: Option<String>,
    #[serde(default)]
    pub reveal_contact: bool,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn delivery_mode(&self) -> DeliveryMode {
        if self.delivery_home {
            DeliveryMode::Home
        } else {
            DeliveryMode::Pickup
        }
    }
}

fn default_home() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub store_id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub city: String,
    #[serde(default = "default_home")]
    pub delivery_home: bool,
    #[serde(default)]
    pub product: Option<ProductSnapshot>,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub unit_price: i64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub quantity: i64,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub offer: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub city: String,
    #[serde(default = "default_home")]
    pub delivery_home: bool,
    #[serde(default)]
    pub product: Option<ProductSnapshot>,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub unit_price: i64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub quantity: i64,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub offer: Option<String>,
    /// None leaves the per-order reveal override unchanged.
    #[serde(default)]
    pub reveal_contact: Option<bool>,
}

/// A status change with an optional coalesced note edit; both land in one
/// persisted update.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StatusChangeRequest {
    pub status: OrderStatus,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NoteUpdateRequest {
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: String,
    pub store_id: String,
    pub product: Option<ProductSnapshot>,
    pub customer_name: String,
    /// Real or fully masked, depending on the contact visibility policy.
    pub customer_phone: String,
    pub region: String,
    pub city: String,
    pub delivery_home: bool,
    pub unit_price: i64,
    pub quantity: i64,
    pub delivery_fee: i64,
    pub total: i64,
    pub status: OrderStatus,
    pub note: String,
    pub offer: Option<String>,
    pub reveal_contact: bool,
    pub created_at: DateTime<Utc>,
    /// Whether the carrier dispatch action is available for this order.
    pub dispatchable: bool,
}

impl OrderResponse {
    pub fn from_order(order: &Order, store_paid: bool, carrier_bound: bool) -> Self {
        Self {
            id: order.id.clone(),
            store_id: order.store_id.clone(),
            product: order.product.clone(),
            customer_name: order.customer_name.clone(),
            customer_phone: display_phone(order, store_paid),
            region: order.region.clone(),
            city: order.city.clone(),
            delivery_home: order.delivery_home,
            unit_price: order.unit_price,
            quantity: order.quantity,
            delivery_fee: order.delivery_fee,
            total: order.total,
            status: order.status,
            note: order.note.clone(),
            offer: order.offer.clone(),
            reveal_contact: order.reveal_contact,
            created_at: order.created_at,
            dispatchable: carrier_bound && order.status == OrderStatus::Ready,
        }
    }
}

/// Distinct product appearing in the order collection, for the filter UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductOption {
    pub product_id: String,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListResponse {
    pub orders: Vec<OrderResponse>,
    /// Distinct products over the full (unfiltered) collection.
    pub products: Vec<ProductOption>,
    /// Distinct region codes over the full (unfiltered) collection.
    pub regions: Vec<String>,
}
