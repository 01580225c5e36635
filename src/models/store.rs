use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Delivery-company credentials bound to a store. At most one per store;
/// created only after the validation endpoint accepted the credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarrierBinding {
    pub name: String,
    pub key: String,
    pub token: String,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Store {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Current subscription tier; paid stores see customer phones unmasked.
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub carrier: Option<CarrierBinding>,
}

impl Store {
    /// A binding with an empty carrier name does not count as configured.
    pub fn has_carrier(&self) -> bool {
        self.carrier
            .as_ref()
            .is_some_and(|c| !c.name.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BindCarrierRequest {
    /// The store as currently known to the caller; the binding is written
    /// onto it and the whole object persisted.
    pub store: Store,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DispatchRequest {
    pub store: Store,
    pub order_id: String,
}
