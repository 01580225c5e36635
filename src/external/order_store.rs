use crate::config::OrderStoreConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Order, OrderStatus, Store};
use async_trait::async_trait;
use reqwest::Client;

/// Port to the order/store persistence collaborator.
///
/// Updates always carry the full merged object, never a partial patch, so
/// two near-simultaneous edits cannot clobber each other's fields.
#[async_trait]
pub trait OrderStorePort: Send + Sync {
    async fn list_orders(&self, store_id: &str) -> AppResult<Vec<Order>>;
    async fn create_order(&self, order: &Order) -> AppResult<Order>;
    async fn update_order(&self, order: &Order) -> AppResult<Order>;
    /// Conditional update keyed on the current status; closes the
    /// read-then-write race between two dispatch attempts.
    async fn update_order_if(&self, order: &Order, expected: OrderStatus) -> AppResult<Order>;
    async fn delete_order(&self, order_id: &str) -> AppResult<()>;
    async fn update_store(&self, store: &Store) -> AppResult<Store>;
}

pub struct OrderStoreApi {
    client: Client,
    config: OrderStoreConfig,
}

impl OrderStoreApi {
    pub fn new(config: OrderStoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn check_status(status: reqwest::StatusCode, what: &str) -> AppResult<()> {
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Order store: {what} not found")));
        }
        if !status.is_success() {
            return Err(AppError::InternalError(format!(
                "Order store returned HTTP {} for {what}",
                status.as_u16()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderStorePort for OrderStoreApi {
    async fn list_orders(&self, store_id: &str) -> AppResult<Vec<Order>> {
        let url = format!("{}/orders/{}", self.config.base_url, store_id);
        let response = self.client.get(&url).send().await?;
        Self::check_status(response.status(), "order list")?;
        Ok(response.json().await?)
    }

    async fn create_order(&self, order: &Order) -> AppResult<Order> {
        let url = format!("{}/orders", self.config.base_url);
        let response = self.client.post(&url).json(order).send().await?;
        Self::check_status(response.status(), "order create")?;
        Ok(response.json().await?)
    }

    async fn update_order(&self, order: &Order) -> AppResult<Order> {
        let url = format!("{}/orders/{}", self.config.base_url, order.id);
        let response = self.client.put(&url).json(order).send().await?;
        Self::check_status(response.status(), &format!("order {}", order.id))?;
        Ok(response.json().await?)
    }

    async fn update_order_if(&self, order: &Order, expected: OrderStatus) -> AppResult<Order> {
        // The collaborator offers no conditional write, so re-read and
        // compare immediately before the PUT.
        let current = self
            .list_orders(&order.store_id)
            .await?
            .into_iter()
            .find(|o| o.id == order.id)
            .ok_or_else(|| AppError::NotFound(format!("Unknown order id: {}", order.id)))?;

        if current.status != expected {
            return Err(AppError::LockedState(format!(
                "order status is {} (expected {expected})",
                current.status
            )));
        }

        self.update_order(order).await
    }

    async fn delete_order(&self, order_id: &str) -> AppResult<()> {
        let url = format!("{}/orders/{}", self.config.base_url, order_id);
        let response = self.client.delete(&url).send().await?;
        Self::check_status(response.status(), &format!("order {order_id}"))?;
        Ok(())
    }

    async fn update_store(&self, store: &Store) -> AppResult<Store> {
        let url = format!("{}/store/{}", self.config.base_url, store.id);
        let response = self.client.put(&url).json(store).send().await?;
        Self::check_status(response.status(), &format!("store {}", store.id))?;
        Ok(response.json().await?)
    }
}
