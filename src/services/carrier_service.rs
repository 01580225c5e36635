use crate::error::{AppError, AppResult};
use crate::external::{CarrierValidator, OrderStorePort};
use crate::models::{BindCarrierRequest, CarrierBinding, DispatchRequest, Order, Store};
use std::sync::Arc;

/// Dispatch gate eligibility: the action is only offered when the store has
/// a usable carrier binding and the order sits exactly in `ready`.
pub fn can_dispatch(order: &Order, store: &Store) -> bool {
    store.has_carrier() && order.status == crate::models::OrderStatus::Ready
}

#[derive(Clone)]
pub struct CarrierService {
    order_store: Arc<dyn OrderStorePort>,
    validator: Arc<dyn CarrierValidator>,
}

impl CarrierService {
    pub fn new(
        order_store: Arc<dyn OrderStorePort>,
        validator: Arc<dyn CarrierValidator>,
    ) -> Self {
        Self {
            order_store,
            validator,
        }
    }

    /// Bind phase: validate the credentials against the carrier's endpoint,
    /// then persist the binding onto the store. Nothing is persisted on a
    /// rejected or failed validation, and re-running it is safe.
    pub async fn bind_carrier(&self, request: BindCarrierRequest) -> AppResult<Store> {
        let name = request.name.trim();
        let key = request.key.trim();
        let token = request.token.trim();
        if name.is_empty() || key.is_empty() || token.is_empty() {
            return Err(AppError::ValidationError(
                "Carrier name, key and token are required".to_string(),
            ));
        }

        let good = self.validator.validate(name, key, token).await?;
        if !good {
            return Err(AppError::InvalidCredentials(format!(
                "{name} rejected the supplied credentials"
            )));
        }

        let mut store = request.store;
        store.carrier = Some(CarrierBinding {
            name: name.to_string(),
            key: key.to_string(),
            token: token.to_string(),
            logo: request.logo,
        });

        let updated = self.order_store.update_store(&store).await?;
        log::info!("Bound carrier {name} to store {}", updated.id);
        Ok(updated)
    }

    /// Send phase: re-checks eligibility against the current status and
    /// writes `in_carrier` through a conditional update, so two concurrent
    /// dispatch attempts cannot both succeed.
    pub async fn dispatch_order(&self, request: DispatchRequest) -> AppResult<Order> {
        let store = &request.store;
        if !store.has_carrier() {
            return Err(AppError::ValidationError(
                "No carrier is configured for this store".to_string(),
            ));
        }

        let mut order = self
            .order_store
            .list_orders(&store.id)
            .await?
            .into_iter()
            .find(|o| o.id == request.order_id)
            .ok_or_else(|| AppError::NotFound(format!("Unknown order id: {}", request.order_id)))?;

        let expected = order.status;
        order.status = order.status.dispatch_transition()?;

        let updated = self.order_store.update_order_if(&order, expected).await?;
        log::info!(
            "Order {} handed to carrier {}",
            updated.id,
            store.carrier.as_ref().map(|c| c.name.as_str()).unwrap_or("")
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::order_store::test_support::InMemoryOrderStore;
    use crate::models::{OrderStatus, ProductSnapshot};
    use async_trait::async_trait;
    use chrono::Utc;

    enum Verdict {
        Good,
        Bad,
        Unreachable,
    }

    struct StubValidator {
        verdict: Verdict,
    }

    #[async_trait]
    impl CarrierValidator for StubValidator {
        async fn validate(&self, _name: &str, _key: &str, _token: &str) -> AppResult<bool> {
            match self.verdict {
                Verdict::Good => Ok(true),
                Verdict::Bad => Ok(false),
                Verdict::Unreachable => {
                    // an unparseable URL yields a reqwest error without any
                    // network traffic
                    let err = reqwest::Client::new()
                        .get("http://")
                        .send()
                        .await
                        .unwrap_err();
                    Err(AppError::TransportError(err))
                }
            }
        }
    }

    fn ready_order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            store_id: "s1".to_string(),
            product: Some(ProductSnapshot {
                product_id: "p1".to_string(),
                name: "Montre".to_string(),
                unit_price: 1000,
                image: None,
            }),
            customer_name: "Karim".to_string(),
            customer_phone: "0555123456".to_string(),
            region: "16".to_string(),
            city: String::new(),
            delivery_home: true,
            unit_price: 1000,
            quantity: 2,
            delivery_fee: 300,
            total: 2300,
            status: OrderStatus::Ready,
            note: String::new(),
            offer: None,
            reveal_contact: false,
            created_at: Utc::now(),
        }
    }

    fn bound_store() -> Store {
        Store {
            id: "s1".to_string(),
            name: "Boutique".to_string(),
            paid: false,
            carrier: Some(CarrierBinding {
                name: "FastShip".to_string(),
                key: "k".to_string(),
                token: "t".to_string(),
                logo: None,
            }),
        }
    }

    fn unbound_store() -> Store {
        Store {
            id: "s1".to_string(),
            name: "Boutique".to_string(),
            paid: false,
            carrier: None,
        }
    }

    fn service_with(
        orders: Vec<Order>,
        verdict: Verdict,
    ) -> (Arc<InMemoryOrderStore>, CarrierService) {
        let store = Arc::new(InMemoryOrderStore::with_orders(orders));
        let service = CarrierService::new(store.clone(), Arc::new(StubValidator { verdict }));
        (store, service)
    }

    fn bind_request() -> BindCarrierRequest {
        BindCarrierRequest {
            store: unbound_store(),
            name: "FastShip".to_string(),
            key: "k-123".to_string(),
            token: "t-456".to_string(),
            logo: None,
        }
    }

    #[test]
    fn test_eligibility_predicate() {
        let store = bound_store();
        let mut order = ready_order("o1");
        assert!(can_dispatch(&order, &store));

        order.status = OrderStatus::Confirmed;
        assert!(!can_dispatch(&order, &store));

        order.status = OrderStatus::InCarrier;
        assert!(!can_dispatch(&order, &store));

        order.status = OrderStatus::Ready;
        assert!(!can_dispatch(&order, &unbound_store()));
    }

    #[tokio::test]
    async fn test_bind_persists_on_good_verdict() {
        let (store, service) = service_with(vec![], Verdict::Good);
        let updated = service.bind_carrier(bind_request()).await.unwrap();

        let binding = updated.carrier.unwrap();
        assert_eq!(binding.name, "FastShip");
        assert_eq!(binding.key, "k-123");
        assert_eq!(store.store_write_count(), 1);
    }

    #[tokio::test]
    async fn test_bind_rejected_credentials_persist_nothing() {
        let (store, service) = service_with(vec![], Verdict::Bad);
        let result = service.bind_carrier(bind_request()).await;

        assert!(matches!(result, Err(AppError::InvalidCredentials(_))));
        assert_eq!(store.store_write_count(), 0);
    }

    #[tokio::test]
    async fn test_bind_transport_failure_is_retryable_and_persists_nothing() {
        let (store, service) = service_with(vec![], Verdict::Unreachable);
        let result = service.bind_carrier(bind_request()).await;

        assert!(matches!(result, Err(AppError::TransportError(_))));
        assert_eq!(store.store_write_count(), 0);

        // an identical retry reaches the validator again with no leftover state
        let retry = service.bind_carrier(bind_request()).await;
        assert!(matches!(retry, Err(AppError::TransportError(_))));
    }

    #[tokio::test]
    async fn test_bind_requires_all_credential_fields() {
        let (store, service) = service_with(vec![], Verdict::Good);
        let mut request = bind_request();
        request.token = "   ".to_string();

        assert!(matches!(
            service.bind_carrier(request).await,
            Err(AppError::ValidationError(_))
        ));
        assert_eq!(store.store_write_count(), 0);
    }

    #[tokio::test]
    async fn test_dispatch_moves_ready_order_to_carrier() {
        let (store, service) = service_with(vec![ready_order("o1")], Verdict::Good);
        let request = DispatchRequest {
            store: bound_store(),
            order_id: "o1".to_string(),
        };

        let updated = service.dispatch_order(request.clone()).await.unwrap();
        assert_eq!(updated.status, OrderStatus::InCarrier);
        assert_eq!(store.order("o1").unwrap().status, OrderStatus::InCarrier);

        // a second attempt on the same order is rejected, status unchanged
        let second = service.dispatch_order(request).await;
        assert!(matches!(second, Err(AppError::LockedState(_))));
        assert_eq!(store.order("o1").unwrap().status, OrderStatus::InCarrier);
    }

    #[tokio::test]
    async fn test_dispatch_requires_binding_and_ready_status() {
        let (_, service) = service_with(vec![ready_order("o1")], Verdict::Good);
        let result = service
            .dispatch_order(DispatchRequest {
                store: unbound_store(),
                order_id: "o1".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));

        let mut pending = ready_order("o2");
        pending.status = OrderStatus::Pending;
        let (store, service) = service_with(vec![pending], Verdict::Good);
        let result = service
            .dispatch_order(DispatchRequest {
                store: bound_store(),
                order_id: "o2".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(store.order("o2").unwrap().status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_conditional_update_closes_dispatch_race() {
        let (store, _) = service_with(vec![ready_order("o1")], Verdict::Good);

        // another session wins the race after our status read
        let mut stale = store.order("o1").unwrap();
        {
            let mut orders = store.orders.lock().unwrap();
            orders[0].status = OrderStatus::InCarrier;
        }
        stale.status = OrderStatus::InCarrier;

        let result = store.update_order_if(&stale, OrderStatus::Ready).await;
        assert!(matches!(result, Err(AppError::LockedState(_))));
    }
}
