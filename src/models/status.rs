use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Order lifecycle status.
///
/// Every status can be set manually by the merchant except `in_carrier`,
/// which is only reachable through the carrier dispatch gate and locks the
/// order once entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    #[serde(rename = "connection_failed_1")]
    ConnectionFailed1,
    #[serde(rename = "connection_failed_2")]
    ConnectionFailed2,
    #[serde(rename = "connection_failed_3")]
    ConnectionFailed3,
    Confirmed,
    Ready,
    Postponed,
    Cancelled,
    Failed,
    InCarrier,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 10] = [
        OrderStatus::Pending,
        OrderStatus::ConnectionFailed1,
        OrderStatus::ConnectionFailed2,
        OrderStatus::ConnectionFailed3,
        OrderStatus::Confirmed,
        OrderStatus::Ready,
        OrderStatus::Postponed,
        OrderStatus::Cancelled,
        OrderStatus::Failed,
        OrderStatus::InCarrier,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::ConnectionFailed1 => "connection_failed_1",
            OrderStatus::ConnectionFailed2 => "connection_failed_2",
            OrderStatus::ConnectionFailed3 => "connection_failed_3",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Ready => "ready",
            OrderStatus::Postponed => "postponed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Failed => "failed",
            OrderStatus::InCarrier => "in_carrier",
        }
    }

    pub fn parse(s: &str) -> Option<OrderStatus> {
        Self::ALL.iter().find(|v| v.as_str() == s).copied()
    }

    /// An `in_carrier` order accepts no further status changes.
    pub const fn is_locked(self) -> bool {
        matches!(self, OrderStatus::InCarrier)
    }

    /// Checks a merchant-triggered transition from `self` to `next`.
    ///
    /// Any state may move to any other state, except that `in_carrier` can
    /// never be left and can only be entered through the dispatch gate.
    pub fn merchant_transition(self, next: OrderStatus) -> AppResult<()> {
        if self.is_locked() {
            return Err(AppError::LockedState(
                "order was already handed to the carrier".to_string(),
            ));
        }
        if next == OrderStatus::InCarrier {
            return Err(AppError::LockedState(
                "in_carrier is set by carrier dispatch, not by a manual status change".to_string(),
            ));
        }
        Ok(())
    }

    /// The one transition issued by the dispatch gate.
    pub fn dispatch_transition(self) -> AppResult<OrderStatus> {
        match self {
            OrderStatus::Ready => Ok(OrderStatus::InCarrier),
            OrderStatus::InCarrier => Err(AppError::LockedState(
                "order was already handed to the carrier".to_string(),
            )),
            other => Err(AppError::ValidationError(format!(
                "only ready orders can be dispatched (current status: {other})"
            ))),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
