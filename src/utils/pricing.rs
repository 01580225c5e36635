use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Order total: unit price times quantity plus the cached delivery fee.
pub fn compute_total(unit_price: i64, quantity: i64, delivery_fee: i64) -> i64 {
    unit_price
        .saturating_mul(quantity)
        .saturating_add(delivery_fee)
}

/// Serde helper for lenient numeric fields: absent, null, or malformed
/// values become 0 instead of rejecting the payload, so a half-filled form
/// still produces a sane total.
pub fn amount_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_amount(&value))
}

pub fn coerce_amount(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}
