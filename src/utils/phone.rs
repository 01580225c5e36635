use crate::error::{AppError, AppResult};
use crate::models::Order;
use regex::Regex;

/// Validates the Algerian mobile format (0 followed by 5/6/7 and 8 digits).
pub fn validate_algerian_phone(phone: &str) -> AppResult<()> {
    let phone_regex = Regex::new(r"^0[5-7]\d{8}$").unwrap();

    if !phone_regex.is_match(phone) {
        return Err(AppError::ValidationError(
            "Invalid phone number, expected an Algerian mobile number (0Xxxxxxxxx)".to_string(),
        ));
    }

    Ok(())
}

/// Strips separators and the international prefix down to the local form.
pub fn normalize_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 12 && digits.starts_with("213") {
        format!("0{}", &digits[3..])
    } else if digits.len() == 9 && !digits.starts_with('0') {
        format!("0{digits}")
    } else {
        digits
    }
}

/// Full-length mask: every character replaced, never a partial number.
pub fn mask_phone(phone: &str) -> String {
    phone.chars().map(|_| '*').collect()
}

/// Contact visibility policy, decided at render time and never persisted.
///
/// The per-order reveal override wins, then the paid tier; everyone else
/// sees the mask.
pub fn display_phone(order: &Order, store_is_paid: bool) -> String {
    if order.reveal_contact || store_is_paid {
        order.customer_phone.clone()
    } else {
        mask_phone(&order.customer_phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderStatus;
    use chrono::Utc;

    fn order_with_phone(phone: &str, reveal_contact: bool) -> Order {
        Order {
            id: "o1".to_string(),
            store_id: "s1".to_string(),
            product: None,
            customer_name: "Karim".to_string(),
            customer_phone: phone.to_string(),
            region: "16".to_string(),
            city: String::new(),
            delivery_home: true,
            unit_price: 1000,
            quantity: 1,
            delivery_fee: 300,
            total: 1300,
            status: OrderStatus::Pending,
            note: String::new(),
            offer: None,
            reveal_contact,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_algerian_phone() {
        assert!(validate_algerian_phone("0555123456").is_ok());
        assert!(validate_algerian_phone("0655123456").is_ok());
        assert!(validate_algerian_phone("0755123456").is_ok());
        assert!(validate_algerian_phone("0455123456").is_err());
        assert!(validate_algerian_phone("055512345").is_err());
        assert!(validate_algerian_phone("05551234567").is_err());
        assert!(validate_algerian_phone("+213555123456").is_err());
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("0555123456"), "0555123456");
        assert_eq!(normalize_phone("+213 555 12 34 56"), "0555123456");
        assert_eq!(normalize_phone("05 55 12 34 56"), "0555123456");
        assert_eq!(normalize_phone("555123456"), "0555123456");
    }

    #[test]
    fn test_mask_is_full_length() {
        assert_eq!(mask_phone("0555123456"), "**********");
        assert_eq!(mask_phone(""), "");
        assert!(!mask_phone("0555123456").contains(|c: char| c.is_ascii_digit()));
    }

    #[test]
    fn test_display_phone_priority() {
        // reveal override wins regardless of tier
        let revealed = order_with_phone("0555123456", true);
        assert_eq!(display_phone(&revealed, false), "0555123456");
        assert_eq!(display_phone(&revealed, true), "0555123456");

        // paid tier removes the mask
        let hidden = order_with_phone("0555123456", false);
        assert_eq!(display_phone(&hidden, true), "0555123456");

        // otherwise fully masked
        assert_eq!(display_phone(&hidden, false), "**********");
    }
}
