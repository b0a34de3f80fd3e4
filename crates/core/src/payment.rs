//! Crypto payment-intent constants and validation.
//!
//! A payment intent is a client-declared record of an off-platform
//! transfer. A single asset/network pair is supported, and a supplied
//! transaction hash is stored as an unverified claim -- nothing here talks
//! to a chain.

use crate::error::CoreError;

/// The only supported payment asset.
pub const PAYMENT_CURRENCY: &str = "USDT";

/// The only supported payment network.
pub const PAYMENT_NETWORK: &str = "TRC20";

/// Intent recorded before the client has submitted a transaction hash.
pub const STATUS_PENDING: &str = "pending";

/// Intent recorded with a transaction hash awaiting confirmation.
pub const STATUS_CONFIRMING: &str = "confirming";

/// Validate a payment amount. Must be strictly positive and finite.
pub fn validate_amount(amount: f64) -> Result<(), CoreError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CoreError::Validation(format!(
            "Payment amount must be greater than zero, got {amount}"
        )));
    }
    Ok(())
}

/// Initial status for a new intent: `confirming` when a transaction hash is
/// supplied, `pending` otherwise.
pub fn initial_status(tx_hash: Option<&str>) -> &'static str {
    match tx_hash {
        Some(hash) if !hash.trim().is_empty() => STATUS_CONFIRMING,
        _ => STATUS_PENDING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_amounts_accepted() {
        assert!(validate_amount(0.01).is_ok());
        assert!(validate_amount(100.0).is_ok());
    }

    #[test]
    fn zero_and_negative_amounts_rejected() {
        assert!(validate_amount(0.0).is_err());
        assert!(validate_amount(-5.0).is_err());
    }

    #[test]
    fn non_finite_amounts_rejected() {
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn status_follows_tx_hash_presence() {
        assert_eq!(initial_status(None), STATUS_PENDING);
        assert_eq!(initial_status(Some("")), STATUS_PENDING);
        assert_eq!(initial_status(Some("  ")), STATUS_PENDING);
        assert_eq!(initial_status(Some("0xabc123")), STATUS_CONFIRMING);
    }
}
