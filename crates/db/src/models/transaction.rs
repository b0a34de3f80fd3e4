//! Payment intent entity models and DTOs.

use gladiator_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub client_id: DbId,
    pub professional_id: DbId,
    pub amount: f64,
    pub currency: String,
    pub network: String,
    pub recipient_wallet: String,
    pub tx_hash: Option<String>,
    pub description: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for recording a payment intent. The recipient wallet is resolved
/// server-side from the professional's profile, never taken from the
/// request.
#[derive(Debug, Deserialize)]
pub struct CreateTransaction {
    pub professional_id: DbId,
    pub amount: f64,
    pub tx_hash: Option<String>,
    pub description: Option<String>,
}
