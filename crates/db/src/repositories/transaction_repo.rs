//! Repository for the `transactions` table (payment intents).

use gladiator_core::types::DbId;
use sqlx::PgPool;

use crate::models::transaction::Transaction;

/// Column list for `transactions` queries.
const COLUMNS: &str = "\
    id, client_id, professional_id, amount, currency, network, \
    recipient_wallet, tx_hash, description, status, created_at";

/// Provides operations for payment intents. Intents are append-only in
/// scope; there is no status transition path.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Record a payment intent.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        professional_id: DbId,
        amount: f64,
        currency: &str,
        network: &str,
        recipient_wallet: &str,
        tx_hash: Option<&str>,
        description: Option<&str>,
        status: &str,
    ) -> Result<Transaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO transactions \
                (client_id, professional_id, amount, currency, network, \
                 recipient_wallet, tx_hash, description, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(client_id)
            .bind(professional_id)
            .bind(amount)
            .bind(currency)
            .bind(network)
            .bind(recipient_wallet)
            .bind(tx_hash)
            .bind(description)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// All intents a user participates in (as paying client or receiving
    /// professional), newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM transactions \
             WHERE client_id = $1 OR professional_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
