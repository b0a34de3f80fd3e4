//! Handlers for crypto payment intents.
//!
//! An intent is a client-declared record of an off-platform USDT/TRC20
//! transfer. The recipient wallet is copied from the professional's profile
//! server-side, and a supplied transaction hash is stored unverified --
//! there is no on-chain watcher.

use axum::extract::State;
use axum::Json;
use gladiator_core::error::CoreError;
use gladiator_core::payment::{initial_status, validate_amount, PAYMENT_CURRENCY, PAYMENT_NETWORK};
use gladiator_core::roles::USER_TYPE_PROFESSIONAL;
use gladiator_db::models::transaction::{CreateTransaction, Transaction};
use gladiator_db::repositories::{ProfileRepo, TransactionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireClient;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/transactions
///
/// Record a payment intent against a professional's published wallet.
/// Status is `confirming` when a transaction hash is supplied, `pending`
/// otherwise.
pub async fn create(
    RequireClient(user): RequireClient,
    State(state): State<AppState>,
    Json(input): Json<CreateTransaction>,
) -> AppResult<Json<DataResponse<Transaction>>> {
    validate_amount(input.amount)?;

    let professional = ProfileRepo::find_by_id(&state.pool, input.professional_id)
        .await?
        .filter(|p| p.user_type == USER_TYPE_PROFESSIONAL)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Professional",
            id: input.professional_id,
        }))?;

    let wallet = professional
        .wallet_address
        .as_deref()
        .map(str::trim)
        .filter(|w| !w.is_empty());
    let wallet = match wallet {
        Some(wallet) if professional.accepts_crypto => wallet,
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "This professional does not accept crypto payments".into(),
            )))
        }
    };

    let tx_hash = input.tx_hash.as_deref().map(str::trim).filter(|h| !h.is_empty());
    let status = initial_status(tx_hash);

    let transaction = TransactionRepo::create(
        &state.pool,
        user.user_id,
        professional.id,
        input.amount,
        PAYMENT_CURRENCY,
        PAYMENT_NETWORK,
        wallet,
        tx_hash,
        input.description.as_deref(),
        status,
    )
    .await?;

    tracing::info!(
        transaction_id = transaction.id,
        client_id = user.user_id,
        professional_id = professional.id,
        status = %transaction.status,
        "payment intent recorded"
    );
    Ok(Json(DataResponse { data: transaction }))
}

/// GET /api/v1/transactions
///
/// Payment intents the authenticated user participates in, newest first.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Transaction>>>> {
    let transactions = TransactionRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: transactions }))
}
