//! Portfolio item entity models and DTOs.

use gladiator_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `portfolio_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortfolioItem {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a portfolio item.
#[derive(Debug, Deserialize)]
pub struct CreatePortfolioItem {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
