//! Postgres-backed [`DirectorySource`] implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use gladiator_core::directory::{DirectorySource, Professional};
use gladiator_core::error::CoreError;
use gladiator_core::types::DbId;

use crate::repositories::{PortfolioRepo, ProfileRepo};
use crate::DbPool;

/// Directory data served from the database.
#[derive(Clone)]
pub struct PgDirectory {
    pool: DbPool,
}

impl PgDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DirectorySource for PgDirectory {
    async fn list_professionals(&self) -> Result<Vec<Professional>, CoreError> {
        let profiles = ProfileRepo::list_professionals(&self.pool)
            .await
            .map_err(transport)?;
        Ok(profiles.into_iter().map(Into::into).collect())
    }

    async fn portfolio_counts(&self, ids: &[DbId]) -> Result<HashMap<DbId, i64>, CoreError> {
        PortfolioRepo::counts_for_users(&self.pool, ids)
            .await
            .map_err(transport)
    }
}

fn transport(err: sqlx::Error) -> CoreError {
    CoreError::Transport(err.to_string())
}
