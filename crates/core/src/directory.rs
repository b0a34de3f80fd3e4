//! Directory filter/sort engine.
//!
//! Combines free-text search, category filter, numeric range filters, a
//! portfolio-presence filter, and a sort order into a single deterministic
//! result list. The filtering and sorting steps are pure functions over a
//! snapshot; only the portfolio-presence step needs the backing store
//! (portfolio counts are not embedded in the professional record), which is
//! reached through the [`DirectorySource`] seam so tests can run against an
//! in-memory fake.
//!
//! Criteria are applied in a fixed order: category, free-text query, price
//! range, minimum experience, portfolio presence, sort. Ties are broken by
//! input order, which the data layer yields newest-first.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::categories::CATEGORY_ALL;
use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// A professional profile as seen by the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professional {
    pub id: DbId,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub category: Option<String>,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub experience_years: Option<i32>,
    pub hourly_rate: Option<f64>,
    pub location: Option<String>,
    pub accepts_crypto: bool,
    pub created_at: Timestamp,
}

/// Result ordering for the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Preserve the data layer's newest-first order.
    #[default]
    Newest,
    /// Ascending by hourly rate; professionals with no rate sort last.
    PriceLow,
    /// Descending by hourly rate; professionals with no rate sort last.
    PriceHigh,
    /// Descending by years of experience; unknown experience counts as 0.
    Experience,
}

/// Search criteria for the professional directory.
///
/// Every field is independently optional. `min_price`/`max_price`/
/// `min_experience` distinguish "no filter" (`None`) from "filter at zero"
/// (`Some(0)`) -- a zero bound is a set bound.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCriteria {
    /// Exact category match; `None` or the `"all"` sentinel bypasses.
    pub category: Option<String>,
    /// Case-insensitive substring over name, bio, and skill tags.
    /// Empty or whitespace-only bypasses.
    pub query: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_experience: Option<i32>,
    /// When `true`, exclude professionals with zero portfolio items.
    #[serde(default)]
    pub has_portfolio: bool,
    #[serde(default)]
    pub sort_by: SortBy,
}

/// Async access to the directory's backing data.
///
/// Production implements this over the database; unit tests use an
/// in-memory fake so the whole pipeline runs without a network dependency.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Snapshot of all professionals, newest first.
    async fn list_professionals(&self) -> Result<Vec<Professional>, CoreError>;

    /// Portfolio item counts for the given professionals. Ids with no
    /// portfolio items may be absent from the map.
    async fn portfolio_counts(&self, ids: &[DbId]) -> Result<HashMap<DbId, i64>, CoreError>;
}

/// Apply the synchronous criteria (category, query, price, experience) in
/// order. Pure; the result is always a subset of the input in input order.
pub fn filter_professionals(
    professionals: Vec<Professional>,
    criteria: &SearchCriteria,
) -> Vec<Professional> {
    let mut filtered = professionals;

    // 1. Category: exact match, "all" bypasses.
    if let Some(category) = &criteria.category {
        if category != CATEGORY_ALL {
            filtered.retain(|p| p.category.as_deref() == Some(category.as_str()));
        }
    }

    // 2. Free-text query: OR over name, bio, and skills, case-folded.
    if let Some(query) = &criteria.query {
        let query = query.trim().to_lowercase();
        if !query.is_empty() {
            filtered.retain(|p| matches_query(p, &query));
        }
    }

    // 3. Price range: an unknown rate cannot satisfy a numeric bound, so it
    // is excluded whenever either bound is set (including a bound of 0).
    if criteria.min_price.is_some() || criteria.max_price.is_some() {
        filtered.retain(|p| {
            let Some(rate) = p.hourly_rate else {
                return false;
            };
            if let Some(min) = criteria.min_price {
                if rate < min {
                    return false;
                }
            }
            if let Some(max) = criteria.max_price {
                if rate > max {
                    return false;
                }
            }
            true
        });
    }

    // 4. Minimum experience: unknown excluded when the bound is set.
    if let Some(min_experience) = criteria.min_experience {
        filtered.retain(|p| match p.experience_years {
            Some(years) => years >= min_experience,
            None => false,
        });
    }

    filtered
}

fn matches_query(p: &Professional, query: &str) -> bool {
    let name_hit = p
        .full_name
        .as_deref()
        .is_some_and(|n| n.to_lowercase().contains(query));
    let bio_hit = p
        .bio
        .as_deref()
        .is_some_and(|b| b.to_lowercase().contains(query));
    let skill_hit = p.skills.iter().any(|s| s.to_lowercase().contains(query));
    name_hit || bio_hit || skill_hit
}

/// Apply the sort order in place. Sorts are stable, so ties keep the input
/// (newest-first) order; `Newest` is a no-op.
pub fn sort_professionals(professionals: &mut [Professional], sort_by: SortBy) {
    match sort_by {
        SortBy::Newest => {}
        SortBy::PriceLow => professionals.sort_by(|a, b| {
            let a = a.hourly_rate.unwrap_or(f64::INFINITY);
            let b = b.hourly_rate.unwrap_or(f64::INFINITY);
            a.total_cmp(&b)
        }),
        SortBy::PriceHigh => professionals.sort_by(|a, b| {
            let a = a.hourly_rate.unwrap_or(0.0);
            let b = b.hourly_rate.unwrap_or(0.0);
            b.total_cmp(&a)
        }),
        SortBy::Experience => professionals.sort_by(|a, b| {
            let a = a.experience_years.unwrap_or(0);
            let b = b.experience_years.unwrap_or(0);
            b.cmp(&a)
        }),
    }
}

/// Number of non-default criteria, for the UI filter badge.
///
/// The price range counts once no matter how many of its bounds are set.
pub fn active_filter_count(criteria: &SearchCriteria) -> usize {
    let mut count = 0;
    if criteria.min_price.is_some() || criteria.max_price.is_some() {
        count += 1;
    }
    if criteria.min_experience.is_some() {
        count += 1;
    }
    if criteria.has_portfolio {
        count += 1;
    }
    if criteria.sort_by != SortBy::Newest {
        count += 1;
    }
    count
}

/// Run the full directory pipeline: fetch the snapshot, apply the pure
/// filters, resolve portfolio presence through the source when requested,
/// then sort.
///
/// Holds no shared mutable state; overlapping calls cannot corrupt each
/// other. Which result a caller ultimately renders is the caller's concern.
pub async fn search_directory<S: DirectorySource + ?Sized>(
    source: &S,
    criteria: &SearchCriteria,
) -> Result<Vec<Professional>, CoreError> {
    let all = source.list_professionals().await?;
    let mut result = filter_professionals(all, criteria);

    // 5. Portfolio presence needs a join against the portfolio table.
    if criteria.has_portfolio && !result.is_empty() {
        let ids: Vec<DbId> = result.iter().map(|p| p.id).collect();
        let counts = source.portfolio_counts(&ids).await?;
        result.retain(|p| counts.get(&p.id).copied().unwrap_or(0) > 0);
    }

    // 6. Sort.
    sort_professionals(&mut result, criteria.sort_by);
    Ok(result)
}
