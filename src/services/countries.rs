//! Country listing and lookup - the gateway's business logic.
//!
//! Listing always runs in a fixed order so identical inputs against the same
//! upstream snapshot give identical output:
//!
//! 1. Filter by population, area and language
//! 2. Sort by common name
//! 3. Slice out the requested page

use crate::{
    error::AppError,
    models::{
        country::Country,
        criteria::{FilterCriteria, SortField},
    },
    services::upstream::UpstreamClient,
};

/// Fetch every country from upstream and return the page described by `criteria`.
///
/// # Errors
///
/// - `UpstreamUnavailable` / `Decode`: the upstream call failed
pub async fn list_countries(
    upstream: &UpstreamClient,
    criteria: &FilterCriteria,
) -> Result<Vec<Country>, AppError> {
    let countries = upstream.fetch_all().await?;
    let total = countries.len();

    let page = apply(countries, criteria);
    tracing::debug!(
        "Listed {} of {} countries (page {}, size {})",
        page.len(),
        total,
        criteria.page,
        criteria.page_size
    );

    Ok(page)
}

/// Look up a single country by name.
///
/// Upstream may return several fuzzy matches; the first one wins.
///
/// # Errors
///
/// - `NotFound`: upstream had no match
/// - `UpstreamUnavailable` / `Decode`: the upstream call failed
pub async fn lookup_country(upstream: &UpstreamClient, name: &str) -> Result<Country, AppError> {
    upstream
        .fetch_by_name(name)
        .await?
        .into_iter()
        .next()
        .ok_or(AppError::NotFound)
}

/// Filter, sort and paginate `countries`.
///
/// A page that starts past the end of the filtered set is empty.
pub fn apply(countries: Vec<Country>, criteria: &FilterCriteria) -> Vec<Country> {
    let mut matching: Vec<Country> = countries
        .into_iter()
        .filter(|country| matches(country, criteria))
        .collect();

    match criteria.sort_by {
        SortField::Name => {
            // `sort_by` is stable, so equal names keep their upstream order
            if criteria.ascending {
                matching.sort_by(|a, b| a.name.common.cmp(&b.name.common));
            } else {
                matching.sort_by(|a, b| b.name.common.cmp(&a.name.common));
            }
        }
    }

    let start = (criteria.page - 1).saturating_mul(criteria.page_size);
    matching
        .into_iter()
        .skip(start)
        .take(criteria.page_size)
        .collect()
}

/// True if `country` satisfies every bound and the language filter.
fn matches(country: &Country, criteria: &FilterCriteria) -> bool {
    if criteria.population_from.is_some_and(|min| country.population < min) {
        return false;
    }
    if criteria.population_to.is_some_and(|max| country.population > max) {
        return false;
    }
    if criteria.area_from.is_some_and(|min| country.area < min) {
        return false;
    }
    if criteria.area_to.is_some_and(|max| country.area > max) {
        return false;
    }

    match &criteria.language {
        Some(language) => country.speaks(language),
        None => true,
    }
}
