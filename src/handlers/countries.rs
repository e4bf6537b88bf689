//! Country HTTP handlers.
//!
//! - GET /countries/{name} - Look up one country by name
//! - GET /countries - Filtered, sorted, paginated country list

use crate::{
    error::AppError,
    models::{
        country::Country,
        criteria::{CountryQuery, FilterCriteria},
    },
    services::countries,
    state::AppState,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};

/// Get a single country by name.
///
/// # Endpoint
///
/// `GET /countries/{name}`
///
/// # Authentication
///
/// Requires `X-API-Key` header or `apiKey` query parameter.
///
/// # Response
///
/// - **Success (200 OK)**: the first upstream match
/// - **Error (401)**: Invalid API key
/// - **Error (500)**: No match, undecodable name, or upstream failure
///
/// ```json
/// { "error": "country not found" }
/// ```
pub async fn get_country(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Json<Country>, AppError> {
    let Path(name) = name.map_err(|e| AppError::InvalidParameter(e.body_text()))?;
    let country = countries::lookup_country(&state.upstream, &name).await?;
    Ok(Json(country))
}

/// List countries.
///
/// # Endpoint
///
/// `GET /countries`
///
/// # Query Parameters
///
/// | Parameter        | Default     |
/// |------------------|-------------|
/// | `populationFrom` | no bound    |
/// | `populationTo`   | no bound    |
/// | `areaFrom`       | no bound    |
/// | `areaTo`         | no bound    |
/// | `language`       | none        |
/// | `sortBy`         | `name`      |
/// | `ascending`      | `true`      |
/// | `page`           | `1`         |
/// | `pageSize`       | `10`        |
///
/// A repeated parameter takes its first value.
///
/// # Response
///
/// - **Success (200 OK)**: array of countries (may be empty)
/// - **Error (401)**: Invalid API key
/// - **Error (500)**: Invalid `page`/`pageSize`, or upstream failure
pub async fn list_countries(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Country>>, AppError> {
    let Query(pairs) = pairs.map_err(|e| AppError::InvalidParameter(e.body_text()))?;

    // Validate before calling upstream so bad input costs no network round trip
    let criteria = FilterCriteria::try_from(CountryQuery::from_pairs(pairs))?;

    let page = countries::list_countries(&state.upstream, &criteria).await?;
    Ok(Json(page))
}
