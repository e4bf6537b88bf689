//! Filter, sort and page parameters for the country listing.
//!
//! - `CountryQuery`: raw query string as sent by the client
//! - `FilterCriteria`: validated criteria consumed by the filter engine

use crate::error::AppError;

/// Raw query parameters for `GET /countries`.
///
/// Every field is kept as text so that defaults and lenient parsing are
/// decided in one place (`FilterCriteria::try_from`) instead of by the
/// extractor, which would reject the whole request on the first bad value.
#[derive(Debug, Default)]
pub struct CountryQuery {
    pub population_from: Option<String>,
    pub population_to: Option<String>,
    pub area_from: Option<String>,
    pub area_to: Option<String>,
    pub language: Option<String>,
    pub sort_by: Option<String>,
    pub ascending: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl CountryQuery {
    /// Build from decoded `key=value` pairs in query-string order.
    ///
    /// The first occurrence of a repeated key wins; unknown keys (including
    /// `apiKey`) are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "populationFrom" => &mut query.population_from,
                "populationTo" => &mut query.population_to,
                "areaFrom" => &mut query.area_from,
                "areaTo" => &mut query.area_to,
                "language" => &mut query.language,
                "sortBy" => &mut query.sort_by,
                "ascending" => &mut query.ascending,
                "page" => &mut query.page,
                "pageSize" => &mut query.page_size,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// Field the listing is sorted by. Only the common name is supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Name,
}

/// Validated listing criteria.
///
/// Bounds are inclusive and `None` means "no bound".
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub population_from: Option<u64>,
    pub population_to: Option<u64>,
    pub area_from: Option<f64>,
    pub area_to: Option<f64>,
    pub language: Option<String>,
    pub sort_by: SortField,
    pub ascending: bool,
    /// 1-based page number, always >= 1
    pub page: usize,
    /// Always >= 1
    pub page_size: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            population_from: None,
            population_to: None,
            area_from: None,
            area_to: None,
            language: None,
            sort_by: SortField::Name,
            ascending: true,
            page: 1,
            page_size: 10,
        }
    }
}

impl TryFrom<CountryQuery> for FilterCriteria {
    type Error = AppError;

    /// Apply defaults and validate the raw query.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `page` or `pageSize` is not a positive integer.
    /// Bound parameters never fail: unparseable or non-positive values mean
    /// "no bound".
    fn try_from(query: CountryQuery) -> Result<Self, Self::Error> {
        let page = parse_positive(query.page.as_deref(), 1)
            .ok_or_else(|| AppError::InvalidParameter("invalid page number".to_string()))?;
        let page_size = parse_positive(query.page_size.as_deref(), 10)
            .ok_or_else(|| AppError::InvalidParameter("invalid page size".to_string()))?;

        let sort_by = match query.sort_by.as_deref() {
            None | Some("name") => SortField::Name,
            Some(other) => {
                tracing::debug!("Unsupported sortBy {:?}, sorting by name", other);
                SortField::Name
            }
        };

        Ok(Self {
            population_from: population_bound(query.population_from.as_deref()),
            population_to: population_bound(query.population_to.as_deref()),
            area_from: area_bound(query.area_from.as_deref()),
            area_to: area_bound(query.area_to.as_deref()),
            language: query.language.filter(|l| !l.is_empty()),
            sort_by,
            ascending: query.ascending.as_deref().unwrap_or("true") == "true",
            page,
            page_size,
        })
    }
}

/// Parse a page-like parameter, using `default` when absent.
///
/// Returns `None` for anything that is not an integer >= 1.
fn parse_positive(raw: Option<&str>, default: usize) -> Option<usize> {
    match raw {
        None => Some(default),
        Some(s) => s.trim().parse::<i64>().ok().filter(|n| *n > 0)?.try_into().ok(),
    }
}

fn population_bound(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok().filter(|n| *n > 0)
}

fn area_bound(raw: Option<&str>) -> Option<f64> {
    raw?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}
