//! Pagination of list endpoints

use serde::Deserialize;
use serde::Serialize;

use crate::database::Page;
use crate::database::Pagination;

use super::Error;
use super::validation::Violations;

const DEFAULT_LIMIT: i64 = 25;
const MAX_LIMIT: i64 = 100;

/// Query parameters shared by all list endpoints
///
/// Filters are exact matches, endpoints ignore the ones that do not apply to them
#[derive(Debug, Deserialize)]
pub struct ListParameters {
    /// Amount of items to skip, at least 0
    #[serde(default)]
    pub offset: i64,

    /// Maximum amount of items, between 1 and 100
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Only items of this trip
    pub trip_id: Option<i64>,

    /// Only items at this destination
    pub destination_id: Option<i64>,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl ListParameters {
    /// Validated window of the requested page
    ///
    /// Filters are validated as well, IDs start at 1
    pub fn pagination(&self) -> Result<Pagination, Error> {
        let mut violations = Violations::new();

        if self.offset < 0 {
            violations.push("offset", "must be greater than or equal to 0");
        }

        if !(1..=MAX_LIMIT).contains(&self.limit) {
            violations.push("limit", format!("must be between 1 and {MAX_LIMIT}"));
        }

        if let Some(trip_id) = self.trip_id {
            violations.id("trip_id", trip_id);
        }

        if let Some(destination_id) = self.destination_id {
            violations.id("destination_id", destination_id);
        }

        violations.finish()?;

        Ok(Pagination {
            offset: self.offset,
            limit: self.limit,
        })
    }
}

/// Pagination metadata of a list response
#[derive(Debug, Serialize)]
pub struct PageMeta {
    /// Total amount of matching items
    pub total: i64,

    pub offset: i64,
    pub limit: i64,
}

/// A single page of items going to the user
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> PageResponse<T> {
    /// Create a response from a page of records, mapping every record to its response
    pub fn from_page<R>(page: Page<R>, pagination: Pagination, to_response: fn(R) -> T) -> Self {
        Self {
            items: page.items.into_iter().map(to_response).collect(),
            meta: PageMeta {
                total: page.total,
                offset: pagination.offset,
                limit: pagination.limit,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameters(offset: i64, limit: i64) -> ListParameters {
        ListParameters {
            offset,
            limit,
            trip_id: None,
            destination_id: None,
        }
    }

    #[test]
    fn test_pagination_bounds() {
        assert_eq!(
            Pagination {
                offset: 0,
                limit: 25
            },
            parameters(0, DEFAULT_LIMIT).pagination().unwrap()
        );
        assert!(parameters(10, 100).pagination().is_ok());
        assert!(parameters(0, 1).pagination().is_ok());

        assert!(parameters(-1, 25).pagination().is_err());
        assert!(parameters(0, 0).pagination().is_err());
        assert!(parameters(0, 101).pagination().is_err());
    }

    #[test]
    fn test_filters_start_at_one() {
        let filtered = |trip_id, destination_id| ListParameters {
            trip_id,
            destination_id,
            ..parameters(0, DEFAULT_LIMIT)
        };

        assert!(filtered(Some(1), Some(1)).pagination().is_ok());
        assert!(filtered(None, None).pagination().is_ok());

        let err = filtered(Some(0), Some(-1)).pagination().unwrap_err();
        let fields = err
            .errors()
            .iter()
            .map(|error| error.field)
            .collect::<Vec<_>>();
        assert_eq!(vec!["trip_id", "destination_id"], fields);
    }
}
