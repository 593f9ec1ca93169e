//! Stats Query Handlers

use crate::application::error::ApplicationError;
use crate::application::queries::StatsQuery;
use crate::domain::{NumberList, Summary};

// ============================================================================
// Response DTOs
// ============================================================================

/// 统计结果
#[derive(Debug, Clone, PartialEq)]
pub struct StatsResult {
    pub count: usize,
    pub total: i128,
    pub average: f64,
    pub min: i64,
    pub max: i64,
}

impl From<Summary> for StatsResult {
    fn from(summary: Summary) -> Self {
        Self {
            count: summary.count,
            total: summary.total,
            average: summary.average,
            min: summary.min,
            max: summary.max,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Stats Handler
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsHandler;

impl StatsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: StatsQuery) -> Result<StatsResult, ApplicationError> {
        let numbers = match query {
            StatsQuery::Delimited(raw) => NumberList::parse_delimited(&raw)?,
            StatsQuery::Values(values) => NumberList::new(values)?,
        };

        tracing::debug!(count = numbers.len(), "Computing stats");

        Ok(Summary::of(&numbers).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimited_query() {
        let result = StatsHandler::new()
            .handle(StatsQuery::Delimited("1,2,3".to_string()))
            .unwrap();
        assert_eq!(result.count, 3);
        assert_eq!(result.total, 6);
        assert_eq!(result.average, 2.0);
    }

    #[test]
    fn test_values_query() {
        let result = StatsHandler::new()
            .handle(StatsQuery::Values(vec![5]))
            .unwrap();
        assert_eq!(result.min, 5);
        assert_eq!(result.max, 5);
        assert_eq!(result.average, 5.0);
    }

    #[test]
    fn test_invalid_and_empty() {
        let handler = StatsHandler::new();
        assert_eq!(
            handler.handle(StatsQuery::Delimited("a,2".to_string())),
            Err(ApplicationError::bad_request("Invalid number format"))
        );
        assert_eq!(
            handler.handle(StatsQuery::Values(Vec::new())),
            Err(ApplicationError::bad_request("numbers must not be empty"))
        );
    }
}
