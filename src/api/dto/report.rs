//! Query parameters shared by the report endpoints.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::report::{Period, ReportFormat, parse_columns};
use crate::error::AppError;

/// Report query string.
///
/// `columns` may be given comma-separated (`columns=a,b`), repeated
/// (`columns=a&columns=b`) or both; the lists are merged in order.
///
/// Extracting this type rejects with [`AppError::Validation`].
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct ReportQuery {
    #[serde(rename = "idSite")]
    #[serde_as(as = "DisplayFromStr")]
    #[validate(range(min = 1, message = "idSite must be a positive integer"))]
    pub id_site: i64,

    #[serde_as(as = "DisplayFromStr")]
    pub period: Period,

    #[validate(length(min = 1, max = 64))]
    pub date: String,

    #[serde(default)]
    #[validate(length(max = 4096))]
    pub segment: Option<String>,

    #[serde(default)]
    pub format: ReportFormat,

    #[serde(skip)]
    pub columns: Vec<String>,
}

impl ReportQuery {
    /// Builds the query from decoded `key=value` pairs.
    ///
    /// For keys other than `columns` the last occurrence wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, AppError> {
        let mut columns = Vec::new();
        let mut fields = Map::new();

        for (key, value) in pairs {
            match key.as_str() {
                "columns" | "columns[]" => columns.push(value),
                _ => {
                    fields.insert(key, Value::String(value));
                }
            }
        }

        let mut query: ReportQuery = serde_json::from_value(Value::Object(fields)).map_err(|e| {
            AppError::bad_request("Invalid query parameters", json!({ "reason": e.to_string() }))
        })?;
        query.columns = parse_columns(columns);
        query.validate()?;

        Ok(query)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for ReportQuery {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::bad_request("Invalid query string", json!({ "reason": e.body_text() }))
            })?;

        Self::from_pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_minimal_query() {
        let query = ReportQuery::from_pairs(pairs(&[
            ("idSite", "3"),
            ("period", "week"),
            ("date", "2024-03-14"),
        ]))
        .unwrap();

        assert_eq!(query.id_site, 3);
        assert_eq!(query.period, Period::Week);
        assert_eq!(query.date, "2024-03-14");
        assert!(query.segment.is_none());
        assert!(query.columns.is_empty());
        assert_eq!(query.format, ReportFormat::Original);
    }

    #[test]
    fn test_columns_comma_and_repeated() {
        let query = ReportQuery::from_pairs(pairs(&[
            ("idSite", "1"),
            ("period", "day"),
            ("date", "today"),
            ("columns", "nb_visits,nb_actions"),
            ("columns", "max_actions"),
            ("columns[]", "nb_visits"),
            ("format", "json"),
        ]))
        .unwrap();

        assert_eq!(query.columns, ["nb_visits", "nb_actions", "max_actions"]);
        assert_eq!(query.format, ReportFormat::Json);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let cases = [
            pairs(&[("idSite", "1"), ("period", "fortnight"), ("date", "today")]),
            pairs(&[("idSite", "abc"), ("period", "day"), ("date", "today")]),
            pairs(&[("idSite", "0"), ("period", "day"), ("date", "today")]),
            pairs(&[("idSite", "1"), ("period", "day"), ("date", "")]),
            pairs(&[("idSite", "1"), ("period", "day")]),
            pairs(&[("idSite", "1"), ("period", "day"), ("date", "today"), ("format", "xml")]),
        ];

        for case in cases {
            let result = ReportQuery::from_pairs(case.clone());
            assert!(
                matches!(result, Err(AppError::Validation { .. })),
                "{case:?}"
            );
        }
    }
}
