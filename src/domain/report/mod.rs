//! Report value types shared by the report services and the HTTP layer.
//!
//! - [`period`] - `day`/`week`/`month`/`year`/`range` and date resolution
//! - [`segment`] - segment filter expressions
//! - [`data_table`] - ordered rows of named metric values

pub mod data_table;
pub mod period;
pub mod segment;

pub use data_table::{DataRow, DataTable};
pub use period::{DateRange, Period, PeriodError};
pub use segment::{AND_DELIMITER, Condition, MatchOperator, OR_DELIMITER, Segment, SegmentError};

use serde::{Deserialize, Serialize};

/// How a report call hands back its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// The native [`DataTable`], for callers that keep working on it.
    #[default]
    Original,
    /// A JSON document, ready to be written to a response body.
    Json,
}

/// Result of a report call, shaped by [`ReportFormat`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutput {
    Table(DataTable),
    Serialized(String),
}

/// Parameters of a report call.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    pub site_id: i64,
    pub period: Period,
    pub date: String,
    /// Raw segment expression, empty for no filter.
    pub segment: String,
    /// Requested metric names, empty for all.
    pub columns: Vec<String>,
    pub format: ReportFormat,
}

/// Splits a list-or-comma-string column parameter, keeping duplicates.
///
/// Every entry is split on commas and trimmed. Empty names are dropped.
pub fn split_columns<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .flat_map(|entry| {
            entry
                .as_ref()
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Normalizes a list-or-comma-string column parameter.
///
/// Same as [`split_columns`], but duplicates keep only their first position.
///
/// # Examples
///
/// ```
/// use analytics_console::domain::report::parse_columns;
///
/// let columns = parse_columns(["nb_visits, nb_actions", "nb_visits"]);
/// assert_eq!(columns, ["nb_visits", "nb_actions"]);
/// ```
pub fn parse_columns<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut columns: Vec<String> = Vec::new();
    for name in split_columns(raw) {
        if !columns.contains(&name) {
            columns.push(name);
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_columns_empty() {
        assert!(parse_columns(Vec::<String>::new()).is_empty());
        assert!(parse_columns([""]).is_empty());
        assert!(parse_columns([" , ,"]).is_empty());
    }

    #[test]
    fn test_parse_columns_list_and_comma_forms_agree() {
        assert_eq!(
            parse_columns(["nb_visits,nb_actions"]),
            parse_columns(["nb_visits", "nb_actions"])
        );
    }

    #[test]
    fn test_split_columns_keeps_duplicates() {
        assert_eq!(
            split_columns(["a, b", "a", " ,"]),
            ["a", "b", "a"]
        );
    }

    #[test]
    fn test_report_format_default_is_original() {
        assert_eq!(ReportFormat::default(), ReportFormat::Original);
    }
}
