//! Visit frequency report: visits summary metrics for returning visitors.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use crate::application::services::visits_summary_service::VisitsSummaryReport;
use crate::domain::report::{
    DataTable, Period, ReportFormat, ReportOutput, ReportRequest, Segment, split_columns,
};
use crate::error::AppError;

/// Segment condition selecting visits of previously seen visitors.
pub const RETURNING_VISITOR_SEGMENT: &str = "visitorType==returning";

/// Appended to every metric name in the visit frequency report.
pub const COLUMN_SUFFIX: &str = "_returning";

/// Wraps a [`VisitsSummaryReport`] so it reports on returning visitors only.
///
/// The wrapped report is called with the returning-visitor segment appended
/// and any `_returning` suffix stripped from requested columns. The result
/// comes back with every metric the report knows about suffixed, so
/// `nb_visits` reads `nb_visits_returning`.
pub struct VisitFrequencyService<A: VisitsSummaryReport + ?Sized> {
    visits_summary: Arc<A>,
}

impl<A: VisitsSummaryReport + ?Sized> VisitFrequencyService<A> {
    /// Creates a new visit frequency service on top of a visits summary report.
    pub fn new(visits_summary: Arc<A>) -> Self {
        Self { visits_summary }
    }

    /// Runs the visits summary restricted to returning visitors.
    ///
    /// `columns` accepts either a list of names or comma-separated names,
    /// with or without the `_returning` suffix.
    ///
    /// # Errors
    ///
    /// Errors of the wrapped report are returned unchanged.
    /// Returns [`AppError::Internal`] if the wrapped report answers with a
    /// serialized payload instead of a table.
    pub async fn get(
        &self,
        site_id: i64,
        period: Period,
        date: &str,
        segment: Option<&str>,
        columns: &[String],
    ) -> Result<DataTable, AppError> {
        let request = ReportRequest {
            site_id,
            period,
            date: date.to_string(),
            segment: append_returning_visitor_segment(segment),
            columns: unprefix_columns(columns),
            format: ReportFormat::Original,
        };

        tracing::debug!(
            site_id,
            period = %period,
            segment = %request.segment,
            columns = ?request.columns,
            "Forwarding visit frequency request to visits summary"
        );

        let mut table = match self.visits_summary.get(request).await? {
            ReportOutput::Table(table) => table,
            ReportOutput::Serialized(_) => {
                return Err(AppError::internal(
                    "Visits summary returned a serialized report",
                    json!({ "expected_format": "original" }),
                ));
            }
        };

        self.prefix_columns(&mut table, period);
        Ok(table)
    }

    /// Suffixes every column the visits summary can produce for `period`.
    ///
    /// The rename map covers all known columns, not only the ones present
    /// in `table`.
    pub fn prefix_columns(&self, table: &mut DataTable, period: Period) {
        let rename: HashMap<String, String> = self
            .visits_summary
            .columns(period)
            .into_iter()
            .map(|column| {
                let suffixed = format!("{column}{COLUMN_SUFFIX}");
                (column, suffixed)
            })
            .collect();

        table.rename_columns(&rename);
    }
}

/// ANDs the returning-visitor condition onto a caller's segment.
///
/// # Examples
///
/// ```
/// use analytics_console::application::services::visit_frequency_service::append_returning_visitor_segment;
///
/// assert_eq!(append_returning_visitor_segment(None), "visitorType==returning");
/// assert_eq!(
///     append_returning_visitor_segment(Some("browserCode==FF")),
///     "browserCode==FF;visitorType==returning"
/// );
/// ```
pub fn append_returning_visitor_segment(segment: Option<&str>) -> String {
    let segment = segment.map(str::trim).unwrap_or_default();
    Segment::combine_and(segment, RETURNING_VISITOR_SEGMENT)
}

/// Splits requested columns and strips the `_returning` suffix from each.
///
/// Entries are kept one for one, so `a` and `a_returning` both become `a`.
/// Stripping repeats until no suffix is left, which makes the function
/// idempotent even for names where removing one suffix forms another.
pub fn unprefix_columns<S: AsRef<str>>(columns: &[S]) -> Vec<String> {
    split_columns(columns)
        .into_iter()
        .map(|mut column| {
            while column.contains(COLUMN_SUFFIX) {
                column = column.replace(COLUMN_SUFFIX, "");
            }
            column
        })
        .collect()
}
