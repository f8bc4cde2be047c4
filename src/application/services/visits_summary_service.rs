//! General visits summary report.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use crate::domain::report::{
    DataRow, DataTable, DateRange, Period, ReportFormat, ReportOutput, ReportRequest, Segment,
};
use crate::domain::repositories::{VisitsAggregate, VisitsRepository};
use crate::error::AppError;

/// Counters read straight from the visit log, in output order.
const CORE_COLUMNS: [&str; 6] = [
    "nb_visits",
    "nb_actions",
    "nb_visits_converted",
    "bounce_count",
    "sum_visit_length",
    "max_actions",
];

/// Metrics derived from the counters.
const PROCESSED_COLUMNS: [&str; 3] = ["bounce_rate", "nb_actions_per_visit", "avg_time_on_site"];

const UNIQUE_VISITORS_COLUMN: &str = "nb_uniq_visitors";

/// A report API producing visit metrics for a site and period.
///
/// Implemented by [`VisitsSummaryService`]; decorators such as
/// [`crate::application::services::VisitFrequencyService`] depend on this
/// trait rather than on the concrete service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitsSummaryReport: Send + Sync {
    /// Every column the report can produce for `period`.
    fn columns(&self, period: Period) -> Vec<String>;

    /// Runs the report.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid date, segment or column.
    /// Returns [`AppError::NotFound`] if the site does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get(&self, request: ReportRequest) -> Result<ReportOutput, AppError>;
}

/// Computes the visits summary from the visit log.
pub struct VisitsSummaryService<R: VisitsRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: VisitsRepository + ?Sized> VisitsSummaryService<R> {
    /// Creates a new visits summary service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: VisitsRepository + ?Sized> VisitsSummaryReport for VisitsSummaryService<R> {
    fn columns(&self, period: Period) -> Vec<String> {
        let unique = period
            .has_unique_visitors()
            .then_some(UNIQUE_VISITORS_COLUMN);

        unique
            .into_iter()
            .chain(CORE_COLUMNS)
            .chain(PROCESSED_COLUMNS)
            .map(str::to_string)
            .collect()
    }

    async fn get(&self, request: ReportRequest) -> Result<ReportOutput, AppError> {
        let range = DateRange::resolve(request.period, &request.date, Utc::now().date_naive())?;
        let segment = Segment::parse(&request.segment)?;

        let available = self.columns(request.period);
        let unknown: Vec<&String> = request
            .columns
            .iter()
            .filter(|c| !available.contains(c))
            .collect();
        if !unknown.is_empty() {
            return Err(AppError::bad_request(
                "Unknown column requested",
                json!({ "columns": unknown, "available": available }),
            ));
        }

        if !self.repository.site_exists(request.site_id).await? {
            return Err(AppError::not_found(
                "Site not found",
                json!({ "idSite": request.site_id }),
            ));
        }

        tracing::debug!(
            site_id = request.site_id,
            period = %request.period,
            start = %range.start,
            end = %range.end,
            segment = segment.as_str(),
            "Aggregating visits summary"
        );

        let aggregate = self
            .repository
            .aggregate(request.site_id, range, &segment)
            .await?;

        let mut table = DataTable::new(vec![build_row(request.period, &aggregate)]);
        table.retain_columns(&request.columns);

        match request.format {
            ReportFormat::Original => Ok(ReportOutput::Table(table)),
            ReportFormat::Json => serde_json::to_string(&table)
                .map(ReportOutput::Serialized)
                .map_err(|e| {
                    AppError::internal("Failed to serialize report", json!({ "reason": e.to_string() }))
                }),
        }
    }
}

/// Builds the single summary row, counters first, then processed metrics.
fn build_row(period: Period, aggregate: &VisitsAggregate) -> DataRow {
    let mut row = DataRow::new();
    if period.has_unique_visitors() {
        row.set(UNIQUE_VISITORS_COLUMN, aggregate.nb_uniq_visitors);
    }

    row.set("nb_visits", aggregate.nb_visits);
    row.set("nb_actions", aggregate.nb_actions);
    row.set("nb_visits_converted", aggregate.nb_visits_converted);
    row.set("bounce_count", aggregate.bounce_count);
    row.set("sum_visit_length", aggregate.sum_visit_length);
    row.set("max_actions", aggregate.max_actions);

    row.set("bounce_rate", bounce_rate(aggregate));
    row.set("nb_actions_per_visit", actions_per_visit(aggregate));
    row.set("avg_time_on_site", avg_time_on_site(aggregate));
    row
}

fn bounce_rate(aggregate: &VisitsAggregate) -> String {
    if aggregate.nb_visits == 0 {
        return "0%".to_string();
    }
    let rate = aggregate.bounce_count as f64 * 100.0 / aggregate.nb_visits as f64;
    format!("{}%", rate.round() as i64)
}

fn actions_per_visit(aggregate: &VisitsAggregate) -> f64 {
    if aggregate.nb_visits == 0 {
        return 0.0;
    }
    let ratio = aggregate.nb_actions as f64 / aggregate.nb_visits as f64;
    (ratio * 10.0).round() / 10.0
}

fn avg_time_on_site(aggregate: &VisitsAggregate) -> i64 {
    if aggregate.nb_visits == 0 {
        return 0;
    }
    (aggregate.sum_visit_length as f64 / aggregate.nb_visits as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockVisitsRepository;

    fn aggregate() -> VisitsAggregate {
        VisitsAggregate {
            nb_uniq_visitors: 3,
            nb_visits: 4,
            nb_actions: 9,
            nb_visits_converted: 1,
            bounce_count: 1,
            sum_visit_length: 610,
            max_actions: 5,
        }
    }

    fn request(period: Period, date: &str) -> ReportRequest {
        ReportRequest {
            site_id: 1,
            period,
            date: date.to_string(),
            segment: String::new(),
            columns: vec![],
            format: ReportFormat::Original,
        }
    }

    fn table(output: ReportOutput) -> DataTable {
        match output {
            ReportOutput::Table(table) => table,
            ReportOutput::Serialized(s) => panic!("expected a table, got {s}"),
        }
    }

    #[test]
    fn test_columns_depend_on_period() {
        let service = VisitsSummaryService::new(Arc::new(MockVisitsRepository::new()));

        let day = service.columns(Period::Day);
        assert_eq!(day[0], "nb_uniq_visitors");
        assert_eq!(day.len(), 10);

        let year = service.columns(Period::Year);
        assert!(!year.contains(&"nb_uniq_visitors".to_string()));
        assert_eq!(year.len(), 9);
    }

    #[tokio::test]
    async fn test_get_builds_summary_row() {
        let mut mock_repo = MockVisitsRepository::new();
        mock_repo
            .expect_site_exists()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(true));
        mock_repo
            .expect_aggregate()
            .withf(|id, range, segment| {
                *id == 1 && range.days() == 1 && segment.is_empty()
            })
            .times(1)
            .returning(|_, _, _| Ok(aggregate()));

        let service = VisitsSummaryService::new(Arc::new(mock_repo));
        let output = service.get(request(Period::Day, "2024-03-14")).await.unwrap();

        let table = table(output);
        let row = table.first_row().unwrap();
        assert_eq!(row.get("nb_uniq_visitors"), Some(&json!(3)));
        assert_eq!(row.get("nb_visits"), Some(&json!(4)));
        assert_eq!(row.get("bounce_rate"), Some(&json!("25%")));
        assert_eq!(row.get("nb_actions_per_visit"), Some(&json!(2.3)));
        assert_eq!(row.get("avg_time_on_site"), Some(&json!(153)));
    }

    #[tokio::test]
    async fn test_get_keeps_requested_columns_only() {
        let mut mock_repo = MockVisitsRepository::new();
        mock_repo.expect_site_exists().returning(|_| Ok(true));
        mock_repo
            .expect_aggregate()
            .returning(|_, _, _| Ok(aggregate()));

        let service = VisitsSummaryService::new(Arc::new(mock_repo));
        let mut req = request(Period::Month, "2024-03-14");
        req.columns = vec!["nb_actions".to_string(), "nb_visits".to_string()];

        let table = table(service.get(req).await.unwrap());
        let names: Vec<_> = table.first_row().unwrap().column_names().collect();
        assert_eq!(names, ["nb_visits", "nb_actions"]);
    }

    #[tokio::test]
    async fn test_get_forwards_parsed_segment() {
        let mut mock_repo = MockVisitsRepository::new();
        mock_repo.expect_site_exists().returning(|_| Ok(true));
        mock_repo
            .expect_aggregate()
            .withf(|_, _, segment| {
                segment.groups().len() == 2 && segment.groups()[1][0].value == "returning"
            })
            .times(1)
            .returning(|_, _, _| Ok(VisitsAggregate::default()));

        let service = VisitsSummaryService::new(Arc::new(mock_repo));
        let mut req = request(Period::Day, "2024-03-14");
        req.segment = "browserCode==FF;visitorType==returning".to_string();

        let table = table(service.get(req).await.unwrap());
        let row = table.first_row().unwrap();
        assert_eq!(row.get("bounce_rate"), Some(&json!("0%")));
        assert_eq!(row.get("nb_actions_per_visit"), Some(&json!(0.0)));
        assert_eq!(row.get("avg_time_on_site"), Some(&json!(0)));
    }

    #[tokio::test]
    async fn test_get_json_format_serializes() {
        let mut mock_repo = MockVisitsRepository::new();
        mock_repo.expect_site_exists().returning(|_| Ok(true));
        mock_repo
            .expect_aggregate()
            .returning(|_, _, _| Ok(aggregate()));

        let service = VisitsSummaryService::new(Arc::new(mock_repo));
        let mut req = request(Period::Year, "2024-03-14");
        req.columns = vec!["nb_visits".to_string()];
        req.format = ReportFormat::Json;

        let output = service.get(req).await.unwrap();
        assert_eq!(output, ReportOutput::Serialized(r#"[{"nb_visits":4}]"#.to_string()));
    }

    #[tokio::test]
    async fn test_unknown_column_is_rejected_before_storage() {
        let mut mock_repo = MockVisitsRepository::new();
        mock_repo.expect_site_exists().times(0);
        mock_repo.expect_aggregate().times(0);

        let service = VisitsSummaryService::new(Arc::new(mock_repo));
        let mut req = request(Period::Year, "2024-03-14");
        req.columns = vec!["nb_uniq_visitors".to_string()];

        let err = service.get(req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_unknown_site_is_not_found() {
        let mut mock_repo = MockVisitsRepository::new();
        mock_repo.expect_site_exists().returning(|_| Ok(false));
        mock_repo.expect_aggregate().times(0);

        let service = VisitsSummaryService::new(Arc::new(mock_repo));
        let err = service
            .get(request(Period::Day, "2024-03-14"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_invalid_segment_is_validation_error() {
        let mock_repo = MockVisitsRepository::new();
        let service = VisitsSummaryService::new(Arc::new(mock_repo));
        let mut req = request(Period::Day, "2024-03-14");
        req.segment = "visitorType~returning".to_string();

        let err = service.get(req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
