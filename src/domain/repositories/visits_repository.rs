//! Repository trait for visit log aggregation.

use crate::domain::report::{DateRange, Segment};
use crate::error::AppError;
use async_trait::async_trait;

/// Raw visit counters for one site over one date range.
///
/// Processed metrics (rates, averages) are derived from these in
/// [`crate::application::services::VisitsSummaryService`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitsAggregate {
    pub nb_uniq_visitors: i64,
    pub nb_visits: i64,
    pub nb_actions: i64,
    pub nb_visits_converted: i64,
    pub bounce_count: i64,
    pub sum_visit_length: i64,
    pub max_actions: i64,
}

/// Repository interface for the visit log.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitsRepository: Send + Sync {
    /// Returns true if a site with this ID is registered.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn site_exists(&self, site_id: i64) -> Result<bool, AppError>;

    /// Aggregates the visits of a site within `range` that match `segment`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the segment uses a dimension the
    /// visit log cannot filter on.
    /// Returns [`AppError::Internal`] on database errors.
    async fn aggregate(
        &self,
        site_id: i64,
        range: DateRange,
        segment: &Segment,
    ) -> Result<VisitsAggregate, AppError>;
}
