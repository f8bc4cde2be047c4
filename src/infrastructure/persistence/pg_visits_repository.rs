//! PostgreSQL implementation of the visit log repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::report::{Condition, DateRange, MatchOperator, Segment, SegmentError};
use crate::domain::repositories::{VisitsAggregate, VisitsRepository};
use crate::error::AppError;

const AGGREGATE_SELECT: &str = r#"
    SELECT
        COUNT(DISTINCT visitor_id)::BIGINT AS nb_uniq_visitors,
        COUNT(*)::BIGINT AS nb_visits,
        COALESCE(SUM(total_actions), 0)::BIGINT AS nb_actions,
        (COUNT(*) FILTER (WHERE converted))::BIGINT AS nb_visits_converted,
        (COUNT(*) FILTER (WHERE total_actions <= 1))::BIGINT AS bounce_count,
        COALESCE(SUM(visit_total_time), 0)::BIGINT AS sum_visit_length,
        COALESCE(MAX(total_actions), 0)::BIGINT AS max_actions
    FROM log_visit
    WHERE site_id = "#;

/// How a segment dimension maps onto `log_visit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DimensionColumn {
    Text(&'static str),
    Integer(&'static str),
    /// `new` / `returning`, stored as a boolean.
    VisitorType,
}

fn dimension_column(dimension: &str) -> Option<DimensionColumn> {
    let column = match dimension {
        "visitorType" => DimensionColumn::VisitorType,
        "browserCode" => DimensionColumn::Text("browser_code"),
        "countryCode" => DimensionColumn::Text("country_code"),
        "deviceType" => DimensionColumn::Text("device_type"),
        "referrerType" => DimensionColumn::Text("referrer_type"),
        "visitCount" => DimensionColumn::Integer("visit_count"),
        "actions" => DimensionColumn::Integer("total_actions"),
        "visitDuration" => DimensionColumn::Integer("visit_total_time"),
        _ => return None,
    };
    Some(column)
}

fn comparison(operator: MatchOperator) -> Option<&'static str> {
    match operator {
        MatchOperator::Equals => Some(" = "),
        MatchOperator::NotEquals => Some(" IS DISTINCT FROM "),
        MatchOperator::LessOrEqual => Some(" <= "),
        MatchOperator::GreaterOrEqual => Some(" >= "),
        MatchOperator::Less => Some(" < "),
        MatchOperator::Greater => Some(" > "),
        MatchOperator::Contains | MatchOperator::DoesNotContain => None,
    }
}

fn unsupported_operator(condition: &Condition) -> AppError {
    AppError::bad_request(
        "Operator not supported for this dimension",
        json!({
            "dimension": condition.dimension,
            "operator": condition.operator.as_str(),
        }),
    )
}

fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Appends one condition as a boolean SQL expression.
fn push_condition(
    builder: &mut QueryBuilder<'_, Postgres>,
    condition: &Condition,
) -> Result<(), AppError> {
    let column = dimension_column(&condition.dimension)
        .ok_or_else(|| SegmentError::UnsupportedDimension(condition.dimension.clone()))?;

    match column {
        DimensionColumn::VisitorType => {
            let returning = match condition.value.as_str() {
                "returning" => true,
                "new" => false,
                other => {
                    return Err(AppError::bad_request(
                        "Invalid visitor type",
                        json!({ "value": other, "allowed": ["new", "returning"] }),
                    ));
                }
            };
            let op = match condition.operator {
                MatchOperator::Equals => " = ",
                MatchOperator::NotEquals => " <> ",
                _ => return Err(unsupported_operator(condition)),
            };
            builder.push("visitor_returning").push(op).push_bind(returning);
        }
        DimensionColumn::Integer(name) => {
            let op = comparison(condition.operator).ok_or_else(|| unsupported_operator(condition))?;
            let value: i64 = condition.value.parse().map_err(|_| {
                AppError::bad_request(
                    "Segment value must be an integer",
                    json!({ "dimension": condition.dimension, "value": condition.value }),
                )
            })?;
            builder.push(name).push(op).push_bind(value);
        }
        DimensionColumn::Text(name) => match condition.operator {
            MatchOperator::Contains => {
                builder
                    .push(name)
                    .push(" LIKE ")
                    .push_bind(format!("%{}%", escape_like(&condition.value)));
            }
            MatchOperator::DoesNotContain => {
                builder
                    .push("(")
                    .push(name)
                    .push(" IS NULL OR ")
                    .push(name)
                    .push(" NOT LIKE ")
                    .push_bind(format!("%{}%", escape_like(&condition.value)))
                    .push(")");
            }
            operator => {
                let op = comparison(operator).ok_or_else(|| unsupported_operator(condition))?;
                builder.push(name).push(op).push_bind(condition.value.clone());
            }
        },
    }

    Ok(())
}

/// Appends `AND (a OR b) AND (c)` for every segment group.
fn push_segment(
    builder: &mut QueryBuilder<'_, Postgres>,
    segment: &Segment,
) -> Result<(), AppError> {
    for group in segment.groups() {
        builder.push(" AND (");
        for (i, condition) in group.iter().enumerate() {
            if i > 0 {
                builder.push(" OR ");
            }
            push_condition(builder, condition)?;
        }
        builder.push(")");
    }
    Ok(())
}

fn aggregate_query<'a>(
    site_id: i64,
    range: DateRange,
    segment: &Segment,
) -> Result<QueryBuilder<'a, Postgres>, AppError> {
    let mut builder = QueryBuilder::new(AGGREGATE_SELECT);
    builder
        .push_bind(site_id)
        .push(" AND visit_first_action_time::date BETWEEN ")
        .push_bind(range.start)
        .push(" AND ")
        .push_bind(range.end);
    push_segment(&mut builder, segment)?;
    Ok(builder)
}

#[derive(FromRow)]
struct AggregateRow {
    nb_uniq_visitors: i64,
    nb_visits: i64,
    nb_actions: i64,
    nb_visits_converted: i64,
    bounce_count: i64,
    sum_visit_length: i64,
    max_actions: i64,
}

impl From<AggregateRow> for VisitsAggregate {
    fn from(row: AggregateRow) -> Self {
        Self {
            nb_uniq_visitors: row.nb_uniq_visitors,
            nb_visits: row.nb_visits,
            nb_actions: row.nb_actions,
            nb_visits_converted: row.nb_visits_converted,
            bounce_count: row.bounce_count,
            sum_visit_length: row.sum_visit_length,
            max_actions: row.max_actions,
        }
    }
}

/// PostgreSQL repository aggregating the `log_visit` table.
///
/// Segment conditions are translated to SQL with bound parameters; unknown
/// dimensions are rejected before the query runs.
pub struct PgVisitsRepository {
    pool: Arc<PgPool>,
}

impl PgVisitsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitsRepository for PgVisitsRepository {
    async fn site_exists(&self, site_id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM sites WHERE id = $1)")
            .bind(site_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(exists)
    }

    async fn aggregate(
        &self,
        site_id: i64,
        range: DateRange,
        segment: &Segment,
    ) -> Result<VisitsAggregate, AppError> {
        let mut builder = aggregate_query(site_id, range, segment)?;

        let row = builder
            .build_query_as::<AggregateRow>()
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }
}
