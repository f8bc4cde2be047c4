//! Handlers for the report endpoints.

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::api::dto::report::ReportQuery;
use crate::domain::report::{DataTable, ReportOutput, ReportRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Visits summary restricted to returning visitors.
///
/// # Endpoint
///
/// `GET /api/visit-frequency?idSite=1&period=day&date=today&segment=&columns=`
///
/// `columns` may carry the `_returning` suffix or not. Every metric in the
/// response is suffixed:
///
/// ```json
/// [{ "nb_visits_returning": 12, "nb_actions_returning": 31 }]
/// ```
///
/// # Errors
///
/// Returns 400 for invalid parameters, segment or column names.
/// Returns 404 if the site does not exist.
pub async fn visit_frequency_handler(
    State(state): State<AppState>,
    query: ReportQuery,
) -> Result<Json<DataTable>, AppError> {
    metrics::counter!("report_requests_total", "report" => "visit_frequency").increment(1);

    let table = state
        .visit_frequency
        .get(
            query.id_site,
            query.period,
            &query.date,
            query.segment.as_deref(),
            &query.columns,
        )
        .await?;

    Ok(Json(table))
}

/// General visits summary.
///
/// # Endpoint
///
/// `GET /api/visits-summary?idSite=1&period=day&date=today&format=original`
///
/// With `format=json` the report's own serialization is returned verbatim.
pub async fn visits_summary_handler(
    State(state): State<AppState>,
    query: ReportQuery,
) -> Result<Response, AppError> {
    metrics::counter!("report_requests_total", "report" => "visits_summary").increment(1);

    let request = ReportRequest {
        site_id: query.id_site,
        period: query.period,
        date: query.date,
        segment: query.segment.unwrap_or_default(),
        columns: query.columns,
        format: query.format,
    };

    let response = match state.visits_summary.get(request).await? {
        ReportOutput::Table(table) => Json(table).into_response(),
        ReportOutput::Serialized(body) => {
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
    };

    Ok(response)
}
