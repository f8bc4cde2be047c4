mod common;

use serde_json::json;

const URL: &str = "/api/visits-summary?idSite=1&period=day&date=2024-01-10";

#[tokio::test]
async fn test_visits_summary_keeps_plain_column_names() {
    let app = common::create_test_app(common::FakeMessagingRepository::default(), true);
    let visits = app.visits.clone();
    let server = common::test_server(app.state);

    let response = server
        .get(&format!("{URL}&columns=nb_visits,nb_actions"))
        .add_header("Authorization", common::bearer(common::USER_TOKEN))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!([{ "nb_visits": 4, "nb_actions": 10 }]));
    assert_eq!(visits.recorded_segments(), vec![String::new()]);
}

#[tokio::test]
async fn test_visits_summary_json_format() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .get(&format!("{URL}&format=json&columns=bounce_rate"))
        .add_header("Authorization", common::bearer(common::USER_TOKEN))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/json");
    assert_eq!(response.text(), r#"[{"bounce_rate":"50%"}]"#);
}

#[tokio::test]
async fn test_visits_summary_rejects_returning_columns() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .get(&format!("{URL}&columns=nb_visits_returning"))
        .add_header("Authorization", common::bearer(common::USER_TOKEN))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_visits_summary_requires_site_id() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .get("/api/visits-summary?period=day&date=today")
        .add_header("Authorization", common::bearer(common::USER_TOKEN))
        .await;

    response.assert_status_bad_request();
}
