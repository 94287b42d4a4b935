mod common;

use chrono::DateTime;
use httpmock::Method::GET;
use httpmock::MockServer;

use company_brief::{BriefError, ComparisonBuilder, TickerSpec};

// 2020-01-01, 2020-02-01, 2020-03-01 (UTC)
const JAN: i64 = 1_577_836_800;
const FEB: i64 = 1_580_515_200;
const MAR: i64 = 1_583_020_800;

fn chart_body(timestamps: &[i64], closes: &[Option<f64>]) -> String {
    serde_json::json!({
        "chart": {
            "result": [{
                "timestamp": timestamps,
                "indicators": { "quote": [{ "close": closes }] }
            }],
            "error": null
        }
    })
    .to_string()
}

#[tokio::test]
async fn rebases_every_series_onto_percent_return() {
    let server = MockServer::start();
    let subject_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/chart/ACME")
            .query_param("interval", "1mo")
            .query_param("period1", JAN.to_string());
        then.status(200).body(chart_body(
            &[JAN, FEB, MAR],
            &[Some(50.0), Some(55.0), Some(60.0)],
        ));
    });
    let compare_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/chart/SPX")
            .query_param("interval", "1mo")
            // same-window policy: the comparison ticker is fetched over the
            // subject's window, not its own
            .query_param("period1", JAN.to_string());
        then.status(200)
            .body(chart_body(&[JAN, FEB], &[Some(200.0), Some(190.0)]));
    });

    let client = common::client_for(&server);
    let series = ComparisonBuilder::new(TickerSpec::new("ACME", "Acme Corp", "#FF0000"))
        .compare(TickerSpec::new("SPX", "S&P 500", "#F6BE00"))
        .start(DateTime::from_timestamp(JAN, 0).unwrap())
        .fetch(&client)
        .await
        .unwrap();

    subject_mock.assert();
    compare_mock.assert();

    assert_eq!(series.len(), 2);
    // subject first, regardless of input order
    assert_eq!(series[0].symbol, "ACME");
    assert_eq!(series[1].symbol, "SPX");

    let acme = &series[0];
    assert_eq!(acme.points[0].value, 0.0);
    assert_eq!(
        acme.points.iter().map(|p| p.label.as_str()).collect::<Vec<_>>(),
        ["2020-01", "2020-02", "2020-03"]
    );
    assert!((acme.points[1].value - 10.0).abs() < 1e-9);
    assert!((acme.points[2].value - 20.0).abs() < 1e-9);

    let spx = &series[1];
    assert_eq!(spx.points[0].value, 0.0);
    assert!((spx.points[1].value - -5.0).abs() < 1e-9);
}

#[tokio::test]
async fn null_closes_are_dropped_before_rebasing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/chart/ACME");
        then.status(200).body(chart_body(
            &[JAN, FEB, MAR],
            &[None, Some(100.0), Some(110.0)],
        ));
    });

    let client = common::client_for(&server);
    let series = ComparisonBuilder::new(TickerSpec::new("ACME", "Acme Corp", "#FF0000"))
        .fetch(&client)
        .await
        .unwrap();

    let points = &series[0].points;
    assert_eq!(points.len(), 2);
    // the first non-null close is the rebasing origin
    assert_eq!(points[0].label, "2020-02");
    assert_eq!(points[0].value, 0.0);
    assert!((points[1].value - 10.0).abs() < 1e-9);
}

#[tokio::test]
async fn chart_error_node_is_surfaced() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/chart/BOGUS");
        then.status(200).body(
            serde_json::json!({
                "chart": {
                    "result": null,
                    "error": {
                        "code": "Not Found",
                        "description": "No data found, symbol may be delisted"
                    }
                }
            })
            .to_string(),
        );
    });

    let client = common::client_for(&server);
    let err = ComparisonBuilder::new(TickerSpec::new("BOGUS", "Bogus", "#000000"))
        .fetch(&client)
        .await
        .unwrap_err();

    match err {
        BriefError::Provider(msg) => assert!(msg.contains("No data found")),
        other => panic!("expected Provider, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_history_is_a_data_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/chart/ACME");
        then.status(200).body(chart_body(&[], &[]));
    });

    let client = common::client_for(&server);
    let err = ComparisonBuilder::new(TickerSpec::new("ACME", "Acme Corp", "#FF0000"))
        .fetch(&client)
        .await
        .unwrap_err();

    assert!(matches!(err, BriefError::Data(_)));
}
