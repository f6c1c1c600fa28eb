//! End-to-end query tests: config-built controller against mocked services.

use cityweather_core::{Config, QueryResult, QueryState};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    let mut cfg = Config::default();
    cfg.geocoder.endpoint = format!("{}/search", server.uri());
    cfg.weather.endpoint = format!("{}/v1/forecast", server.uri());
    cfg
}

async fn mount_london(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "lat": "51.5073219", "lon": "-0.1276474", "display_name": "London" }
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_london_end_to_end() {
    let mock_server = MockServer::start().await;
    mount_london(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current_weather": {
                "temperature": 9.8,
                "windspeed": 14.4,
                "winddirection": 225,
                "weathercode": 80
            },
            "hourly": {
                "time": (0..72).map(|h| format!("2026-10-{}T{:02}:00", 19 + h / 24, h % 24)).collect::<Vec<_>>(),
                "temperature_2m": vec![9.0; 72],
                "precipitation_probability": vec![65; 72],
                "weathercode": vec![80; 72]
            }
        })))
        .mount(&mock_server)
        .await;

    let mut app = config_for(&mock_server).controller().unwrap();
    let report = app
        .submit("London")
        .await
        .report()
        .cloned()
        .expect("should reach displaying");

    assert_eq!(report.current.temperature, 9.8);
    assert_eq!(report.description, "Slight rain showers");
    assert_eq!(report.hourly.len(), 24);
    assert_eq!(report.hourly[5].hour_label, "05:00");
    assert_eq!(report.hourly[5].precipitation_probability, Some(65));
    assert_eq!(report.map.zoom, 10);
}

#[tokio::test]
async fn test_blank_city_never_hits_the_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut app = config_for(&mock_server).controller().unwrap();

    assert!(matches!(app.submit("").await, QueryState::Idle));
    assert!(app.run_query("  ").await.is_none());
}

#[tokio::test]
async fn test_weather_outage_short_circuits() {
    let mock_server = MockServer::start().await;
    mount_london(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let mut app = config_for(&mock_server).controller().unwrap();

    match app.run_query("London").await {
        Some(QueryResult::WeatherFetchFailure(err)) => {
            assert!(err.to_string().contains("502"));
        }
        other => panic!("expected weather failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_city_skips_weather() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut app = config_for(&mock_server).controller().unwrap();

    match app.submit("ThisCityDoesNotExist12345").await {
        QueryState::GeocodeFailed(err) => assert!(err.is_not_found()),
        other => panic!("expected geocode failure, got {}", other.name()),
    }
}
