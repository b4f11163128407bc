//! Integration tests for the EPG library.
//!
//! These tests use wiremock to simulate the EPG API responses
//! and test the complete flow without hitting the real API.

use cmore_epg::{
    channel_schedules, channels, date, Country, EpgClient, EpgClientConfig, EpgError, Language,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SWEDISH_FULL_DAY: &str = include_str!("fixtures/swedish_full_day.xml");
const DANISH_TWO_DAYS_DRAMA: &str = include_str!("fixtures/danish_two_days_drama.xml");
const SWEDISH_LIVE_SPORTS: &str = include_str!("fixtures/swedish_live_sports.xml");
const FINNISH_CHANNEL_12: &str = include_str!("fixtures/finnish_channel_12.xml");

const EMPTY_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Response FromDate="2017-01-28T00:00:00" UntilDate="2017-01-28T00:00:00"></Response>"#;

const BAD_CALENDAR_DATE_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Response FromDate="2017-01-25T00:00:00" UntilDate="2017-01-25T00:00:00">
  <Day BroadcastDate="2017-01-25T00:00:00">
    <Channel ChannelId="76" Name="TV4" Title="TV4">
      <Schedule ScheduleId="1" CalendarDate="2017-01-25T19:00">
        <Program ProgramId="p1" Title="TV4Nyheterna" />
      </Schedule>
    </Channel>
  </Day>
</Response>"#;

fn xml_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("Content-Type", "application/xml; charset=utf-8")
        .set_body_string(body)
}

fn create_test_client(mock_server_uri: &str) -> EpgClient {
    let config = EpgClientConfig {
        base_url: mock_server_uri.to_string(),
        user_agent: "epg-test/1.0".to_string(),
        timeout_seconds: 5,
    };

    EpgClient::with_config(config).unwrap()
}

#[tokio::test]
async fn test_get_full_day() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/epg/se/sv/2017-01-25"))
        .respond_with(xml_response(SWEDISH_FULL_DAY))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let response = client
        .get(&Country::SWEDEN, &Language::SWEDISH, &date(2017, 1, 25), &[])
        .await
        .unwrap();

    assert_eq!(response.days.len(), 1);
    let day = &response.days[0];
    assert_eq!(day.channels.len(), 42);

    let tv4 = &day.channels[30];
    assert_eq!(tv4.id, channels::TV4);
    assert_eq!(tv4.schedules.len(), 33);

    let nyheterna = &tv4.schedules[16];
    assert_eq!(nyheterna.program.title, "TV4Nyheterna");
    assert_eq!(
        nyheterna.calendar_date.to_string(),
        "2017-01-25 19:00:00 +0100 CET"
    );
    assert_eq!(
        nyheterna.calendar_date.to_rfc3339().unwrap(),
        "2017-01-25T19:00:00+01:00"
    );

    let montalbano = &tv4.schedules[20];
    assert_eq!(
        montalbano.program.actor_names(),
        vec!["Cesare Bocci", "Luca Zingaretti", "Peppino Mazzotta"]
    );
    assert_eq!(montalbano.program.director_names(), vec!["Alberto Sironi"]);
    assert!(montalbano.program.vod_start_time().unwrap().is_sentinel());
    assert_eq!(
        montalbano.program.vod_end_time().unwrap().to_rfc3339().unwrap(),
        "9999-12-31T23:59:59Z"
    );

    let meta = response.meta.unwrap();
    assert_eq!(meta.path, "/epg/se/sv/2017-01-25");
    assert!(meta.query.is_empty());
}

#[tokio::test]
async fn test_day_and_channel_lookup() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/epg/se/sv/2017-01-25"))
        .respond_with(xml_response(SWEDISH_FULL_DAY))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let response = client
        .get(&Country::SWEDEN, &Language::SWEDISH, "2017-01-25", &[])
        .await
        .unwrap();

    let day = response.day(Some("2017-01-25"));
    assert!(!day.is_empty());

    let tv4 = day.channel(channels::channel_id("TV4"));
    assert_eq!(tv4.name, "TV4");
    assert_eq!(tv4.schedules.len(), 33);

    assert!(response.day(Some("2017-01-26")).is_empty());
    assert!(day.channel("9999").is_empty());
}

#[tokio::test]
async fn test_no_query_string_without_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(xml_response(EMPTY_RESPONSE))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let response = client
        .get(&Country::NORWAY, &Language::NORWEGIAN, "2017-01-28", &[])
        .await
        .unwrap();

    assert!(response.days.is_empty());
    assert!(response.day(None).is_empty());
    assert_eq!(response.from_date, "2017-01-28T00:00:00");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/epg/no/no/2017-01-28");
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_get_period() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/epg/dk/da/2017-01-26/2017-01-27"))
        .and(query_param("genre", "drama"))
        .respond_with(xml_response(DANISH_TWO_DAYS_DRAMA))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let response = client
        .get_period(
            &Country::DENMARK,
            &Language::DANISH,
            &date(2017, 1, 26),
            &date(2017, 1, 27),
            &[("genre", "drama")],
        )
        .await
        .unwrap();

    assert_eq!(response.days.len(), 2);
    assert_eq!(response.days[1].channels.len(), 10);
    assert_eq!(response.days[1].channels[4].name, "CanalFilm2");
    assert_eq!(
        response.day(Some("2017-01-27")).broadcast_date,
        "2017-01-27T00:00:00"
    );

    let meta = response.meta.unwrap();
    assert_eq!(meta.path, "/epg/dk/da/2017-01-26/2017-01-27");
    assert_eq!(
        meta.query,
        vec![("genre".to_string(), "drama".to_string())]
    );
}

#[tokio::test]
async fn test_get_channel_group() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/epg/se/sv/2017-01-27/2017-01-27/27"))
        .and(query_param("filter", "livesports"))
        .respond_with(xml_response(SWEDISH_LIVE_SPORTS))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let response = client
        .get_channel_group(
            &Country::SWEDEN,
            &Language::SWEDISH,
            &date(2017, 1, 27),
            &date(2017, 1, 27),
            "27",
            &[("filter", "livesports")],
        )
        .await
        .unwrap();

    assert_eq!(response.days.len(), 1);

    let day = response.day(None);
    assert_eq!(day.channels.len(), 9);

    let channel = day.channel(channels::CANAL_SPORT_SWEDEN);
    assert_eq!(channel.logo_id, "ec7d2da1-5b0d-4135-ac54-32149414c557");
}

#[tokio::test]
async fn test_get_channel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/epg/fi/fi/2017-01-27/2017-01-27/12"))
        .respond_with(xml_response(FINNISH_CHANNEL_12))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let response = client
        .get_channel(
            &Country::FINLAND,
            &Language::FINNISH,
            &date(2017, 1, 27),
            &date(2017, 1, 27),
            channels::CANAL_HD,
            &[],
        )
        .await
        .unwrap();

    assert_eq!(response.days.len(), 1);

    let day = response.day(None);
    assert_eq!(day.channels.len(), 1);

    let channel = day.channel(channels::CANAL_HD);
    assert_eq!(channel.logo_id, "6636a32b-629c-45a9-a546-505d5cfe8d33");
    assert!(channel.is_hd);

    let deadpool = &channel.schedules[0].program;
    assert_eq!(deadpool.title, "Deadpool");
    assert_eq!(deadpool.duration, 108);
    assert_eq!(deadpool.images.len(), 1);

    let url = deadpool.images[0].full_size_url().unwrap();
    assert!(url
        .as_str()
        .starts_with("https://img-cdn-cmore.b17g.services/"));
    assert!(url.as_str().ends_with("/164.img"));
}

#[tokio::test]
async fn test_request_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("accept", "application/xml"))
        .and(header("user-agent", "epg-test/1.0"))
        .respond_with(xml_response(EMPTY_RESPONSE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client
        .get(&Country::SWEDEN, &Language::SWEDISH, "2017-01-28", &[])
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<Error>Not found</Error>"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client
        .get(&Country::SWEDEN, &Language::SWEDISH, "2017-01-25", &[])
        .await;

    match result.unwrap_err() {
        EpgError::NotFound { path } => assert_eq!(path, "/epg/se/sv/2017-01-25"),
        e => panic!("Expected NotFound error, got {:?}", e),
    }
}

#[tokio::test]
async fn test_unknown_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client
        .get_period(
            &Country::SWEDEN,
            &Language::SWEDISH,
            "2017-01-25",
            "2017-01-26",
            &[],
        )
        .await;

    match result.unwrap_err() {
        EpgError::UnknownError { status } => assert_eq!(status, 500),
        e => panic!("Expected UnknownError, got {:?}", e),
    }
}

#[tokio::test]
async fn test_malformed_xml() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(xml_response("<Response FromDate=\"2017-01-25\"><Day></Response>"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client
        .get(&Country::SWEDEN, &Language::SWEDISH, "2017-01-25", &[])
        .await;

    assert!(matches!(result, Err(EpgError::Decode(_))));
}

#[tokio::test]
async fn test_bad_calendar_date_fails_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(xml_response(BAD_CALENDAR_DATE_RESPONSE))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client
        .get(&Country::SWEDEN, &Language::SWEDISH, "2017-01-25", &[])
        .await;

    match result.unwrap_err() {
        EpgError::Decode(e) => assert!(e.to_string().contains("2017-01-25T19:00")),
        e => panic!("Expected Decode error, got {:?}", e),
    }
}

#[tokio::test]
async fn test_transport_error() {
    let client = create_test_client("http://127.0.0.1:1");
    let result = client
        .get(&Country::SWEDEN, &Language::SWEDISH, "2017-01-25", &[])
        .await;

    assert!(matches!(result, Err(EpgError::Network(_))));
}

#[tokio::test]
async fn test_channel_schedules_with_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/epg/fi/fi/2017-01-27/2017-01-27/12"))
        .respond_with(xml_response(FINNISH_CHANNEL_12))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let schedules = channel_schedules(
        &client,
        &Country::FINLAND,
        &Language::FINNISH,
        "2017-01-27",
        channels::CANAL_HD,
    )
    .await
    .unwrap();

    assert_eq!(schedules.len(), 2);
    assert_eq!(schedules[1].program.title, "Arrival");
    assert_eq!(
        schedules[1].program.actor_names(),
        vec!["Amy Adams", "Jeremy Renner"]
    );
}
