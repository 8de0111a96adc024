//! End-to-end batch fetch scenarios against a mock PokeAPI backend.

use poke_dl::{Client, OutputFormat, Query, QueryError, execute, render};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pokemon_json(id: u32, name: &str) -> String {
    format!(
        r#"{{"id": {id}, "name": "{name}", "height": 7, "weight": 69, "base_experience": 64}}"#
    )
}

async fn mount_pokemon(server: &MockServer, identifier: &str, id: u32, name: &str, delay_ms: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/pokemon/{identifier}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(pokemon_json(id, name), "application/json")
                .set_delay(std::time::Duration::from_millis(delay_ms)),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn range_query_renders_ordered_output_despite_reversed_completion() {
    let server = MockServer::start().await;
    // Completion order is 3, 2, 1; assembled order must still be 1, 2, 3
    mount_pokemon(&server, "1", 1, "bulbasaur", 120).await;
    mount_pokemon(&server, "2", 2, "ivysaur", 60).await;
    mount_pokemon(&server, "3", 3, "venusaur", 0).await;

    let client = Client::with_base_url(&server.uri()).unwrap();
    let query = Query::parse_range("1-3").unwrap();

    let first = render(&execute(&client, &query).await.unwrap(), OutputFormat::Text).unwrap();
    let second = render(&execute(&client, &query).await.unwrap(), OutputFormat::Text).unwrap();

    let lines: Vec<&str> = first.lines().collect();
    assert!(lines[0].contains("bulbasaur"));
    assert!(lines[1].contains("ivysaur"));
    assert!(lines[2].contains("venusaur"));

    // Repeated runs against the same backend are byte-identical
    assert_eq!(first, second);
}

#[tokio::test]
async fn name_query_yields_single_record() {
    let server = MockServer::start().await;
    mount_pokemon(&server, "pikachu", 25, "pikachu", 0).await;

    let client = Client::with_base_url(&server.uri()).unwrap();
    let query = Query::name("pikachu").unwrap();

    let report = execute(&client, &query).await.unwrap();

    assert!(report.is_complete());
    assert_eq!(report.pokemon.len(), 1);
    assert_eq!(report.pokemon[0].id, 25);
}

#[tokio::test]
async fn inverted_range_is_rejected_before_any_network_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = Query::parse_range("1025-1").unwrap_err();
    assert_eq!(err, QueryError::Inverted { low: 1025, high: 1 });

    // Mock expectation of zero requests is verified on server drop
    server.verify().await;
}

#[tokio::test]
async fn out_of_bounds_number_is_rejected_before_any_network_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = Query::number(0).unwrap_err();
    assert_eq!(err, QueryError::NumberOutOfBounds { number: 0, max: 1025 });

    let err = Query::number(2000).unwrap_err();
    assert_eq!(
        err,
        QueryError::NumberOutOfBounds {
            number: 2000,
            max: 1025
        }
    );

    server.verify().await;
}

#[tokio::test]
async fn partial_failure_appears_in_rendered_json() {
    let server = MockServer::start().await;
    mount_pokemon(&server, "1", 1, "bulbasaur", 0).await;
    Mock::given(method("GET"))
        .and(path("/pokemon/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    mount_pokemon(&server, "3", 3, "venusaur", 0).await;

    let client = Client::with_base_url(&server.uri()).unwrap();
    let query = Query::parse_range("1-3").unwrap();

    let report = execute(&client, &query).await.unwrap();
    let out = render(&report, OutputFormat::Json).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&out).unwrap();

    let ids: Vec<u64> = doc["pokemon"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(doc["failures"][0]["identifier"], "2");
}
