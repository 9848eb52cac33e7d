mod support;

use axum::http::{Method, StatusCode, header};
use serde_json::{Value, json};

use support::{send, send_raw, test_app};

fn street_fighter() -> Value {
    json!({
        "name": "Street Fighter II",
        "genreId": 1,
        "price": 19.99,
        "releaseDate": "1991-02-06"
    })
}

#[tokio::test]
async fn genres_are_seeded_in_order() {
    let app = test_app().await;

    let res = send(&app, Method::GET, "/genres", None).await;

    assert_eq!(res.status, StatusCode::OK);
    let genres = res.body.expect("json body");
    let names: Vec<&str> = genres
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Fighting", "RPG", "Platformer", "Racing", "Sports"]);
    assert_eq!(genres[0]["id"], 1);
}

#[tokio::test]
async fn list_is_empty_before_any_create() {
    let app = test_app().await;

    let res = send(&app, Method::GET, "/games", None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, Some(json!([])));
}

#[tokio::test]
async fn create_then_get_returns_the_same_fields() {
    let app = test_app().await;

    let created = send(&app, Method::POST, "/games", Some(street_fighter())).await;
    assert_eq!(created.status, StatusCode::CREATED);

    let body = created.body.expect("created body");
    let id = body["id"].as_i64().expect("store-assigned id");
    assert_eq!(
        created.headers.get(header::LOCATION).unwrap(),
        &format!("/games/{}", id)
    );

    let fetched = send(&app, Method::GET, &format!("/games/{}", id), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    let game = fetched.body.expect("detail body");
    assert_eq!(game["id"], id);
    assert_eq!(game["name"], "Street Fighter II");
    assert_eq!(game["genreId"], 1);
    assert_eq!(game["price"], 19.99);
    assert_eq!(game["releaseDate"], "1991-02-06");
    assert_eq!(game, body);
}

#[tokio::test]
async fn get_unknown_game_is_not_found_without_body() {
    let app = test_app().await;

    let res = send(&app, Method::GET, "/games/999", None).await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body.is_none());
}

#[tokio::test]
async fn summary_genre_name_matches_referenced_genre() {
    let app = test_app().await;

    let genres = send(&app, Method::GET, "/genres", None).await.body.unwrap();
    for genre in genres.as_array().unwrap() {
        let payload = json!({
            "name": format!("Game of {}", genre["name"].as_str().unwrap()),
            "genreId": genre["id"],
            "price": 9.5,
            "releaseDate": "2001-09-30"
        });
        let res = send(&app, Method::POST, "/games", Some(payload)).await;
        assert_eq!(res.status, StatusCode::CREATED);
    }

    let games = send(&app, Method::GET, "/games", None).await.body.unwrap();
    let games = games.as_array().unwrap();
    assert_eq!(games.len(), 5);

    for game in games {
        let id = game["id"].as_i64().unwrap();
        let detail = send(&app, Method::GET, &format!("/games/{}", id), None)
            .await
            .body
            .unwrap();
        let genre = genres
            .as_array()
            .unwrap()
            .iter()
            .find(|g| g["id"] == detail["genreId"])
            .unwrap();
        assert_eq!(game["genreName"], genre["name"]);
        assert!(game.get("genreId").is_none());
    }
}

#[tokio::test]
async fn list_is_ordered_by_id() {
    let app = test_app().await;

    for name in ["Zelda", "Asteroids", "Mario Kart"] {
        let payload = json!({ "name": name, "genreId": 3, "price": 1, "releaseDate": "1990-01-01" });
        send(&app, Method::POST, "/games", Some(payload)).await;
    }

    let games = send(&app, Method::GET, "/games", None).await.body.unwrap();
    let names: Vec<&str> = games
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Zelda", "Asteroids", "Mario Kart"]);
}

#[tokio::test]
async fn update_replaces_every_field() {
    let app = test_app().await;
    let created = send(&app, Method::POST, "/games", Some(street_fighter())).await;
    let id = created.body.unwrap()["id"].as_i64().unwrap();

    let replacement = json!({
        "name": "Street Fighter II Turbo",
        "genreId": 2,
        "price": 24.5,
        "releaseDate": "1992-12-01"
    });
    let res = send(&app, Method::PUT, &format!("/games/{}", id), Some(replacement)).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(res.body.is_none());

    let game = send(&app, Method::GET, &format!("/games/{}", id), None)
        .await
        .body
        .unwrap();
    assert_eq!(game["name"], "Street Fighter II Turbo");
    assert_eq!(game["genreId"], 2);
    assert_eq!(game["price"], 24.5);
    assert_eq!(game["releaseDate"], "1992-12-01");
}

#[tokio::test]
async fn update_of_unknown_game_is_not_found_and_creates_nothing() {
    let app = test_app().await;

    let res = send(&app, Method::PUT, "/games/42", Some(street_fighter())).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let games = send(&app, Method::GET, "/games", None).await.body.unwrap();
    assert_eq!(games, json!([]));
    let fetched = send(&app, Method::GET, "/games/42", None).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_without_genre_is_a_field_error() {
    let app = test_app().await;
    let created = send(&app, Method::POST, "/games", Some(street_fighter())).await;
    let id = created.body.unwrap()["id"].as_i64().unwrap();

    let payload = json!({ "name": "No Genre", "price": 3, "releaseDate": "2000-01-01" });
    let res = send(&app, Method::PUT, &format!("/games/{}", id), Some(payload)).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let problem = res.body.unwrap();
    assert_eq!(problem["status"], 400);
    assert_eq!(problem["errors"]["genreId"][0], "The genreId field is required.");
}

#[tokio::test]
async fn create_with_missing_fields_lists_each_one() {
    let app = test_app().await;

    let res = send(&app, Method::POST, "/games", Some(json!({}))).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let errors = res.body.unwrap()["errors"].clone();
    for field in ["name", "genreId", "price", "releaseDate"] {
        assert!(errors.get(field).is_some(), "missing error for {}", field);
    }

    let games = send(&app, Method::GET, "/games", None).await.body.unwrap();
    assert_eq!(games, json!([]));
}

#[tokio::test]
async fn create_with_unknown_genre_is_rejected() {
    let app = test_app().await;

    let payload = json!({ "name": "Orphan", "genreId": 77, "price": 1, "releaseDate": "2000-01-01" });
    let res = send(&app, Method::POST, "/games", Some(payload)).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body.unwrap()["errors"]["genreId"][0], "Genre 77 does not exist.");
}

#[tokio::test]
async fn malformed_json_carries_a_title() {
    let app = test_app().await;

    let res = send_raw(&app, Method::POST, "/games", "{ not json").await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let problem = res.body.unwrap();
    assert_eq!(problem["title"], "The request body could not be read.");
}

#[tokio::test]
async fn delete_is_idempotent() {
    let app = test_app().await;
    let created = send(&app, Method::POST, "/games", Some(street_fighter())).await;
    let id = created.body.unwrap()["id"].as_i64().unwrap();
    let uri = format!("/games/{}", id);

    let first = send(&app, Method::DELETE, &uri, None).await;
    let second = send(&app, Method::DELETE, &uri, None).await;

    assert_eq!(first.status, StatusCode::NO_CONTENT);
    assert_eq!(second.status, StatusCode::NO_CONTENT);
    assert_eq!(send(&app, Method::GET, &uri, None).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_of_never_created_id_succeeds() {
    let app = test_app().await;

    let res = send(&app, Method::DELETE, "/games/12345", None).await;

    assert_eq!(res.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = test_app().await;

    let res = send(&app, Method::GET, "/genres", None).await;

    let id = res.headers.get("x-request-id").expect("request id header");
    assert_eq!(id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = test_app().await;

    let request = axum::http::Request::builder()
        .method(Method::GET)
        .uri("/games")
        .header(header::ORIGIN, "http://example.test")
        .body(axum::body::Body::empty())
        .unwrap();
    let res = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(
        res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
