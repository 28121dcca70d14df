//! End-to-end scenarios through the full application router.
//!
//! Requests go through routing, extraction, the service layer and the database, covering
//! behavior the handler tests cannot observe such as path matching, malformed bodies and
//! the OpenAPI document.

use axum::http::StatusCode;
use holonet_test_utils::prelude::*;

use crate::util::{body_json, delete, get, post, send};

/// Tests the create, read and delete cycle of a person.
///
/// Expected: 201 on create, 200 on read and delete, 404 once deleted
#[tokio::test]
async fn person_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = send(&test, post("/people", r#"{"name":"Luke"}"#)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "id": 1, "name": "Luke" })
    );

    let resp = send(&test, get("/people/1")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "id": 1, "name": "Luke" })
    );

    let resp = send(&test, delete("/people/1")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "message": "Person with ID 1 has been deleted" })
    );

    let resp = send(&test, get("/people/1")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Person not found" })
    );

    Ok(())
}

/// Tests that every catalog is served under its own path.
///
/// Expected: each list only contains its own records
#[tokio::test]
async fn catalogs_are_independent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_person("Yoda")
        .with_planet("Dagobah")
        .with_vehicle("X-wing")
        .build()
        .await?;

    for (uri, name) in [
        ("/people", "Yoda"),
        ("/planets", "Dagobah"),
        ("/vehicles", "X-wing"),
    ] {
        let resp = send(&test, get(uri)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!([{ "id": 1, "name": name }])
        );
    }

    Ok(())
}

/// Tests creating a planet with a body lacking the name, and with a malformed body.
///
/// Expected: 400 with an error body in both cases
#[tokio::test]
async fn create_rejects_missing_or_malformed_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    for body in [r#"{}"#, r#"{"name":""}"#, "not json"] {
        let resp = send(&test, post("/planets", body)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({ "error": "Missing 'name' field" })
        );
    }

    let resp = send(&test, get("/planets")).await;
    assert_eq!(body_json(resp).await, serde_json::json!([]));

    Ok(())
}

/// Tests adding the same favorite twice and listing it.
///
/// Expected: 201 then 409, a single favorite with only planets_id set
#[tokio::test]
async fn duplicate_favorite_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user(1)
        .build()
        .await?;

    let resp = send(&test, post("/favorite/planet/5", r#"{"user_id":1}"#)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = send(&test, post("/favorite/planet/5", r#"{"user_id":1}"#)).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Favorite already exists" })
    );

    let resp = send(&test, get("/users/favorites?user_id=1")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!([{
            "id": 1,
            "user_id": 1,
            "people_id": null,
            "planets_id": 5,
            "vehicle_id": null
        }])
    );

    Ok(())
}

/// Tests adding favorites with an absent user ID or an unknown user.
///
/// Expected: 400 for the absent ID, 404 for the unknown user
#[tokio::test]
async fn favorite_requires_existing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = send(&test, post("/favorite/people/1", r#"{}"#)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "User ID is required" })
    );

    let resp = send(&test, post("/favorite/vehicle/1", r#"{"user_id":7}"#)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "User not found" })
    );

    assert_eq!(test.favorite().count().await?, 0);

    Ok(())
}

/// Tests removing the same favorite twice.
///
/// Expected: 200 then 404
#[tokio::test]
async fn favorite_is_removed_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user(1)
        .with_favorite(1, CatalogKind::Vehicle, 2)
        .build()
        .await?;

    let resp = send(&test, delete("/favorite/vehicle/2?user_id=1")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "message": "Favorite vehicle deleted" })
    );

    let resp = send(&test, delete("/favorite/vehicle/2?user_id=1")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Favorite not found" })
    );

    Ok(())
}

/// Tests that deleting a planet removes the favorites pointing at it.
///
/// Expected: the user's favorites no longer list the planet
#[tokio::test]
async fn deleting_planet_removes_its_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user(1)
        .with_planet("Alderaan")
        .with_favorite(1, CatalogKind::Planet, 1)
        .with_favorite(1, CatalogKind::Vehicle, 1)
        .build()
        .await?;

    let resp = send(&test, delete("/planets/1")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&test, get("/users/favorites?user_id=1")).await;
    let favorites = body_json(resp).await;
    assert_eq!(favorites.as_array().map(Vec::len), Some(1));
    assert_eq!(favorites[0]["vehicle_id"], serde_json::json!(1));

    Ok(())
}

/// Tests listing favorites without a user ID.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn user_favorites_require_user_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = send(&test, get("/users/favorites")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "User ID is required" })
    );

    Ok(())
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 OK with the catalog paths documented
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = send(&test, get("/api/docs/openapi.json")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let doc = body_json(resp).await;
    assert!(doc["paths"].get("/people/{id}").is_some());
    assert!(doc["paths"].get("/favorite/planet/{id}").is_some());

    Ok(())
}

/// Tests catalog paths whose ID is not an integer.
///
/// Expected: 404 with the catalog's error body, as for any unknown ID
#[tokio::test]
async fn non_integer_id_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_person("Luke")
        .build()
        .await?;

    let resp = send(&test, get("/people/abc")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Person not found" })
    );

    let resp = send(&test, delete("/vehicles/99999999999")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Vehicle not found" })
    );

    let resp = send(&test, get("/people")).await;
    assert_eq!(body_json(resp).await.as_array().map(Vec::len), Some(1));

    Ok(())
}

/// Tests favorite paths whose target ID is not an integer.
///
/// Expected: 404 with an error body and no favorite stored
#[tokio::test]
async fn non_integer_favorite_target_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user(1)
        .build()
        .await?;

    let resp = send(&test, post("/favorite/planet/abc", r#"{"user_id":1}"#)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Planet not found" })
    );

    let resp = send(&test, delete("/favorite/people/abc?user_id=1")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Favorite not found" })
    );

    assert_eq!(test.favorite().count().await?, 0);

    Ok(())
}

/// Tests API paths with a trailing slash.
///
/// Expected: served like the same path without the slash
#[tokio::test]
async fn trailing_slash_is_ignored() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_planet("Hoth")
        .build()
        .await?;

    let resp = send(&test, get("/planets/")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!([{ "id": 1, "name": "Hoth" }])
    );

    let resp = send(&test, get("/planets/1/")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&test, post("/vehicles/", r#"{"name":"Speeder"}"#)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests the Swagger UI entry point next to the slash trimming.
///
/// Expected: the index page is served at `/api/docs/`
#[tokio::test]
async fn serves_swagger_ui_index() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = send(&test, get("/api/docs/")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
