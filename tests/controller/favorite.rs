//! Tests for the favorite endpoints.
//!
//! Covers the add and remove handlers for each target kind, including validation of the user
//! ID, unknown users, duplicates and removal of missing favorites.

use holonet::{
    model::favorite::CreateFavoriteDto,
    server::controller::{favorite, util::UserIdQuery},
};

use super::*;

fn body(user_id: Option<i32>) -> Result<Json<CreateFavoriteDto>, axum::extract::rejection::JsonRejection> {
    Ok(Json(CreateFavoriteDto { user_id }))
}

fn query(user_id: Option<&str>) -> Query<UserIdQuery> {
    Query(UserIdQuery {
        user_id: user_id.map(str::to_string),
    })
}

/// Tests adding a planet favorite.
///
/// Expected: 201 Created with only planets_id set
#[tokio::test]
async fn adds_planet_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user(1)
        .build()
        .await?;

    let resp = favorite::add_favorite_planet(
        State(test.to_app_state::<AppState>()),
        Ok(Path(5)),
        body(Some(1)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({
            "id": 1,
            "user_id": 1,
            "people_id": null,
            "planets_id": 5,
            "vehicle_id": null
        })
    );

    Ok(())
}

/// Tests adding a favorite without a user ID.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn add_fails_for_missing_user_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = favorite::add_favorite_person(
        State(test.to_app_state::<AppState>()),
        Ok(Path(1)),
        body(None),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "User ID is required" })
    );

    Ok(())
}

/// Tests adding a favorite for a user that does not exist.
///
/// Expected: 404 Not Found and no favorite stored
#[tokio::test]
async fn add_fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = favorite::add_favorite_vehicle(
        State(test.to_app_state::<AppState>()),
        Ok(Path(1)),
        body(Some(9)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "User not found" })
    );
    assert_eq!(test.favorite().count().await?, 0);

    Ok(())
}

/// Tests adding a favorite the user already has.
///
/// Expected: 409 Conflict
#[tokio::test]
async fn add_fails_for_duplicate_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user(1)
        .with_favorite(1, CatalogKind::Vehicle, 3)
        .build()
        .await?;

    let resp = favorite::add_favorite_vehicle(
        State(test.to_app_state::<AppState>()),
        Ok(Path(3)),
        body(Some(1)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Favorite already exists" })
    );
    assert_eq!(test.favorite().count().await?, 1);

    Ok(())
}

/// Tests removing a person favorite.
///
/// Expected: 200 OK with a confirmation message
#[tokio::test]
async fn removes_person_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user(1)
        .with_favorite(1, CatalogKind::People, 2)
        .build()
        .await?;

    let resp = favorite::delete_favorite_person(
        State(test.to_app_state::<AppState>()),
        Ok(Path(2)),
        query(Some("1")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "message": "Favorite person deleted" })
    );
    assert_eq!(test.favorite().count().await?, 0);

    Ok(())
}

/// Tests removing a favorite without a user ID.
///
/// Expected: 404 Not Found, the favorite is kept
#[tokio::test]
async fn remove_fails_without_user_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user(1)
        .with_favorite(1, CatalogKind::Planet, 2)
        .build()
        .await?;

    let resp = favorite::delete_favorite_planet(
        State(test.to_app_state::<AppState>()),
        Ok(Path(2)),
        query(None),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Favorite not found" })
    );
    assert_eq!(test.favorite().count().await?, 1);

    Ok(())
}

/// Tests removing a favorite of a different kind than the one stored.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn remove_fails_for_other_target_kind() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user(1)
        .with_favorite(1, CatalogKind::Planet, 2)
        .build()
        .await?;

    let resp = favorite::delete_favorite_vehicle(
        State(test.to_app_state::<AppState>()),
        Ok(Path(2)),
        query(Some("1")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(test.favorite().count().await?, 1);

    Ok(())
}
