use axum::{
    extract::{Json, Path},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use common::{GameDetails, GameSummary, Genre, details_from_payload};

use crate::db::{self, UnitOfWork};
use crate::error::CatalogError;
use crate::validation::ValidGame;

pub fn game_location(id: i64) -> String {
    format!("/games/{}", id)
}

pub async fn list_games(mut uow: UnitOfWork) -> Result<Json<Vec<GameSummary>>, CatalogError> {
    let games = db::list_games(&mut uow).await?;
    Ok(Json(games))
}

pub async fn get_game(
    mut uow: UnitOfWork,
    Path(id): Path<i64>,
) -> Result<Json<GameDetails>, CatalogError> {
    match db::get_game(&mut uow, id).await? {
        Some(game) => Ok(Json(game)),
        None => Err(CatalogError::NotFound),
    }
}

pub async fn create_game(
    mut uow: UnitOfWork,
    ValidGame(payload): ValidGame,
) -> Result<Response, CatalogError> {
    ensure_genre_exists(&mut uow, payload.genre_id).await?;

    let id = db::create_game(&mut uow, &payload).await?;
    tracing::info!(game_id = id, "game created");

    let game = details_from_payload(id, payload);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, game_location(id))],
        Json(game),
    )
        .into_response())
}

pub async fn update_game(
    mut uow: UnitOfWork,
    Path(id): Path<i64>,
    ValidGame(payload): ValidGame,
) -> Result<StatusCode, CatalogError> {
    if !db::game_exists(&mut uow, id).await? {
        return Err(CatalogError::NotFound);
    }
    ensure_genre_exists(&mut uow, payload.genre_id).await?;

    // Last write wins; a delete between the check and here surfaces as 404.
    if !db::update_game(&mut uow, id, &payload).await? {
        return Err(CatalogError::NotFound);
    }
    tracing::info!(game_id = id, "game updated");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_game(mut uow: UnitOfWork, Path(id): Path<i64>) -> Result<StatusCode, CatalogError> {
    let removed = db::delete_game(&mut uow, id).await?;
    tracing::info!(game_id = id, removed, "game delete");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_genres(mut uow: UnitOfWork) -> Result<Json<Vec<Genre>>, CatalogError> {
    let genres = db::list_genres(&mut uow).await?;
    Ok(Json(genres))
}

async fn ensure_genre_exists(uow: &mut UnitOfWork, genre_id: i64) -> Result<(), CatalogError> {
    if db::genre_exists(uow, genre_id).await? {
        Ok(())
    } else {
        Err(CatalogError::field(
            "genreId",
            format!("Genre {} does not exist.", genre_id),
        ))
    }
}
