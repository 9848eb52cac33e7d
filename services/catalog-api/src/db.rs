use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use axum::{extract::FromRequestParts, http::request::Parts};
use common::{GameDetails, GamePayload, GameSummary, Genre};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteConnection};

use crate::AppState;
use crate::config::Config;
use crate::error::CatalogError;
use crate::models::{DbGame, DbGameSummary, DbGenre};

/// Genres inserted into an empty store, in id order.
pub const SEED_GENRES: [&str; 5] = ["Fighting", "RPG", "Platformer", "Racing", "Sports"];

pub async fn connect(config: &Config) -> Result<SqlitePool, CatalogError> {
     let options = SqliteConnectOptions::from_str(&config.database_url)?
          .create_if_missing(true)
          .foreign_keys(true);

     let pool = SqlitePoolOptions::new()
          .max_connections(config.max_connections)
          .connect_with(options)
          .await?;

     Ok(pool)
}

/// Single-connection pool over a private in-memory database. The connection is
/// never recycled, since closing it would discard the data.
pub async fn connect_in_memory() -> Result<SqlitePool, CatalogError> {
     let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

     let pool = SqlitePoolOptions::new()
          .max_connections(1)
          .idle_timeout(None)
          .max_lifetime(None)
          .connect_with(options)
          .await?;

     Ok(pool)
}

/// Applies embedded migrations and seeds genres if none exist.
pub async fn prepare(pool: &SqlitePool) -> Result<(), CatalogError> {
     sqlx::migrate!("./migrations").run(pool).await?;

     let seeded = seed_genres(pool).await?;
     if seeded > 0 {
          tracing::info!(count = seeded, "seeded genres");
     }

     Ok(())
}

pub async fn seed_genres(pool: &SqlitePool) -> Result<u64, CatalogError> {
     let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM genres")
          .fetch_one(pool)
          .await?;

     if count > 0 {
          return Ok(0);
     }

     let mut inserted = 0;
     for name in SEED_GENRES {
          inserted += sqlx::query("INSERT INTO genres (name) VALUES (?)")
               .bind(name)
               .execute(pool)
               .await?
               .rows_affected();
     }

     Ok(inserted)
}

/// One pooled connection held for the lifetime of a single request.
pub struct UnitOfWork(PoolConnection<Sqlite>);

impl FromRequestParts<AppState> for UnitOfWork {
     type Rejection = CatalogError;

     async fn from_request_parts(
          _parts: &mut Parts,
          state: &AppState,
     ) -> Result<Self, Self::Rejection> {
          let conn = state.pool.acquire().await?;
          Ok(Self(conn))
     }
}

impl Deref for UnitOfWork {
     type Target = SqliteConnection;

     fn deref(&self) -> &Self::Target {
          &self.0
     }
}

impl DerefMut for UnitOfWork {
     fn deref_mut(&mut self) -> &mut Self::Target {
          &mut self.0
     }
}

pub async fn list_games(conn: &mut SqliteConnection) -> Result<Vec<GameSummary>, CatalogError> {
     let rows = sqlx::query_as::<_, DbGameSummary>(
          r#"
          SELECT games.id, games.name, genres.name AS genre_name, games.price, games.release_date
          FROM games
          JOIN genres ON genres.id = games.genre_id
          ORDER BY games.id
          "#,
     )
     .fetch_all(&mut *conn)
     .await?;

     rows.into_iter().map(GameSummary::try_from).collect()
}

pub async fn get_game(
     conn: &mut SqliteConnection,
     id: i64,
) -> Result<Option<GameDetails>, CatalogError> {
     let row = sqlx::query_as::<_, DbGame>(
          r#"
          SELECT id, name, genre_id, price, release_date
          FROM games
          WHERE id = ?
          "#,
     )
     .bind(id)
     .fetch_optional(&mut *conn)
     .await?;

     row.map(GameDetails::try_from).transpose()
}

pub async fn game_exists(conn: &mut SqliteConnection, id: i64) -> Result<bool, CatalogError> {
     let found: Option<i64> = sqlx::query_scalar("SELECT id FROM games WHERE id = ?")
          .bind(id)
          .fetch_optional(&mut *conn)
          .await?;

     Ok(found.is_some())
}

pub async fn genre_exists(conn: &mut SqliteConnection, id: i64) -> Result<bool, CatalogError> {
     let found: Option<i64> = sqlx::query_scalar("SELECT id FROM genres WHERE id = ?")
          .bind(id)
          .fetch_optional(&mut *conn)
          .await?;

     Ok(found.is_some())
}

/// Returns the store-assigned id.
pub async fn create_game(
     conn: &mut SqliteConnection,
     game: &GamePayload,
) -> Result<i64, CatalogError> {
     let result = sqlx::query(
          r#"
          INSERT INTO games (name, genre_id, price, release_date)
          VALUES (?, ?, ?, ?)
          "#,
     )
     .bind(&game.name)
     .bind(game.genre_id)
     .bind(game.price.to_string())
     .bind(game.release_date)
     .execute(&mut *conn)
     .await?;

     Ok(result.last_insert_rowid())
}

/// Full replace. Returns `false` when no game has this id.
pub async fn update_game(
     conn: &mut SqliteConnection,
     id: i64,
     game: &GamePayload,
) -> Result<bool, CatalogError> {
     let result = sqlx::query(
          r#"
          UPDATE games
          SET name = ?, genre_id = ?, price = ?, release_date = ?
          WHERE id = ?
          "#,
     )
     .bind(&game.name)
     .bind(game.genre_id)
     .bind(game.price.to_string())
     .bind(game.release_date)
     .bind(id)
     .execute(&mut *conn)
     .await?;

     Ok(result.rows_affected() > 0)
}

pub async fn delete_game(conn: &mut SqliteConnection, id: i64) -> Result<u64, CatalogError> {
     let result = sqlx::query("DELETE FROM games WHERE id = ?")
          .bind(id)
          .execute(&mut *conn)
          .await?;

     Ok(result.rows_affected())
}

pub async fn list_genres(conn: &mut SqliteConnection) -> Result<Vec<Genre>, CatalogError> {
     let rows = sqlx::query_as::<_, DbGenre>("SELECT id, name FROM genres ORDER BY id")
          .fetch_all(&mut *conn)
          .await?;

     Ok(rows.into_iter().map(Genre::from).collect())
}
