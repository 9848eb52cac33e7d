use std::str::FromStr;

use chrono::NaiveDate;
use common::{GameDetails, GameSummary, Genre};
use rust_decimal::Decimal;

use crate::error::CatalogError;

// Price is persisted as exact decimal text.

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DbGame {
     pub id: i64,
     pub name: String,
     pub genre_id: i64,
     pub price: String,
     pub release_date: NaiveDate,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DbGameSummary {
     pub id: i64,
     pub name: String,
     pub genre_name: String,
     pub price: String,
     pub release_date: NaiveDate,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DbGenre {
     pub id: i64,
     pub name: String,
}

fn parse_price(id: i64, raw: &str) -> Result<Decimal, CatalogError> {
     Decimal::from_str(raw)
          .map_err(|e| CatalogError::CorruptRow(format!("game {} has price {:?}: {}", id, raw, e)))
}

impl TryFrom<DbGame> for GameDetails {
     type Error = CatalogError;

     fn try_from(row: DbGame) -> Result<Self, Self::Error> {
          Ok(GameDetails {
               price: parse_price(row.id, &row.price)?,
               id: row.id,
               name: row.name,
               genre_id: row.genre_id,
               release_date: row.release_date,
          })
     }
}

impl TryFrom<DbGameSummary> for GameSummary {
     type Error = CatalogError;

     fn try_from(row: DbGameSummary) -> Result<Self, Self::Error> {
          Ok(GameSummary {
               price: parse_price(row.id, &row.price)?,
               id: row.id,
               name: row.name,
               genre_name: row.genre_name,
               release_date: row.release_date,
          })
     }
}

impl From<DbGenre> for Genre {
     fn from(row: DbGenre) -> Self {
          Genre {
               id: row.id,
               name: row.name,
          }
     }
}
