use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use common::{FieldErrors, GameDetails, GamePayload};
use regex::Regex;
use rust_decimal::Decimal;

static DATE_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{4}-\d{2}-\d{2})").ok());

/// Release date as the input control produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Text(String),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
}

impl Default for DateInput {
    fn default() -> Self {
        DateInput::Text(String::new())
    }
}

impl DateInput {
    /// `YYYY-MM-DD`, whatever the input representation. Timestamps use their
    /// UTC calendar date; text keeps only a leading date.
    pub fn normalized(&self) -> Option<String> {
        match self {
            DateInput::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
            DateInput::Timestamp(ts) => Some(ts.date_naive().format("%Y-%m-%d").to_string()),
            DateInput::Text(text) => DATE_PREFIX
                .as_ref()?
                .captures(text)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string()),
        }
    }
}

/// Editable state of the create and edit forms. Numeric fields stay strings
/// until submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameForm {
    pub name: String,
    pub genre_id: String,
    pub price: String,
    pub release_date: DateInput,
}

impl GameForm {
    pub fn from_details(game: &GameDetails) -> Self {
        Self {
            name: game.name.clone(),
            genre_id: game.genre_id.to_string(),
            price: game.price.to_string(),
            release_date: DateInput::Date(game.release_date),
        }
    }

    /// Parses and normalizes every field; on failure returns the messages per
    /// wire field name and nothing is sent.
    pub fn to_payload(&self) -> Result<GamePayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            add(&mut errors, "name", "Name is required.");
        }

        let genre_id = match self.genre_id.trim() {
            "" => {
                add(&mut errors, "genreId", "Genre is required.");
                None
            }
            raw => match raw.parse::<i64>() {
                Ok(id) => Some(id),
                Err(_) => {
                    add(&mut errors, "genreId", "Genre must be a whole number.");
                    None
                }
            },
        };

        let price = match self.price.trim() {
            "" => {
                add(&mut errors, "price", "Price is required.");
                None
            }
            raw => match Decimal::from_str(raw) {
                Ok(price) => Some(price),
                Err(_) => {
                    add(&mut errors, "price", "Price must be a number.");
                    None
                }
            },
        };

        let release_date = match self.release_date.normalized() {
            Some(text) => match NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    add(&mut errors, "releaseDate", "Release date is not a valid date.");
                    None
                }
            },
            None => {
                add(&mut errors, "releaseDate", "Release date is required.");
                None
            }
        };

        match (genre_id, price, release_date) {
            (Some(genre_id), Some(price), Some(release_date)) if errors.is_empty() => {
                Ok(GamePayload {
                    name: name.to_string(),
                    genre_id,
                    price,
                    release_date,
                })
            }
            _ => Err(errors),
        }
    }
}

fn add(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}
