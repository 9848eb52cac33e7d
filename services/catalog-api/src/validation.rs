use std::str::FromStr;

use axum::{
     Json,
     extract::{FromRequest, Request},
};
use chrono::NaiveDate;
use common::{FieldErrors, GamePayload};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::error::CatalogError;

pub const NAME_MAX_LEN: usize = 50;

/// Request body as received. Fields stay untyped so that a wrong type on one
/// field is reported alongside problems on the others.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGamePayload {
     pub name: Option<Value>,
     pub genre_id: Option<Value>,
     pub price: Option<Value>,
     pub release_date: Option<Value>,
}

fn required(errors: &mut FieldErrors, field: &str) {
     push(errors, field, format!("The {} field is required.", field));
}

fn push(errors: &mut FieldErrors, field: &str, message: String) {
     errors.entry(field.to_string()).or_default().push(message);
}

pub fn validate_name(value: Option<&Value>, errors: &mut FieldErrors) -> Option<String> {
     match value {
          None => {
               required(errors, "name");
               None
          }
          Some(Value::String(s)) if s.trim().is_empty() => {
               required(errors, "name");
               None
          }
          Some(Value::String(s)) if s.chars().count() > NAME_MAX_LEN => {
               push(
                    errors,
                    "name",
                    format!("The name field must be at most {} characters long.", NAME_MAX_LEN),
               );
               None
          }
          Some(Value::String(s)) => Some(s.clone()),
          Some(_) => {
               push(errors, "name", "The name field must be a string.".to_string());
               None
          }
     }
}

pub fn validate_genre_id(value: Option<&Value>, errors: &mut FieldErrors) -> Option<i64> {
     match value {
          None => {
               required(errors, "genreId");
               None
          }
          Some(v) => match v.as_i64() {
               Some(id) => Some(id),
               None => {
                    push(errors, "genreId", "The genreId field must be an integer.".to_string());
                    None
               }
          },
     }
}

pub fn validate_price(value: Option<&Value>, errors: &mut FieldErrors) -> Option<Decimal> {
     let number = match value {
          None => {
               required(errors, "price");
               return None;
          }
          Some(Value::Number(n)) => n.to_string(),
          Some(_) => {
               push(errors, "price", "The price field must be a number.".to_string());
               return None;
          }
     };

     let parsed = Decimal::from_str(&number).or_else(|_| Decimal::from_scientific(&number));
     match parsed {
          Ok(price) if price.is_sign_negative() && !price.is_zero() => {
               push(errors, "price", "The price field must not be negative.".to_string());
               None
          }
          Ok(price) => Some(price),
          Err(_) => {
               push(errors, "price", "The price field is out of range.".to_string());
               None
          }
     }
}

pub fn validate_release_date(value: Option<&Value>, errors: &mut FieldErrors) -> Option<NaiveDate> {
     match value {
          None => {
               required(errors, "releaseDate");
               None
          }
          Some(Value::String(s)) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
               Ok(date) => Some(date),
               Err(_) => {
                    push(
                         errors,
                         "releaseDate",
                         "The releaseDate field must be a date in YYYY-MM-DD form.".to_string(),
                    );
                    None
               }
          },
          Some(_) => {
               push(
                    errors,
                    "releaseDate",
                    "The releaseDate field must be a date in YYYY-MM-DD form.".to_string(),
               );
               None
          }
     }
}

impl RawGamePayload {
     pub fn validate(self) -> Result<GamePayload, CatalogError> {
          let mut errors = FieldErrors::new();

          let name = validate_name(self.name.as_ref(), &mut errors);
          let genre_id = validate_genre_id(self.genre_id.as_ref(), &mut errors);
          let price = validate_price(self.price.as_ref(), &mut errors);
          let release_date = validate_release_date(self.release_date.as_ref(), &mut errors);

          match (name, genre_id, price, release_date) {
               (Some(name), Some(genre_id), Some(price), Some(release_date)) if errors.is_empty() => {
                    Ok(GamePayload {
                         name,
                         genre_id,
                         price,
                         release_date,
                    })
               }
               _ => Err(CatalogError::Validation(errors)),
          }
     }
}

/// Extractor yielding a payload that passed field validation.
pub struct ValidGame(pub GamePayload);

impl<S> FromRequest<S> for ValidGame
where
     S: Send + Sync,
{
     type Rejection = CatalogError;

     async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
          let Json(raw) = Json::<RawGamePayload>::from_request(req, state).await?;
          Ok(ValidGame(raw.validate()?))
     }
}
