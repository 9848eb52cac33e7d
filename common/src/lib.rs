use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod models {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Genre {
        pub id: i64,
        pub name: String,
    }

    /// List row: the game joined with its genre's display name.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GameSummary {
        pub id: i64,
        pub name: String,
        pub genre_name: String,
        #[serde(with = "rust_decimal::serde::float")]
        pub price: Decimal,
        pub release_date: NaiveDate,
    }

    /// Single-item shape, exposing the raw genre reference.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GameDetails {
        pub id: i64,
        pub name: String,
        pub genre_id: i64,
        #[serde(with = "rust_decimal::serde::float")]
        pub price: Decimal,
        pub release_date: NaiveDate,
    }

    /// Body of create and update requests. Update is a full replace.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GamePayload {
        pub name: String,
        pub genre_id: i64,
        #[serde(with = "rust_decimal::serde::float")]
        pub price: Decimal,
        pub release_date: NaiveDate,
    }
}

pub mod utils {
    use super::*;

    pub fn details_from_payload(id: i64, payload: GamePayload) -> GameDetails {
        GameDetails {
            id,
            name: payload.name,
            genre_id: payload.genre_id,
            price: payload.price,
            release_date: payload.release_date,
        }
    }

    pub fn payload_from_details(details: &GameDetails) -> GamePayload {
        GamePayload {
            name: details.name.clone(),
            genre_id: details.genre_id,
            price: details.price,
            release_date: details.release_date,
        }
    }
}

pub mod errors {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Serialize};

    /// Field name (as it appears on the wire) to every message raised for it.
    pub type FieldErrors = BTreeMap<String, Vec<String>>;

    /// Problem details body returned with 4xx/5xx responses.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct ProblemDetails {
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        pub type_uri: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub status: Option<u16>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub detail: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub errors: Option<FieldErrors>,
    }

    impl ProblemDetails {
        pub fn new(status: u16) -> Self {
            Self {
                type_uri: Some(format!("https://httpstatuses.io/{}", status)),
                status: Some(status),
                ..Self::default()
            }
        }

        pub fn with_title(mut self, title: impl Into<String>) -> Self {
            self.title = Some(title.into());
            self
        }

        pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
            self.detail = Some(detail.into());
            self
        }

        pub fn with_errors(mut self, errors: FieldErrors) -> Self {
            self.errors = Some(errors);
            self
        }
    }
}

pub use errors::*;
pub use models::*;
pub use utils::*;
