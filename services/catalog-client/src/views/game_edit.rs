use common::{FieldErrors, Genre};

use crate::api::ApiService;
use crate::form::GameForm;
use crate::routes::Route;

#[derive(Debug, Clone)]
pub struct GameEditView {
    pub id: i64,
    pub genres: Vec<Genre>,
    pub form: Option<GameForm>,
    pub form_errors: FieldErrors,
    pub submitted: bool,
    pub is_loading: bool,
    pub is_saving: bool,
    pub error: Option<String>,
}

impl GameEditView {
    /// Loads the genre choices and the game concurrently; loading ends once
    /// both calls have finished, whatever their outcome.
    pub async fn open(api: &ApiService, id: i64) -> Self {
        let mut view = Self {
            id,
            genres: Vec::new(),
            form: None,
            form_errors: FieldErrors::new(),
            submitted: false,
            is_loading: true,
            is_saving: false,
            error: None,
        };

        let (genres, game) = tokio::join!(api.get_genres(), api.get_game(id));

        match genres {
            Ok(genres) => view.genres = genres,
            Err(err) => view.error = Some(err.message()),
        }
        match game {
            Ok(game) => view.form = Some(GameForm::from_details(&game)),
            Err(err) => view.error = Some(err.message()),
        }
        view.is_loading = false;

        view
    }

    /// Sends the whole form as a full replacement.
    pub async fn submit(&mut self, api: &ApiService) -> Option<Route> {
        let Some(form) = &self.form else {
            return None;
        };

        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(errors) => {
                self.form_errors = errors;
                self.submitted = true;
                return None;
            }
        };
        self.form_errors.clear();

        self.is_saving = true;
        self.error = None;

        let outcome = match api.update_game(self.id, &payload).await {
            Ok(()) => {
                tracing::info!(game_id = self.id, "game updated");
                Some(Route::GamesList)
            }
            Err(err) => {
                self.error = Some(err.message());
                None
            }
        };

        self.is_saving = false;
        outcome
    }

    pub fn cancel(&self) -> Route {
        Route::GamesList
    }
}
