use common::{FieldErrors, Genre};

use crate::api::ApiService;
use crate::form::GameForm;
use crate::routes::Route;

#[derive(Debug, Clone, Default)]
pub struct GameCreateView {
    pub genres: Vec<Genre>,
    pub form: GameForm,
    pub form_errors: FieldErrors,
    pub submitted: bool,
    pub is_loading: bool,
    pub is_saving: bool,
    pub error: Option<String>,
}

impl GameCreateView {
    /// Opens an empty form with the genre choices loaded.
    pub async fn open(api: &ApiService) -> Self {
        let mut view = Self {
            is_loading: true,
            ..Self::default()
        };

        match api.get_genres().await {
            Ok(genres) => view.genres = genres,
            Err(err) => view.error = Some(err.message()),
        }
        view.is_loading = false;

        view
    }

    /// Returns where to navigate on success. An invalid form is marked
    /// submitted and nothing is sent.
    pub async fn submit(&mut self, api: &ApiService) -> Option<Route> {
        let payload = match self.form.to_payload() {
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

        let outcome = match api.create_game(&payload).await {
            Ok(created) => {
                tracing::info!(game_id = created.id, "game created");
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
