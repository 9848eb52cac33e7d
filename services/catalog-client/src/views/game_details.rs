use common::GameDetails;

use crate::api::ApiService;
use crate::routes::Route;

#[derive(Debug, Clone)]
pub struct GameDetailsView {
    pub id: i64,
    pub game: Option<GameDetails>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl GameDetailsView {
    pub async fn open(api: &ApiService, id: i64) -> Self {
        let mut view = Self {
            id,
            game: None,
            is_loading: true,
            error: None,
        };

        match api.get_game(id).await {
            Ok(game) => view.game = Some(game),
            Err(err) => view.error = Some(err.message()),
        }
        view.is_loading = false;

        view
    }

    pub fn go_back(&self) -> Route {
        Route::GamesList
    }

    pub fn edit(&self) -> Route {
        Route::EditGame(self.id)
    }
}
