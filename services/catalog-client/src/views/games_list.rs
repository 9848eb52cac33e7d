use std::time::Instant;

use common::GameSummary;

use crate::api::ApiService;
use crate::banner::Banner;
use crate::routes::Route;

/// Asks the user to approve a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

pub fn delete_prompt(name: &str) -> String {
    format!("Delete \"{}\"? This cannot be undone.", name)
}

#[derive(Debug, Clone, Default)]
pub struct GamesListView {
    pub games: Vec<GameSummary>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub banner: Option<Banner>,
    pub deleting_id: Option<i64>,
}

impl GamesListView {
    pub async fn open(api: &ApiService) -> Self {
        let mut view = Self::default();
        view.load(api).await;
        view
    }

    /// A failed reload leaves the previously loaded games in place.
    pub async fn load(&mut self, api: &ApiService) {
        self.is_loading = true;
        self.error = None;

        match api.get_games().await {
            Ok(games) => self.games = games,
            Err(err) => self.error = Some(err.message()),
        }

        self.is_loading = false;
    }

    /// Returns `true` when the game was deleted. Nothing is sent unless the
    /// user confirms.
    pub async fn delete(
        &mut self,
        api: &ApiService,
        id: i64,
        name: &str,
        confirm: &impl Confirm,
    ) -> bool {
        if !confirm.confirm(&delete_prompt(name)) {
            return false;
        }

        self.deleting_id = Some(id);
        self.error = None;
        self.banner = None;

        let deleted = match api.delete_game(id).await {
            Ok(()) => {
                self.banner = Some(Banner::success(
                    format!("\"{}\" was deleted successfully.", name),
                    Instant::now(),
                ));
                self.games.retain(|g| g.id != id);
                true
            }
            Err(err) => {
                self.error = Some(err.message());
                false
            }
        };

        self.deleting_id = None;
        deleted
    }

    /// The success banner text, if it has not yet dismissed itself.
    pub fn success_message(&self, now: Instant) -> Option<&str> {
        self.banner
            .as_ref()
            .filter(|b| b.is_visible(now))
            .map(|b| b.message.as_str())
    }

    pub fn view_details(&self, id: i64) -> Route {
        Route::GameDetails(id)
    }

    pub fn edit_game(&self, id: i64) -> Route {
        Route::EditGame(id)
    }
}
