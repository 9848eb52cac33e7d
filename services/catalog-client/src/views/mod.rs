//! View controllers. Each view value owns its own state for as long as the
//! view is open; nothing is shared between views.

mod game_create;
mod game_details;
mod game_edit;
mod games_list;
mod genres_list;

pub use game_create::GameCreateView;
pub use game_details::GameDetailsView;
pub use game_edit::GameEditView;
pub use games_list::{Confirm, GamesListView, delete_prompt};
pub use genres_list::GenresListView;
