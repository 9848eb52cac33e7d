use common::Genre;

use crate::api::ApiService;

#[derive(Debug, Clone, Default)]
pub struct GenresListView {
    pub genres: Vec<Genre>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl GenresListView {
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
}
