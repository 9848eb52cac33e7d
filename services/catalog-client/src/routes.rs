use std::fmt;

/// Client-side locations, one per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    GamesList,
    NewGame,
    GameDetails(i64),
    EditGame(i64),
    Genres,
}

impl Route {
    /// Unknown paths redirect to the games list.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path
            .trim()
            .trim_start_matches('#')
            .trim_start_matches('!')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] | ["games"] => Route::GamesList,
            ["games", "new"] => Route::NewGame,
            ["games", id] => id.parse().map(Route::GameDetails).unwrap_or(Route::GamesList),
            ["games", id, "edit"] => id.parse().map(Route::EditGame).unwrap_or(Route::GamesList),
            ["genres"] => Route::Genres,
            _ => Route::GamesList,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::GamesList => "/games".to_string(),
            Route::NewGame => "/games/new".to_string(),
            Route::GameDetails(id) => format!("/games/{}", id),
            Route::EditGame(id) => format!("/games/{}/edit", id),
            Route::Genres => "/genres".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_games_both_open_the_list() {
        assert_eq!(Route::parse("/"), Route::GamesList);
        assert_eq!(Route::parse("/games"), Route::GamesList);
    }

    #[test]
    fn new_is_not_mistaken_for_an_id() {
        assert_eq!(Route::parse("/games/new"), Route::NewGame);
        assert_eq!(Route::parse("/games/7"), Route::GameDetails(7));
        assert_eq!(Route::parse("/games/7/edit"), Route::EditGame(7));
    }

    #[test]
    fn hash_bang_prefix_is_accepted() {
        assert_eq!(Route::parse("#!/genres"), Route::Genres);
    }

    #[test]
    fn anything_else_redirects_to_the_list() {
        assert_eq!(Route::parse("/publishers"), Route::GamesList);
        assert_eq!(Route::parse("/games/abc/edit"), Route::GamesList);
    }

    #[test]
    fn path_round_trips_through_parse() {
        for route in [Route::NewGame, Route::GameDetails(3), Route::EditGame(3), Route::Genres] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
