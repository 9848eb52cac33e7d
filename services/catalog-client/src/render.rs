//! Plain-text rendering of view state for the terminal front end.

use std::fmt::Write;
use std::time::Instant;

use common::{FieldErrors, Genre};

use crate::form::GameForm;
use crate::views::{GameCreateView, GameDetailsView, GameEditView, GamesListView, GenresListView};

pub fn games_list(view: &GamesListView, now: Instant) -> String {
    let mut out = String::new();

    if let Some(message) = view.success_message(now) {
        let _ = writeln!(out, "✔ {}", message);
    }
    if let Some(error) = &view.error {
        let _ = writeln!(out, "✖ {}", error);
    }

    if view.games.is_empty() {
        if view.error.is_none() {
            out.push_str("No games yet.\n");
        }
        return out;
    }

    let _ = writeln!(out, "{:>4}  {:<32} {:<12} {:>8}  {}", "ID", "NAME", "GENRE", "PRICE", "RELEASED");
    for game in &view.games {
        let _ = writeln!(
            out,
            "{:>4}  {:<32} {:<12} {:>8}  {}",
            game.id,
            game.name,
            game.genre_name,
            format!("{:.2}", game.price),
            game.release_date
        );
    }
    out
}

pub fn game_details(view: &GameDetailsView) -> String {
    let mut out = String::new();

    if let Some(error) = &view.error {
        let _ = writeln!(out, "✖ {}", error);
    }
    if let Some(game) = &view.game {
        let _ = writeln!(out, "Id:           {}", game.id);
        let _ = writeln!(out, "Name:         {}", game.name);
        let _ = writeln!(out, "Genre id:     {}", game.genre_id);
        let _ = writeln!(out, "Price:        {:.2}", game.price);
        let _ = writeln!(out, "Release date: {}", game.release_date);
    }
    out
}

pub fn genres_list(view: &GenresListView) -> String {
    let mut out = String::new();

    if let Some(error) = &view.error {
        let _ = writeln!(out, "✖ {}", error);
    }
    out.push_str(&genre_choices(&view.genres));
    out
}

pub fn game_create(view: &GameCreateView) -> String {
    let mut out = String::from("New game\n");
    if let Some(error) = &view.error {
        let _ = writeln!(out, "✖ {}", error);
    }
    out.push_str(&form_errors(&view.form_errors));
    out.push_str(&form(&view.form));
    out.push_str("Genres:\n");
    out.push_str(&genre_choices(&view.genres));
    out
}

pub fn game_edit(view: &GameEditView) -> String {
    let mut out = format!("Edit game {}\n", view.id);
    if let Some(error) = &view.error {
        let _ = writeln!(out, "✖ {}", error);
    }
    out.push_str(&form_errors(&view.form_errors));
    if let Some(game) = &view.form {
        out.push_str(&form(game));
    }
    out.push_str("Genres:\n");
    out.push_str(&genre_choices(&view.genres));
    out
}

fn form(form: &GameForm) -> String {
    format!(
        "  name:        {}\n  genreId:     {}\n  price:       {}\n  releaseDate: {}\n",
        form.name,
        form.genre_id,
        form.price,
        form.release_date.normalized().unwrap_or_default()
    )
}

fn form_errors(errors: &FieldErrors) -> String {
    let mut out = String::new();
    for (field, messages) in errors {
        for message in messages {
            let _ = writeln!(out, "✖ {}: {}", field, message);
        }
    }
    out
}

fn genre_choices(genres: &[Genre]) -> String {
    let mut out = String::new();
    for genre in genres {
        let _ = writeln!(out, "{:>4}  {}", genre.id, genre.name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::{Banner, SUCCESS_BANNER_TTL};

    #[test]
    fn banner_disappears_from_list_after_delay() {
        let now = Instant::now();
        let view = GamesListView {
            banner: Some(Banner::success("\"Doom\" was deleted successfully.", now)),
            ..GamesListView::default()
        };

        assert!(games_list(&view, now).contains("was deleted successfully"));
        assert!(!games_list(&view, now + SUCCESS_BANNER_TTL).contains("was deleted"));
    }

    #[test]
    fn error_is_shown_without_clearing_rows() {
        let view = GamesListView {
            games: vec![common::GameSummary {
                id: 1,
                name: "Tekken".into(),
                genre_name: "Fighting".into(),
                price: rust_decimal::Decimal::new(1999, 2),
                release_date: chrono::NaiveDate::from_ymd_opt(1994, 12, 9).unwrap(),
            }],
            error: Some("Cannot reach the server. Make sure the backend is running.".into()),
            ..GamesListView::default()
        };

        let out = games_list(&view, Instant::now());
        assert!(out.contains("Cannot reach the server"));
        assert!(out.contains("Tekken"));
        assert!(out.contains("19.99"));
    }
}
