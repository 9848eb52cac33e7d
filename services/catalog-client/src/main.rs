use std::io::{self, BufRead, Write};
use std::time::Instant;

use catalog_client::api::DEFAULT_API_URL;
use catalog_client::views::{
    GameCreateView, GameDetailsView, GameEditView, GamesListView, GenresListView,
};
use catalog_client::{ApiService, DateInput, Route, render};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "catalog-client")]
#[command(version, about = "Browse and edit the game catalog", long_about = None)]
struct Cli {
    /// Base URL of the catalog API
    #[arg(long, env = "CATALOG_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all games
    List,
    /// Show one game
    Show { id: i64 },
    /// Add a game
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        genre_id: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        release_date: String,
    },
    /// Replace a game; omitted fields keep their current value
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        genre_id: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        release_date: Option<String>,
    },
    /// Delete a game
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// List all genres
    Genres,
    /// Open a client route such as /games/3/edit
    Open { route: String },
}

fn stdin_confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
        Err(_) => false,
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let cli = Cli::parse();
    let api = ApiService::new(cli.api_url);

    let ok = run(&api, cli.command).await;
    if !ok {
        std::process::exit(1);
    }
}

async fn run(api: &ApiService, command: Command) -> bool {
    match command {
        Command::List => open(api, Route::GamesList).await,
        Command::Show { id } => open(api, Route::GameDetails(id)).await,
        Command::Genres => open(api, Route::Genres).await,
        Command::Open { route } => open(api, Route::parse(&route)).await,
        Command::Create {
            name,
            genre_id,
            price,
            release_date,
        } => {
            let mut view = GameCreateView::open(api).await;
            view.form.name = name;
            view.form.genre_id = genre_id;
            view.form.price = price;
            view.form.release_date = DateInput::Text(release_date);

            match view.submit(api).await {
                Some(next) => open(api, next).await,
                None => {
                    print!("{}", render::game_create(&view));
                    false
                }
            }
        }
        Command::Edit {
            id,
            name,
            genre_id,
            price,
            release_date,
        } => {
            let mut view = GameEditView::open(api, id).await;
            if let Some(form) = view.form.as_mut() {
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(genre_id) = genre_id {
                    form.genre_id = genre_id;
                }
                if let Some(price) = price {
                    form.price = price;
                }
                if let Some(release_date) = release_date {
                    form.release_date = DateInput::Text(release_date);
                }
            }

            match view.submit(api).await {
                Some(next) => open(api, next).await,
                None => {
                    print!("{}", render::game_edit(&view));
                    false
                }
            }
        }
        Command::Delete { id, yes } => {
            let mut view = GamesListView::open(api).await;
            let name = view
                .games
                .iter()
                .find(|g| g.id == id)
                .map(|g| g.name.clone())
                .unwrap_or_else(|| format!("#{}", id));

            let deleted = if yes {
                view.delete(api, id, &name, &|_: &str| true).await
            } else {
                view.delete(api, id, &name, &stdin_confirm).await
            };
            print!("{}", render::games_list(&view, Instant::now()));
            deleted || view.error.is_none()
        }
    }
}

async fn open(api: &ApiService, route: Route) -> bool {
    match route {
        Route::GamesList => {
            let view = GamesListView::open(api).await;
            print!("{}", render::games_list(&view, Instant::now()));
            view.error.is_none()
        }
        Route::GameDetails(id) => {
            let view = GameDetailsView::open(api, id).await;
            print!("{}", render::game_details(&view));
            view.error.is_none()
        }
        Route::NewGame => {
            let view = GameCreateView::open(api).await;
            print!("{}", render::game_create(&view));
            view.error.is_none()
        }
        Route::EditGame(id) => {
            let view = GameEditView::open(api, id).await;
            print!("{}", render::game_edit(&view));
            view.error.is_none()
        }
        Route::Genres => {
            let view = GenresListView::open(api).await;
            print!("{}", render::genres_list(&view));
            view.error.is_none()
        }
    }
}
