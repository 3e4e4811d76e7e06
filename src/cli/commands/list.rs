//! List movies command handler

use crate::config::Config;
use crate::db::Store;
use crate::models::MovieFilter;

pub async fn cmd_list_movies(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let movies = store.list_movies(&MovieFilter::default()).await?;

    if movies.is_empty() {
        println!("No movies stored.");
        println!();
        println!("Add movies via POST /movies/ while the service is running.");
        return Ok(());
    }

    println!("Movies ({} total)", movies.len());
    println!("{:-<70}", "");

    for movie in movies {
        let title = movie.title.as_deref().unwrap_or("(untitled)");
        let year = movie
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "?".to_string());
        let rating = movie
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());

        println!("• {} ({})", title, year);
        println!(
            "  ID: {} | Rating: {} | Director: {} | Genre: {}",
            movie.id,
            rating,
            fmt_ref(movie.director_id),
            fmt_ref(movie.genre_id)
        );
    }

    Ok(())
}

fn fmt_ref(id: Option<i32>) -> String {
    id.map_or_else(|| "-".to_string(), |v| v.to_string())
}
