use filmarr::db::Store;
use filmarr::models::{MovieFilter, MoviePatch, NewMovie};

async fn memory_store() -> Store {
    Store::new("sqlite::memory:")
        .await
        .expect("Failed to open in-memory store")
}

#[tokio::test]
async fn test_store_ping() {
    let store = memory_store().await;
    store.ping().await.expect("ping failed");
}

#[tokio::test]
async fn test_movie_create_assigns_id_and_round_trips() {
    let store = memory_store().await;

    let director_id = store.add_director("Christopher Nolan").await.unwrap();
    let genre_id = store.add_genre("Action").await.unwrap();

    let new = NewMovie {
        title: Some("Inception".to_string()),
        description: Some("A thief who steals corporate secrets.".to_string()),
        year: Some(2010),
        rating: Some(8.8),
        genre_id: Some(genre_id),
        director_id: Some(director_id),
        ..Default::default()
    };

    let id = store.create_movie(&new).await.unwrap();
    assert!(id > 0);

    let movie = store.get_movie(id).await.unwrap().expect("movie missing");
    assert_eq!(movie.title.as_deref(), Some("Inception"));
    assert_eq!(movie.year, Some(2010));
    assert_eq!(movie.rating, Some(8.8));
    assert_eq!(movie.director_id, Some(director_id));
    assert_eq!(movie.genre_id, Some(genre_id));
    assert_eq!(movie.trailer, None);
}

#[tokio::test]
async fn test_movie_create_honors_explicit_id() {
    let store = memory_store().await;

    let new = NewMovie {
        id: Some(42),
        title: Some("Alien".to_string()),
        ..Default::default()
    };

    let id = store.create_movie(&new).await.unwrap();
    assert_eq!(id, 42);
    assert!(store.get_movie(42).await.unwrap().is_some());
}

#[tokio::test]
async fn test_movie_filters_combine_with_and() {
    let store = memory_store().await;

    let nolan = store.add_director("Christopher Nolan").await.unwrap();
    let scott = store.add_director("Ridley Scott").await.unwrap();
    let action = store.add_genre("Action").await.unwrap();
    let scifi = store.add_genre("Sci-Fi").await.unwrap();

    for (title, d, g) in [
        ("Inception", nolan, action),
        ("Interstellar", nolan, scifi),
        ("Alien", scott, scifi),
    ] {
        store
            .create_movie(&NewMovie {
                title: Some(title.to_string()),
                director_id: Some(d),
                genre_id: Some(g),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let by_director = store
        .list_movies(&MovieFilter {
            director_id: Some(nolan),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_director.len(), 2);
    assert!(by_director.iter().all(|m| m.director_id == Some(nolan)));

    let both = store
        .list_movies(&MovieFilter {
            director_id: Some(nolan),
            genre_id: Some(scifi),
        })
        .await
        .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].title.as_deref(), Some("Interstellar"));

    let unfiltered = store.list_movies(&MovieFilter::default()).await.unwrap();
    assert_eq!(unfiltered.len(), 3);
}

#[tokio::test]
async fn test_movie_update_touches_only_present_fields() {
    let store = memory_store().await;

    let id = store
        .create_movie(&NewMovie {
            title: Some("Inceptoin".to_string()),
            year: Some(2010),
            ..Default::default()
        })
        .await
        .unwrap();

    let patch = MoviePatch {
        title: Some("Inception".to_string()),
        rating: Some(8.8),
        ..Default::default()
    };

    let rows = store.update_movie(id, &patch).await.unwrap();
    assert_eq!(rows, 1);

    // Applying the identical patch again matches the same single row.
    let rows = store.update_movie(id, &patch).await.unwrap();
    assert_eq!(rows, 1);

    let movie = store.get_movie(id).await.unwrap().unwrap();
    assert_eq!(movie.title.as_deref(), Some("Inception"));
    assert_eq!(movie.rating, Some(8.8));
    assert_eq!(movie.year, Some(2010));
}

#[tokio::test]
async fn test_movie_update_of_missing_row_matches_nothing() {
    let store = memory_store().await;

    let patch = MoviePatch {
        title: Some("X".to_string()),
        ..Default::default()
    };

    let rows = store.update_movie(999, &patch).await.unwrap();
    assert_eq!(rows, 0);

    let movies = store.list_movies(&MovieFilter::default()).await.unwrap();
    assert!(movies.is_empty());
}

#[tokio::test]
async fn test_movie_insert_rejects_dangling_reference() {
    let store = memory_store().await;

    let result = store
        .create_movie(&NewMovie {
            title: Some("Inception".to_string()),
            director_id: Some(999),
            ..Default::default()
        })
        .await;

    assert!(result.is_err());
    let movies = store.list_movies(&MovieFilter::default()).await.unwrap();
    assert!(movies.is_empty());
}

#[tokio::test]
async fn test_directors_and_genres_listing() {
    let store = memory_store().await;

    assert!(store.list_directors().await.unwrap().is_empty());
    assert!(store.list_genres().await.unwrap().is_empty());

    let nolan = store.add_director("Christopher Nolan").await.unwrap();
    let scott = store.add_director("Ridley Scott").await.unwrap();
    let action = store.add_genre("Action").await.unwrap();

    let directors = store.list_directors().await.unwrap();
    assert_eq!(directors.len(), 2);
    assert_eq!(directors[0].id, nolan);
    assert_eq!(directors[1].id, scott);

    let genre = store.get_genre(action).await.unwrap().unwrap();
    assert_eq!(genre.name, "Action");

    assert!(store.get_director(999).await.unwrap().is_none());
    assert!(store.get_genre(999).await.unwrap().is_none());
}
