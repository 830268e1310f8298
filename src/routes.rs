use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    AppState,
    error::AppResult,
    models::{AddQuery, EditForm, MovieIdQuery, NewMovie, SearchForm},
    ranker, templates, tmdb,
};

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.list_all().await?;
    let ranked = ranker::rank(movies);
    Ok(Html(templates::index_page(&ranked)))
}

pub async fn search_form() -> Html<String> {
    Html(templates::search_page(None))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let name = form.name.trim().to_string();
    if name.is_empty() {
        return Ok(Html(templates::search_page(Some("Enter a movie title to search for."))));
    }

    tracing::debug!(query = %name, "searching movie database");
    let results = state.tmdb.search_movies(&name).await?;
    Ok(Html(templates::select_page(&name, &results)))
}

pub async fn add(
    State(state): State<Arc<AppState>>,
    Query(q): Query<AddQuery>,
) -> AppResult<Redirect> {
    let detail = state.tmdb.movie_details(q.id).await?;

    let year = tmdb::release_year(&detail.release_date).with_context(|| {
        format!("movie database returned no usable release date for {:?}", detail.title)
    })?;

    let image_url =
        tmdb::image_url(&state.config.movie_db_image_url, detail.poster_path.as_deref());

    let movie = state
        .store
        .insert(NewMovie { title: detail.title, year, description: detail.overview, image_url })
        .await?;

    tracing::debug!(id = movie.id, title = %movie.title, "added movie");
    Ok(Redirect::to(&format!("/edit?movie_id={}", movie.id)))
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MovieIdQuery>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(q.movie_id).await?;
    Ok(Html(templates::edit_page(&movie, None)))
}

pub async fn edit(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MovieIdQuery>,
    Form(form): Form<EditForm>,
) -> AppResult<Response> {
    let movie = state.store.get(q.movie_id).await?;

    let rating = match form.rating.trim().parse::<f64>() {
        Ok(rating) if (0.0..=10.0).contains(&rating) => rating,
        _ => {
            let body =
                templates::edit_page(&movie, Some("Rating must be a number between 0 and 10."));
            return Ok(Html(body).into_response());
        },
    };

    let review = form.review.trim().to_string();
    if review.is_empty() {
        let body = templates::edit_page(&movie, Some("Review must not be empty."));
        return Ok(Html(body).into_response());
    }

    state.store.update_rating(movie.id, rating, review).await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MovieIdQuery>,
) -> AppResult<Redirect> {
    state.store.delete(q.movie_id).await?;
    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    use crate::{AppState, config::Config, router, store::Store, tmdb::TmdbClient};
    use std::sync::Arc;

    async fn test_state() -> Arc<AppState> {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let config = Config {
            addr: "127.0.0.1:0".parse().unwrap(),
            database_url: "sqlite::memory:".to_string(),
            movie_db_token: String::new(),
            movie_db_search_url: "http://unused.invalid/search".to_string(),
            movie_db_info_url: "http://unused.invalid/movie".to_string(),
            movie_db_image_url: "https://image.tmdb.org/t/p/w500".to_string(),
            movie_db_rps: 4,
        };

        // Empty token puts the client in mock mode, so no request leaves the test.
        let tmdb = TmdbClient::new(
            reqwest::Client::new(),
            config.movie_db_token.clone(),
            config.movie_db_search_url.clone(),
            config.movie_db_info_url.clone(),
            config.movie_db_rps,
        );

        Arc::new(AppState {
            config: Arc::new(config),
            store: Store::new(db),
            tmdb: Arc::new(tmdb),
        })
    }

    async fn test_server() -> (TestServer, Arc<AppState>) {
        let state = test_state().await;
        (TestServer::new(router(state.clone())).unwrap(), state)
    }

    #[tokio::test]
    async fn empty_list_renders_empty_state() {
        let (server, _state) = test_server().await;

        let response = server.get("/").await;
        response.assert_status_ok();
        assert!(response.text().contains("Nothing here yet"));
    }

    #[tokio::test]
    async fn add_then_edit_flow() {
        let (server, _state) = test_server().await;

        let response = server.get("/add").add_query_param("id", 550).await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/edit?movie_id=1");

        let response = server.get("/edit").add_query_param("movie_id", 1).await;
        response.assert_status_ok();
        assert!(response.text().contains("Fight Club"));

        let response = server
            .post("/edit?movie_id=1")
            .form(&[("rating", "8.5"), ("review", "still holds up")])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/");

        let body = server.get("/").await.text();
        assert!(body.contains("Fight Club"));
        assert!(body.contains("(1999)"));
        assert!(body.contains("8.5 / 10"));
        assert!(body.contains("still holds up"));
    }

    #[tokio::test]
    async fn adding_the_same_movie_twice_conflicts() {
        let (server, _state) = test_server().await;

        server.get("/add").add_query_param("id", 550).await.assert_status(StatusCode::SEE_OTHER);
        let response = server.get("/add").add_query_param("id", 550).await;
        response.assert_status(StatusCode::CONFLICT);
        assert!(response.text().contains("already in the list"));
    }

    #[tokio::test]
    async fn missing_movie_is_not_found() {
        let (server, _state) = test_server().await;

        server.get("/edit").add_query_param("movie_id", 99).await.assert_status_not_found();
        server.get("/delete").add_query_param("movie_id", 99).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn delete_removes_movie_from_the_list() {
        let (server, _state) = test_server().await;

        server.get("/add").add_query_param("id", 550).await.assert_status(StatusCode::SEE_OTHER);

        let response = server.get("/delete").add_query_param("movie_id", 1).await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/");

        assert!(server.get("/").await.text().contains("Nothing here yet"));
    }

    #[tokio::test]
    async fn rankings_run_from_lowest_to_highest_rating() {
        let (server, state) = test_server().await;

        for (title, rating) in [("Alpha", 5.0), ("Beta", 9.0), ("Gamma", 7.0)] {
            let movie = state
                .store
                .insert(crate::models::NewMovie {
                    title: title.to_string(),
                    year: 2001,
                    description: None,
                    image_url: String::new(),
                })
                .await
                .unwrap();
            state.store.update_rating(movie.id, rating, "ok".to_string()).await.unwrap();
        }

        let body = server.get("/").await.text();
        let alpha = body.find("Alpha").unwrap();
        let beta = body.find("Beta").unwrap();
        let gamma = body.find("Gamma").unwrap();
        assert!(alpha < gamma && gamma < beta, "expected rating-ascending order");
        for rank in ["#1", "#2", "#3"] {
            assert!(body.contains(rank));
        }

        // A second view with no writes in between renders identically.
        assert_eq!(body, server.get("/").await.text());
    }

    #[tokio::test]
    async fn bad_rating_rerenders_edit_form() {
        let (server, _state) = test_server().await;

        server.get("/add").add_query_param("id", 550).await.assert_status(StatusCode::SEE_OTHER);

        let response = server
            .post("/edit?movie_id=1")
            .form(&[("rating", "superb"), ("review", "words")])
            .await;
        response.assert_status_ok();
        assert!(response.text().contains("Rating must be a number"));

        let response = server
            .post("/edit?movie_id=1")
            .form(&[("rating", "7.0"), ("review", "  ")])
            .await;
        response.assert_status_ok();
        assert!(response.text().contains("Review must not be empty"));
    }

    #[tokio::test]
    async fn search_flow_links_results_to_add() {
        let (server, _state) = test_server().await;

        let response = server.get("/search").await;
        response.assert_status_ok();
        assert!(response.text().contains("Search the movie database"));

        let response = server.post("/search").form(&[("name", "   ")]).await;
        response.assert_status_ok();
        assert!(response.text().contains("Enter a movie title"));

        let response = server.post("/search").form(&[("name", "fight club")]).await;
        response.assert_status_ok();
        let body = response.text();
        assert!(body.contains("Fight Club"));
        assert!(body.contains("/add?id=550"));
    }
}
