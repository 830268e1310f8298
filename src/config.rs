use std::net::SocketAddr;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub movie_db_token: String,
    pub movie_db_search_url: String,
    pub movie_db_info_url: String,
    pub movie_db_image_url: String,
    pub movie_db_rps: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://rankboxd.db?mode=rwc".to_string());

        let movie_db_token = std::env::var("MOVIE_DB_TOKEN").unwrap_or_else(|_| "".to_string());
        let movie_db_search_url = std::env::var("MOVIE_DB_SEARCH_URL")
            .unwrap_or_else(|_| "https://api.themoviedb.org/3/search/movie".to_string());
        let movie_db_info_url = std::env::var("MOVIE_DB_INFO_URL")
            .unwrap_or_else(|_| "https://api.themoviedb.org/3/movie".to_string());
        let movie_db_image_url = std::env::var("MOVIE_DB_IMAGE_URL")
            .unwrap_or_else(|_| "https://image.tmdb.org/t/p/w500".to_string());

        let movie_db_rps: u32 =
            std::env::var("MOVIE_DB_RPS").ok().and_then(|s| s.parse().ok()).unwrap_or(4);

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            movie_db_token,
            movie_db_search_url,
            movie_db_info_url,
            movie_db_image_url,
            movie_db_rps,
        })
    }
}
