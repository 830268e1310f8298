use std::{num::NonZeroU32, sync::Arc};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use serde::Deserialize;

use crate::error::AppResult;

pub struct TmdbClient {
    client: reqwest::Client,
    access_token: String,
    search_url: String,
    info_url: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl TmdbClient {
    pub fn new(
        client: reqwest::Client,
        access_token: String,
        search_url: String,
        info_url: String,
        rps: u32,
    ) -> Self {
        // Warn once on app load if using mock data
        if access_token.trim().is_empty() {
            tracing::warn!("Using mock movie data - no MOVIE_DB_TOKEN provided");
        }

        let limiter =
            Arc::new(RateLimiter::direct(Quota::per_second(NonZeroU32::new(rps.max(1)).unwrap())));
        Self { client, access_token, search_url, info_url, limiter }
    }

    pub async fn search_movies(&self, query: &str) -> AppResult<Vec<SearchMovie>> {
        // Use mock data if access token is not provided
        if self.access_token.trim().is_empty() {
            return Ok(mock_search_results());
        }

        self.limiter.until_ready().await;

        let resp: SearchResponse = self
            .client
            .get(&self.search_url)
            .bearer_auth(&self.access_token)
            .query(&[("query", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(resp.results)
    }

    pub async fn movie_details(&self, id: i64) -> AppResult<MovieDetail> {
        // Use mock data if access token is not provided
        if self.access_token.trim().is_empty() {
            return Ok(mock_detail(id));
        }

        self.limiter.until_ready().await;

        let url = format!("{}/{}", self.info_url.trim_end_matches('/'), id);
        let detail: MovieDetail = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(detail)
    }
}

/// Year is the text before the first `-` of the upstream release date.
pub fn release_year(release_date: &str) -> Option<i32> {
    release_date.split('-').next().and_then(|year| year.parse().ok())
}

pub fn image_url(base: &str, poster_path: Option<&str>) -> String {
    match poster_path {
        Some(path) => format!("{}{}", base.trim_end_matches('/'), path),
        None => String::new(),
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchMovie>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SearchMovie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MovieDetail {
    pub title: String,
    #[serde(default)]
    pub release_date: String,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
}

fn mock_search_results() -> Vec<SearchMovie> {
    vec![
        SearchMovie {
            id: 550,
            title: "Fight Club".to_string(),
            release_date: "1999-10-15".to_string(),
            overview: "A ticking-time-bomb insomniac and a slippery soap salesman channel \
                       primal male aggression."
                .to_string(),
            poster_path: Some("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg".to_string()),
        },
        SearchMovie {
            id: 27205,
            title: "Inception".to_string(),
            release_date: "2010-07-15".to_string(),
            overview: "A thief who steals corporate secrets through dream-sharing technology."
                .to_string(),
            poster_path: Some("/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg".to_string()),
        },
    ]
}

fn mock_detail(id: i64) -> MovieDetail {
    match id {
        550 => MovieDetail {
            title: "Fight Club".to_string(),
            release_date: "1999-10-15".to_string(),
            overview: Some(
                "A ticking-time-bomb insomniac and a slippery soap salesman channel primal \
                 male aggression."
                    .to_string(),
            ),
            poster_path: Some("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg".to_string()),
        },
        27205 => MovieDetail {
            title: "Inception".to_string(),
            release_date: "2010-07-15".to_string(),
            overview: Some(
                "A thief who steals corporate secrets through dream-sharing technology."
                    .to_string(),
            ),
            poster_path: Some("/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg".to_string()),
        },
        other => MovieDetail {
            title: format!("Untitled #{other}"),
            release_date: "2000-01-01".to_string(),
            overview: None,
            poster_path: None,
        },
    }
}
