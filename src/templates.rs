use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::{entities::movie, models::RankedMovie, tmdb::SearchMovie};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page(movies: &[RankedMovie]) -> String {
    page(
        "Rankboxd",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "Ranked from lowest to highest rating." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/search" { "Add Movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "Nothing here yet. Search for a movie to start the list." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for ranked in movies {
                                (movie_card(ranked))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn search_page(error: Option<&str>) -> String {
    page(
        "Add Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Add Movie" }
                        p class="mt-2 text-gray-600" { "Search the movie database by title." }

                        @if let Some(message) = error {
                            p class="mt-4 text-sm text-red-600" { (message) }
                        }

                        form class="mt-8 space-y-6" method="post" action="/search" {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="name" { "Movie title" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="name" id="name" required;
                            }

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Search" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn select_page(query: &str, results: &[SearchMovie]) -> String {
    page(
        "Select Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    h1 class="text-3xl font-bold text-gray-900" { "Select Movie" }
                    p class="mt-2 text-gray-600" { "Results for " span class="font-medium" { (query) } }

                    @if results.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No matches. Try another title." }
                        }
                    } @else {
                        ul class="mt-10 space-y-3" {
                            @for movie in results {
                                li class="bg-white shadow rounded-lg p-5" {
                                    a class="text-lg font-semibold text-blue-600 hover:text-blue-800" href=(format!("/add?id={}", movie.id)) {
                                        (movie.title)
                                    }
                                    @if !movie.release_date.is_empty() {
                                        span class="ml-2 text-gray-500" { (movie.release_date) }
                                    }
                                    @if !movie.overview.is_empty() {
                                        p class="mt-2 text-sm text-gray-600" { (movie.overview) }
                                    }
                                }
                            }
                        }
                    }

                    a class="mt-8 inline-block text-sm text-blue-600 hover:text-blue-800" href="/search" { "Search again" }
                }
            }
        },
    )
}

pub fn edit_page(movie: &movie::Model, error: Option<&str>) -> String {
    let rating = movie.rating.map(|r| r.to_string()).unwrap_or_default();
    let review = movie.review.clone().unwrap_or_default();

    page(
        "Edit Rating",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { (movie.title) }
                        p class="mt-2 text-gray-600" { "(" (movie.year) ") — update your rating and review." }

                        @if let Some(message) = error {
                            p class="mt-4 text-sm text-red-600" { (message) }
                        }

                        form class="mt-8 space-y-6" method="post" action=(format!("/edit?movie_id={}", movie.id)) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="rating" { "Your rating out of 10, e.g. 7.5" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="rating" id="rating" value=(rating) required;
                            }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="review" { "Your review" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="review" id="review" value=(review) required;
                            }

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Submit" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { (status.as_u16()) " " (status.canonical_reason().unwrap_or("Error")) }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn movie_card(ranked: &RankedMovie) -> Markup {
    let movie = &ranked.movie;

    html! {
        div class="bg-white shadow rounded-lg p-6" {
            div class="flex items-start gap-5" {
                @if movie.image_url.is_empty() {
                    div class="h-36 w-24 flex-none rounded bg-gray-200" {}
                } @else {
                    img class="h-36 w-24 flex-none rounded object-cover" src=(movie.image_url) alt=(movie.title);
                }

                div class="min-w-0 flex-1" {
                    div class="flex items-start justify-between gap-4" {
                        h2 class="text-xl font-semibold text-gray-900" {
                            (movie.title)
                            span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                        }
                        span class="flex-none rounded-full bg-blue-100 px-3 py-1 text-sm font-semibold text-blue-700" { "#" (ranked.ranking) }
                    }

                    @if let Some(rating) = movie.rating {
                        p class="mt-2 text-sm font-medium text-gray-700" { (rating) " / 10" }
                    } @else {
                        p class="mt-2 text-sm text-gray-500" { "Not rated yet" }
                    }

                    @if let Some(review) = &movie.review {
                        p class="mt-1 text-sm italic text-gray-600" { (review) }
                    }

                    @if let Some(description) = &movie.description {
                        p class="mt-3 text-sm text-gray-600" { (description) }
                    }

                    div class="mt-4 flex gap-4 text-sm" {
                        a class="text-blue-600 hover:text-blue-800" href=(format!("/edit?movie_id={}", movie.id)) { "Edit" }
                        a class="text-red-600 hover:text-red-800" href=(format!("/delete?movie_id={}", movie.id)) { "Delete" }
                    }
                }
            }
        }
    }
}
