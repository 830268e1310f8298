use serde::Deserialize;

use crate::entities::movie;

/// A stored movie paired with its position in the rating order. Rankings are
/// derived per list view and never written back.
#[derive(Clone, Debug)]
pub struct RankedMovie {
    pub ranking: i32,
    pub movie: movie::Model,
}

#[derive(Clone, Debug)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub description: Option<String>,
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub name: String,
}

/// Rating arrives as text so a bad value can re-render the form instead of
/// failing extraction.
#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub rating: String,
    pub review: String,
}

#[derive(Debug, Deserialize)]
pub struct MovieIdQuery {
    pub movie_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct AddQuery {
    pub id: i64,
}
