use crate::{entities::movie, models::RankedMovie};

/// Assign display ranks to movies already in ascending rating order: rank 1
/// is the lowest rating, rank N the highest. Pure; nothing is persisted.
pub fn rank(movies: Vec<movie::Model>) -> Vec<RankedMovie> {
    movies
        .into_iter()
        .enumerate()
        .map(|(index, movie)| RankedMovie { ranking: index as i32 + 1, movie })
        .collect()
}
