use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set, SqlErr,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::NewMovie,
};

#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All movies in ascending rating order, ties broken by id. SQLite sorts
    /// NULL ratings first, so unrated movies take the lowest ranks.
    pub async fn list_all(&self) -> AppResult<Vec<movie::Model>> {
        let movies = movie::Entity::find()
            .order_by_asc(movie::Column::Rating)
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;
        Ok(movies)
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound(id))
    }

    pub async fn insert(&self, new: NewMovie) -> AppResult<movie::Model> {
        let model = movie::ActiveModel {
            title: Set(new.title.clone()),
            year: Set(new.year),
            description: Set(new.description),
            image_url: Set(new.image_url),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(movie) => Ok(movie),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(AppError::DuplicateTitle(new.title))
                },
                _ => Err(err.into()),
            },
        }
    }

    /// Last write wins; only rating and review are touched.
    pub async fn update_rating(&self, id: i32, rating: f64, review: String) -> AppResult<movie::Model> {
        let movie = self.get(id).await?;
        let mut model: movie::ActiveModel = movie.into();
        model.rating = Set(Some(rating));
        model.review = Set(Some(review));
        Ok(model.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let movie = self.get(id).await?;
        movie.delete(&self.db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    use super::*;

    async fn test_store() -> Store {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        Store::new(db)
    }

    fn new_movie(title: &str) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            year: 1999,
            description: Some("a movie".to_string()),
            image_url: "https://image.tmdb.org/t/p/w500/poster.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_get_round_trips() {
        let store = test_store().await;

        let first = store.insert(new_movie("Alpha")).await.unwrap();
        let second = store.insert(new_movie("Beta")).await.unwrap();
        assert_ne!(first.id, second.id);

        let fetched = store.get(first.id).await.unwrap();
        assert_eq!(fetched.title, "Alpha");
        assert_eq!(fetched.year, 1999);
        assert_eq!(fetched.rating, None);
        assert_eq!(fetched.review, None);
    }

    #[tokio::test]
    async fn duplicate_title_is_rejected() {
        let store = test_store().await;

        store.insert(new_movie("Alpha")).await.unwrap();
        let err = store.insert(new_movie("Alpha")).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateTitle(title) if title == "Alpha"));
    }

    #[tokio::test]
    async fn get_update_delete_missing_id_not_found() {
        let store = test_store().await;

        assert!(matches!(store.get(42).await.unwrap_err(), AppError::NotFound(42)));
        assert!(matches!(
            store.update_rating(42, 7.5, "fine".to_string()).await.unwrap_err(),
            AppError::NotFound(42)
        ));
        assert!(matches!(store.delete(42).await.unwrap_err(), AppError::NotFound(42)));
    }

    #[tokio::test]
    async fn update_sets_only_rating_and_review() {
        let store = test_store().await;

        let movie = store.insert(new_movie("Alpha")).await.unwrap();
        let updated = store.update_rating(movie.id, 8.5, "great".to_string()).await.unwrap();

        assert_eq!(updated.rating, Some(8.5));
        assert_eq!(updated.review.as_deref(), Some("great"));
        assert_eq!(updated.title, movie.title);
        assert_eq!(updated.year, movie.year);
        assert_eq!(updated.description, movie.description);
        assert_eq!(updated.image_url, movie.image_url);
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let store = test_store().await;

        let movie = store.insert(new_movie("Alpha")).await.unwrap();
        store.delete(movie.id).await.unwrap();
        assert!(matches!(store.get(movie.id).await.unwrap_err(), AppError::NotFound(_)));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_orders_by_rating_then_id() {
        let store = test_store().await;

        let a = store.insert(new_movie("Alpha")).await.unwrap();
        let b = store.insert(new_movie("Beta")).await.unwrap();
        let c = store.insert(new_movie("Gamma")).await.unwrap();
        let d = store.insert(new_movie("Delta")).await.unwrap();

        store.update_rating(a.id, 9.0, "".to_string()).await.unwrap();
        store.update_rating(b.id, 5.0, "".to_string()).await.unwrap();
        store.update_rating(c.id, 5.0, "".to_string()).await.unwrap();
        // Delta stays unrated: NULL sorts first under ASC.

        let titles: Vec<String> =
            store.list_all().await.unwrap().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Delta", "Beta", "Gamma", "Alpha"]);
    }
}
