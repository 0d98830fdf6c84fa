use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set,
    sea_query::OnConflict,
};

use crate::{
    db,
    entities::podcast,
    error::AppResult,
    models::{NewPodcast, Podcast},
};

/// Handle to the podcast table. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct PodcastStore {
    db: DatabaseConnection,
}

impl PodcastStore {
    pub async fn open(database_url: &str) -> AppResult<Self> {
        let db = db::connect_and_migrate(database_url).await?;
        Ok(Self { db })
    }

    #[cfg(test)]
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn close(self) -> AppResult<()> {
        self.db.close().await?;
        Ok(())
    }

    /// Inserts `new` unless its collection id is already stored, then returns
    /// the stored row. Known podcasts are left exactly as first saved.
    pub async fn upsert(&self, new: NewPodcast) -> AppResult<Podcast> {
        let collection_id = new.collection_id;
        let model = podcast::ActiveModel {
            id: Default::default(),
            collection_id: Set(collection_id),
            track_name: Set(new.track_name),
            artist_name: Set(new.artist_name),
            artwork_url100: Set(new.artwork_url100),
            track_view_url: Set(new.track_view_url),
            primary_genre_name: Set(new.primary_genre_name),
            created_at: Set(now_sec()),
        };

        let inserted = podcast::Entity::insert(model)
            .on_conflict(OnConflict::column(podcast::Column::CollectionId).do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await?;
        tracing::trace!(collection_id, inserted, "upserted podcast");

        self.find_by_collection_id(collection_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("podcast {collection_id} missing after upsert").into())
    }

    pub async fn find_by_collection_id(&self, collection_id: i64) -> AppResult<Option<Podcast>> {
        let row = podcast::Entity::find()
            .filter(podcast::Column::CollectionId.eq(collection_id))
            .one(&self.db)
            .await?;
        row.map(Podcast::try_from).transpose()
    }

    pub async fn count(&self) -> AppResult<u64> {
        Ok(podcast::Entity::find().count(&self.db).await?)
    }
}

fn now_sec() -> i64 {
    jiff::Timestamp::now().as_second()
}
