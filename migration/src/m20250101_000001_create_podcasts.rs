use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Podcasts::Table)
                    .if_not_exists()
                    .col(pk_auto(Podcasts::Id))
                    .col(big_integer(Podcasts::CollectionId))
                    .col(string(Podcasts::TrackName))
                    .col(string(Podcasts::ArtistName))
                    .col(string_null(Podcasts::ArtworkUrl100))
                    .col(string_null(Podcasts::TrackViewUrl))
                    .col(string_null(Podcasts::PrimaryGenreName))
                    .col(big_integer(Podcasts::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_podcasts_collection_id")
                    .table(Podcasts::Table)
                    .col(Podcasts::CollectionId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Podcasts::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Podcasts {
    Table,
    Id,
    CollectionId,
    TrackName,
    ArtistName,
    #[sea_orm(iden = "artwork_url100")]
    ArtworkUrl100,
    TrackViewUrl,
    PrimaryGenreName,
    CreatedAt,
}
