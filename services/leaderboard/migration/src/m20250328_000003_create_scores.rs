use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scores::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Scores::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Scores::PlayerId).uuid().not_null())
                    .col(ColumnDef::new(Scores::Value).integer().not_null())
                    .col(
                        ColumnDef::new(Scores::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Scores::Table, Scores::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Daily-cap counting filters on player + day; weekly ranking scans by
        // created_at alone.
        manager
            .create_index(
                Index::create()
                    .table(Scores::Table)
                    .col(Scores::PlayerId)
                    .col(Scores::CreatedAt)
                    .name("idx_scores_player_id_created_at")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Scores::Table)
                    .col(Scores::CreatedAt)
                    .name("idx_scores_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scores::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Scores {
    Table,
    Id,
    PlayerId,
    Value,
    CreatedAt,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
}
