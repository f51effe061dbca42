use anyhow::Context as _;
use chrono::{DateTime, Duration, NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, IsolationLevel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use uuid::Uuid;

use arcade_leaderboard_schema::{otps, players, scores};

use crate::domain::repository::{OtpRepository, PlayerRepository, ScoreRepository};
use crate::domain::types::{OtpCode, Player, Score, ScoreTotal};
use crate::error::LeaderboardError;

// ── Player repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPlayerRepository {
    pub db: DatabaseConnection,
}

impl PlayerRepository for DbPlayerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Player>, LeaderboardError> {
        let model = players::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find player by id")?;
        Ok(model.map(player_from_model))
    }

    async fn phone_exists(&self, phone_no: &str) -> Result<bool, LeaderboardError> {
        let count = players::Entity::find()
            .filter(players::Column::PhoneNo.eq(phone_no))
            .count(&self.db)
            .await
            .context("count players by phone")?;
        Ok(count > 0)
    }

    async fn create(&self, player: &Player) -> Result<(), LeaderboardError> {
        players::ActiveModel {
            id: Set(player.id),
            phone_no: Set(player.phone_no.clone()),
            name: Set(player.name.clone()),
            dob: Set(player.dob),
            email: Set(player.email.clone()),
            created_at: Set(player.created_at),
        }
        .insert(&self.db)
        .await
        .context("create player")?;
        Ok(())
    }
}

fn player_from_model(model: players::Model) -> Player {
    Player {
        id: model.id,
        phone_no: model.phone_no,
        name: model.name,
        dob: model.dob,
        email: model.email,
        created_at: model.created_at,
    }
}

// ── OTP repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOtpRepository {
    pub db: DatabaseConnection,
}

impl OtpRepository for DbOtpRepository {
    async fn replace_for_phone(&self, code: &OtpCode) -> Result<(), LeaderboardError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let code = code.clone();
                Box::pin(async move {
                    let delete = otps::Entity::delete_many();
                    let delete = match &code.phone_no {
                        Some(phone_no) => delete.filter(otps::Column::PhoneNo.eq(phone_no.as_str())),
                        None => delete.filter(otps::Column::PhoneNo.is_null()),
                    };
                    delete.exec(txn).await?;

                    otps::ActiveModel {
                        id: Set(code.id),
                        phone_no: Set(code.phone_no.clone()),
                        code: Set(code.code.clone()),
                        expires_at: Set(code.expires_at),
                        created_at: Set(code.created_at),
                    }
                    .insert(txn)
                    .await?;
                    Ok(())
                })
            })
            .await
            .context("replace otp for phone")?;
        Ok(())
    }

    async fn find_latest(
        &self,
        phone_no: &str,
        code: &str,
    ) -> Result<Option<OtpCode>, LeaderboardError> {
        let model = otps::Entity::find()
            .filter(otps::Column::PhoneNo.eq(phone_no))
            .filter(otps::Column::Code.eq(code))
            .order_by_desc(otps::Column::CreatedAt)
            .one(&self.db)
            .await
            .context("find latest otp")?;
        Ok(model.map(otp_from_model))
    }
}

fn otp_from_model(model: otps::Model) -> OtpCode {
    OtpCode {
        id: model.id,
        phone_no: model.phone_no,
        code: model.code,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}

// ── Score repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbScoreRepository {
    pub db: DatabaseConnection,
}

/// Row shape shared by the grouped-sum ranking queries.
#[derive(Debug, FromQueryResult)]
struct TotalRow {
    player_id: Uuid,
    total: i64,
}

impl ScoreRepository for DbScoreRepository {
    async fn insert_within_daily_cap(
        &self,
        score: &Score,
        cap: u64,
    ) -> Result<bool, LeaderboardError> {
        // Serializable so two concurrent submissions cannot both pass the
        // count check and overshoot the cap.
        let inserted = self
            .db
            .transaction_with_config::<_, bool, sea_orm::DbErr>(
                |txn| {
                    let score = score.clone();
                    Box::pin(async move {
                        let day = score.created_at.date_naive();
                        let day_start = day.and_time(NaiveTime::MIN).and_utc();
                        let day_end = day_start + Duration::days(1);

                        let submitted_today = scores::Entity::find()
                            .filter(scores::Column::PlayerId.eq(score.player_id))
                            .filter(scores::Column::CreatedAt.gte(day_start))
                            .filter(scores::Column::CreatedAt.lt(day_end))
                            .count(txn)
                            .await?;
                        if submitted_today >= cap {
                            return Ok(false);
                        }

                        scores::ActiveModel {
                            id: Set(score.id),
                            player_id: Set(score.player_id),
                            value: Set(score.value),
                            created_at: Set(score.created_at),
                        }
                        .insert(txn)
                        .await?;
                        Ok(true)
                    })
                },
                Some(IsolationLevel::Serializable),
                None,
            )
            .await
            .context("insert score within daily cap")?;
        Ok(inserted)
    }

    async fn overall_totals(&self) -> Result<Vec<ScoreTotal>, LeaderboardError> {
        let rows = scores::Entity::find()
            .select_only()
            .column(scores::Column::PlayerId)
            .column_as(scores::Column::Value.sum(), "total")
            .group_by(scores::Column::PlayerId)
            .order_by_desc(scores::Column::Value.sum())
            .into_model::<TotalRow>()
            .all(&self.db)
            .await
            .context("sum scores by player")?;
        Ok(rows.into_iter().map(total_from_row).collect())
    }

    async fn totals_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ScoreTotal>, LeaderboardError> {
        let rows = scores::Entity::find()
            .select_only()
            .column(scores::Column::PlayerId)
            .column_as(scores::Column::Value.sum(), "total")
            .filter(scores::Column::CreatedAt.gte(start))
            .filter(scores::Column::CreatedAt.lt(end))
            .group_by(scores::Column::PlayerId)
            .order_by_desc(scores::Column::Value.sum())
            .into_model::<TotalRow>()
            .all(&self.db)
            .await
            .context("sum scores by player in window")?;
        Ok(rows.into_iter().map(total_from_row).collect())
    }
}

fn total_from_row(row: TotalRow) -> ScoreTotal {
    ScoreTotal {
        player_id: row.player_id,
        total: row.total,
    }
}
