use sea_orm::entity::prelude::*;

/// One-time passcode issued for phone verification.
/// Reissuing for the same number deletes the older rows first, so the newest
/// row per number is the active code. Expiry is checked at read time; rows
/// are never cleaned up on successful registration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "otps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub phone_no: Option<String>,
    pub code: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
