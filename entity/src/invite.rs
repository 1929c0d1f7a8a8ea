use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "invites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub guild_id: String,
    pub channel_id: String,
    pub channel_name: String,
    pub primary_source: String,
    pub secondary_source: String,
    pub description: Option<String>,
    #[sea_orm(default_value = 0)]
    pub uses: i32,
    pub max_uses: Option<i32>,
    pub created_at: DateTimeUtc,
    pub created_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::invite_use::Entity")]
    InviteUse,
}

impl Related<super::invite_use::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InviteUse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
