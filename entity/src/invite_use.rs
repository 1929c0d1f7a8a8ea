use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "invite_uses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub invite_id: i32,
    pub user_id: String,
    pub username: String,
    pub used_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::invite::Entity",
        from = "Column::InviteId",
        to = "super::invite::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Invite,
}

impl Related<super::invite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
