use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::league_permission::Entity")]
    LeaguePermission,
    #[sea_orm(has_many = "super::team_permission::Entity")]
    TeamPermission,
}

impl Related<super::league_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaguePermission.def()
    }
}

impl Related<super::team_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamPermission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
