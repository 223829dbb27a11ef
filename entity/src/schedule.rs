use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schedule")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub day: String,
    pub time: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::schedule_game::Entity")]
    ScheduleGame,
}

impl Related<super::schedule_game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleGame.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
