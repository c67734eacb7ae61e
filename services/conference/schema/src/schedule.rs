use sea_orm::entity::prelude::*;

/// A presentation assigned to a room at a start time.
///
/// `(id_room, date_start)` is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schedule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date_start: DateTime,
    pub id_presentation: i32,
    pub id_room: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::presentations::Entity",
        from = "Column::IdPresentation",
        to = "super::presentations::Column::Id"
    )]
    Presentation,
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::IdRoom",
        to = "super::rooms::Column::Id"
    )]
    Room,
}

impl Related<super::presentations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Presentation.def()
    }
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
