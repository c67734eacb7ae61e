use sea_orm::entity::prelude::*;

/// Join row linking a presenter to a presentation they authored.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_presentation: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_user: i32,
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
        belongs_to = "super::users::Entity",
        from = "Column::IdUser",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::presentations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Presentation.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
