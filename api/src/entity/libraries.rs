use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "libraries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::library_books::Entity")]
    LibraryBooks,
    #[sea_orm(has_one = "super::librarians::Entity")]
    Librarians,
}

impl Related<super::library_books::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LibraryBooks.def()
    }
}

impl Related<super::librarians::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Librarians.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
