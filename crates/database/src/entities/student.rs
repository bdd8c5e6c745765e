use models::enrollment::StudentRef;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: i32,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

// Many-to-many relationship with sections through enrollments
impl Related<super::section::Entity> for Entity {
    fn to() -> RelationDef {
        super::enrollment::Relation::Section.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::enrollment::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl StudentRef for Model {
    fn student_id(&self) -> i32 {
        self.student_id
    }
}
