use models::enrollment::{SectionKey, SectionRef};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub department_abbreviation: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_number: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub section_number: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub semester: String, // e.g. "Fall", "Spring"
    #[sea_orm(primary_key, auto_increment = false)]
    pub section_year: i32,
    pub building: String,
    pub room: i32,
    pub instructor: String,
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

// Many-to-many relationship with students through enrollments
impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        super::enrollment::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::enrollment::Relation::Section.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl SectionRef for Model {
    fn section_key(&self) -> SectionKey {
        SectionKey {
            department_abbreviation: self.department_abbreviation.clone(),
            course_number: self.course_number,
            section_number: self.section_number,
            semester: self.semester.clone(),
            section_year: self.section_year,
        }
    }
}
