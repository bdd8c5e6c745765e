use models::{
    enrollment::{
        Enrollment, EnrollmentBase, EnrollmentError, EnrollmentKey, EnrollmentKind,
        GradingScheme, SectionKey,
    },
    grade::Grade,
};
use sea_orm::{ActiveValue::Set, entity::prelude::*};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Association between a student and a section. Every grading scheme lives in
/// this one table, told apart by `type`; scheme-specific columns are nullable.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub department_abbreviation: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_number: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub section_number: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub semester: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub section_year: i32,
    #[sea_orm(column_name = "declaration_date")]
    pub enrollment_date: Date,
    #[sea_orm(column_name = "type")]
    pub kind: String, // "letter_grade" or "pass_fail"
    pub min_satisfactory: Option<Grade>,
    pub application_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::StudentId",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::section::Entity",
        from = "(Column::DepartmentAbbreviation, Column::CourseNumber, Column::SectionNumber, Column::Semester, Column::SectionYear)",
        to = "(super::section::Column::DepartmentAbbreviation, super::section::Column::CourseNumber, super::section::Column::SectionNumber, super::section::Column::Semester, super::section::Column::SectionYear)",
        on_delete = "Cascade"
    )]
    Section,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Why a stored row could not be read back as an `Enrollment`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("unknown enrollment type {0:?}")]
    UnknownKind(String),
    #[error("column {0} is required for this enrollment type")]
    MissingColumn(&'static str),
    #[error(transparent)]
    Invalid(#[from] EnrollmentError),
}

impl Model {
    pub fn key(&self) -> EnrollmentKey {
        EnrollmentKey {
            student_id: self.student_id,
            section: SectionKey {
                department_abbreviation: self.department_abbreviation.clone(),
                course_number: self.course_number,
                section_number: self.section_number,
                semester: self.semester.clone(),
                section_year: self.section_year,
            },
        }
    }

    /// Rebuilds the domain value, revalidating it on the way
    pub fn into_enrollment(self) -> Result<Enrollment, RowError> {
        let kind = EnrollmentKind::from_str(&self.kind)
            .map_err(|_| RowError::UnknownKind(self.kind.clone()))?;

        let scheme = match kind {
            EnrollmentKind::LetterGrade => GradingScheme::LetterGrade {
                min_satisfactory: self
                    .min_satisfactory
                    .ok_or(RowError::MissingColumn("min_satisfactory"))?,
            },
            EnrollmentKind::PassFail => GradingScheme::PassFail {
                application_date: self
                    .application_date
                    .ok_or(RowError::MissingColumn("application_date"))?,
            },
        };

        Ok(EnrollmentBase::new(self.key(), self.enrollment_date).attach(scheme)?)
    }
}

impl From<&Enrollment> for ActiveModel {
    fn from(enrollment: &Enrollment) -> Self {
        let key = enrollment.key();

        Self {
            student_id: Set(key.student_id),
            department_abbreviation: Set(key.section.department_abbreviation.clone()),
            course_number: Set(key.section.course_number),
            section_number: Set(key.section.section_number),
            semester: Set(key.section.semester.clone()),
            section_year: Set(key.section.section_year),
            enrollment_date: Set(enrollment.enrollment_date()),
            kind: Set(enrollment.kind().as_str().to_owned()),
            min_satisfactory: Set(enrollment.min_satisfactory()),
            application_date: Set(enrollment.application_date()),
        }
    }
}
