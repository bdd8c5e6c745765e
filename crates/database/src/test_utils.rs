use crate::entities::{sections, students};
use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use models::enrollment::SectionKey;
use sea_orm::{ActiveValue::Set, ConnectOptions, Database, DatabaseConnection, EntityTrait};

/// Fresh in-memory SQLite database with every migration applied
pub async fn setup_db() -> DatabaseConnection {
    let _ = env_logger::builder().is_test(true).try_init();

    // A second pooled connection would open a second, empty in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub async fn insert_student(db: &DatabaseConnection, student_id: i32) -> students::Model {
    let model = students::Model {
        student_id,
        last_name: format!("Last{student_id}"),
        first_name: format!("First{student_id}"),
        email: format!("student{student_id}@example.edu"),
    };

    students::Entity::insert(students::ActiveModel {
        student_id: Set(model.student_id),
        last_name: Set(model.last_name.clone()),
        first_name: Set(model.first_name.clone()),
        email: Set(model.email.clone()),
    })
    .exec_without_returning(db)
    .await
    .unwrap();

    model
}

pub async fn insert_section(db: &DatabaseConnection, key: &SectionKey) -> sections::Model {
    let model = sections::Model {
        department_abbreviation: key.department_abbreviation.clone(),
        course_number: key.course_number,
        section_number: key.section_number,
        semester: key.semester.clone(),
        section_year: key.section_year,
        building: "ECS".to_string(),
        room: 416,
        instructor: "Brown".to_string(),
    };

    sections::Entity::insert(sections::ActiveModel {
        department_abbreviation: Set(model.department_abbreviation.clone()),
        course_number: Set(model.course_number),
        section_number: Set(model.section_number),
        semester: Set(model.semester.clone()),
        section_year: Set(model.section_year),
        building: Set(model.building.clone()),
        room: Set(model.room),
        instructor: Set(model.instructor.clone()),
    })
    .exec_without_returning(db)
    .await
    .unwrap();

    model
}
