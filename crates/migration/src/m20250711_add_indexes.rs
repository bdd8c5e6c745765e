use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // A student may hold at most one section of a course per term
        manager
            .create_index(
                Index::create()
                    .name("enrollment_uk_01")
                    .table(Enrollments::Table)
                    .col(Enrollments::DepartmentAbbreviation)
                    .col(Enrollments::CourseNumber)
                    .col(Enrollments::SectionYear)
                    .col(Enrollments::Semester)
                    .col(Enrollments::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // The primary key leads with student_id, so section rosters need their own index
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_section")
                    .table(Enrollments::Table)
                    .col(Enrollments::DepartmentAbbreviation)
                    .col(Enrollments::CourseNumber)
                    .col(Enrollments::SectionNumber)
                    .col(Enrollments::Semester)
                    .col(Enrollments::SectionYear)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_type")
                    .table(Enrollments::Table)
                    .col(Enrollments::Type)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(Index::drop().name("idx_enrollments_type").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_enrollments_section").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("enrollment_uk_01").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Enrollments {
    Table,
    StudentId,
    DepartmentAbbreviation,
    CourseNumber,
    SectionNumber,
    Semester,
    SectionYear,
    Type,
}
