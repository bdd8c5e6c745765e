use sea_orm_migration::prelude::*;

const GRADES: [&str; 5] = ["A", "B", "C", "D", "F"];
const LETTER_GRADE: &str = "letter_grade";
const PASS_FAIL: &str = "pass_fail";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create students table
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::StudentId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::LastName).string().not_null())
                    .col(ColumnDef::new(Students::FirstName).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create sections table, keyed by its five-part natural key
        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sections::DepartmentAbbreviation)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Sections::CourseNumber).integer().not_null())
                    .col(ColumnDef::new(Sections::SectionNumber).integer().not_null())
                    .col(ColumnDef::new(Sections::Semester).string_len(10).not_null())
                    .col(ColumnDef::new(Sections::SectionYear).integer().not_null())
                    .col(ColumnDef::new(Sections::Building).string().not_null())
                    .col(ColumnDef::new(Sections::Room).integer().not_null())
                    .col(ColumnDef::new(Sections::Instructor).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(Sections::DepartmentAbbreviation)
                            .col(Sections::CourseNumber)
                            .col(Sections::SectionNumber)
                            .col(Sections::Semester)
                            .col(Sections::SectionYear),
                    )
                    .to_owned(),
            )
            .await?;

        // Create enrollments table. Every grading scheme shares this table,
        // distinguished by `type`, with one nullable column per scheme.
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Enrollments::StudentId).integer().not_null())
                    .col(
                        ColumnDef::new(Enrollments::DepartmentAbbreviation)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Enrollments::CourseNumber).integer().not_null())
                    .col(
                        ColumnDef::new(Enrollments::SectionNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Enrollments::Semester).string_len(10).not_null())
                    .col(ColumnDef::new(Enrollments::SectionYear).integer().not_null())
                    .col(ColumnDef::new(Enrollments::DeclarationDate).date().not_null())
                    .col(ColumnDef::new(Enrollments::Type).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Enrollments::MinSatisfactory)
                            .string_len(1)
                            .check(Expr::col(Enrollments::MinSatisfactory).is_in(GRADES)),
                    )
                    .col(ColumnDef::new(Enrollments::ApplicationDate).date())
                    .primary_key(
                        Index::create()
                            .col(Enrollments::StudentId)
                            .col(Enrollments::DepartmentAbbreviation)
                            .col(Enrollments::CourseNumber)
                            .col(Enrollments::SectionNumber)
                            .col(Enrollments::Semester)
                            .col(Enrollments::SectionYear),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("enrollments_students_fk_01")
                            .from(Enrollments::Table, Enrollments::StudentId)
                            .to(Students::Table, Students::StudentId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("enrollments_sections_fk_01")
                            .from_tbl(Enrollments::Table)
                            .from_col(Enrollments::DepartmentAbbreviation)
                            .from_col(Enrollments::CourseNumber)
                            .from_col(Enrollments::SectionNumber)
                            .from_col(Enrollments::Semester)
                            .from_col(Enrollments::SectionYear)
                            .to_tbl(Sections::Table)
                            .to_col(Sections::DepartmentAbbreviation)
                            .to_col(Sections::CourseNumber)
                            .to_col(Sections::SectionNumber)
                            .to_col(Sections::Semester)
                            .to_col(Sections::SectionYear)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    // Only known discriminators
                    .check(Expr::col(Enrollments::Type).is_in([LETTER_GRADE, PASS_FAIL]))
                    // Each discriminator requires its own column
                    .check(
                        Expr::col(Enrollments::Type)
                            .ne(LETTER_GRADE)
                            .or(Expr::col(Enrollments::MinSatisfactory).is_not_null()),
                    )
                    .check(
                        Expr::col(Enrollments::Type)
                            .ne(PASS_FAIL)
                            .or(Expr::col(Enrollments::ApplicationDate).is_not_null()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Sections::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Students {
    Table,
    StudentId,
    LastName,
    FirstName,
    Email,
}

#[derive(Iden)]
enum Sections {
    Table,
    DepartmentAbbreviation,
    CourseNumber,
    SectionNumber,
    Semester,
    SectionYear,
    Building,
    Room,
    Instructor,
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
    DeclarationDate,
    Type,
    MinSatisfactory,
    ApplicationDate,
}
