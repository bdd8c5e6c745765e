use crate::{
    entities::{enrollments, sections, students},
    error::ServiceError,
};
use chrono::NaiveDate;
use log::{debug, info};
use models::{
    enrollment::{
        Enrollment, EnrollmentBase, EnrollmentError, EnrollmentKey, EnrollmentKind,
        GradingScheme, SectionKey,
    },
    grade::Grade,
};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Select, TransactionTrait,
};

pub struct EnrollmentService;

impl EnrollmentService {
    /// Persists an already-validated enrollment as a single row
    pub async fn enroll(
        db: &DatabaseConnection,
        enrollment: Enrollment,
    ) -> Result<Enrollment, ServiceError> {
        let txn = db.begin().await?;

        enrollments::Entity::insert(enrollments::ActiveModel::from(&enrollment))
            .exec_without_returning(&txn)
            .await
            .map_err(|e| ServiceError::from_write(e, enrollment.key()))?;

        txn.commit().await?;
        info!("Saved {enrollment}");
        Ok(enrollment)
    }

    /// Enrolls a student in a section under letter grading
    pub async fn enroll_letter_grade(
        db: &DatabaseConnection,
        student_id: i32,
        section: &SectionKey,
        enrollment_date: NaiveDate,
        min_satisfactory: &str,
    ) -> Result<Enrollment, ServiceError> {
        // Reject a bad grade before touching storage at all
        let min_satisfactory = min_satisfactory
            .parse::<Grade>()
            .map_err(EnrollmentError::from)?;

        let enrollment = Self::resolve_base(db, student_id, section, enrollment_date)
            .await?
            .attach(GradingScheme::LetterGrade { min_satisfactory })?;

        Self::enroll(db, enrollment).await
    }

    /// Enrolls a student in a section under pass/fail grading
    pub async fn enroll_pass_fail(
        db: &DatabaseConnection,
        student_id: i32,
        section: &SectionKey,
        enrollment_date: NaiveDate,
        application_date: NaiveDate,
    ) -> Result<Enrollment, ServiceError> {
        let enrollment = Self::resolve_base(db, student_id, section, enrollment_date)
            .await?
            .pass_fail(application_date)?;

        Self::enroll(db, enrollment).await
    }

    /// Looks up both parents and builds the base record from whatever was found
    async fn resolve_base(
        db: &DatabaseConnection,
        student_id: i32,
        section: &SectionKey,
        enrollment_date: NaiveDate,
    ) -> Result<EnrollmentBase, ServiceError> {
        let student = students::Entity::find_by_id(student_id).one(db).await?;
        let section_model = sections::Entity::find()
            .filter(
                Condition::all()
                    .add(
                        sections::Column::DepartmentAbbreviation
                            .eq(section.department_abbreviation.as_str()),
                    )
                    .add(sections::Column::CourseNumber.eq(section.course_number))
                    .add(sections::Column::SectionNumber.eq(section.section_number))
                    .add(sections::Column::Semester.eq(section.semester.as_str()))
                    .add(sections::Column::SectionYear.eq(section.section_year)),
            )
            .one(db)
            .await?;

        debug!(
            "Resolved student {student_id}: {}, section {section}: {}",
            student.is_some(),
            section_model.is_some()
        );

        let mut builder = Enrollment::builder().enrolled_on(enrollment_date);
        if let Some(student) = &student {
            builder = builder.student(student);
        }
        if let Some(section) = &section_model {
            builder = builder.section(section);
        }

        Ok(builder.build_base()?)
    }

    pub async fn find_by_key(
        db: &DatabaseConnection,
        key: &EnrollmentKey,
    ) -> Result<Option<Enrollment>, ServiceError> {
        enrollments::Entity::find()
            .filter(Self::key_condition(key))
            .one(db)
            .await?
            .map(Self::to_enrollment)
            .transpose()
    }

    pub async fn list_by_student(
        db: &DatabaseConnection,
        student_id: i32,
    ) -> Result<Vec<Enrollment>, ServiceError> {
        let query =
            enrollments::Entity::find().filter(enrollments::Column::StudentId.eq(student_id));
        Self::fetch_all(db, query).await
    }

    pub async fn list_by_section(
        db: &DatabaseConnection,
        section: &SectionKey,
    ) -> Result<Vec<Enrollment>, ServiceError> {
        let query = enrollments::Entity::find().filter(Self::section_condition(section));
        Self::fetch_all(db, query).await
    }

    /// Only the enrollments graded under one scheme
    pub async fn list_by_kind(
        db: &DatabaseConnection,
        kind: EnrollmentKind,
    ) -> Result<Vec<Enrollment>, ServiceError> {
        let query =
            enrollments::Entity::find().filter(enrollments::Column::Kind.eq(kind.as_str()));
        Self::fetch_all(db, query).await
    }

    pub async fn update_enrollment_date(
        db: &DatabaseConnection,
        key: &EnrollmentKey,
        enrollment_date: NaiveDate,
    ) -> Result<Enrollment, ServiceError> {
        Self::update(db, key, |e| e.with_enrollment_date(enrollment_date)).await
    }

    pub async fn update_min_satisfactory(
        db: &DatabaseConnection,
        key: &EnrollmentKey,
        min_satisfactory: &str,
    ) -> Result<Enrollment, ServiceError> {
        Self::update(db, key, |e| e.with_min_satisfactory(min_satisfactory)).await
    }

    pub async fn update_application_date(
        db: &DatabaseConnection,
        key: &EnrollmentKey,
        application_date: NaiveDate,
    ) -> Result<Enrollment, ServiceError> {
        Self::update(db, key, |e| e.with_application_date(application_date)).await
    }

    /// Removes the enrollment. Returns whether a row existed.
    pub async fn withdraw(
        db: &DatabaseConnection,
        key: &EnrollmentKey,
    ) -> Result<bool, ServiceError> {
        let result = enrollments::Entity::delete_many()
            .filter(Self::key_condition(key))
            .exec(db)
            .await?;

        let removed = result.rows_affected > 0;
        if removed {
            info!("Withdrew {key}");
        } else {
            debug!("Nothing to withdraw for {key}");
        }

        Ok(removed)
    }

    /// Read-modify-write of one row inside a transaction
    async fn update<F>(
        db: &DatabaseConnection,
        key: &EnrollmentKey,
        change: F,
    ) -> Result<Enrollment, ServiceError>
    where
        F: FnOnce(Enrollment) -> Result<Enrollment, EnrollmentError>,
    {
        let txn = db.begin().await?;

        let current = enrollments::Entity::find()
            .filter(Self::key_condition(key))
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound(key.clone()))?;

        let updated = change(Self::to_enrollment(current)?)?;

        enrollments::Entity::update_many()
            .set(enrollments::ActiveModel::from(&updated))
            .filter(Self::key_condition(key))
            .exec(&txn)
            .await
            .map_err(|e| ServiceError::from_write(e, key))?;

        txn.commit().await?;
        info!("Updated {updated}");
        Ok(updated)
    }

    async fn fetch_all<C: ConnectionTrait>(
        db: &C,
        query: Select<enrollments::Entity>,
    ) -> Result<Vec<Enrollment>, ServiceError> {
        query
            .order_by_asc(enrollments::Column::StudentId)
            .order_by_asc(enrollments::Column::DepartmentAbbreviation)
            .order_by_asc(enrollments::Column::CourseNumber)
            .order_by_asc(enrollments::Column::SectionNumber)
            .order_by_asc(enrollments::Column::Semester)
            .order_by_asc(enrollments::Column::SectionYear)
            .all(db)
            .await?
            .into_iter()
            .map(Self::to_enrollment)
            .collect()
    }

    fn to_enrollment(model: enrollments::Model) -> Result<Enrollment, ServiceError> {
        let key = model.key();
        model
            .into_enrollment()
            .map_err(|source| ServiceError::CorruptRow { key, source })
    }

    fn key_condition(key: &EnrollmentKey) -> Condition {
        Condition::all()
            .add(enrollments::Column::StudentId.eq(key.student_id))
            .add(Self::section_condition(&key.section))
    }

    fn section_condition(section: &SectionKey) -> Condition {
        Condition::all()
            .add(
                enrollments::Column::DepartmentAbbreviation
                    .eq(section.department_abbreviation.as_str()),
            )
            .add(enrollments::Column::CourseNumber.eq(section.course_number))
            .add(enrollments::Column::SectionNumber.eq(section.section_number))
            .add(enrollments::Column::Semester.eq(section.semester.as_str()))
            .add(enrollments::Column::SectionYear.eq(section.section_year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, insert_section, insert_student, setup_db};
    use models::enrollment::ValidationError;
    use sea_orm::{DbBackend, PaginatorTrait, Statement};

    fn cs330(section_number: i32) -> SectionKey {
        SectionKey::new("CS", 330, section_number, "Fall", 2024)
    }

    async fn row_count(db: &DatabaseConnection) -> u64 {
        enrollments::Entity::find().count(db).await.unwrap()
    }

    #[tokio::test]
    async fn test_letter_grade_scenario() {
        let db = setup_db().await;
        insert_student(&db, 101).await;
        insert_section(&db, &cs330(1)).await;

        let enrollment = EnrollmentService::enroll_letter_grade(
            &db,
            101,
            &cs330(1),
            date(2024, 8, 19),
            "C",
        )
        .await
        .unwrap();

        let rows = enrollments::Entity::find().all(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, "letter_grade");
        assert_eq!(rows[0].min_satisfactory, Some(Grade::C));
        assert_eq!(rows[0].application_date, None);
        assert_eq!(rows[0].key(), *enrollment.key());

        let again =
            EnrollmentService::enroll_letter_grade(&db, 101, &cs330(1), date(2024, 8, 20), "B")
                .await
                .unwrap_err();
        assert!(
            matches!(again, ServiceError::DuplicateEnrollment(ref key) if key == enrollment.key())
        );
        assert_eq!(row_count(&db).await, 1);
    }

    #[tokio::test]
    async fn test_one_section_per_course_and_term() {
        let db = setup_db().await;
        insert_student(&db, 101).await;
        insert_section(&db, &cs330(1)).await;
        insert_section(&db, &cs330(2)).await;
        insert_section(&db, &SectionKey::new("CS", 330, 1, "Spring", 2025)).await;

        EnrollmentService::enroll_letter_grade(&db, 101, &cs330(1), date(2024, 8, 19), "C")
            .await
            .unwrap();

        // A different section of the same course in the same term is still a duplicate
        let err = EnrollmentService::enroll_pass_fail(
            &db,
            101,
            &cs330(2),
            date(2024, 8, 19),
            date(2024, 9, 1),
        )
        .await
        .unwrap_err();
        assert!(err.is_duplicate());

        // The same course in another term is fine
        EnrollmentService::enroll_letter_grade(
            &db,
            101,
            &SectionKey::new("CS", 330, 1, "Spring", 2025),
            date(2025, 1, 20),
            "A",
        )
        .await
        .unwrap();

        assert_eq!(row_count(&db).await, 2);
    }

    #[tokio::test]
    async fn test_invalid_grade_persists_nothing() {
        let db = setup_db().await;
        insert_student(&db, 101).await;
        insert_section(&db, &cs330(1)).await;

        for bad in ["E", "c", "", "A+"] {
            let err =
                EnrollmentService::enroll_letter_grade(&db, 101, &cs330(1), date(2024, 8, 19), bad)
                    .await
                    .unwrap_err();
            assert!(matches!(
                err,
                ServiceError::Enrollment(EnrollmentError::InvalidGrade(_))
            ));
        }

        assert_eq!(row_count(&db).await, 0);
    }

    #[tokio::test]
    async fn test_every_grade_round_trips() {
        let db = setup_db().await;
        insert_section(&db, &cs330(1)).await;

        for (offset, grade) in Grade::all().into_iter().enumerate() {
            let student_id = 200 + offset as i32;
            insert_student(&db, student_id).await;

            let saved = EnrollmentService::enroll_letter_grade(
                &db,
                student_id,
                &cs330(1),
                date(2024, 8, 19),
                grade.as_str(),
            )
            .await
            .unwrap();

            let loaded = EnrollmentService::find_by_key(&db, saved.key())
                .await
                .unwrap()
                .unwrap();
            assert_eq!(loaded.min_satisfactory(), Some(grade));
            assert_eq!(loaded.scheme(), saved.scheme());
            assert_eq!(loaded.enrollment_date(), date(2024, 8, 19));
        }
    }

    #[tokio::test]
    async fn test_missing_parents() {
        let db = setup_db().await;
        insert_student(&db, 101).await;
        insert_section(&db, &cs330(1)).await;

        let err =
            EnrollmentService::enroll_letter_grade(&db, 999, &cs330(1), date(2024, 8, 19), "C")
                .await
                .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Enrollment(EnrollmentError::Validation(
                ValidationError::MissingStudent
            ))
        ));

        let err =
            EnrollmentService::enroll_letter_grade(&db, 101, &cs330(9), date(2024, 8, 19), "C")
                .await
                .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Enrollment(EnrollmentError::Validation(
                ValidationError::MissingSection
            ))
        ));

        assert_eq!(row_count(&db).await, 0);
    }

    #[tokio::test]
    async fn test_dangling_section_is_a_constraint_violation() {
        let db = setup_db().await;
        let student = insert_student(&db, 101).await;

        // Built without going through the section lookup
        let enrollment = Enrollment::builder()
            .student(&student)
            .section(&cs330(7))
            .enrolled_on(date(2024, 8, 19))
            .letter_grade("B")
            .unwrap();

        let err = EnrollmentService::enroll(&db, enrollment).await.unwrap_err();
        assert!(matches!(err, ServiceError::ConstraintViolation(_)));
        assert_eq!(row_count(&db).await, 0);
    }

    #[tokio::test]
    async fn test_pass_fail_enrollment() {
        let db = setup_db().await;
        insert_student(&db, 101).await;
        insert_section(&db, &cs330(1)).await;

        let err = EnrollmentService::enroll_pass_fail(
            &db,
            101,
            &cs330(1),
            date(2024, 8, 19),
            date(2024, 8, 1),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Enrollment(EnrollmentError::Validation(
                ValidationError::ApplicationBeforeEnrollment { .. }
            ))
        ));

        let enrollment = EnrollmentService::enroll_pass_fail(
            &db,
            101,
            &cs330(1),
            date(2024, 8, 19),
            date(2024, 9, 3),
        )
        .await
        .unwrap();

        let row = enrollments::Entity::find().one(&db).await.unwrap().unwrap();
        assert_eq!(row.kind, "pass_fail");
        assert_eq!(row.min_satisfactory, None);
        assert_eq!(row.application_date, Some(date(2024, 9, 3)));

        let loaded = EnrollmentService::find_by_key(&db, enrollment.key())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.kind(), EnrollmentKind::PassFail);
        assert_eq!(loaded.min_satisfactory(), None);
        assert_eq!(loaded.application_date(), Some(date(2024, 9, 3)));

        let by_student = EnrollmentService::list_by_student(&db, 101).await.unwrap();
        assert_eq!(by_student, vec![enrollment.clone()]);

        let moved =
            EnrollmentService::update_application_date(&db, enrollment.key(), date(2024, 9, 10))
                .await
                .unwrap();
        assert_eq!(moved.application_date(), Some(date(2024, 9, 10)));

        let loaded = EnrollmentService::find_by_key(&db, enrollment.key())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.application_date(), Some(date(2024, 9, 10)));
        assert_eq!(loaded.enrollment_date(), date(2024, 8, 19));
    }

    #[tokio::test]
    async fn test_listing() {
        let db = setup_db().await;
        for id in [101, 102, 103] {
            insert_student(&db, id).await;
        }
        let db_course = SectionKey::new("CS", 323, 1, "Fall", 2024);
        insert_section(&db, &cs330(1)).await;
        insert_section(&db, &db_course).await;

        EnrollmentService::enroll_letter_grade(&db, 102, &cs330(1), date(2024, 8, 19), "C")
            .await
            .unwrap();
        EnrollmentService::enroll_letter_grade(&db, 101, &cs330(1), date(2024, 8, 19), "D")
            .await
            .unwrap();
        EnrollmentService::enroll_pass_fail(
            &db,
            101,
            &db_course,
            date(2024, 8, 19),
            date(2024, 8, 30),
        )
        .await
        .unwrap();
        EnrollmentService::enroll_pass_fail(
            &db,
            103,
            &db_course,
            date(2024, 8, 20),
            date(2024, 8, 20),
        )
        .await
        .unwrap();

        let by_student = EnrollmentService::list_by_student(&db, 101).await.unwrap();
        let courses: Vec<i32> = by_student
            .iter()
            .map(|e| e.section_key().course_number)
            .collect();
        assert_eq!(courses, vec![323, 330]);

        let roster = EnrollmentService::list_by_section(&db, &cs330(1)).await.unwrap();
        let students: Vec<i32> = roster.iter().map(|e| e.student_id()).collect();
        assert_eq!(students, vec![101, 102]);

        let letter = EnrollmentService::list_by_kind(&db, EnrollmentKind::LetterGrade)
            .await
            .unwrap();
        assert_eq!(letter.len(), 2);
        assert!(letter.iter().all(|e| e.kind() == EnrollmentKind::LetterGrade));

        let pass_fail = EnrollmentService::list_by_kind(&db, EnrollmentKind::PassFail)
            .await
            .unwrap();
        let students: Vec<i32> = pass_fail.iter().map(|e| e.student_id()).collect();
        assert_eq!(students, vec![101, 103]);

        assert!(EnrollmentService::list_by_student(&db, 999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_updates() {
        let db = setup_db().await;
        insert_student(&db, 101).await;
        insert_section(&db, &cs330(1)).await;

        let enrollment =
            EnrollmentService::enroll_letter_grade(&db, 101, &cs330(1), date(2024, 8, 19), "C")
                .await
                .unwrap();
        let key = enrollment.key().clone();

        let updated = EnrollmentService::update_min_satisfactory(&db, &key, "B")
            .await
            .unwrap();
        assert_eq!(updated.min_satisfactory(), Some(Grade::B));

        let err = EnrollmentService::update_min_satisfactory(&db, &key, "X")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Enrollment(EnrollmentError::InvalidGrade(_))
        ));

        let err = EnrollmentService::update_application_date(&db, &key, date(2024, 9, 1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Enrollment(EnrollmentError::Validation(
                ValidationError::WrongGradingScheme { .. }
            ))
        ));

        EnrollmentService::update_enrollment_date(&db, &key, date(2024, 8, 21))
            .await
            .unwrap();

        let loaded = EnrollmentService::find_by_key(&db, &key).await.unwrap().unwrap();
        assert_eq!(loaded.min_satisfactory(), Some(Grade::B));
        assert_eq!(loaded.enrollment_date(), date(2024, 8, 21));

        let missing = EnrollmentKey {
            student_id: 555,
            section: cs330(1),
        };
        let err = EnrollmentService::update_min_satisfactory(&db, &missing, "A")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref key) if *key == missing));
    }

    #[tokio::test]
    async fn test_withdraw() {
        let db = setup_db().await;
        insert_student(&db, 101).await;
        insert_section(&db, &cs330(1)).await;

        let enrollment =
            EnrollmentService::enroll_letter_grade(&db, 101, &cs330(1), date(2024, 8, 19), "C")
                .await
                .unwrap();

        assert!(EnrollmentService::withdraw(&db, enrollment.key()).await.unwrap());
        assert!(EnrollmentService::find_by_key(&db, enrollment.key())
            .await
            .unwrap()
            .is_none());
        assert_eq!(row_count(&db).await, 0);
        assert!(!EnrollmentService::withdraw(&db, enrollment.key()).await.unwrap());

        // Withdrawing frees the slot for a new registration
        EnrollmentService::enroll_pass_fail(
            &db,
            101,
            &cs330(1),
            date(2024, 8, 25),
            date(2024, 8, 25),
        )
        .await
        .unwrap();
        assert_eq!(row_count(&db).await, 1);
    }

    #[tokio::test]
    async fn test_deleting_student_cascades() {
        let db = setup_db().await;
        insert_student(&db, 101).await;
        insert_student(&db, 102).await;
        insert_section(&db, &cs330(1)).await;

        for id in [101, 102] {
            EnrollmentService::enroll_letter_grade(&db, id, &cs330(1), date(2024, 8, 19), "C")
                .await
                .unwrap();
        }

        students::Entity::delete_by_id(101).exec(&db).await.unwrap();

        let remaining = EnrollmentService::list_by_section(&db, &cs330(1)).await.unwrap();
        let students: Vec<i32> = remaining.iter().map(|e| e.student_id()).collect();
        assert_eq!(students, vec![102]);
    }

    #[tokio::test]
    async fn test_deleting_section_cascades() {
        let db = setup_db().await;
        for id in [101, 102, 103] {
            insert_student(&db, id).await;
        }
        let other = SectionKey::new("CS", 323, 1, "Fall", 2024);
        insert_section(&db, &cs330(1)).await;
        insert_section(&db, &other).await;

        EnrollmentService::enroll_letter_grade(&db, 101, &cs330(1), date(2024, 8, 19), "C")
            .await
            .unwrap();
        EnrollmentService::enroll_pass_fail(
            &db,
            102,
            &cs330(1),
            date(2024, 8, 19),
            date(2024, 8, 26),
        )
        .await
        .unwrap();
        EnrollmentService::enroll_pass_fail(
            &db,
            101,
            &other,
            date(2024, 8, 19),
            date(2024, 8, 26),
        )
        .await
        .unwrap();
        EnrollmentService::enroll_letter_grade(&db, 103, &other, date(2024, 8, 20), "B")
            .await
            .unwrap();

        let removed = sections::Entity::delete_many()
            .filter(sections::Column::DepartmentAbbreviation.eq("CS"))
            .filter(sections::Column::CourseNumber.eq(330))
            .filter(sections::Column::SectionNumber.eq(1))
            .filter(sections::Column::Semester.eq("Fall"))
            .filter(sections::Column::SectionYear.eq(2024))
            .exec(&db)
            .await
            .unwrap();
        assert_eq!(removed.rows_affected, 1);

        assert!(EnrollmentService::list_by_section(&db, &cs330(1))
            .await
            .unwrap()
            .is_empty());

        let roster = EnrollmentService::list_by_section(&db, &other).await.unwrap();
        let kinds: Vec<(i32, EnrollmentKind)> =
            roster.iter().map(|e| (e.student_id(), e.kind())).collect();
        assert_eq!(
            kinds,
            vec![
                (101, EnrollmentKind::PassFail),
                (103, EnrollmentKind::LetterGrade),
            ]
        );

        let by_student = EnrollmentService::list_by_student(&db, 101).await.unwrap();
        assert_eq!(by_student.len(), 1);
        assert_eq!(by_student[0].section_key(), &other);
        assert_eq!(row_count(&db).await, 2);
    }

    #[tokio::test]
    async fn test_storage_checks_reject_bad_rows() {
        let db = setup_db().await;
        insert_student(&db, 101).await;
        insert_section(&db, &cs330(1)).await;

        let insert = |kind: &str, min: &str, application: &str| {
            Statement::from_string(
                DbBackend::Sqlite,
                format!(
                    "INSERT INTO enrollments (student_id, department_abbreviation, course_number, \
                     section_number, semester, section_year, declaration_date, type, \
                     min_satisfactory, application_date) \
                     VALUES (101, 'CS', 330, 1, 'Fall', 2024, '2024-08-19', \
                     {kind}, {min}, {application})"
                ),
            )
        };

        // Grade outside the allowed set
        assert!(db.execute(insert("'letter_grade'", "'Z'", "NULL")).await.is_err());
        // Letter grade without its grade
        assert!(db.execute(insert("'letter_grade'", "NULL", "NULL")).await.is_err());
        // Pass/fail without its application date
        assert!(db.execute(insert("'pass_fail'", "NULL", "NULL")).await.is_err());
        // Unknown discriminator
        assert!(db.execute(insert("'audit'", "NULL", "NULL")).await.is_err());
        assert_eq!(row_count(&db).await, 0);

        db.execute(insert("'letter_grade'", "'A'", "NULL")).await.unwrap();
        assert_eq!(row_count(&db).await, 1);
    }
}
