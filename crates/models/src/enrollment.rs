use crate::grade::{Grade, InvalidGradeError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
};
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

/// Anything that can stand in for a student when enrolling
pub trait StudentRef {
    fn student_id(&self) -> i32;
}

/// Anything that can stand in for a course section when enrolling
pub trait SectionRef {
    fn section_key(&self) -> SectionKey;
}

/// The five-part natural key of a course section
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionKey {
    pub department_abbreviation: String,
    pub course_number: i32,
    pub section_number: i32,
    pub semester: String,
    pub section_year: i32,
}

impl SectionKey {
    pub fn new(
        department_abbreviation: impl Into<String>,
        course_number: i32,
        section_number: i32,
        semester: impl Into<String>,
        section_year: i32,
    ) -> Self {
        Self {
            department_abbreviation: department_abbreviation.into(),
            course_number,
            section_number,
            semester: semester.into(),
            section_year,
        }
    }
}

impl SectionRef for SectionKey {
    fn section_key(&self) -> SectionKey {
        self.clone()
    }
}

impl Display for SectionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}-{} section {} {} {}",
            self.department_abbreviation,
            self.course_number,
            self.section_number,
            self.semester,
            self.section_year
        )
    }
}

/// Composite key of an enrollment: the student plus the section
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnrollmentKey {
    pub student_id: i32,
    #[serde(flatten)]
    pub section: SectionKey,
}

impl Display for EnrollmentKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "student {} in {}", self.student_id, self.section)
    }
}

/// Discriminator stored in the `type` column
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EnrollmentKind {
    LetterGrade,
    PassFail,
}

impl EnrollmentKind {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Grading-scheme specific data carried by an enrollment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GradingScheme {
    LetterGrade { min_satisfactory: Grade },
    PassFail { application_date: NaiveDate },
}

impl GradingScheme {
    pub fn kind(&self) -> EnrollmentKind {
        match self {
            Self::LetterGrade { .. } => EnrollmentKind::LetterGrade,
            Self::PassFail { .. } => EnrollmentKind::PassFail,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("an enrollment requires a student")]
    MissingStudent,
    #[error("an enrollment requires a section")]
    MissingSection,
    #[error("an enrollment requires an enrollment date")]
    MissingEnrollmentDate,
    #[error(
        "pass/fail application on {application_date} precedes enrollment on {enrollment_date}"
    )]
    ApplicationBeforeEnrollment {
        application_date: NaiveDate,
        enrollment_date: NaiveDate,
    },
    #[error("expected a {expected} enrollment, found {found}")]
    WrongGradingScheme {
        expected: EnrollmentKind,
        found: EnrollmentKind,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrollmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InvalidGrade(#[from] InvalidGradeError),
}

/// Collects the inputs of an enrollment before validation
#[derive(Debug, Clone, Default)]
pub struct EnrollmentBuilder {
    student_id: Option<i32>,
    section: Option<SectionKey>,
    enrollment_date: Option<NaiveDate>,
}

impl EnrollmentBuilder {
    pub fn student(mut self, student: &(impl StudentRef + ?Sized)) -> Self {
        self.student_id = Some(student.student_id());
        self
    }

    pub fn section(mut self, section: &(impl SectionRef + ?Sized)) -> Self {
        self.section = Some(section.section_key());
        self
    }

    pub fn enrolled_on(mut self, enrollment_date: NaiveDate) -> Self {
        self.enrollment_date = Some(enrollment_date);
        self
    }

    /// Validates that every required reference was supplied
    pub fn build_base(self) -> Result<EnrollmentBase, EnrollmentError> {
        let student_id = self.student_id.ok_or(ValidationError::MissingStudent)?;
        let section = self.section.ok_or(ValidationError::MissingSection)?;
        let enrollment_date = self
            .enrollment_date
            .ok_or(ValidationError::MissingEnrollmentDate)?;

        Ok(EnrollmentBase::new(
            EnrollmentKey {
                student_id,
                section,
            },
            enrollment_date,
        ))
    }

    pub fn letter_grade(self, min_satisfactory: &str) -> Result<Enrollment, EnrollmentError> {
        self.build_base()?.letter_grade(min_satisfactory)
    }

    pub fn pass_fail(self, application_date: NaiveDate) -> Result<Enrollment, EnrollmentError> {
        self.build_base()?.pass_fail(application_date)
    }
}

/// An enrollment whose key and date are known but whose grading scheme is not yet attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentBase {
    key: EnrollmentKey,
    enrollment_date: NaiveDate,
}

impl EnrollmentBase {
    pub fn new(key: EnrollmentKey, enrollment_date: NaiveDate) -> Self {
        Self {
            key,
            enrollment_date,
        }
    }

    pub fn key(&self) -> &EnrollmentKey {
        &self.key
    }

    pub fn student_id(&self) -> i32 {
        self.key.student_id
    }

    pub fn section_key(&self) -> &SectionKey {
        &self.key.section
    }

    pub fn enrollment_date(&self) -> NaiveDate {
        self.enrollment_date
    }

    pub fn letter_grade(self, min_satisfactory: &str) -> Result<Enrollment, EnrollmentError> {
        let min_satisfactory = min_satisfactory.parse::<Grade>()?;
        self.attach(GradingScheme::LetterGrade { min_satisfactory })
    }

    pub fn pass_fail(self, application_date: NaiveDate) -> Result<Enrollment, EnrollmentError> {
        self.attach(GradingScheme::PassFail { application_date })
    }

    /// Attaches an already-typed scheme, checking the rules that span both parts
    pub fn attach(self, scheme: GradingScheme) -> Result<Enrollment, EnrollmentError> {
        if let GradingScheme::PassFail { application_date } = scheme
            && application_date < self.enrollment_date
        {
            return Err(ValidationError::ApplicationBeforeEnrollment {
                application_date,
                enrollment_date: self.enrollment_date,
            }
            .into());
        }

        Ok(Enrollment {
            key: self.key,
            enrollment_date: self.enrollment_date,
            scheme,
        })
    }
}

/// One student's registration in one section, under exactly one grading scheme
#[derive(Debug, Clone, Serialize)]
pub struct Enrollment {
    #[serde(flatten)]
    key: EnrollmentKey,
    enrollment_date: NaiveDate,
    #[serde(flatten)]
    scheme: GradingScheme,
}

impl Enrollment {
    pub fn builder() -> EnrollmentBuilder {
        EnrollmentBuilder::default()
    }

    pub fn key(&self) -> &EnrollmentKey {
        &self.key
    }

    pub fn student_id(&self) -> i32 {
        self.key.student_id
    }

    pub fn section_key(&self) -> &SectionKey {
        &self.key.section
    }

    pub fn enrollment_date(&self) -> NaiveDate {
        self.enrollment_date
    }

    pub fn scheme(&self) -> &GradingScheme {
        &self.scheme
    }

    pub fn kind(&self) -> EnrollmentKind {
        self.scheme.kind()
    }

    pub fn min_satisfactory(&self) -> Option<Grade> {
        match self.scheme {
            GradingScheme::LetterGrade { min_satisfactory } => Some(min_satisfactory),
            GradingScheme::PassFail { .. } => None,
        }
    }

    pub fn application_date(&self) -> Option<NaiveDate> {
        match self.scheme {
            GradingScheme::PassFail { application_date } => Some(application_date),
            GradingScheme::LetterGrade { .. } => None,
        }
    }

    pub fn with_enrollment_date(self, enrollment_date: NaiveDate) -> Result<Self, EnrollmentError> {
        EnrollmentBase::new(self.key, enrollment_date).attach(self.scheme)
    }

    pub fn with_min_satisfactory(self, min_satisfactory: &str) -> Result<Self, EnrollmentError> {
        self.expect_kind(EnrollmentKind::LetterGrade)?;
        EnrollmentBase::new(self.key, self.enrollment_date).letter_grade(min_satisfactory)
    }

    pub fn with_application_date(
        self,
        application_date: NaiveDate,
    ) -> Result<Self, EnrollmentError> {
        self.expect_kind(EnrollmentKind::PassFail)?;
        EnrollmentBase::new(self.key, self.enrollment_date).pass_fail(application_date)
    }

    fn expect_kind(&self, expected: EnrollmentKind) -> Result<(), ValidationError> {
        let found = self.kind();
        if found == expected {
            Ok(())
        } else {
            Err(ValidationError::WrongGradingScheme { expected, found })
        }
    }
}

// Identity is the composite key alone
impl PartialEq for Enrollment {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Enrollment {}

impl Hash for Enrollment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Display for Enrollment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} enrollment: {}", self.kind(), self.key)
    }
}
