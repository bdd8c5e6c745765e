use crate::entities::enrollment::RowError;
use log::warn;
use models::enrollment::{EnrollmentError, EnrollmentKey};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The enrollment was rejected before reaching storage
    #[error(transparent)]
    Enrollment(#[from] EnrollmentError),

    #[error("{0} is already enrolled in this course for the term")]
    DuplicateEnrollment(EnrollmentKey),

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("no enrollment for {0}")]
    NotFound(EnrollmentKey),

    #[error("stored enrollment for {key} is corrupt: {source}")]
    CorruptRow { key: EnrollmentKey, source: RowError },

    #[error(transparent)]
    Database(#[from] DbErr),
}

impl ServiceError {
    /// Classifies a failed write to the enrollments table
    pub(crate) fn from_write(err: DbErr, key: &EnrollmentKey) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                warn!("Rejected duplicate enrollment for {key}: {msg}");
                Self::DuplicateEnrollment(key.clone())
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                warn!("Rejected enrollment for {key} with a dangling reference: {msg}");
                Self::ConstraintViolation(msg)
            }
            _ => Self::Database(err),
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateEnrollment(_))
    }
}
