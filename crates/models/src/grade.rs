use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

#[cfg(feature = "database")]
use sea_orm::Value;

/// Returned when a letter grade is not one of A, B, C, D, F
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid grade {0:?}, valid grades are A, B, C, D, F")]
pub struct InvalidGradeError(pub String);

/// A letter grade, used as the minimum satisfactory grade of a letter-graded enrollment
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
    IntoStaticStr,
)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    pub fn all() -> Vec<Grade> {
        Grade::iter().collect()
    }
}

// Matching is exact: "c" or " C" are rejected rather than normalized
impl FromStr for Grade {
    type Err = InvalidGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "F" => Ok(Self::F),
            _ => Err(InvalidGradeError(s.to_owned())),
        }
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for Grade {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => s.parse().map_err(|_| sea_orm::sea_query::ValueTypeErr),
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "Grade".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::String(sea_orm::sea_query::StringLen::N(1))
    }
}

#[cfg(feature = "database")]
impl From<Grade> for Value {
    fn from(grade: Grade) -> Self {
        Value::String(Some(Box::new(grade.as_str().to_owned())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for Grade {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        // Via `TryGetable` so NULL stays `TryGetError::Null` and `Option<Grade>` reads as `None`
        let val = <String as sea_orm::TryGetable>::try_get_by(res, index)?;

        val.parse().map_err(|e: InvalidGradeError| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(e.to_string()))
        })
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for Grade {
    fn null() -> Value {
        Value::String(None)
    }
}
