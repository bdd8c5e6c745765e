pub mod enrollment;
pub mod section;
pub mod student;

pub use enrollment as enrollments;
pub use section as sections;
pub use student as students;
