pub mod enrollment;
pub mod grade;
