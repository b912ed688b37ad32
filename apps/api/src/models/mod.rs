pub mod career;
pub mod learning;
pub mod profile;
pub mod resume;
