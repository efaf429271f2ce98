pub mod photo;
pub mod report;

pub use photo::{PhotoAnalysis, ValidationResult};
pub use report::{NewReport, Report};
