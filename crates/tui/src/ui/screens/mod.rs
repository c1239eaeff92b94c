pub mod dashboard;
pub mod empty;
