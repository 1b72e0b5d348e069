// Dashboard request handling
pub mod dashboard;
