// Domain-specific error types
pub mod errors;

// Port interfaces
pub mod ports;

// Repository traits
pub mod repositories;

// Core domain types
pub mod types;
