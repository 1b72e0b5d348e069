pub mod model;
pub mod persistence;
pub mod repositories;

pub use persistence::MongoPerformanceRepository;
pub use repositories::InMemoryPerformanceRepository;
