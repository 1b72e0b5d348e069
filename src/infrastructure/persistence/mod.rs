mod mongo;

pub use mongo::MongoPerformanceRepository;
