// HTTP presentation layer
pub mod http;
