pub mod native_translator;
pub use native_translator::*;

pub mod params_query;
pub use params_query::*;

pub mod query_service;
pub use query_service::*;
