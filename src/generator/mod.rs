pub mod clause_kind;
pub use clause_kind::*;

pub mod clause_request;
pub use clause_request::*;

pub mod clause_generator;
pub use clause_generator::*;

pub mod templates;

pub mod search_generator;
pub use search_generator::*;

pub mod filter_generator;
pub use filter_generator::*;

pub mod order_generator;
pub use order_generator::*;

pub mod generator_registry;
pub use generator_registry::*;
