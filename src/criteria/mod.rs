pub mod field_type;
pub use field_type::*;

pub mod filter_operation;
pub use filter_operation::*;

pub mod filter;
pub use filter::*;

pub mod search;
pub use search::*;

pub mod sort;
pub use sort::*;

pub mod request_criteria;
pub use request_criteria::*;

pub mod list_request;
pub use list_request::*;
