pub mod config;
pub use config::QueryConfig;

pub mod dialect;
pub use dialect::Dialect;

pub mod error;
pub use error::QueryError;

pub mod parser;
pub use parser::{ParseError, ParsedQuery};

pub mod from_part;

pub mod criteria;
pub use criteria::{Criteria, FieldType, FieldTypeResolver, Filter, FilterOperation, ListRequest, Search, Sort, SortDirection};

pub mod generator;

pub mod binder;
pub use binder::{ParamValue, Params};

pub mod service;
pub use service::{NativeTranslator, ParamsQuery, QueryService};
