pub mod parse_error;
pub use parse_error::*;

pub mod tokenizer;
pub use tokenizer::*;

pub mod query_part_type;
pub use query_part_type::*;

pub mod parse_cursor;
pub use parse_cursor::*;

pub mod query_parser;
pub use query_parser::*;

pub mod parsed_query;
pub use parsed_query::*;
