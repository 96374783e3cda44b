pub mod param_value;
pub use param_value::*;

pub mod param_name;
pub use param_name::*;

pub mod param_binder;
pub use param_binder::*;
