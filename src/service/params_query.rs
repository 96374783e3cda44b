use serde::Serialize;

use crate::binder::Params;

/// Final output of query generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamsQuery {
    pub query_string: String,
    pub count_query_string: String,
    /// The count query is native SQL and must run on the native path.
    pub is_count_native: bool,
    pub params: Params,
}
