use crate::QueryError;

/// Turns an object-query string into the equivalent native SQL. Needed only to
/// build count queries for grouped embedded templates.
pub trait NativeTranslator: Send + Sync {
    fn translate(&self, query: &str) -> Result<String, QueryError>;
}

impl<F> NativeTranslator for F
where
    F: Fn(&str) -> Result<String, QueryError> + Send + Sync,
{
    fn translate(&self, query: &str) -> Result<String, QueryError> {
        self(query)
    }
}
