use crate::{
    generator::{ClauseKind, ClauseRequest},
    Dialect, QueryError,
};

/// Renders one clause kind for one dialect. An empty string means the request
/// contributes nothing to that clause.
pub trait ClauseGenerator: Send + Sync {
    fn kind(&self) -> ClauseKind;

    fn dialect(&self) -> Dialect;

    fn can_handle(&self, kind: ClauseKind, dialect: Dialect) -> bool {
        self.kind() == kind && self.dialect() == dialect
    }

    fn generate(&self, request: &ClauseRequest) -> Result<String, QueryError>;
}
