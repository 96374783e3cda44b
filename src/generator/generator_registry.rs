use std::{collections::HashMap, sync::Arc};

use tracing::trace;

use crate::{
    generator::{
        ClauseGenerator, ClauseKind, ClauseRequest, FilterClauseGenerator, OrderClauseGenerator,
        SearchClauseGenerator,
    },
    Dialect, QueryError,
};

/// Clause generators keyed by clause kind and dialect. Registering a second
/// generator for the same key replaces the first.
#[derive(Default)]
pub struct GeneratorRegistry {
    by_key: HashMap<(ClauseKind, Dialect), Arc<dyn ClauseGenerator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self {
            by_key: HashMap::new(),
        }
    }

    pub fn register<G: ClauseGenerator + 'static>(&mut self, generator: G) {
        self.by_key
            .insert((generator.kind(), generator.dialect()), Arc::new(generator));
    }

    pub fn get(&self, kind: ClauseKind, dialect: Dialect) -> Option<Arc<dyn ClauseGenerator>> {
        self.by_key.get(&(kind, dialect)).cloned()
    }

    pub fn list(&self) -> Vec<(ClauseKind, Dialect)> {
        let mut keys: Vec<_> = self.by_key.keys().copied().collect();
        keys.sort();
        keys
    }

    pub fn generate(
        &self,
        kind: ClauseKind,
        dialect: Dialect,
        request: &ClauseRequest,
    ) -> Result<String, QueryError> {
        let generator = self
            .get(kind, dialect)
            .ok_or(QueryError::GeneratorNotFound { kind, dialect })?;
        let clause = generator.generate(request)?;
        trace!(target: "criteria_query::service", "{} {} clause -> '{}'", dialect, kind, clause);
        Ok(clause)
    }

    /// Search, filter and order generators for both dialects.
    pub fn default_registry() -> Self {
        let mut registry = Self::new();
        for dialect in [Dialect::Embedded, Dialect::Native] {
            registry.register(SearchClauseGenerator::new(dialect));
            registry.register(FilterClauseGenerator::new(dialect));
            registry.register(OrderClauseGenerator::new(dialect));
        }
        registry
    }
}
