use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    binder::{ParamBinder, Params},
    criteria::{Criteria, Filter},
    generator::{ClauseKind, ClauseRequest, GeneratorRegistry},
    parser::ParsedQuery,
    service::{NativeTranslator, ParamsQuery},
    Dialect, QueryConfig, QueryError,
};

/// Parses templates and augments them with request criteria for one dialect.
///
/// Holds no per-request state: a single service (and any `ParsedQuery` it
/// produced) can be shared across threads.
#[derive(Clone)]
pub struct QueryService {
    dialect: Dialect,
    config: QueryConfig,
    registry: Arc<GeneratorRegistry>,
    translator: Option<Arc<dyn NativeTranslator>>,
}

impl QueryService {
    fn with_dialect(dialect: Dialect) -> Self {
        Self {
            dialect,
            config: QueryConfig::default(),
            registry: Arc::new(GeneratorRegistry::default_registry()),
            translator: None,
        }
    }

    /// Object-query service; `translator` builds count queries for grouped templates.
    pub fn embedded(translator: Arc<dyn NativeTranslator>) -> Self {
        Self::with_dialect(Dialect::Embedded).with_translator(translator)
    }

    /// Object-query service without a translator. Grouped templates fail with
    /// [`QueryError::TranslatorMissing`].
    pub fn embedded_untranslated() -> Self {
        Self::with_dialect(Dialect::Embedded)
    }

    pub fn native() -> Self {
        Self::with_dialect(Dialect::Native)
    }

    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_registry(mut self, registry: Arc<GeneratorRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn NativeTranslator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn parse_query(&self, text: &str) -> Result<ParsedQuery, QueryError> {
        ParsedQuery::parse(text, self.dialect)
    }

    pub fn parse_query_with_search(
        &self,
        text: &str,
        search_fields: &[&str],
        advanced_search_fields: &[&str],
    ) -> Result<ParsedQuery, QueryError> {
        ParsedQuery::parse_with_search(text, self.dialect, search_fields, advanced_search_fields)
    }

    /// Page query, count query and bound parameters for `criteria` applied to
    /// `parsed`. Filter parameters are layered over `base_params`.
    pub fn generate_params_query(
        &self,
        parsed: &ParsedQuery,
        criteria: &Criteria,
        base_params: Option<&Params>,
    ) -> Result<ParamsQuery, QueryError> {
        let request = ClauseRequest::new(criteria, parsed, &self.config);

        let base_query = self.base_query(parsed, &request)?;
        let order = self.order_part(parsed, &request)?;
        let query_string = format!("{}{}", with_select(&parsed.select, &base_query), order);
        let count_query_string = self.count_query(parsed, &base_query)?;
        let is_count_native = self.dialect.is_native() || parsed.group.is_some();
        let params = self.combine_params(&criteria.filters, base_params)?;

        debug!(
            target: "criteria_query::service",
            "generated {} query '{}' count '{}' (native count: {}, {} params)",
            self.dialect,
            query_string,
            count_query_string,
            is_count_native,
            params.len()
        );

        Ok(ParamsQuery {
            query_string,
            count_query_string,
            is_count_native,
            params,
        })
    }

    // FROM, WHERE with appended search and filter conditions, then GROUP.
    fn base_query(&self, parsed: &ParsedQuery, request: &ClauseRequest) -> Result<String, QueryError> {
        let search = self.registry.generate(ClauseKind::Search, self.dialect, request)?;
        let filter = self.registry.generate(ClauseKind::Filter, self.dialect, request)?;

        let mut query = parsed.from_part.value().to_string();
        if let Some(where_part) = &parsed.where_part {
            query.push(' ');
            query.push_str(where_part.trim());
        }

        if !search.is_empty() || !filter.is_empty() {
            query.push_str(if parsed.where_part.is_some() { " and " } else { " where " });
            query.push_str(&search);
            if !search.is_empty() && !filter.is_empty() {
                query.push_str(" and ");
            }
            query.push_str(&filter);
        }

        if let Some(group) = &parsed.group {
            query.push(' ');
            query.push_str(group.trim());
        }

        Ok(query)
    }

    // Requested sorts replace the template's ORDER segment.
    fn order_part(&self, parsed: &ParsedQuery, request: &ClauseRequest) -> Result<String, QueryError> {
        let order = self.registry.generate(ClauseKind::Order, self.dialect, request)?;
        if !order.trim().is_empty() {
            return Ok(format!(" order by {}", order));
        }

        Ok(parsed
            .order
            .as_ref()
            .map(|order| format!(" {}", order.trim()))
            .unwrap_or_default())
    }

    fn count_query(&self, parsed: &ParsedQuery, base_query: &str) -> Result<String, QueryError> {
        if parsed.group.is_none() {
            return Ok(format!("select count(1) {}", base_query));
        }

        let grouped = with_select(&parsed.select, base_query);
        let inner = match self.dialect {
            Dialect::Native => grouped,
            Dialect::Embedded => {
                let translator = self.translator.as_ref().ok_or(QueryError::TranslatorMissing)?;
                translator.translate(&grouped)?
            }
        };

        Ok(format!("select count(1) from ({}) q", inner))
    }

    /// Caller parameters overlaid with the parameters bound from `filters`.
    pub fn combine_params(
        &self,
        filters: &[Filter],
        base_params: Option<&Params>,
    ) -> Result<Params, QueryError> {
        let mut params = base_params.cloned().unwrap_or_default();
        for (name, value) in ParamBinder::new(&self.config).bind(filters)? {
            if params.contains_key(&name) {
                warn!(target: "criteria_query::service", "filter parameter '{}' overrides a caller parameter", name);
            }
            params.insert(name, value);
        }
        Ok(params)
    }
}

fn with_select(select: &str, base_query: &str) -> String {
    let select = select.trim();
    if select.is_empty() {
        base_query.to_string()
    } else {
        format!("{} {}", select, base_query)
    }
}
