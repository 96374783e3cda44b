use chrono::NaiveDateTime;
use tracing::{trace, warn};

use crate::{
    binder::{ParamName, ParamValue, Params},
    criteria::{FieldType, Filter, FilterOperation},
    QueryConfig, QueryError,
};

/// Converts filter values into the typed parameters their clauses reference.
pub struct ParamBinder<'a> {
    config: &'a QueryConfig,
}

impl<'a> ParamBinder<'a> {
    pub fn new(config: &'a QueryConfig) -> Self {
        Self { config }
    }

    /// Parameters for every filter with a non-blank value, in filter order.
    pub fn bind(&self, filters: &[Filter]) -> Result<Params, QueryError> {
        let mut params = Params::new();
        for filter in filters {
            if !filter.has_value() {
                trace!(target: "criteria_query::service", "skipping blank filter on '{}'", filter.field);
                continue;
            }

            let name = ParamName::of(&filter.field, self.config);
            match filter.operation {
                FilterOperation::Between => {
                    let (left, right) = self.between(filter)?;
                    insert(&mut params, ParamName::left(&name), left);
                    insert(&mut params, ParamName::right(&name), right);
                }
                FilterOperation::In => {
                    let list = self.list(filter)?;
                    insert(&mut params, name, list);
                }
                _ => {
                    let value = self.convert(filter, &filter.value)?;
                    insert(&mut params, name, value);
                }
            }
        }
        Ok(params)
    }

    fn list(&self, filter: &Filter) -> Result<ParamValue, QueryError> {
        let values = filter
            .value
            .split(self.config.list_delimiter.as_str())
            .map(|value| self.convert(filter, value.trim()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParamValue::List(values))
    }

    fn between(&self, filter: &Filter) -> Result<(ParamValue, ParamValue), QueryError> {
        let bounds: Vec<&str> = filter
            .value
            .split(self.config.list_delimiter.as_str())
            .collect();

        if bounds.len() != 2 {
            return Err(QueryError::BetweenRequiresTwoValues {
                field: filter.field.clone(),
                delimiter: self.config.list_delimiter.clone(),
            });
        }
        if !filter.field_type.is_ordered() {
            return Err(QueryError::BetweenUnsupportedType {
                field: filter.field.clone(),
                field_type: filter.field_type,
            });
        }

        Ok((
            self.convert(filter, bounds[0].trim())?,
            self.convert(filter, bounds[1].trim())?,
        ))
    }

    /// Typed value of `raw` according to the filter's field type.
    pub fn convert(&self, filter: &Filter, raw: &str) -> Result<ParamValue, QueryError> {
        match filter.field_type {
            FieldType::String | FieldType::Enum => Ok(ParamValue::String(raw.to_string())),
            FieldType::Integer => raw
                .trim()
                .parse::<i64>()
                .map(ParamValue::Integer)
                .map_err(|_| QueryError::InvalidNumber {
                    field: filter.field.clone(),
                    value: raw.to_string(),
                }),
            FieldType::Bool => Ok(ParamValue::Bool(raw.trim().eq_ignore_ascii_case("true"))),
            FieldType::Date => NaiveDateTime::parse_from_str(raw.trim(), &self.config.date_format)
                .map(ParamValue::Date)
                .map_err(|_| QueryError::InvalidDate {
                    field: filter.field.clone(),
                    value: raw.to_string(),
                    format: self.config.date_format.clone(),
                }),
        }
    }
}

// Filters on the same field share a parameter name; the last one wins.
fn insert(params: &mut Params, name: String, value: ParamValue) {
    if let Some(previous) = params.get(&name) {
        warn!(
            target: "criteria_query::service",
            "parameter '{}' bound by more than one filter, {:?} replaced by {:?}",
            name,
            previous,
            value
        );
    }
    params.insert(name, value);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        binder::{ParamBinder, ParamValue},
        criteria::{FieldType, Filter, FilterOperation},
        QueryConfig, QueryError,
    };

    fn filter(field: &str, field_type: FieldType, operation: FilterOperation, value: &str) -> Filter {
        Filter::with_operation(field, field_type, operation, value)
    }

    fn date(y: i32, m: u32, d: u32) -> ParamValue {
        ParamValue::Date(
            NaiveDate::from_ymd_opt(y, m, d)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .expect("Valid date"),
        )
    }

    #[test]
    pub fn test_bind_scalar_values() {
        let config = QueryConfig::new();
        let params = ParamBinder::new(&config)
            .bind(&[
                filter("name", FieldType::String, FilterOperation::Like, " Abc "),
                filter("id", FieldType::Integer, FilterOperation::Eq, " 42 "),
                filter("active", FieldType::Bool, FilterOperation::Eq, "TRUE"),
                filter("deleted", FieldType::Bool, FilterOperation::Eq, "yes"),
                filter("created", FieldType::Date, FilterOperation::Gt, "2024-01-02T00:00:00"),
            ])
            .expect("Failed to bind");

        assert_eq!(params.get("filter_name"), Some(&ParamValue::from(" Abc ")));
        assert_eq!(params.get("filter_id"), Some(&ParamValue::Integer(42)));
        assert_eq!(params.get("filter_active"), Some(&ParamValue::Bool(true)));
        assert_eq!(params.get("filter_deleted"), Some(&ParamValue::Bool(false)));
        assert_eq!(params.get("filter_created"), Some(&date(2024, 1, 2)));
        assert_eq!(
            params.keys().cloned().collect::<Vec<_>>(),
            vec!["filter_name", "filter_id", "filter_active", "filter_deleted", "filter_created"]
        );
    }

    #[test]
    pub fn test_bind_in_list() {
        let config = QueryConfig::new().without_param_namespace();
        let params = ParamBinder::new(&config)
            .bind(&[
                filter("subEntity.id", FieldType::Integer, FilterOperation::In, "1, 2,3"),
                filter("code", FieldType::String, FilterOperation::In, "a,b"),
            ])
            .expect("Failed to bind");

        assert_eq!(params.get("subEntityId"), Some(&ParamValue::from(vec![1i64, 2, 3])));
        assert_eq!(params.get("code"), Some(&ParamValue::from(vec!["a", "b"])));
    }

    #[test]
    pub fn test_bind_between() {
        let config = QueryConfig::new().with_list_delimiter(";");
        let params = ParamBinder::new(&config)
            .bind(&[filter(
                "created",
                FieldType::Date,
                FilterOperation::Between,
                "2024-01-01T00:00:00; 2024-02-01T00:00:00",
            )])
            .expect("Failed to bind");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("filter_created_left"), Some(&date(2024, 1, 1)));
        assert_eq!(params.get("filter_created_right"), Some(&date(2024, 2, 1)));
    }

    #[test]
    pub fn test_repeated_field_keeps_last_value() {
        let config = QueryConfig::new();
        let params = ParamBinder::new(&config)
            .bind(&[
                filter("t.id", FieldType::Integer, FilterOperation::Gt, "1"),
                filter("t.id", FieldType::Integer, FilterOperation::Lt, "5"),
            ])
            .expect("Failed to bind");

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("filter_tId"), Some(&ParamValue::Integer(5)));
    }

    #[test]
    pub fn test_blank_values_are_skipped() {
        let config = QueryConfig::new();
        let params = ParamBinder::new(&config)
            .bind(&[
                filter("name", FieldType::String, FilterOperation::Eq, "  "),
                filter("id", FieldType::Integer, FilterOperation::Eq, ""),
            ])
            .expect("Failed to bind");

        assert!(params.is_empty());
    }

    #[test]
    pub fn test_between_errors() {
        let config = QueryConfig::new();
        let binder = ParamBinder::new(&config);

        let count = binder.bind(&[filter("id", FieldType::Integer, FilterOperation::Between, "1,2,3")]);
        let kind = binder.bind(&[filter("name", FieldType::String, FilterOperation::Between, "a,b")]);

        assert_eq!(
            count,
            Err(QueryError::BetweenRequiresTwoValues {
                field: "id".to_string(),
                delimiter: ",".to_string()
            })
        );
        assert_eq!(
            kind,
            Err(QueryError::BetweenUnsupportedType {
                field: "name".to_string(),
                field_type: FieldType::String
            })
        );
    }

    #[test]
    pub fn test_conversion_errors() {
        let config = QueryConfig::new();
        let binder = ParamBinder::new(&config);

        let number = binder.bind(&[filter("id", FieldType::Integer, FilterOperation::In, "1,x")]);
        let date = binder.bind(&[filter("created", FieldType::Date, FilterOperation::Eq, "2024-01-01")]);

        assert_eq!(
            number,
            Err(QueryError::InvalidNumber {
                field: "id".to_string(),
                value: "x".to_string()
            })
        );
        assert_eq!(
            date,
            Err(QueryError::InvalidDate {
                field: "created".to_string(),
                value: "2024-01-01".to_string(),
                format: "%Y-%m-%dT%H:%M:%S".to_string()
            })
        );
    }
}
