use crate::{generator::templates, QueryConfig};

/// Naming of filter-derived query parameters.
pub struct ParamName;

impl ParamName {
    /// Camel-cased field path, split on `.` and on upper-case letters:
    /// `some.fieldId` gives `someFieldId`.
    pub fn camel_case(field: &str) -> String {
        let mut words: Vec<String> = Vec::new();
        for segment in field.split('.') {
            let mut word = String::new();
            for c in segment.chars() {
                if c.is_uppercase() && !word.is_empty() {
                    words.push(std::mem::take(&mut word));
                }
                word.push(c);
            }
            if !word.is_empty() {
                words.push(word);
            }
        }

        let mut name = String::with_capacity(field.len());
        for (idx, word) in words.iter().enumerate() {
            let lower = word.to_lowercase();
            if idx == 0 {
                name.push_str(&lower);
                continue;
            }
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                name.extend(first.to_uppercase());
                name.push_str(chars.as_str());
            }
        }
        name
    }

    /// Parameter a filter on `field` binds to, prefixed with the configured namespace.
    pub fn of(field: &str, config: &QueryConfig) -> String {
        let name = Self::camel_case(field);
        if config.param_namespace.is_empty() {
            name
        } else {
            format!("{}_{}", config.param_namespace, name)
        }
    }

    pub fn left(name: &str) -> String {
        format!("{}{}", name, templates::BETWEEN_LEFT_SUFFIX)
    }

    pub fn right(name: &str) -> String {
        format!("{}{}", name, templates::BETWEEN_RIGHT_SUFFIX)
    }
}
