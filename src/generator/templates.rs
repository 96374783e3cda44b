//! Text fragments the clause generators are assembled from.

/// Marks where an advanced search field takes the rendered search comparison.
pub const SEARCH_PLACEHOLDER: &str = "{0}";

pub const BETWEEN_LEFT_SUFFIX: &str = "_left";
pub const BETWEEN_RIGHT_SUFFIX: &str = "_right";

/// Single quotes are doubled so the term stays one SQL literal.
pub fn quote_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Comparison applied to every search field: `= lower('v')` for exact terms,
/// a lowered substring match otherwise.
pub fn search_comparison(value: &str, exact: bool) -> String {
    let literal = quote_literal(value);
    if exact {
        format!("= lower('{}')", literal)
    } else {
        format!("like '%' || lower('{}') || '%'", literal)
    }
}

pub fn simple_search(field: &str, comparison: &str) -> String {
    format!("lower({}) {}", field, comparison)
}

pub fn advanced_search(template: &str, comparison: &str) -> String {
    template.replace(SEARCH_PLACEHOLDER, comparison)
}

pub fn lowered_eq(field: &str, param: &str) -> String {
    format!("lower({}) = lower(:{})", field, param)
}

pub fn eq(field: &str, param: &str) -> String {
    format!("{} = :{}", field, param)
}

pub fn lowered_ne(field: &str, param: &str) -> String {
    format!("lower({}) <> lower(:{})", field, param)
}

pub fn ne(field: &str, param: &str) -> String {
    format!("{} <> :{}", field, param)
}

pub fn lowered_like(field: &str, param: &str) -> String {
    format!("lower({}) like '%' || lower(:{}) || '%'", field, param)
}

pub fn in_list(field: &str, param: &str) -> String {
    format!("{} in (:{})", field, param)
}

pub fn between(field: &str, param: &str) -> String {
    format!(
        "{} between :{}{} and :{}{}",
        field, param, BETWEEN_LEFT_SUFFIX, param, BETWEEN_RIGHT_SUFFIX
    )
}

pub fn lt(field: &str, param: &str) -> String {
    format!("{} < :{}", field, param)
}

pub fn gt(field: &str, param: &str) -> String {
    format!("{} > :{}", field, param)
}
