use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

impl SortDirection {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    #[serde(default)]
    pub direction: Option<SortDirection>,
}

impl Sort {
    pub fn new(field: &str, direction: Option<SortDirection>) -> Self {
        Self {
            field: field.to_string(),
            direction,
        }
    }

    pub fn asc(field: &str) -> Self {
        Self::new(field, Some(SortDirection::Asc))
    }

    pub fn desc(field: &str) -> Self {
        Self::new(field, Some(SortDirection::Desc))
    }

    /// Ascending unless stated otherwise.
    pub fn direction(&self) -> SortDirection {
        self.direction.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::criteria::{Sort, SortDirection};

    #[test]
    pub fn test_default_direction() {
        assert_eq!(Sort::new("name", None).direction(), SortDirection::Asc);
        assert_eq!(Sort::desc("name").direction().keyword(), "desc");
    }

    #[test]
    pub fn test_direction_from_json() {
        let sort: Sort = serde_json::from_str(r#"{ "field": "id", "direction": "desc" }"#)
            .expect("Failed to deserialize sort");
        let unsorted: Sort =
            serde_json::from_str(r#"{ "field": "id" }"#).expect("Failed to deserialize sort");

        assert_eq!(sort, Sort::desc("id"));
        assert_eq!(unsorted.direction(), SortDirection::Asc);
    }
}
