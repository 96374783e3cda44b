use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level clause of a SELECT template.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QueryPartType {
    #[default]
    Select = 0,
    From = 1,
    Where = 2,
    Group = 3,
    Order = 4,
}

// Parts that may directly precede each part, indexed by discriminant.
const PREDECESSORS: [&[QueryPartType]; 5] = [
    &[],
    &[QueryPartType::Select],
    &[QueryPartType::From],
    &[QueryPartType::From, QueryPartType::Where],
    &[QueryPartType::From, QueryPartType::Where, QueryPartType::Group],
];

impl QueryPartType {
    /// Parts that can start a new segment, in the order they are probed.
    pub const BOUNDARIES: [QueryPartType; 4] = [
        QueryPartType::From,
        QueryPartType::Where,
        QueryPartType::Group,
        QueryPartType::Order,
    ];

    /// Token that opens this part. GROUP and ORDER open with the first word of
    /// `group by` / `order by`.
    pub fn keyword(&self) -> &'static str {
        match self {
            QueryPartType::Select => "select",
            QueryPartType::From => "from",
            QueryPartType::Where => "where",
            QueryPartType::Group => "group",
            QueryPartType::Order => "order",
        }
    }

    pub fn predecessors(&self) -> &'static [QueryPartType] {
        PREDECESSORS[*self as usize]
    }

    /// Whether this part may start while `current` is the open part.
    pub fn can_follow(&self, current: QueryPartType) -> bool {
        self.predecessors().contains(&current)
    }
}

impl fmt::Display for QueryPartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword().to_uppercase())
    }
}
