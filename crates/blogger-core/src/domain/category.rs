use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category entity - a label that posts can be filed under.
///
/// Names are unique across all categories, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

impl Category {
    /// Create a new category with a freshly generated id.
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }
}
