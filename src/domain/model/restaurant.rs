use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted restaurant. `id` is assigned by the store and never changes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub city: String,
    /// Short state code, e.g. `PA`.
    pub state: String,
}

/// A restaurant submitted by a client, not yet persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct NewRestaurant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

impl NewRestaurant {
    pub fn new(name: impl Into<String>, city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            state: state.into(),
        }
    }

    /// Strips surrounding whitespace from every field.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
        }
    }

    /// Attaches a store-assigned identifier.
    pub fn with_id(self, id: i64) -> Restaurant {
        Restaurant {
            id,
            name: self.name,
            city: self.city,
            state: self.state,
        }
    }
}

impl Restaurant {
    /// True when `self` has exactly the given (name, city, state) key.
    pub fn matches_key(&self, name: &str, city: &str, state: &str) -> bool {
        self.name == name && self.city == city && self.state == state
    }
}
