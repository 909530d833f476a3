//! Resolution of the optional `city`/`state` pair used to filter restaurant listings.

/// City and state, both present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationFilter {
    pub city: String,
    pub state: String,
}

impl LocationFilter {
    /// Resolves the raw query pair once. Blank values count as absent.
    ///
    /// Returns `Ok(None)` when neither is given, `Ok(Some(_))` when both are, and
    /// `Err(reason)` when only one of them is.
    pub fn resolve(city: Option<&str>, state: Option<&str>) -> Result<Option<Self>, &'static str> {
        let city = city.map(str::trim).filter(|s| !s.is_empty());
        let state = state.map(str::trim).filter(|s| !s.is_empty());
        match (city, state) {
            (None, None) => Ok(None),
            (Some(city), Some(state)) => Ok(Some(Self {
                city: city.to_string(),
                state: state.to_string(),
            })),
            (Some(_), None) => Err("state is required when city is provided"),
            (None, Some(_)) => Err("city is required when state is provided"),
        }
    }
}
