//! Incoming events and the premises they demand.

use serde::{Deserialize, Serialize};

/// A unit of experience: sensory input or thought.
///
/// Immutable once constructed. Acceptance requires every premise in
/// `required_premises` to be validated, in order.
///
/// # Example
///
/// ```rust
/// use double_track::model::Phenomenon;
///
/// let email = Phenomenon::new("Work Email", ["Language", "Social Norms", "Time"]);
/// assert_eq!(email.name(), "Work Email");
/// assert_eq!(email.required_premises().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phenomenon {
    name: String,
    required_premises: Vec<String>,
}

impl Phenomenon {
    pub fn new<N, I, P>(name: N, premises: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            name: name.into(),
            required_premises: premises.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_premises(&self) -> &[String] {
        &self.required_premises
    }
}
