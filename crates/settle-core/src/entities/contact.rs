use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A party involved in a project (buyer, seller, bank officer, scrivener...).
///
/// Contacts are carried through to risk output untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Contact {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub name: String,
}
