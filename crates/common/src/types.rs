use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a persisted institution.
///
/// Assigned by the store when the record is created and never changed
/// afterwards. Serialized as a plain UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstitutionId(Uuid);

impl InstitutionId {
    /// Creates a new random institution ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an institution ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for InstitutionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InstitutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for InstitutionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<InstitutionId> for Uuid {
    fn from(id: InstitutionId) -> Self {
        id.0
    }
}

/// Error returned when a string is not a valid institution ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseInstitutionIdError {
    pub input: String,
}

impl std::fmt::Display for ParseInstitutionIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid institution id: {:?}", self.input)
    }
}

impl std::error::Error for ParseInstitutionIdError {}

impl FromStr for InstitutionId {
    type Err = ParseInstitutionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ParseInstitutionIdError {
                input: s.to_string(),
            })
    }
}
