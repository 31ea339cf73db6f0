use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{UserId, ValidationError, validation_error::EmptyVesselNameSnafu};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct VesselId(i64);

/// A trimmed, non-empty vessel name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(try_from = "String", into = "String")]
pub struct VesselName(String);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Vessel {
    pub id: VesselId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVessel {
    pub name: VesselName,
    pub created_by: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateVessel {
    pub id: VesselId,
    pub name: VesselName,
}

impl VesselId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl VesselName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return EmptyVesselNameSnafu.fail();
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Vessel names are compared case-insensitively when checking for duplicates.
    pub fn is_same_as(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }
}

/// Orders vessels by name, ascending.
pub fn sort_vessels(vessels: &mut [Vessel]) {
    vessels.sort_by(|a, b| a.name.cmp(&b.name));
}

impl From<VesselId> for i64 {
    fn from(value: VesselId) -> Self {
        value.0
    }
}

impl Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for VesselName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VesselName> for String {
    fn from(value: VesselName) -> Self {
        value.0
    }
}

impl AsRef<str> for VesselName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for VesselName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
