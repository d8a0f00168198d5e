//! Row and payload types mirrored from the hosted store.
//!
//! DESIGN
//! ======
//! These types follow the `profiles`, `resources`, and `reservations` table
//! columns one-to-one so serde round-trips stay lossless. Nothing here
//! enforces domain rules (overlaps, time ordering); the store's policies own
//! that. Timestamps stay as the store's strings and are parsed only for
//! display.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// AUTH
// =============================================================================

/// Identity returned by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Signed-in session. Persisted by the browser client between visits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    pub user: AuthUser,
}

// =============================================================================
// PROFILES
// =============================================================================

/// A row of the `profiles` table. `is_admin` is the only authorization
/// signal in the application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_admin: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
}

impl Profile {
    /// Name for display, with a placeholder for blank names.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("No name")
    }

    /// Role label shown in the user table.
    #[must_use]
    pub fn role_label(&self) -> &'static str {
        if self.is_admin { "Administrator" } else { "User" }
    }
}

/// Insert payload for `profiles`. The id is the auth user's id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewProfile {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub is_admin: bool,
}

/// Partial update for `profiles`; absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

/// Account to create through sign-up followed by a profile insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub is_admin: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AdminFlag {
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_admin: bool,
}

// =============================================================================
// RESOURCES
// =============================================================================

/// Kind of bookable resource (`type` column).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    #[default]
    Room,
    Equipment,
}

impl ResourceKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Equipment => "equipment",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Room => "Room",
            Self::Equipment => "Equipment",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "room" => Ok(Self::Room),
            "equipment" => Ok(Self::Equipment),
            other => Err(format!("unknown resource type '{other}' (expected 'room' or 'equipment')")),
        }
    }
}

/// A row of the `resources` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
}

/// Insert payload for `resources`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewResource {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub description: String,
}

// =============================================================================
// RESERVATIONS
// =============================================================================

/// Lifecycle of a reservation (`status` column).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of the `reservations` table, with the embedded resource and
/// owner profile when the list query asks for them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub user_id: String,
    pub resource_id: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
    #[serde(default)]
    pub resource: Option<Resource>,
    #[serde(default)]
    pub user: Option<Profile>,
}

impl Reservation {
    #[must_use]
    pub fn resource_name(&self) -> &str {
        self.resource
            .as_ref()
            .map_or("Unknown resource", |resource| resource.name.as_str())
    }
}

/// Insert payload for `reservations`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewReservation {
    pub user_id: String,
    pub resource_id: String,
    pub start_time: String,
    pub end_time: String,
    pub status: ReservationStatus,
}

impl NewReservation {
    /// New bookings start out pending until someone confirms them.
    #[must_use]
    pub fn pending(
        user_id: impl Into<String>,
        resource_id: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            resource_id: resource_id.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            status: ReservationStatus::Pending,
        }
    }
}

// =============================================================================
// SERDE HELPERS
// =============================================================================

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
