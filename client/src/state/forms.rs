//! Modal form drafts for users, resources, and reservations.
//!
//! Validation only checks that required fields are filled in. Anything
//! deeper (time ranges, overlaps, password strength) is left to the hosted
//! service, whose rejection comes back as an error toast.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use gateway::model::{NewReservation, NewResource, NewUser, Profile, ProfilePatch, ResourceKind};

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// =============================================================================
// USERS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

impl UserForm {
    #[must_use]
    pub fn for_new() -> Self {
        Self::default()
    }

    /// Prefill from an existing profile. Email and password are not
    /// editable after creation.
    #[must_use]
    pub fn for_edit(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone().unwrap_or_default(),
            email: profile.email.clone().unwrap_or_default(),
            password: String::new(),
            is_admin: profile.is_admin,
        }
    }

    /// # Errors
    ///
    /// Returns the message to show when a required field is blank.
    pub fn validate(&self, editing: bool) -> Result<(), &'static str> {
        if is_blank(&self.name) {
            return Err("Name is required.");
        }
        if !editing && (is_blank(&self.email) || self.password.is_empty()) {
            return Err("Email and password are required.");
        }
        Ok(())
    }

    #[must_use]
    pub fn patch(&self) -> ProfilePatch {
        ProfilePatch { name: Some(self.name.trim().to_owned()), is_admin: Some(self.is_admin) }
    }

    #[must_use]
    pub fn new_user(&self) -> NewUser {
        NewUser {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            name: self.name.trim().to_owned(),
            is_admin: self.is_admin,
        }
    }
}

// =============================================================================
// RESOURCES
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceForm {
    pub name: String,
    pub kind: ResourceKind,
    pub description: String,
}

impl ResourceForm {
    /// # Errors
    ///
    /// Returns the message to show when the name is blank.
    pub fn validate(&self) -> Result<NewResource, &'static str> {
        if is_blank(&self.name) {
            return Err("Name is required.");
        }
        Ok(NewResource {
            name: self.name.trim().to_owned(),
            kind: self.kind,
            description: self.description.trim().to_owned(),
        })
    }
}

// =============================================================================
// RESERVATIONS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationForm {
    pub resource_id: String,
    pub start_time: String,
    pub end_time: String,
}

impl ReservationForm {
    #[must_use]
    pub fn for_resource(resource_id: Option<String>) -> Self {
        Self { resource_id: resource_id.unwrap_or_default(), ..Self::default() }
    }

    /// Build a pending reservation owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns the message to show when a field is blank.
    pub fn validate(&self, user_id: &str) -> Result<NewReservation, &'static str> {
        if is_blank(&self.resource_id) {
            return Err("Choose a resource.");
        }
        if is_blank(&self.start_time) || is_blank(&self.end_time) {
            return Err("Start and end time are required.");
        }
        Ok(NewReservation::pending(
            user_id,
            self.resource_id.trim(),
            self.start_time.trim(),
            self.end_time.trim(),
        ))
    }
}
