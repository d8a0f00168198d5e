//! Table operations for resources, reservations, and profiles.
//!
//! Every operation is one remote call, except `create_user` and
//! `delete_user`, which chain two and stop at the first failure. Nothing is
//! cached: callers that need fresh data call again.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::model::{
    AdminFlag, AuthUser, NewProfile, NewReservation, NewResource, NewUser, Profile, ProfilePatch, Reservation,
    ReservationStatus, Resource,
};
use crate::query::{Direction, RestRequest, TableQuery, TableWrite};
use crate::transport::{RestResponse, Transport};

pub const PROFILES: &str = "profiles";
pub const RESOURCES: &str = "resources";
pub const RESERVATIONS: &str = "reservations";

const RESERVATION_COLUMNS: &str = "*,resource:resources(*),user:profiles(*)";

/// Client for the hosted service, optionally acting as a signed-in user.
#[derive(Clone, Debug)]
pub struct Gateway<T> {
    config: GatewayConfig,
    transport: T,
    access_token: Option<String>,
}

impl<T: Transport> Gateway<T> {
    #[must_use]
    pub fn new(config: GatewayConfig, transport: T) -> Self {
        Self { config, transport, access_token: None }
    }

    /// Act as the session owning `access_token`; `None` acts anonymously.
    #[must_use]
    pub fn with_access_token(mut self, access_token: Option<String>) -> Self {
        self.access_token = access_token;
        self
    }

    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    // =========================================================================
    // REQUEST PLUMBING
    // =========================================================================

    /// Send with the session token (or the anon key) as bearer.
    pub(crate) async fn execute(&self, request: RestRequest) -> Result<RestResponse, GatewayError> {
        let bearer = self.access_token.as_deref().unwrap_or(&self.config.anon_key);
        self.execute_as(request, bearer).await
    }

    pub(crate) async fn execute_as(&self, request: RestRequest, bearer: &str) -> Result<RestResponse, GatewayError> {
        let method = request.method.as_str();
        let url = request.url.clone();
        tracing::debug!(method, %url, "gateway request");

        let request = request
            .header("apikey", self.config.anon_key.as_str())
            .header("Authorization", format!("Bearer {bearer}"));
        let response = self.transport.send(request).await.inspect_err(|e| {
            tracing::warn!(method, %url, error = %e, "gateway transport failed");
        })?;

        if !response.is_success() {
            tracing::warn!(method, %url, status = response.status, "gateway request rejected");
            return Err(GatewayError::from_response(response.status, &response.body));
        }
        Ok(response)
    }

    async fn fetch<R: DeserializeOwned>(&self, query: TableQuery) -> Result<R, GatewayError> {
        let response = self.execute(query.into_request(&self.config)).await?;
        response.json()
    }

    async fn write(&self, write: TableWrite) -> Result<(), GatewayError> {
        self.execute(write.into_request(&self.config)).await.map(|_| ())
    }

    // =========================================================================
    // RESOURCES
    // =========================================================================

    /// All resources, newest first.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure of the read.
    pub async fn list_resources(&self) -> Result<Vec<Resource>, GatewayError> {
        self.fetch(TableQuery::select(RESOURCES, "*").order("created_at", Direction::Desc))
            .await
    }

    /// # Errors
    ///
    /// Returns the failure of the insert.
    pub async fn create_resource(&self, resource: &NewResource) -> Result<(), GatewayError> {
        self.write(TableWrite::insert(RESOURCES, to_body(resource)?)).await
    }

    // =========================================================================
    // RESERVATIONS
    // =========================================================================

    /// Reservations visible to the caller with their resource and owner
    /// embedded, earliest start first.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure of the read.
    pub async fn list_reservations(&self) -> Result<Vec<Reservation>, GatewayError> {
        self.fetch(TableQuery::select(RESERVATIONS, RESERVATION_COLUMNS).order("start_time", Direction::Asc))
            .await
    }

    /// # Errors
    ///
    /// Returns the failure of the insert.
    pub async fn create_reservation(&self, reservation: &NewReservation) -> Result<(), GatewayError> {
        self.write(TableWrite::insert(RESERVATIONS, to_body(reservation)?))
            .await
    }

    /// # Errors
    ///
    /// Returns the failure of the update.
    pub async fn set_reservation_status(&self, id: &str, status: ReservationStatus) -> Result<(), GatewayError> {
        let patch = serde_json::json!({ "status": status });
        self.write(TableWrite::update(RESERVATIONS, patch).eq("id", id))
            .await
    }

    // =========================================================================
    // PROFILES
    // =========================================================================

    /// All profiles, newest first.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure of the read.
    pub async fn list_profiles(&self) -> Result<Vec<Profile>, GatewayError> {
        self.fetch(TableQuery::select(PROFILES, "*").order("created_at", Direction::Desc))
            .await
    }

    /// Look up the administrator flag for `user_id`. A null flag reads as
    /// `false`; a missing profile is [`GatewayError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns the failure of the single-row read.
    pub async fn is_admin(&self, user_id: &str) -> Result<bool, GatewayError> {
        let flag: AdminFlag = self
            .fetch(TableQuery::select(PROFILES, "is_admin").eq("id", user_id).single())
            .await?;
        Ok(flag.is_admin)
    }

    /// # Errors
    ///
    /// Returns the failure of the insert.
    pub async fn create_profile(&self, profile: &NewProfile) -> Result<(), GatewayError> {
        self.write(TableWrite::insert(PROFILES, to_body(profile)?)).await
    }

    /// # Errors
    ///
    /// Returns the failure of the update.
    pub async fn update_profile(&self, id: &str, patch: &ProfilePatch) -> Result<(), GatewayError> {
        self.write(TableWrite::update(PROFILES, to_body(patch)?).eq("id", id))
            .await
    }

    /// # Errors
    ///
    /// Returns the failure of the update.
    pub async fn set_admin(&self, id: &str, is_admin: bool) -> Result<(), GatewayError> {
        let patch = ProfilePatch { name: None, is_admin: Some(is_admin) };
        self.update_profile(id, &patch).await
    }

    /// # Errors
    ///
    /// Returns the failure of the delete.
    pub async fn delete_profile(&self, id: &str) -> Result<(), GatewayError> {
        self.write(TableWrite::delete(PROFILES).eq("id", id)).await
    }

    // =========================================================================
    // ACCOUNTS
    // =========================================================================

    /// Register an auth user, then insert its profile row.
    ///
    /// The profile insert runs with this gateway's own credentials, not the
    /// new account's session.
    ///
    /// # Errors
    ///
    /// Returns the first failure; a failed profile insert leaves the auth
    /// user in place.
    pub async fn create_user(&self, user: &NewUser) -> Result<AuthUser, GatewayError> {
        let outcome = self.sign_up(&user.email, &user.password).await?;
        let profile = NewProfile {
            id: outcome.user.id.clone(),
            name: user.name.clone(),
            email: Some(user.email.clone()),
            is_admin: user.is_admin,
        };
        self.create_profile(&profile).await?;
        tracing::info!(user_id = %outcome.user.id, is_admin = user.is_admin, "user created");
        Ok(outcome.user)
    }

    /// Delete the profile row, then the auth user.
    ///
    /// # Errors
    ///
    /// Returns the first failure; a failed auth deletion leaves the profile
    /// already removed.
    pub async fn delete_user(&self, id: &str) -> Result<(), GatewayError> {
        self.delete_profile(id).await?;
        self.admin_delete_user(id).await?;
        tracing::info!(user_id = %id, "user deleted");
        Ok(())
    }
}

fn to_body<S: Serialize>(value: &S) -> Result<Value, GatewayError> {
    serde_json::to_value(value).map_err(|e| GatewayError::Decode(e.to_string()))
}
