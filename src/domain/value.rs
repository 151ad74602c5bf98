use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Apipedia application key (`appkey`).
///
/// Invariant: non-empty after trimming.
pub struct AppKey(String);

impl AppKey {
    /// Field name used by the gateway (`appkey`).
    pub const FIELD: &'static str = "appkey";

    /// Create a validated [`AppKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Apipedia authentication key (`authkey`).
///
/// Invariant: non-empty after trimming. The `Debug` output is redacted.
pub struct AuthKey(String);

impl AuthKey {
    /// Field name used by the gateway (`authkey`).
    pub const FIELD: &'static str = "authkey";

    /// Create a validated [`AuthKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// The credential pair attached to every request.
pub struct Credentials {
    appkey: AppKey,
    authkey: AuthKey,
}

impl Credentials {
    /// Validate both keys and bind them together.
    pub fn new(
        appkey: impl Into<String>,
        authkey: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            appkey: AppKey::new(appkey)?,
            authkey: AuthKey::new(authkey)?,
        })
    }

    pub fn appkey(&self) -> &AppKey {
        &self.appkey
    }

    pub fn authkey(&self) -> &AuthKey {
        &self.authkey
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// AI agent identifier (`agent_id`).
///
/// Invariant: non-empty after trimming.
pub struct AgentId(String);

impl AgentId {
    /// Field name used by the gateway (`agent_id`).
    pub const FIELD: &'static str = "agent_id";

    /// Create a validated [`AgentId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated agent id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Gateway message id (`message_id`) used by the status endpoints.
///
/// Invariant: non-empty after trimming.
pub struct MessageId(String);

impl MessageId {
    /// Field name used by the gateway (`message_id`).
    pub const FIELD: &'static str = "message_id";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// A latitude/longitude pair for Telegram location messages.
///
/// Invariant: latitude in `-90..=90`, longitude in `-180..=180`.
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub const LATITUDE_FIELD: &'static str = "latitude";
    pub const LONGITUDE_FIELD: &'static str = "longitude";

    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::CoordinateOutOfRange {
                field: Self::LATITUDE_FIELD,
                min: -90.0,
                max: 90.0,
                actual: latitude,
            });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::CoordinateOutOfRange {
                field: Self::LONGITUDE_FIELD,
                min: -180.0,
                max: 180.0,
                actual: longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}
