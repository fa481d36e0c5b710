//! Authenticated session bootstrap

use std::fmt;

/// REST API root used when none is configured
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Username and secret (password or personal access token)
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Credentials bound to an API endpoint
///
/// Constructing a session performs no network call. Bad credentials surface
/// as an authentication error from the first request made with it.
#[derive(Debug, Clone)]
pub struct Session {
    credentials: Credentials,
    api_url: String,
}

impl Session {
    pub fn new(credentials: Credentials, api_url: Option<&str>) -> Self {
        let api_url = api_url
            .map(|u| u.trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            credentials,
            api_url,
        }
    }

    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}
