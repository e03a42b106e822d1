//! Router session
//!
//! Holds credentials and authentication state, and dispatches requests.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bytes::Bytes;

use crate::config::{normalize_base_url, Config};
use crate::error::{ArcherError, Result};
use super::transport::{HttpRequest, HttpTransport, Method, Transport};

/// Path probed to check that the credentials cookie is accepted
pub const AUTH_PROBE_PATH: &str = "main/status.htm";

/// Probe attempts per login
///
/// The firmware sometimes rejects the first probe after new credentials are
/// set; a second identical probe goes through.
pub const AUTH_ATTEMPTS: u32 = 2;

/// An authenticated (or not yet authenticated) connection to one router
///
/// Mutating the session needs `&mut`, so sharing one across callers means
/// wrapping it in a lock.
pub struct Session<T = HttpTransport> {
    /// Router root URL, ending in `/`
    base_url: String,

    /// Referer and credentials cookie, empty until `authenticate`
    headers: Vec<(String, String)>,

    /// Set only by a successful probe
    authenticated: bool,

    transport: T,
}

impl Session<HttpTransport> {
    /// Open a session over HTTP using the given config
    pub fn connect(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout_ms)?;
        Self::with_transport(&config.router_url, transport)
    }
}

impl<T: Transport> Session<T> {
    /// Create a session over a custom transport
    pub fn with_transport(router_url: &str, transport: T) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(router_url)?,
            headers: Vec::new(),
            authenticated: false,
            transport,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Headers sent with every request
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Log in with a username and password
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<()> {
        let credentials = STANDARD.encode(format!("{}:{}", username, password));
        self.authenticate_basic(&credentials)
    }

    /// Log in with already base64-encoded `username:password`
    ///
    /// Headers stay set even when every probe fails.
    pub fn authenticate_basic(&mut self, credentials: &str) -> Result<()> {
        self.headers = vec![
            ("Referer".to_string(), self.base_url.clone()),
            ("Cookie".to_string(), format!("Authorization=Basic {}", credentials)),
        ];
        self.authenticated = false;

        for attempt in 1..=AUTH_ATTEMPTS {
            let request = self.request(Method::Get, AUTH_PROBE_PATH, None);
            let response = self.transport.send(&request)?;

            if response.status == 200 {
                tracing::debug!("Authenticated to {} on attempt {}", self.base_url, attempt);
                self.authenticated = true;
                return Ok(());
            }

            tracing::debug!(
                "Authentication probe {}/{} to {} returned {}",
                attempt,
                AUTH_ATTEMPTS,
                self.base_url,
                response.status
            );
        }

        tracing::warn!("Authentication to {} failed", self.base_url);
        Err(ArcherError::Auth(format!(
            "router rejected credentials after {} attempts",
            AUTH_ATTEMPTS
        )))
    }

    /// Perform one authenticated exchange and return the raw body
    ///
    /// No request is sent when the session is not authenticated.
    pub fn dispatch(&self, method: Method, path: &str, body: Option<&str>) -> Result<Bytes> {
        if !self.authenticated {
            return Err(ArcherError::Auth("session is not authenticated".to_string()));
        }

        let request = self.request(method, path, body);
        let response = self.transport.send(&request)?;

        tracing::debug!("{:?} {} -> {}", method, path, response.status);

        if response.status != 200 {
            return Err(ArcherError::Request {
                path: path.to_string(),
                status: response.status,
            });
        }

        Ok(response.body)
    }

    /// GET a path, returning the body bytes
    pub fn get(&self, path: &str) -> Result<Bytes> {
        self.dispatch(Method::Get, path, None)
    }

    /// POST a body to a path, returning the response text
    pub fn post(&self, path: &str, body: &str) -> Result<String> {
        let bytes = self.dispatch(Method::Post, path, Some(body))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn request(&self, method: Method, path: &str, body: Option<&str>) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers: self.headers.clone(),
            body: body.map(str::to_string),
        }
    }
}

impl<T> fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.authenticated)
            .finish()
    }
}
