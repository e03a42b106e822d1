//! Network Module
//!
//! HTTP session handling for the router web interface.
//!
//! ## Architecture
//! - One [`Session`] per router, owned by its caller
//! - Login is a cookie plus a status-page probe (two attempts)
//! - Every later request is a single exchange with no retry

mod transport;
mod session;

pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, Transport};
pub use session::{Session, AUTH_ATTEMPTS, AUTH_PROBE_PATH};
