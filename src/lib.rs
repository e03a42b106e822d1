//! # tplink-archer
//!
//! A client for the configuration protocol of TP-Link Archer routers:
//! - Bracketed "stack" text codec for queries and responses
//! - Cookie-based login with the firmware's two-probe quirk
//! - Typed access to stats, DHCP, Wi-Fi and port forwarding data
//! - Static DHCP lease management and config backup download
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Router Operations                          │
//! │        (stats, dhcp, wifi, port forwarding, backup)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command / Stack
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Session                                 │
//! │          (auth headers, dispatch, status checks)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ HttpRequest / HttpResponse
//!                ┌──────▼──────┐
//!                │  Transport  │
//!                │  (reqwest)  │
//!                └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use tplink_archer::{router, Config, Session};
//!
//! let config = Config::builder().router_url("192.168.0.1").build();
//! let mut session = Session::connect(&config)?;
//! session.authenticate("admin", "password")?;
//!
//! for lease in router::get_dhcp_leases(&session)? {
//!     println!("{:?} -> {:?}", lease.mac_address, lease.ip_address);
//! }
//! # Ok::<(), tplink_archer::ArcherError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod router;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ArcherError, Result};
pub use config::Config;
pub use network::Session;
pub use protocol::{Section, Stack};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of tplink-archer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
