//! Router Module
//!
//! Typed operations on top of a [`Session`].
//!
//! ## Flow
//! ```text
//! Command ──encode──▶ POST cgi?… ──▶ raw text ──parse──▶ Stack
//!                                                       │
//!                              drop [error]0 sentinels ◀┘
//!                                                       │
//!                                        typed records ◀┘
//! ```
//!
//! Every function takes the session explicitly and performs one exchange,
//! except [`create_dhcp_lease`] which re-reads the lease table afterwards.

mod queries;
mod models;
mod stats;
mod dhcp;
mod wifi;
mod port_forwarding;
mod backup;

pub use queries::*;
pub use models::{
    Addressable, DhcpClient, DhcpLease, LinkStats, PortForwardingRule, WifiBand,
};
pub use stats::{get_external_ip, get_stats};
pub use dhcp::{
    create_dhcp_lease, delete_dhcp_lease, disable_dhcp_lease, enable_dhcp_lease,
    get_dhcp_clients, get_dhcp_leases, toggle_dhcp_lease,
};
pub use wifi::get_wifi_clients;
pub use port_forwarding::get_port_forwarding_rules;
pub use backup::{download_config_backup, save_config_backup};

use crate::error::Result;
use crate::network::{Session, Transport};
use crate::protocol::{encode_command, Command, Stack};

/// POST a query and parse the response
pub(crate) fn fetch_stack<T: Transport>(
    session: &Session<T>,
    path: &str,
    query: &Command,
) -> Result<Stack> {
    let text = session.post(path, &encode_command(query))?;
    let stack = Stack::parse(&text)?;
    tracing::trace!("{} returned {} sections", path, stack.len());
    Ok(stack)
}

/// POST a command whose response carries nothing of interest
pub(crate) fn send_command<T: Transport>(
    session: &Session<T>,
    path: &str,
    command: &Command,
) -> Result<()> {
    session.post(path, &encode_command(command))?;
    Ok(())
}
