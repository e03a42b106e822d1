//! Virtual server rules

use crate::error::Result;
use crate::network::{Session, Transport};
use super::fetch_stack;
use super::models::PortForwardingRule;
use super::queries::{port_forwarding_query, PORT_FORWARDING_PATH};

/// Port mapping rules across all WAN connection types
pub fn get_port_forwarding_rules<T: Transport>(session: &Session<T>) -> Result<Vec<PortForwardingRule>> {
    let stack = fetch_stack(session, PORT_FORWARDING_PATH, &port_forwarding_query())?;
    Ok(stack.rows().map(PortForwardingRule::from_section).collect())
}
