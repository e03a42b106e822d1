//! DHCP clients and static leases

use crate::error::{ArcherError, Result};
use crate::network::{Session, Transport};
use super::models::{Addressable, DhcpClient, DhcpLease};
use super::queries::{
    create_dhcp_lease_command, delete_dhcp_lease_command, dhcp_clients_query,
    dhcp_leases_query, toggle_dhcp_lease_command, DHCP_CLIENTS_PATH, DHCP_LEASES_PATH,
    DHCP_LEASE_CREATE_PATH, DHCP_LEASE_DELETE_PATH, DHCP_LEASE_TOGGLE_PATH,
};
use super::{fetch_stack, send_command};

/// Hosts in the DHCP server's host table
pub fn get_dhcp_clients<T: Transport>(session: &Session<T>) -> Result<Vec<DhcpClient>> {
    let stack = fetch_stack(session, DHCP_CLIENTS_PATH, &dhcp_clients_query())?;
    Ok(stack.rows().map(DhcpClient::from_section).collect())
}

/// All static address reservations
pub fn get_dhcp_leases<T: Transport>(session: &Session<T>) -> Result<Vec<DhcpLease>> {
    let stack = fetch_stack(session, DHCP_LEASES_PATH, &dhcp_leases_query())?;
    Ok(stack.rows().map(DhcpLease::from_section).collect())
}

/// Reserve `ip_address` for `mac_address`
///
/// The router does not echo the new row, so the lease table is read back and
/// the first lease with the same address is returned. With duplicate
/// addresses that may be an older lease.
pub fn create_dhcp_lease<T: Transport>(
    session: &Session<T>,
    ip_address: &str,
    mac_address: &str,
    is_enabled: bool,
) -> Result<DhcpLease> {
    let command = create_dhcp_lease_command(ip_address, mac_address, is_enabled);
    send_command(session, DHCP_LEASE_CREATE_PATH, &command)?;
    tracing::debug!("Created DHCP lease {} -> {}", mac_address, ip_address);

    get_dhcp_leases(session)?
        .into_iter()
        .find(|lease| lease.has_ip(ip_address))
        .ok_or_else(|| ArcherError::LeaseNotFound(ip_address.to_string()))
}

/// Remove a reservation
pub fn delete_dhcp_lease<T: Transport>(session: &Session<T>, lease: &DhcpLease) -> Result<()> {
    let command = delete_dhcp_lease_command(lease.raw_identifier());
    send_command(session, DHCP_LEASE_DELETE_PATH, &command)?;
    tracing::debug!("Deleted DHCP lease {}", lease.identifier);
    Ok(())
}

/// Enable or disable a reservation, updating `lease` on success
pub fn toggle_dhcp_lease<T: Transport>(
    session: &Session<T>,
    lease: &mut DhcpLease,
    enable: bool,
) -> Result<()> {
    let command = toggle_dhcp_lease_command(lease.raw_identifier(), enable);
    send_command(session, DHCP_LEASE_TOGGLE_PATH, &command)?;
    lease.is_enabled = enable;
    Ok(())
}

pub fn enable_dhcp_lease<T: Transport>(session: &Session<T>, lease: &mut DhcpLease) -> Result<()> {
    toggle_dhcp_lease(session, lease, true)
}

pub fn disable_dhcp_lease<T: Transport>(session: &Session<T>, lease: &mut DhcpLease) -> Result<()> {
    toggle_dhcp_lease(session, lease, false)
}
