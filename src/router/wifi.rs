//! Wireless stations

use crate::error::Result;
use crate::network::{Session, Transport};
use super::fetch_stack;
use super::models::WifiBand;
use super::queries::{wifi_clients_query, WIFI_CLIENTS_PATH};

const STATION_MAC_FIELD: &str = "associatedDeviceMACAddress";

/// MAC addresses of stations associated with the given band
///
/// Packet counters and host names are requested but not kept. The key is
/// matched without regard to ASCII case; rows without it are skipped.
pub fn get_wifi_clients<T: Transport>(session: &Session<T>, band: WifiBand) -> Result<Vec<String>> {
    let stack = fetch_stack(session, WIFI_CLIENTS_PATH, &wifi_clients_query(band.radio_path()))?;
    let clients = stack
        .rows()
        .filter_map(|s| s.get_ignore_ascii_case(STATION_MAC_FIELD))
        .map(str::to_string)
        .collect();
    Ok(clients)
}
