//! Link statistics and WAN address

use crate::error::Result;
use crate::network::{Session, Transport};
use super::fetch_stack;
use super::models::LinkStats;
use super::queries::{
    external_ip_query, stats_query, EXTERNAL_IP_PATH, EXTERNAL_IP_SECTION, STATS_PATH,
};

/// Current and attainable DSL rates
///
/// Read from the first row of the response; a response with no rows yields
/// empty stats.
pub fn get_stats<T: Transport>(session: &Session<T>) -> Result<LinkStats> {
    let stack = fetch_stack(session, STATS_PATH, &stats_query())?;
    let stats = stack
        .rows()
        .next()
        .map(LinkStats::from_section)
        .unwrap_or_default();
    Ok(stats)
}

/// Public address of the WAN connection, if the router reports one
pub fn get_external_ip<T: Transport>(session: &Session<T>) -> Result<Option<String>> {
    let stack = fetch_stack(session, EXTERNAL_IP_PATH, &external_ip_query())?;
    let address = stack
        .section(EXTERNAL_IP_SECTION)?
        .and_then(|s| s.get("externalIPAddress"))
        .map(str::to_string);
    Ok(address)
}
