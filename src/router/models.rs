//! Domain records
//!
//! Typed views of response sections. Records that can be addressed by later
//! commands keep the identifier of the section they came from.

use serde::Serialize;

use crate::error::Result;
use crate::protocol::{raw_identifier, Section};
use super::queries::flag;

/// A record that maps to one addressable row on the router
pub trait Addressable {
    /// Identifier of the originating section, e.g. `[1,0,0,0,0,0]0`
    fn identifier(&self) -> &str;

    /// Row address used in mutation commands
    fn raw_identifier(&self) -> &str {
        raw_identifier(self.identifier())
    }

    /// The record as a protocol section
    ///
    /// Fails if the record's identifier is not a valid section identifier.
    fn to_section(&self) -> Result<Section>;

    fn to_text(&self) -> Result<String> {
        Ok(self.to_section()?.to_text())
    }
}

// =============================================================================
// Link Statistics
// =============================================================================

/// DSL line rates in kbit/s; absent when the link reports nothing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkStats {
    pub current_up_rate: Option<u64>,
    pub current_down_rate: Option<u64>,
    pub max_up_rate: Option<u64>,
    pub max_down_rate: Option<u64>,
}

impl LinkStats {
    pub fn from_section(section: &Section) -> Self {
        Self {
            current_up_rate: number(section, "upstreamCurrRate"),
            current_down_rate: number(section, "downstreamCurrRate"),
            max_up_rate: number(section, "upstreamMaxRate"),
            max_down_rate: number(section, "downstreamMaxRate"),
        }
    }
}

// =============================================================================
// DHCP
// =============================================================================

/// A host currently known to the DHCP server
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DhcpClient {
    pub ip_address: Option<String>,
    pub mac_address: Option<String>,
    pub hostname: Option<String>,
}

impl DhcpClient {
    pub fn from_section(section: &Section) -> Self {
        Self {
            ip_address: text(section, "IPAddress"),
            mac_address: text(section, "MACAddress"),
            hostname: text(section, "hostName").filter(|h| !h.is_empty()),
        }
    }
}

/// A static DHCP address reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DhcpLease {
    pub identifier: String,
    pub ip_address: Option<String>,
    pub mac_address: Option<String>,
    pub is_enabled: bool,
}

impl DhcpLease {
    pub fn from_section(section: &Section) -> Self {
        Self {
            identifier: section.identifier().to_string(),
            ip_address: text(section, "yiaddr"),
            mac_address: text(section, "chaddr"),
            is_enabled: section.get("enable") == Some("1"),
        }
    }

    /// True if the lease reserves `ip_address`
    pub fn has_ip(&self, ip_address: &str) -> bool {
        self.ip_address.as_deref() == Some(ip_address)
    }
}

impl Addressable for DhcpLease {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn to_section(&self) -> Result<Section> {
        let mut section = Section::new(self.identifier.as_str())?;
        if let Some(mac) = &self.mac_address {
            section.insert("chaddr", mac.as_str());
        }
        if let Some(ip) = &self.ip_address {
            section.insert("yiaddr", ip.as_str());
        }
        section.insert("enable", flag(self.is_enabled));
        Ok(section)
    }
}

// =============================================================================
// Port Forwarding
// =============================================================================

/// A virtual server (port mapping) rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortForwardingRule {
    pub identifier: String,
    pub client_ip_address: Option<String>,
    pub internal_port: Option<u16>,
    pub external_port: Option<u16>,
    /// Last port of the internal range; equals `internal_port` for single ports
    pub internal_port_end: Option<u16>,
    /// Last port of the external range; equals `external_port` for single ports
    pub external_port_end: Option<u16>,
    pub protocol: Option<String>,
    pub is_enabled: bool,
}

impl PortForwardingRule {
    pub fn from_section(section: &Section) -> Self {
        let internal_port = number(section, "internalPort");
        let external_port = number(section, "externalPort");

        Self {
            identifier: section.identifier().to_string(),
            client_ip_address: text(section, "internalClient"),
            internal_port,
            external_port,
            internal_port_end: number(section, "X_TP_InternalPortEnd").or(internal_port),
            external_port_end: number(section, "X_TP_ExternalPortEnd").or(external_port),
            protocol: text(section, "portMappingProtocol"),
            is_enabled: section.get("portMappingEnabled") == Some("1"),
        }
    }

    /// `start-end` form of the internal ports
    pub fn internal_port_range(&self) -> String {
        port_range(self.internal_port, self.internal_port_end)
    }

    /// `start-end` form of the external ports
    pub fn external_port_range(&self) -> String {
        port_range(self.external_port, self.external_port_end)
    }
}

impl Addressable for PortForwardingRule {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn to_section(&self) -> Result<Section> {
        let ports = [
            ("externalPort", self.external_port),
            ("internalPort", self.internal_port),
            ("X_TP_ExternalPortEnd", self.external_port_end),
            ("X_TP_InternalPortEnd", self.internal_port_end),
        ];

        let mut section = Section::new(self.identifier.as_str())?;
        for (key, port) in ports {
            if let Some(port) = port {
                section.insert(key, port.to_string());
            }
        }
        if let Some(ip) = &self.client_ip_address {
            section.insert("internalClient", ip.as_str());
        }
        if let Some(protocol) = &self.protocol {
            section.insert("portMappingProtocol", protocol.as_str());
        }
        section.insert("portMappingEnabled", flag(self.is_enabled));
        Ok(section)
    }
}

// =============================================================================
// Wi-Fi
// =============================================================================

/// Radio band to list associated stations for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WifiBand {
    /// 2.4 GHz radio
    TwoGhz,
    /// 5 GHz radio
    FiveGhz,
}

impl WifiBand {
    /// Parent stack path of the radio's station table
    pub fn radio_path(self) -> &'static str {
        match self {
            WifiBand::TwoGhz => "1,1,0,0,0,0",
            WifiBand::FiveGhz => "1,2,0,0,0,0",
        }
    }
}

// =============================================================================
// Field Helpers
// =============================================================================

fn text(section: &Section, key: &str) -> Option<String> {
    section.get(key).map(str::to_string)
}

/// Missing, empty and unparsable fields are all `None`
fn number<N: std::str::FromStr>(section: &Section, key: &str) -> Option<N> {
    let raw = section.get(key)?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!("Section {} field '{}' is not a number: {:?}", section.identifier(), key, raw);
            None
        }
    }
}

fn port_range(start: Option<u16>, end: Option<u16>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!("{}-{}", start, end),
        (Some(port), None) | (None, Some(port)) => port.to_string(),
        (None, None) => String::new(),
    }
}
