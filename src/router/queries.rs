//! Endpoints and request bodies
//!
//! Paths are relative to the router root. Queries list the columns the web
//! interface itself asks for, even where only some are projected.

use crate::protocol::{Command, ROOT_PATH};

// =============================================================================
// Endpoints
// =============================================================================

pub const STATS_PATH: &str = "cgi?1&5";
pub const EXTERNAL_IP_PATH: &str = "cgi?1&1&1&5&5&5&5&5&5&5&5&5&5&5";
pub const DHCP_CLIENTS_PATH: &str = "cgi?5";
pub const DHCP_LEASES_PATH: &str = DHCP_CLIENTS_PATH;
pub const WIFI_CLIENTS_PATH: &str = "cgi?6";
pub const DHCP_LEASE_CREATE_PATH: &str = "cgi?3";
pub const DHCP_LEASE_DELETE_PATH: &str = "cgi?4";
pub const DHCP_LEASE_TOGGLE_PATH: &str = "cgi?2";
pub const PORT_FORWARDING_PATH: &str = "cgi?5&5&5&5";
pub const CONFIG_BACKUP_PATH: &str = "cgi/conf.bin?";

/// Section holding `externalIPAddress` in the external IP response
pub const EXTERNAL_IP_SECTION: &str = "[1,1,1,0,0,0]7";

const DHCP_STATIC_TABLE: &str = "LAN_DHCP_STATIC_ADDR";

/// Parent path new static leases are created under
const DHCP_STATIC_PARENT: &str = "1,0,0,0,0,0";

/// WAN interface path for DSL statistics
const DSL_INTERFACE_PATH: &str = "1,0,0,0,0,0";

// =============================================================================
// Read Queries
// =============================================================================

pub fn stats_query() -> Command {
    Command::new()
        .read_at(
            "WAN_DSL_INTF_CFG",
            DSL_INTERFACE_PATH,
            ROOT_PATH,
            &[
                "status",
                "modulationType",
                "X_TP_AdslModulationCfg",
                "upstreamCurrRate",
                "downstreamCurrRate",
                "X_TP_AnnexType",
                "upstreamMaxRate",
                "downstreamMaxRate",
                "upstreamNoiseMargin",
                "downstreamNoiseMargin",
                "upstreamAttenuation",
                "downstreamAttenuation",
            ],
        )
        .read_at(
            "WAN_DSL_INTF_STATS_TOTAL",
            DSL_INTERFACE_PATH,
            ROOT_PATH,
            &[
                "ATUCCRCErrors",
                "CRCErrors",
                "ATUCFECErrors",
                "FECErrors",
                "SeverelyErroredSecs",
                "X_TP_US_SeverelyErroredSecs",
                "erroredSecs",
                "X_TP_US_ErroredSecs",
            ],
        )
}

/// The status page query; the external address lives in the WAN connection row
pub fn external_ip_query() -> Command {
    Command::new()
        .read("SYS_MODE", &["mode"])
        .read("IGD", &["LANDeviceNumberOfEntries"])
        .read("IGD_DEV_INFO", &["softwareVersion", "hardwareVersion", "upTime"])
        .read("WAN_DSL_INTF_CFG", &["status"])
        .read("WAN_COMMON_INTF_CFG", &["WANAccessType"])
        .read("WAN_DSL_LINK_CFG", &[])
        .read("WAN_IP_CONN", &[])
        .read("WAN_PPP_CONN", &[])
        .read("WAN_L2TP_CONN", &[])
        .read("WAN_PPTP_CONN", &[])
        .read("L2_BRIDGING_ENTRY", &["bridgeName"])
        .read(
            "LAN_WLAN",
            &[
                "status",
                "SSID",
                "BSSID",
                "channel",
                "autoChannelEnable",
                "standard",
                "beaconType",
                "basicEncryptionModes",
                "X_TP_Bandwidth",
                "possibleDataTransmitRates",
                "WPAAuthenticationMode",
                "IEEE11iAuthenticationMode",
            ],
        )
        .read("LAN_WLAN_WDSBRIDGE", &["BridgeEnable"])
        .read("LAN_WLAN_TASK_SCHEDULE", &["enable", "isUsrCtrl"])
}

pub fn dhcp_clients_query() -> Command {
    Command::new().read(
        "LAN_HOST_ENTRY",
        &["leaseTimeRemaining", "MACAddress", "hostName", "IPAddress"],
    )
}

pub fn dhcp_leases_query() -> Command {
    Command::new().read(DHCP_STATIC_TABLE, &["enable", "chaddr", "yiaddr"])
}

/// Associated stations of the radio at `radio_path`
pub fn wifi_clients_query(radio_path: &str) -> Command {
    Command::new().read_at(
        "LAN_WLAN_ASSOC_DEV",
        ROOT_PATH,
        radio_path,
        &[
            "AssociatedDeviceMACAddress",
            "X_TP_TotalPacketsSent",
            "X_TP_TotalPacketsReceived",
            "X_TP_HostName",
        ],
    )
}

/// All columns of every WAN connection type's port mapping table
pub fn port_forwarding_query() -> Command {
    Command::new()
        .read("WAN_IP_CONN_PORTMAPPING", &[])
        .read("WAN_PPP_CONN_PORTMAPPING", &[])
        .read("WAN_L2TP_CONN_PORTMAPPING", &[])
        .read("WAN_PPTP_CONN_PORTMAPPING", &[])
}

// =============================================================================
// Lease Commands
// =============================================================================

pub fn create_dhcp_lease_command(ip_address: &str, mac_address: &str, enabled: bool) -> Command {
    Command::new().write_at(
        DHCP_STATIC_TABLE,
        ROOT_PATH,
        DHCP_STATIC_PARENT,
        &[
            ("chaddr", mac_address),
            ("yiaddr", ip_address),
            ("enable", flag(enabled)),
        ],
    )
}

pub fn delete_dhcp_lease_command(raw_identifier: &str) -> Command {
    Command::new().write_at(DHCP_STATIC_TABLE, raw_identifier, ROOT_PATH, &[])
}

pub fn toggle_dhcp_lease_command(raw_identifier: &str, enabled: bool) -> Command {
    Command::new().write_at(
        DHCP_STATIC_TABLE,
        raw_identifier,
        ROOT_PATH,
        &[("enable", flag(enabled))],
    )
}

/// Protocol boolean
pub(crate) fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}
