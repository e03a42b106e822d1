//! Router Operation Tests
//!
//! Tests verify:
//! - Each query hits its endpoint with the right body
//! - Sentinel sections never become records
//! - Field projections for every record type
//! - Lease mutations and the create read-back

#[path = "../support/mod.rs"]
mod support;

use support::{authenticated_session, request_body, FakeTransport};
use tplink_archer::network::{Method, Session};
use tplink_archer::router::{self, Addressable, DhcpLease, WifiBand};
use tplink_archer::ArcherError;

const LEASES: &str = "[1,0,0,0,0,0]0\nenable=1\nchaddr=AA:BB:CC:DD:EE:01\nyiaddr=192.168.0.10\n\
                      [2,0,0,0,0,0]0\nenable=0\nchaddr=AA:BB:CC:DD:EE:02\nyiaddr=192.168.0.11\n\
                      [error]0\n";

fn lease(identifier: &str, ip: &str) -> DhcpLease {
    DhcpLease {
        identifier: identifier.to_string(),
        ip_address: Some(ip.to_string()),
        mac_address: Some("AA:BB:CC:DD:EE:02".to_string()),
        is_enabled: false,
    }
}

fn last_request_url(session: &Session<support::FakeTransport>) -> String {
    session.transport().requests().last().unwrap().url.clone()
}

// =============================================================================
// Read Tests
// =============================================================================

#[test]
fn test_get_stats() {
    let session = authenticated_session(FakeTransport::new().respond(
        200,
        "[1,0,0,0,0,0]0\nstatus=Up\nupstreamCurrRate=1023\ndownstreamCurrRate=20480\n\
         upstreamMaxRate=1200\ndownstreamMaxRate=24000\n\
         [1,0,0,0,0,0]1\nCRCErrors=0\n[error]0\n",
    ));

    let stats = router::get_stats(&session).unwrap();

    assert_eq!(stats.current_up_rate, Some(1023));
    assert_eq!(stats.current_down_rate, Some(20480));
    assert_eq!(stats.max_up_rate, Some(1200));
    assert_eq!(stats.max_down_rate, Some(24000));
    assert_eq!(last_request_url(&session), "http://127.0.0.1:5000/cgi?1&5");
}

#[test]
fn test_get_stats_without_rows_is_empty() {
    let session = authenticated_session(FakeTransport::new().respond(200, "[error]0\n"));
    let stats = router::get_stats(&session).unwrap();
    assert_eq!(stats, router::LinkStats::default());
}

#[test]
fn test_get_external_ip() {
    let session = authenticated_session(FakeTransport::new().respond(
        200,
        "[0,0,0,0,0,0]0\nmode=DSL\n[1,1,1,0,0,0]7\nenable=1\nexternalIPAddress=203.0.113.7\n[error]0\n",
    ));

    let ip = router::get_external_ip(&session).unwrap();

    assert_eq!(ip.as_deref(), Some("203.0.113.7"));
    assert_eq!(
        last_request_url(&session),
        "http://127.0.0.1:5000/cgi?1&1&1&5&5&5&5&5&5&5&5&5&5&5"
    );
}

#[test]
fn test_get_external_ip_missing_section() {
    let session = authenticated_session(FakeTransport::new().respond(200, "[0,0,0,0,0,0]0\nmode=DSL\n"));
    let result = router::get_external_ip(&session);
    assert!(matches!(result, Err(ArcherError::SectionNotFound(_))));
}

#[test]
fn test_get_external_ip_empty_response() {
    let session = authenticated_session(FakeTransport::new().respond(200, ""));
    assert_eq!(router::get_external_ip(&session).unwrap(), None);
}

#[test]
fn test_get_dhcp_clients_skips_sentinel() {
    let session = authenticated_session(FakeTransport::new().respond(
        200,
        "[error]0\n[1,1,0,0,0,0]0\nleaseTimeRemaining=3600\nMACAddress=AA:BB:CC:DD:EE:FF\n\
         hostName=laptop\nIPAddress=192.168.0.100\n",
    ));

    let clients = router::get_dhcp_clients(&session).unwrap();

    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].ip_address.as_deref(), Some("192.168.0.100"));
    assert_eq!(clients[0].mac_address.as_deref(), Some("AA:BB:CC:DD:EE:FF"));
    assert_eq!(clients[0].hostname.as_deref(), Some("laptop"));
    assert!(request_body(&session, 1).starts_with("[LAN_HOST_ENTRY#"));
}

#[test]
fn test_get_dhcp_leases() {
    let session = authenticated_session(FakeTransport::new().respond(200, LEASES));

    let leases = router::get_dhcp_leases(&session).unwrap();

    assert_eq!(leases.len(), 2);
    assert_eq!(leases[0].identifier, "[1,0,0,0,0,0]0");
    assert_eq!(leases[0].raw_identifier(), "1,0,0,0,0,0");
    assert_eq!(leases[0].ip_address.as_deref(), Some("192.168.0.10"));
    assert!(leases[0].is_enabled);
    assert!(!leases[1].is_enabled);
    assert_eq!(last_request_url(&session), "http://127.0.0.1:5000/cgi?5");
}

#[test]
fn test_get_wifi_clients_only_macs() {
    let session = authenticated_session(FakeTransport::new().respond(
        200,
        "[1,1,1,0,0,0]0\nassociatedDeviceMACAddress=11:22:33:44:55:66\nX_TP_TotalPacketsSent=10\n\
         X_TP_HostName=phone\n[1,1,2,0,0,0]0\nassociatedDeviceMACAddress=11:22:33:44:55:77\n[error]0\n",
    ));

    let clients = router::get_wifi_clients(&session, WifiBand::FiveGhz).unwrap();

    assert_eq!(clients, vec!["11:22:33:44:55:66", "11:22:33:44:55:77"]);
    assert_eq!(last_request_url(&session), "http://127.0.0.1:5000/cgi?6");
    assert!(request_body(&session, 1).contains("#1,2,0,0,0,0]"));
}

#[test]
fn test_get_port_forwarding_rules() {
    let session = authenticated_session(FakeTransport::new().respond(
        200,
        "[1,1,1,0,0,0]0\nportMappingEnabled=1\nexternalPort=8080\nX_TP_ExternalPortEnd=8090\n\
         internalPort=80\nX_TP_InternalPortEnd=90\nportMappingProtocol=TCP\n\
         internalClient=192.168.0.20\n[error]0\n",
    ));

    let rules = router::get_port_forwarding_rules(&session).unwrap();

    assert_eq!(rules.len(), 1);
    let rule = &rules[0];
    assert_eq!(rule.client_ip_address.as_deref(), Some("192.168.0.20"));
    assert_eq!(rule.internal_port_range(), "80-90");
    assert_eq!(rule.external_port_range(), "8080-8090");
    assert_eq!(rule.protocol.as_deref(), Some("TCP"));
    assert!(rule.is_enabled);
    assert_eq!(rule.raw_identifier(), "1,1,1,0,0,0");
    assert_eq!(last_request_url(&session), "http://127.0.0.1:5000/cgi?5&5&5&5");
}

#[test]
fn test_malformed_response_is_parse_error() {
    let session = authenticated_session(FakeTransport::new().respond(200, "[1,0,0,0,0,0]0\nnot a pair\n"));
    assert!(matches!(router::get_dhcp_leases(&session), Err(ArcherError::Parse(_))));
}

#[test]
fn test_incomplete_rows_still_listed() {
    let session = authenticated_session(
        FakeTransport::new()
            .respond(
                200,
                "[1,1,0,0,0,0]0\nIPAddress=192.168.0.100\nMACAddress=AA:BB:CC:DD:EE:FF\nhostName=\n\
                 [2,1,0,0,0,0]0\nIPAddress=192.168.0.101\n[error]0\n",
            )
            .respond(
                200,
                "[1,1,1,0,0,0]0\ninternalClient=192.168.0.20\ninternalPort=\nexternalPort=8080\n\
                 [2,1,1,0,0,0]0\nportMappingEnabled=1\n[error]0\n",
            )
            .respond(200, "[1,0,0,0,0,0]0\nenable=1\nyiaddr=192.168.0.10\n"),
    );

    let clients = router::get_dhcp_clients(&session).unwrap();
    assert_eq!(clients.len(), 2);
    assert_eq!(clients[0].hostname, None);
    assert_eq!(clients[1].ip_address.as_deref(), Some("192.168.0.101"));
    assert_eq!(clients[1].mac_address, None);

    let rules = router::get_port_forwarding_rules(&session).unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].internal_port, None);
    assert_eq!(rules[0].external_port_range(), "8080-8080");
    assert_eq!(rules[1].client_ip_address, None);
    assert!(rules[1].is_enabled);

    let leases = router::get_dhcp_leases(&session).unwrap();
    assert_eq!(leases.len(), 1);
    assert_eq!(leases[0].mac_address, None);
}

#[test]
fn test_get_wifi_clients_key_case_and_missing_mac() {
    let session = authenticated_session(FakeTransport::new().respond(
        200,
        "[1,1,1,0,0,0]0\nAssociatedDeviceMACAddress=11:22:33:44:55:66\n\
         [1,1,2,0,0,0]0\nX_TP_HostName=printer\n[error]0\n",
    ));

    let clients = router::get_wifi_clients(&session, WifiBand::TwoGhz).unwrap();

    assert_eq!(clients, vec!["11:22:33:44:55:66"]);
    assert!(request_body(&session, 1).contains("#1,1,0,0,0,0]"));
}

#[test]
fn test_operations_require_login() {
    let transport = FakeTransport::new().respond(403, "").respond(403, "");
    let mut session = Session::with_transport("127.0.0.1:5000", transport).unwrap();
    let mut lease = lease("[2,0,0,0,0,0]0", "192.168.0.11");

    assert!(matches!(router::get_stats(&session), Err(ArcherError::Auth(_))));
    assert!(matches!(router::get_external_ip(&session), Err(ArcherError::Auth(_))));
    assert!(matches!(router::get_dhcp_clients(&session), Err(ArcherError::Auth(_))));
    assert!(matches!(router::get_dhcp_leases(&session), Err(ArcherError::Auth(_))));
    assert!(matches!(
        router::get_wifi_clients(&session, WifiBand::TwoGhz),
        Err(ArcherError::Auth(_))
    ));
    assert!(matches!(
        router::get_port_forwarding_rules(&session),
        Err(ArcherError::Auth(_))
    ));
    assert!(matches!(router::download_config_backup(&session), Err(ArcherError::Auth(_))));
    assert!(matches!(
        router::create_dhcp_lease(&session, "192.168.0.11", "AA:BB:CC:DD:EE:02", true),
        Err(ArcherError::Auth(_))
    ));
    assert!(matches!(router::delete_dhcp_lease(&session, &lease), Err(ArcherError::Auth(_))));
    assert!(matches!(
        router::toggle_dhcp_lease(&session, &mut lease, true),
        Err(ArcherError::Auth(_))
    ));
    assert!(matches!(router::enable_dhcp_lease(&session, &mut lease), Err(ArcherError::Auth(_))));
    assert!(matches!(router::disable_dhcp_lease(&session, &mut lease), Err(ArcherError::Auth(_))));

    assert!(!lease.is_enabled);
    assert_eq!(session.transport().request_count(), 0);
    assert_eq!(session.transport().pending(), 2);

    // a failed login leaves the session unauthenticated
    assert!(session.authenticate("admin", "wrong").is_err());
    assert_eq!(session.transport().request_count(), 2);
    assert!(matches!(router::get_dhcp_leases(&session), Err(ArcherError::Auth(_))));
    assert_eq!(session.transport().request_count(), 2);
}

// =============================================================================
// Lease Mutation Tests
// =============================================================================

#[test]
fn test_create_dhcp_lease_reads_back() {
    let session = authenticated_session(FakeTransport::new().respond(200, "").respond(200, LEASES));

    let created = router::create_dhcp_lease(&session, "192.168.0.11", "AA:BB:CC:DD:EE:02", false).unwrap();

    assert_eq!(created.ip_address.as_deref(), Some("192.168.0.11"));
    assert_eq!(created.identifier, "[2,0,0,0,0,0]0");

    let requests = session.transport().requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[1].url, "http://127.0.0.1:5000/cgi?3");
    assert_eq!(
        request_body(&session, 1),
        "[LAN_DHCP_STATIC_ADDR#0,0,0,0,0,0#1,0,0,0,0,0]0,3\r\n\
         chaddr=AA:BB:CC:DD:EE:02\r\nyiaddr=192.168.0.11\r\nenable=0\r\n"
    );
    assert_eq!(requests[2].url, "http://127.0.0.1:5000/cgi?5");
}

#[test]
fn test_create_dhcp_lease_not_listed() {
    let session = authenticated_session(FakeTransport::new().respond(200, "").respond(200, "[error]0\n"));

    let result = router::create_dhcp_lease(&session, "192.168.0.99", "AA:BB:CC:DD:EE:99", true);

    match result {
        Err(ArcherError::LeaseNotFound(ip)) => assert_eq!(ip, "192.168.0.99"),
        other => panic!("Expected LeaseNotFound, got {:?}", other),
    }
}

#[test]
fn test_create_dhcp_lease_rejected_skips_read_back() {
    let session = authenticated_session(FakeTransport::new().respond(500, ""));

    let result = router::create_dhcp_lease(&session, "192.168.0.11", "AA", true);

    assert!(matches!(result, Err(ArcherError::Request { status: 500, .. })));
    assert_eq!(session.transport().request_count(), 2);
}

#[test]
fn test_delete_dhcp_lease() {
    let session = authenticated_session(FakeTransport::new().respond(200, "anything"));

    router::delete_dhcp_lease(&session, &lease("[2,0,0,0,0,0]0", "192.168.0.11")).unwrap();

    let request = session.transport().requests().pop().unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "http://127.0.0.1:5000/cgi?4");
    assert_eq!(
        request.body.as_deref(),
        Some("[LAN_DHCP_STATIC_ADDR#2,0,0,0,0,0#0,0,0,0,0,0]0,0\r\n")
    );
}

#[test]
fn test_enable_and_disable_dhcp_lease() {
    let session = authenticated_session(FakeTransport::new().respond(200, "").respond(200, ""));
    let mut lease = lease("[2,0,0,0,0,0]0", "192.168.0.11");

    router::enable_dhcp_lease(&session, &mut lease).unwrap();
    assert!(lease.is_enabled);
    assert_eq!(
        request_body(&session, 1),
        "[LAN_DHCP_STATIC_ADDR#2,0,0,0,0,0#0,0,0,0,0,0]0,1\r\nenable=1\r\n"
    );

    router::disable_dhcp_lease(&session, &mut lease).unwrap();
    assert!(!lease.is_enabled);
    assert_eq!(
        request_body(&session, 2),
        "[LAN_DHCP_STATIC_ADDR#2,0,0,0,0,0#0,0,0,0,0,0]0,1\r\nenable=0\r\n"
    );
    assert_eq!(last_request_url(&session), "http://127.0.0.1:5000/cgi?2");
}

#[test]
fn test_failed_toggle_leaves_lease_unchanged() {
    let session = authenticated_session(FakeTransport::new().respond(403, ""));
    let mut lease = lease("[2,0,0,0,0,0]0", "192.168.0.11");

    assert!(router::toggle_dhcp_lease(&session, &mut lease, true).is_err());
    assert!(!lease.is_enabled);
}

// =============================================================================
// Backup Tests
// =============================================================================

#[test]
fn test_download_config_backup_is_raw_bytes() {
    let payload = [0x00u8, 0xff, 0x10, b'[', b'\n'];
    let session = authenticated_session(FakeTransport::new().respond_bytes(200, &payload));

    let backup = router::download_config_backup(&session).unwrap();

    assert_eq!(&backup[..], &payload[..]);
    let request = session.transport().requests().pop().unwrap();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, "http://127.0.0.1:5000/cgi/conf.bin?");
    assert_eq!(request.body, None);
}
