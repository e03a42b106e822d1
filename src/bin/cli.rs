//! tplink-archer CLI
//!
//! Command-line interface for querying and configuring a TP-Link Archer router.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use tplink_archer::router::{self, DhcpLease, WifiBand};
use tplink_archer::{ArcherError, Config, Result, Session};

/// tplink-archer CLI
#[derive(Parser, Debug)]
#[command(name = "tplink-archer")]
#[command(about = "Query and configure TP-Link Archer routers")]
#[command(version)]
struct Args {
    /// Router address (host, host:port or URL)
    #[arg(short, long, env = "ARCHER_URL", default_value = "192.168.0.1")]
    url: String,

    /// Web interface username
    #[arg(short = 'U', long, env = "ARCHER_USERNAME", default_value = "admin")]
    username: String,

    /// Web interface password
    #[arg(short, long, env = "ARCHER_PASSWORD", hide_env_values = true)]
    password: String,

    /// Request timeout in milliseconds
    #[arg(long, default_value = "10000")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show DSL line rates
    Stats,

    /// Show the WAN address
    ExternalIp,

    /// List hosts known to the DHCP server
    DhcpClients,

    /// List static DHCP leases
    DhcpLeases,

    /// List stations on a wireless band
    WifiClients {
        #[arg(long, value_enum, default_value = "2g")]
        band: Band,
    },

    /// List port forwarding rules
    PortForwarding,

    /// Create a static DHCP lease
    LeaseCreate {
        /// Reserved IP address
        ip: String,

        /// Client MAC address
        mac: String,

        /// Create the lease disabled
        #[arg(long)]
        disabled: bool,
    },

    /// Delete the static lease for an IP address
    LeaseDelete { ip: String },

    /// Enable the static lease for an IP address
    LeaseEnable { ip: String },

    /// Disable the static lease for an IP address
    LeaseDisable { ip: String },

    /// Download the configuration backup
    Backup {
        /// Directory to write conf.bin into
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Band {
    #[value(name = "2g")]
    TwoGhz,
    #[value(name = "5g")]
    FiveGhz,
}

impl From<Band> for WifiBand {
    fn from(band: Band) -> Self {
        match band {
            Band::TwoGhz => WifiBand::TwoGhz,
            Band::FiveGhz => WifiBand::FiveGhz,
        }
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,tplink_archer=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::builder()
        .router_url(&args.url)
        .timeout_ms(args.timeout_ms)
        .build();

    let mut session = Session::connect(&config)?;
    session.authenticate(&args.username, &args.password)?;

    match args.command {
        Commands::Stats => print_json(&router::get_stats(&session)?),
        Commands::ExternalIp => print_json(&router::get_external_ip(&session)?),
        Commands::DhcpClients => print_json(&router::get_dhcp_clients(&session)?),
        Commands::DhcpLeases => print_json(&router::get_dhcp_leases(&session)?),
        Commands::WifiClients { band } => {
            print_json(&router::get_wifi_clients(&session, band.into())?)
        }
        Commands::PortForwarding => print_json(&router::get_port_forwarding_rules(&session)?),
        Commands::LeaseCreate { ip, mac, disabled } => {
            print_json(&router::create_dhcp_lease(&session, &ip, &mac, !disabled)?)
        }
        Commands::LeaseDelete { ip } => {
            let lease = find_lease(&session, &ip)?;
            router::delete_dhcp_lease(&session, &lease)?;
            print_json(&lease)
        }
        Commands::LeaseEnable { ip } => {
            let mut lease = find_lease(&session, &ip)?;
            router::enable_dhcp_lease(&session, &mut lease)?;
            print_json(&lease)
        }
        Commands::LeaseDisable { ip } => {
            let mut lease = find_lease(&session, &ip)?;
            router::disable_dhcp_lease(&session, &mut lease)?;
            print_json(&lease)
        }
        Commands::Backup { dir } => {
            let path = router::save_config_backup(&session, &config, dir.as_deref())?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn find_lease(session: &Session, ip: &str) -> Result<DhcpLease> {
    router::get_dhcp_leases(session)?
        .into_iter()
        .find(|lease| lease.has_ip(ip))
        .ok_or_else(|| ArcherError::LeaseNotFound(ip.to_string()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| ArcherError::Serialization(e.to_string()))?;
    println!("{}", text);
    Ok(())
}
