use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "eosctl")]
#[command(version)]
#[command(about = "Declarative management of EOS network resources", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Report what would change without touching the device
    #[arg(long, global = true)]
    pub check: bool,

    /// Fail when a changed attribute has no setter instead of skipping it
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection parameters; flags override the selected profile.
#[derive(Args)]
pub struct ConnectionArgs {
    /// Device hostname or address
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// eAPI username
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// eAPI password
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// eAPI port (defaults per transport)
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// http or https
    #[arg(long, global = true)]
    pub transport: Option<TransportArg>,

    /// Named connection profile from the config file
    #[arg(long, global = true)]
    pub profile: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage a VLAN
    Vlan(VlanArgs),

    /// Manage the layer 2 configuration of a switchport
    Switchport(SwitchportArgs),

    /// Configure a physical interface (always exists, no lifecycle)
    Interface(InterfaceArgs),

    /// Manage the layer 3 addressing of an interface
    IpInterface(IpInterfaceArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct VlanArgs {
    /// VLAN id (1-4094)
    #[arg(long)]
    pub vlanid: u16,

    /// VLAN name
    #[arg(long)]
    pub name: Option<String>,

    /// Administrative state: active when true, suspended when false
    #[arg(long)]
    pub enable: Option<bool>,

    /// Desired lifecycle state
    #[arg(long, value_enum, default_value_t = StateArg::Present)]
    pub state: StateArg,
}

#[derive(Args)]
pub struct SwitchportArgs {
    /// Interface name (e.g. Ethernet1)
    #[arg(long)]
    pub name: String,

    /// Operating mode: access or trunk
    #[arg(long)]
    pub mode: Option<String>,

    /// Access VLAN id
    #[arg(long)]
    pub access_vlan: Option<u16>,

    /// Native VLAN id for trunk mode
    #[arg(long)]
    pub trunk_native_vlan: Option<u16>,

    /// Allowed VLAN list for trunk mode (e.g. 1,10-20)
    #[arg(long)]
    pub trunk_allowed_vlans: Option<String>,

    /// Desired lifecycle state
    #[arg(long, value_enum, default_value_t = StateArg::Present)]
    pub state: StateArg,
}

#[derive(Args)]
pub struct InterfaceArgs {
    /// Interface name (e.g. Ethernet1)
    #[arg(long)]
    pub name: String,

    /// Interface description
    #[arg(long)]
    pub description: Option<String>,

    /// Administratively enable (no shutdown) or disable (shutdown)
    #[arg(long)]
    pub enable: Option<bool>,
}

#[derive(Args)]
pub struct IpInterfaceArgs {
    /// Interface name (e.g. Ethernet1)
    #[arg(long)]
    pub name: String,

    /// IPv4 address in CIDR notation (e.g. 10.0.0.1/24)
    #[arg(long)]
    pub address: Option<String>,

    /// Interface MTU
    #[arg(long)]
    pub mtu: Option<u16>,

    /// Desired lifecycle state
    #[arg(long, value_enum, default_value_t = StateArg::Present)]
    pub state: StateArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StateArg {
    Present,
    Absent,
}

impl StateArg {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl std::fmt::Display for StateArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TransportArg {
    Http,
    Https,
}

impl From<TransportArg> for eapi::Transport {
    fn from(arg: TransportArg) -> Self {
        match arg {
            TransportArg::Http => Self::Http,
            TransportArg::Https => Self::Https,
        }
    }
}
