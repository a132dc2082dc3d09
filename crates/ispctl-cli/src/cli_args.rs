use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::account::args::*;
pub use crate::modules::auth::args::*;
pub use crate::modules::customers::args::*;
pub use crate::modules::hotspot::args::*;
pub use crate::modules::invoices::args::*;
pub use crate::modules::payments::args::*;
pub use crate::modules::plans::args::*;
pub use crate::modules::pppoe::args::*;
pub use crate::modules::routers::args::*;
pub use crate::modules::shared::args::*;
pub use crate::modules::sms::args::*;
pub use crate::modules::system::args::*;

#[derive(Parser)]
#[command(name = "ispctl")]
#[command(about = "ISP billing and provisioning console")]
pub struct Cli {
    #[arg(long, env = "ISPCTL_API_URL")]
    pub api_url: Option<String>,
    #[arg(long, env = "ISPCTL_TOKEN")]
    pub token: Option<String>,
    #[arg(long, env = "ISPCTL_TENANT")]
    pub tenant: Option<String>,
    /// Saved MikroTik server id to target for router-backed commands
    #[arg(long)]
    pub router: Option<String>,
    #[arg(long)]
    pub timeout_secs: Option<u64>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// and invalid TLS certificates")]
    pub insecure: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Login(LoginArgs),
    Register(RegisterArgs),
    Logout,
    Whoami,
    #[command(about = "Show the stored session without calling the API")]
    Status,
    Stats,
    Health,
    Customer(CustomerArgs),
    Plan(PlanArgs),
    Pppoe(PppoeArgs),
    Hotspot(HotspotArgs),
    Payment(PaymentArgs),
    Invoice(InvoiceArgs),
    Router(RouterArgs),
    Sms(SmsArgs),
    Account(AccountArgs),
    Config(ConfigArgs),
}
