use clap::{Args, Subcommand};

#[derive(Args)]
pub struct HotspotArgs {
    #[command(subcommand)]
    pub command: HotspotCommand,
}

#[derive(Subcommand)]
pub enum HotspotCommand {
    #[command(about = "List hotspot users currently online")]
    Active,
    Plans,
    CreatePlan(HotspotCreatePlanArgs),
    DeletePlan(HotspotDeletePlanArgs),
}

#[derive(Args)]
pub struct HotspotCreatePlanArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub price: f64,
    #[arg(long, help = "Session length with unit, e.g. 1h or 30d")]
    pub duration: String,
    #[arg(long, help = "Rate limit pair, e.g. 2M/1M")]
    pub speed: String,
    /// MikroTik server the plan is served from
    #[arg(long)]
    pub server: String,
    #[arg(long)]
    pub profile: String,
    #[arg(long)]
    pub secret: Option<String>,
}

#[derive(Args)]
pub struct HotspotDeletePlanArgs {
    pub id: String,
}
