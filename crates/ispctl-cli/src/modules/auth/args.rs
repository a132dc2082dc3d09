use clap::Args;

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub tenant: Option<String>,
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub display_name: String,
    #[arg(long)]
    pub tenant_name: String,
}
