use clap::{Args, Subcommand};

#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Subcommand)]
pub enum AccountCommand {
    #[command(about = "Change the signed-in user's email or display name")]
    SetEmail(AccountSetEmailArgs),
    #[command(about = "Change the signed-in user's password")]
    SetPassword(AccountSetPasswordArgs),
}

#[derive(Args)]
pub struct AccountSetEmailArgs {
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub display_name: Option<String>,
}

#[derive(Args)]
pub struct AccountSetPasswordArgs {
    #[arg(long)]
    pub current_password: Option<String>,
    #[arg(long)]
    pub new_password: Option<String>,
}
