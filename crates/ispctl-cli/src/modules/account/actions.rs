use anyhow::bail;

use ispctl_core::api::account::{UpdateEmailRequest, UpdatePasswordRequest};

use super::http::{update_email, update_password};
use crate::cli_args::*;
use crate::modules::system::CommandContext;
use crate::prompt_password;

pub(crate) async fn handle_account(
    args: AccountArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        AccountCommand::SetEmail(args) => {
            if args.email.is_none() && args.display_name.is_none() {
                bail!("provide --email and/or --display-name");
            }
            let payload = UpdateEmailRequest {
                email: args.email,
                display_name: args.display_name,
            };
            update_email(ctx, &payload).await?;
            println!("Account updated");
        }
        AccountCommand::SetPassword(args) => {
            let current_password = match args.current_password {
                Some(password) => password,
                None => prompt_password("Current password: ")?,
            };
            let new_password = match args.new_password {
                Some(password) => password,
                None => prompt_password("New password: ")?,
            };
            let payload = UpdatePasswordRequest {
                current_password,
                new_password,
            };
            update_password(ctx, &payload).await?;
            println!("Password updated");
        }
    }
    Ok(())
}
