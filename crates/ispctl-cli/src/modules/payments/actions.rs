use serde_json::Value;

use ispctl_core::api::payments::{ManualPaymentRequest, Payment};

use super::http::{list_payments, record_manual_payment};
use crate::cli_args::*;
use crate::modules::shared::args::OutputFormat;
use crate::modules::shared::{cell, money_cell, print_table};
use crate::modules::system::http::print_json_response;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_payment(
    args: PaymentArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        PaymentCommand::List(args) => {
            let reply = list_payments(ctx, args.limit, args.include_deleted).await?;
            print_payments(&reply, args.format)?;
        }
        PaymentCommand::Manual(args) => {
            let payload = ManualPaymentRequest {
                payment_id: args.payment_id,
                customer_id: args.customer_id,
                account_number: args.account_number,
                transaction_id: args.transaction_id,
                amount: args.amount,
                method: args.method,
                notes: args.notes,
                validated_by: args.validated_by,
            };
            let reply = record_manual_payment(ctx, &payload).await?;
            print_json_response(&reply)?;
        }
    }
    Ok(())
}

fn print_payments(reply: &Value, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return print_json_response(reply);
    }
    let payments: Vec<Payment> = serde_json::from_value(reply.clone())?;
    let rows: Vec<Vec<String>> = payments
        .iter()
        .map(|payment| {
            vec![
                cell(payment.account_number.as_deref()),
                cell(payment.customer_name.as_deref()),
                money_cell(payment.amount),
                cell(payment.method.as_deref()),
                cell(payment.status.as_deref()),
                cell(payment.created_at.as_deref()),
            ]
        })
        .collect();
    print_table(
        &["ACCOUNT", "CUSTOMER", "AMOUNT", "METHOD", "STATUS", "DATE"],
        &rows,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::store::{clear_keyring_mock, lock_keyring_tests_async, CredentialStore};
    use crate::modules::system::gateway::Gateway;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn manual_payment_posts_transaction_reference() {
        let _guard = lock_keyring_tests_async().await;
        clear_keyring_mock();
        let dir = tempdir().expect("tempdir");
        let store = CredentialStore::at(dir.path());
        store
            .set_session("token", "refresh-1", Some("isp-1"), None)
            .expect("seed session");
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/payments/manual")
            .match_body(Matcher::Json(json!({
                "transactionId": "TXN-42",
                "accountNumber": "ACC001",
                "amount": 1500.0,
            })))
            .with_body(
                json!({"message": "Payment recorded", "payment": {"_id": "pay1"}}).to_string(),
            )
            .create_async()
            .await;

        let gateway = Gateway::new(reqwest::Client::new(), &server.url(), store);
        let ctx = CommandContext { gateway: &gateway };
        let args = PaymentArgs {
            command: PaymentCommand::Manual(PaymentManualArgs {
                transaction_id: "TXN-42".to_string(),
                payment_id: None,
                customer_id: None,
                account_number: Some("ACC001".to_string()),
                amount: Some(1500.0),
                method: None,
                notes: None,
                validated_by: None,
            }),
        };
        handle_payment(args, &ctx).await.expect("manual ok");
        mock.assert_async().await;
    }
}
