use anyhow::Context;
use serde_json::Value;

use ispctl_core::api::sms::{
    AfricasTalkingCredentials, SendSmsRequest, SendTestSmsRequest, SmsPreviewRequest,
    SmsPreviewResponse, TwilioCredentials, UpdateSmsSettingsRequest, UpsertSmsTemplateRequest,
};

use super::http::{
    list_templates, preview, save_settings, send, send_test, settings, upsert_template,
};
use crate::cli_args::*;
use crate::modules::system::http::print_json_response;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_sms(args: SmsArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        SmsCommand::Settings => {
            let reply = settings(ctx).await?;
            print_json_response(&reply)?;
        }
        SmsCommand::SetSettings(args) => {
            let payload = settings_payload(args);
            let reply = save_settings(ctx, &payload).await?;
            print_json_response(&reply)?;
        }
        SmsCommand::Templates => {
            let reply = list_templates(ctx).await?;
            print_json_response(&reply)?;
        }
        SmsCommand::SetTemplate(args) => {
            let payload = UpsertSmsTemplateRequest {
                template_type: args.template_type,
                language: args.language,
                body: args.body,
                active: args.inactive.then_some(false),
            };
            let reply = upsert_template(ctx, &payload).await?;
            print_json_response(&reply)?;
        }
        SmsCommand::Preview(args) => {
            let variables: Value = serde_json::from_str(&args.variables)
                .context("--variables must be a JSON object")?;
            let payload = SmsPreviewRequest {
                body: args.body,
                variables,
            };
            let reply = preview(ctx, &payload).await?;
            let parsed: SmsPreviewResponse = serde_json::from_value(reply.clone())?;
            match parsed.rendered {
                Some(rendered) => println!("{rendered}"),
                None => print_json_response(&reply)?,
            }
        }
        SmsCommand::SendTest(args) => {
            let variables = args
                .variables
                .map(|raw| serde_json::from_str(&raw))
                .transpose()
                .context("--variables must be a JSON object")?;
            let payload = SendTestSmsRequest {
                to: args.to,
                template_type: args.template_type,
                language: args.language,
                body: args.body,
                variables,
            };
            let reply = send_test(ctx, &payload).await?;
            print_json_response(&reply)?;
        }
        SmsCommand::Send(args) => {
            let payload = SendSmsRequest {
                customer_id: args.customer_id,
                plan_id: args.plan_id,
                template_type: args.template_type,
                language: args.language,
                due_at: args.due_at,
            };
            let reply = send(ctx, &payload).await?;
            print_json_response(&reply)?;
        }
    }
    Ok(())
}

fn settings_payload(args: SmsSetSettingsArgs) -> UpdateSmsSettingsRequest {
    let twilio = [
        &args.twilio_account_sid,
        &args.twilio_auth_token,
        &args.twilio_from,
    ]
    .iter()
    .any(|field| field.is_some())
    .then(|| TwilioCredentials {
        account_sid: args.twilio_account_sid.clone(),
        auth_token: args.twilio_auth_token.clone(),
        from: args.twilio_from.clone(),
    });
    let africastalking = [&args.at_api_key, &args.at_username, &args.at_from]
        .iter()
        .any(|field| field.is_some())
        .then(|| AfricasTalkingCredentials {
            api_key: args.at_api_key.clone(),
            username: args.at_username.clone(),
            from: args.at_from.clone(),
        });
    UpdateSmsSettingsRequest {
        enabled: args.enabled,
        sender_id: args.sender_id,
        default_language: args.default_language,
        primary_provider: args.primary_provider,
        fallback_enabled: args.fallback_enabled,
        twilio,
        africastalking,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::store::{clear_keyring_mock, lock_keyring_tests_async, CredentialStore};
    use crate::modules::system::gateway::Gateway;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn provider_credentials_nest_only_when_given() {
        let payload = settings_payload(SmsSetSettingsArgs {
            enabled: Some(true),
            sender_id: None,
            default_language: None,
            primary_provider: Some("twilio".to_string()),
            fallback_enabled: None,
            twilio_account_sid: Some("AC1".to_string()),
            twilio_auth_token: None,
            twilio_from: None,
            at_api_key: None,
            at_username: None,
            at_from: None,
        });
        let body = serde_json::to_value(&payload).expect("serializes");
        assert_eq!(
            body,
            json!({
                "enabled": true,
                "primaryProvider": "twilio",
                "twilio": {"accountSid": "AC1"},
            })
        );
    }

    #[tokio::test]
    async fn preview_prints_the_rendered_body() {
        let _guard = lock_keyring_tests_async().await;
        clear_keyring_mock();
        let dir = tempdir().expect("tempdir");
        let store = CredentialStore::at(dir.path());
        store
            .set_session("token", "refresh-1", Some("isp-1"), None)
            .expect("seed session");
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/sms/preview")
            .match_body(Matcher::Json(json!({
                "body": "Hi [Customer Name]",
                "variables": {"Customer Name": "Asha"},
            })))
            .with_body(json!({"rendered": "Hi Asha"}).to_string())
            .create_async()
            .await;

        let gateway = Gateway::new(reqwest::Client::new(), &server.url(), store);
        let ctx = CommandContext { gateway: &gateway };
        let args = SmsArgs {
            command: SmsCommand::Preview(SmsPreviewArgs {
                body: "Hi [Customer Name]".to_string(),
                variables: json!({"Customer Name": "Asha"}).to_string(),
            }),
        };
        handle_sms(args, &ctx).await.expect("preview ok");
        mock.assert_async().await;
    }
}
