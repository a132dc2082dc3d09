use clap::{Args, Subcommand};

#[derive(Args)]
pub struct SmsArgs {
    #[command(subcommand)]
    pub command: SmsCommand,
}

#[derive(Subcommand)]
pub enum SmsCommand {
    Settings,
    SetSettings(SmsSetSettingsArgs),
    Templates,
    #[command(about = "Create or update a message template by type and language")]
    SetTemplate(SmsSetTemplateArgs),
    #[command(about = "Render a template body against sample variables")]
    Preview(SmsPreviewArgs),
    SendTest(SmsSendTestArgs),
    #[command(about = "Send a payment-link SMS to a customer")]
    Send(SmsSendArgs),
}

#[derive(Args)]
pub struct SmsSetSettingsArgs {
    #[arg(long)]
    pub enabled: Option<bool>,
    #[arg(long)]
    pub sender_id: Option<String>,
    #[arg(long)]
    pub default_language: Option<String>,
    /// twilio or africastalking
    #[arg(long)]
    pub primary_provider: Option<String>,
    #[arg(long)]
    pub fallback_enabled: Option<bool>,
    #[arg(long)]
    pub twilio_account_sid: Option<String>,
    #[arg(long)]
    pub twilio_auth_token: Option<String>,
    #[arg(long)]
    pub twilio_from: Option<String>,
    #[arg(long)]
    pub at_api_key: Option<String>,
    #[arg(long)]
    pub at_username: Option<String>,
    #[arg(long)]
    pub at_from: Option<String>,
}

#[derive(Args)]
pub struct SmsSetTemplateArgs {
    #[arg(long)]
    pub template_type: String,
    #[arg(long, default_value = "en")]
    pub language: String,
    #[arg(long)]
    pub body: String,
    #[arg(long)]
    pub inactive: bool,
}

#[derive(Args)]
pub struct SmsPreviewArgs {
    #[arg(long)]
    pub body: String,
    /// Template variables as a JSON object
    #[arg(long, default_value = "{}")]
    pub variables: String,
}

#[derive(Args)]
pub struct SmsSendTestArgs {
    /// Recipient phone number
    #[arg(long)]
    pub to: String,
    #[arg(long)]
    pub template_type: Option<String>,
    #[arg(long)]
    pub language: Option<String>,
    #[arg(long)]
    pub body: Option<String>,
    #[arg(long)]
    pub variables: Option<String>,
}

#[derive(Args)]
pub struct SmsSendArgs {
    #[arg(long)]
    pub customer_id: String,
    #[arg(long)]
    pub plan_id: Option<String>,
    #[arg(long)]
    pub template_type: Option<String>,
    #[arg(long)]
    pub language: Option<String>,
    /// Due date for the generated payment link (ISO 8601)
    #[arg(long)]
    pub due_at: Option<String>,
}
