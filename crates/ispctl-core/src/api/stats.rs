use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(default)]
    pub total_customers: Option<i64>,
    #[serde(default)]
    pub total_plans: Option<i64>,
    #[serde(default)]
    pub pending_invoices: Option<i64>,
}
