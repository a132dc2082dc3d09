use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotspotPlanRequest {
    pub name: String,
    pub price: f64,
    /// Session length with its unit, e.g. "1h" or "30d".
    pub duration: String,
    /// RouterOS rate limit pair, e.g. "2M/1M".
    pub speed: String,
    pub server: String,
    pub profile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}
