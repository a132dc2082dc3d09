//! Unverified JWT payload inspection.
//!
//! The console never validates signatures; it only reads claims the server
//! already vouched for, to decide when a token is worth refreshing and to
//! recover a user profile when a reply omits one.

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Deserialize;

use crate::api::auth::UserProfile;

#[derive(Debug, Deserialize, Default)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub upn: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub preferred_username: Option<String>,
    #[serde(default, rename = "ispId")]
    pub isp_id: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Decodes the payload segment of a JWT. Returns `None` for anything that is
/// not three dot-separated segments of base64url JSON.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| URL_SAFE.decode(payload))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

pub fn expires_at(token: &str) -> Option<DateTime<Utc>> {
    let exp = decode_claims(token)?.exp?;
    Utc.timestamp_opt(exp, 0).single()
}

/// A token without an `exp` claim is treated as non-expiring.
pub fn is_expired(token: &str, skew_seconds: i64) -> bool {
    match expires_at(token) {
        Some(expires_at) => Utc::now() + Duration::seconds(skew_seconds) >= expires_at,
        None => false,
    }
}

pub fn profile_from_token(token: &str) -> Option<UserProfile> {
    let claims = decode_claims(token)?;
    Some(UserProfile {
        id: claims.sub.or(claims.user_id).or(claims.uid),
        email: claims.email.or(claims.upn),
        display_name: claims.name.or(claims.preferred_username),
    })
}
