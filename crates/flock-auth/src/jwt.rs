use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use flock_core::models::respondent::ViewerTier;

use crate::error::AuthError;

/// Claims extracted from a Cognito JWT.
#[derive(Debug, Deserialize)]
pub struct CognitoClaims {
    pub sub: String,
    pub iss: String,
    pub token_use: String,
    pub exp: u64,
    pub iat: u64,
    #[serde(default)]
    pub email: Option<String>,
    /// Membership tier granted by the congregation's plan ("member" or
    /// "partner"); absent on freshly created accounts.
    #[serde(default, rename = "custom:tier")]
    pub tier: Option<String>,
}

impl CognitoClaims {
    /// Viewer tier for result rendering. An unknown or missing tier string
    /// degrades to `Member`: an authenticated caller never falls back to
    /// the anonymous view.
    pub fn viewer_tier(&self) -> ViewerTier {
        match self.tier.as_deref() {
            Some("partner") => ViewerTier::Partner,
            _ => ViewerTier::Member,
        }
    }
}

/// Validate a Cognito JWT token.
///
/// Takes a pre-fetched public key; the JWKS material is injected at deploy
/// time rather than fetched per request.
pub fn validate_token(
    token: &str,
    decoding_key: &DecodingKey,
    user_pool_id: &str,
    region: &str,
) -> Result<CognitoClaims, AuthError> {
    let issuer = format!("https://cognito-idp.{region}.amazonaws.com/{user_pool_id}");

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_issuer(&[&issuer]);
    validation.validate_exp = true;

    let claims = decode::<CognitoClaims>(token, decoding_key, &validation)?.claims;

    // Cognito issues both access and id tokens; either authenticates.
    if !matches!(claims.token_use.as_str(), "access" | "id") {
        return Err(AuthError::InvalidToken(format!(
            "unexpected token_use: {}",
            claims.token_use
        )));
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(tier: Option<&str>) -> CognitoClaims {
        CognitoClaims {
            sub: "user-123".to_string(),
            iss: "https://cognito-idp.us-east-1.amazonaws.com/us-east-1_test".to_string(),
            token_use: "id".to_string(),
            exp: 0,
            iat: 0,
            email: None,
            tier: tier.map(|t| t.to_string()),
        }
    }

    #[test]
    fn partner_tier_maps_to_partner() {
        assert_eq!(claims(Some("partner")).viewer_tier(), ViewerTier::Partner);
    }

    #[test]
    fn missing_or_unknown_tier_degrades_to_member() {
        assert_eq!(claims(None).viewer_tier(), ViewerTier::Member);
        assert_eq!(claims(Some("member")).viewer_tier(), ViewerTier::Member);
        assert_eq!(claims(Some("vip")).viewer_tier(), ViewerTier::Member);
    }
}
