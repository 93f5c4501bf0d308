use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// The identity a response set is keyed by.
///
/// Anonymous respondents carry a client-generated session id until the
/// email gate captures an address or sign-in upgrades them to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "kind")]
#[ts(export)]
pub enum RespondentId {
    Anonymous { session: Uuid },
    Email { email: String },
    Account { account_id: Uuid },
}

impl RespondentId {
    pub fn email(email: &str) -> Self {
        RespondentId::Email {
            email: normalize_email(email),
        }
    }

    /// Stable path segment keying this respondent's objects in S3.
    pub fn storage_key(&self) -> String {
        match self {
            RespondentId::Anonymous { session } => format!("anon/{session}"),
            RespondentId::Email { email } => format!("email/{}", normalize_email(email)),
            RespondentId::Account { account_id } => format!("account/{account_id}"),
        }
    }

    /// Compact form carried in query strings: `anon:<uuid>`,
    /// `email:<address>`, or `account:<uuid>`.
    pub fn to_token(&self) -> String {
        match self {
            RespondentId::Anonymous { session } => format!("anon:{session}"),
            RespondentId::Email { email } => format!("email:{}", normalize_email(email)),
            RespondentId::Account { account_id } => format!("account:{account_id}"),
        }
    }

    pub fn parse_token(token: &str) -> Result<Self, CoreError> {
        let (kind, rest) = token
            .split_once(':')
            .ok_or_else(|| CoreError::InvalidRespondentToken(token.to_string()))?;
        match kind {
            "anon" => Ok(RespondentId::Anonymous {
                session: Uuid::parse_str(rest)?,
            }),
            "email" => {
                if !rest.contains('@') {
                    return Err(CoreError::InvalidRespondentToken(token.to_string()));
                }
                Ok(RespondentId::email(rest))
            }
            "account" => Ok(RespondentId::Account {
                account_id: Uuid::parse_str(rest)?,
            }),
            _ => Err(CoreError::InvalidRespondentToken(token.to_string())),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, RespondentId::Anonymous { .. })
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Access level of whoever is viewing a result. Controls how much
/// narrative detail the renderer reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ViewerTier {
    Anonymous,
    Member,
    Partner,
}

impl ViewerTier {
    pub fn is_authenticated(self) -> bool {
        !matches!(self, ViewerTier::Anonymous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        let ids = [
            RespondentId::Anonymous {
                session: Uuid::new_v4(),
            },
            RespondentId::email("Pat@Example.ORG "),
            RespondentId::Account {
                account_id: Uuid::new_v4(),
            },
        ];
        for id in ids {
            let token = id.to_token();
            assert_eq!(RespondentId::parse_token(&token).unwrap(), id);
        }
    }

    #[test]
    fn email_is_normalized() {
        let id = RespondentId::email("  Sam@Church.Org");
        assert_eq!(id.to_token(), "email:sam@church.org");
        assert_eq!(id.storage_key(), "email/sam@church.org");
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(RespondentId::parse_token("no-separator").is_err());
        assert!(RespondentId::parse_token("anon:not-a-uuid").is_err());
        assert!(RespondentId::parse_token("email:missing-at-sign").is_err());
        assert!(RespondentId::parse_token("robot:123").is_err());
    }
}
