use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;

use crate::error::WebError;

/// Authenticated caller, attached to the request by [`require_auth`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    Organizer(i32),
    Participant(i32),
}

impl Principal {
    fn parse(role: &str, id: &str) -> Option<Self> {
        let id = id.trim().parse().ok()?;
        match role.trim() {
            "organizer" => Some(Self::Organizer(id)),
            "participant" => Some(Self::Participant(id)),
            _ => None,
        }
    }

    /// Id of the calling organizer, or 403 for any other principal
    pub fn organizer_id(&self) -> Result<i32, WebError> {
        match self {
            Self::Organizer(id) => Ok(*id),
            Self::Participant(_) => Err(WebError::Forbidden(
                "Only organizers may perform this action".to_string(),
            )),
        }
    }

    pub fn require_organizer(&self, organizer_id: i32) -> Result<(), WebError> {
        if *self == Self::Organizer(organizer_id) {
            Ok(())
        } else {
            Err(WebError::Forbidden("Access denied".to_string()))
        }
    }

    pub fn require_participant(&self, participant_id: i32) -> Result<(), WebError> {
        if *self == Self::Participant(participant_id) {
            Ok(())
        } else {
            Err(WebError::Forbidden("Access denied".to_string()))
        }
    }
}

#[derive(Clone, Default)]
pub struct ApiKeys {
    keys: HashMap<String, Principal>,
}

impl ApiKeys {
    /// Parse `<role>:<id>:<token>` entries separated by commas
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|entry| {
                let mut parts = entry.splitn(3, ':');
                let parsed = match (parts.next(), parts.next(), parts.next()) {
                    (Some(role), Some(id), Some(token)) if !token.trim().is_empty() => {
                        Principal::parse(role, id).map(|p| (token.trim().to_string(), p))
                    }
                    _ => None,
                };
                if parsed.is_none() {
                    tracing::warn!("Ignoring malformed API key entry");
                }
                parsed
            })
            .collect();

        Self { keys }
    }

    pub fn resolve(&self, key: &str) -> Option<Principal> {
        self.keys.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

pub async fn require_auth(
    State(api_keys): State<ApiKeys>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(WebError::Unauthorized)?;

    let Some(principal) = api_keys.resolve(token.trim()) else {
        tracing::warn!("Invalid API key attempt");
        return Err(WebError::Unauthorized);
    };

    req.extensions_mut().insert(principal);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entries() {
        let keys = ApiKeys::from_comma_separated(
            "organizer:1:org-secret, participant:7:part:secret ,bogus,admin:2:x,organizer:abc:y",
        );

        assert_eq!(keys.len(), 2);
        assert_eq!(keys.resolve("org-secret"), Some(Principal::Organizer(1)));
        assert_eq!(keys.resolve("part:secret"), Some(Principal::Participant(7)));
        assert_eq!(keys.resolve("x"), None);
    }

    #[test]
    fn test_empty_config_has_no_keys() {
        assert_eq!(ApiKeys::from_comma_separated("").len(), 0);
    }

    #[test]
    fn test_principal_checks() {
        let organizer = Principal::Organizer(3);
        assert_eq!(organizer.organizer_id().unwrap(), 3);
        assert!(organizer.require_organizer(3).is_ok());
        assert!(organizer.require_organizer(4).is_err());
        assert!(organizer.require_participant(3).is_err());

        let participant = Principal::Participant(3);
        assert!(participant.organizer_id().is_err());
        assert!(participant.require_participant(3).is_ok());
    }
}
