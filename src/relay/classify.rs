//! Buckets upstream failures into the relay's error kinds.
//!
//! The upstream gateway exposes no stable error codes, so classification is a
//! case-sensitive substring search over the error message. Rules are checked
//! top to bottom and the first hit wins: credential problems outrank quota
//! problems, which outrank model availability.

use crate::error::RelayError;
use crate::providers::openrouter::UpstreamFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    AuthenticationFailed,
    TokenLimitExceeded,
    ModelUnavailable,
}

#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub marker: &'static str,
    pub kind: FailureKind,
}

const fn rule(marker: &'static str, kind: FailureKind) -> ClassificationRule {
    ClassificationRule { marker, kind }
}

pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    rule("JWT", FailureKind::AuthenticationFailed),
    rule("token-invalid", FailureKind::AuthenticationFailed),
    rule("No auth credentials", FailureKind::AuthenticationFailed),
    rule("credits", FailureKind::TokenLimitExceeded),
    rule("max_tokens", FailureKind::TokenLimitExceeded),
    rule("model", FailureKind::ModelUnavailable),
];

pub fn match_rule(message: &str) -> Option<FailureKind> {
    CLASSIFICATION_RULES
        .iter()
        .find(|r| message.contains(r.marker))
        .map(|r| r.kind)
}

pub fn classify_upstream_message(message: &str) -> RelayError {
    let message = message.to_string();
    match match_rule(&message) {
        Some(FailureKind::AuthenticationFailed) => RelayError::AuthenticationFailed(message),
        Some(FailureKind::TokenLimitExceeded) => RelayError::TokenLimitExceeded(message),
        Some(FailureKind::ModelUnavailable) => RelayError::ModelUnavailable(message),
        None => RelayError::UpstreamGeneric(message),
    }
}

pub fn classify_failure(failure: UpstreamFailure) -> RelayError {
    match failure {
        UpstreamFailure::Api { message, .. } => classify_upstream_message(&message),
        UpstreamFailure::Transport(detail) => RelayError::NetworkOrUnknown(detail),
        UpstreamFailure::Malformed(_) => RelayError::InvalidUpstreamResponse,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_markers() {
        for msg in [
            "JWT expired",
            "token-invalid: key revoked",
            "No auth credentials found",
        ] {
            assert!(
                matches!(classify_upstream_message(msg), RelayError::AuthenticationFailed(_)),
                "{msg}"
            );
        }
    }

    #[test]
    fn quota_markers() {
        for msg in [
            "Insufficient credits. Add more at https://openrouter.ai/credits",
            "max_tokens is too large for this request",
        ] {
            assert!(
                matches!(classify_upstream_message(msg), RelayError::TokenLimitExceeded(_)),
                "{msg}"
            );
        }
    }

    #[test]
    fn model_marker() {
        assert_eq!(
            classify_upstream_message("The model is overloaded"),
            RelayError::ModelUnavailable("The model is overloaded".into())
        );
    }

    #[test]
    fn auth_outranks_quota_and_model() {
        let msg = "JWT rejected while checking credits for this model";
        assert_eq!(
            classify_upstream_message(msg),
            RelayError::AuthenticationFailed(msg.into())
        );
    }

    #[test]
    fn quota_outranks_model() {
        let msg = "max_tokens exceeds the model context";
        assert!(matches!(
            classify_upstream_message(msg),
            RelayError::TokenLimitExceeded(_)
        ));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(matches!(
            classify_upstream_message("jwt expired"),
            RelayError::UpstreamGeneric(_)
        ));
        assert!(matches!(
            classify_upstream_message("Model busy"),
            RelayError::UpstreamGeneric(_)
        ));
    }

    #[test]
    fn unmatched_message_is_carried_verbatim() {
        assert_eq!(
            classify_upstream_message("Rate limit exceeded"),
            RelayError::UpstreamGeneric("Rate limit exceeded".into())
        );
    }

    #[test]
    fn failures_without_payload() {
        assert!(matches!(
            classify_failure(UpstreamFailure::Transport("connection refused".into())),
            RelayError::NetworkOrUnknown(_)
        ));
        assert_eq!(
            classify_failure(UpstreamFailure::Malformed("eof".into())),
            RelayError::InvalidUpstreamResponse
        );
        assert!(matches!(
            classify_failure(UpstreamFailure::Api {
                status: 401,
                message: "No auth credentials found".into()
            }),
            RelayError::AuthenticationFailed(_)
        ));
    }
}
