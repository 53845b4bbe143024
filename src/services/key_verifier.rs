//! API key verification - the decision behind the route gate.
//!
//! Verification is a pure comparison between the key a caller supplied
//! and the single key the server was configured with. Every outcome is a
//! value; nothing here returns an error.

use crate::config::Config;

/// Outcome of comparing a supplied key against the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    /// Supplied key matches the configured key
    Ok,

    /// No key was supplied (or it was empty)
    Missing,

    /// A key was supplied but does not match
    Invalid,
}

impl KeyStatus {
    /// Human-readable status string returned to callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyStatus::Ok => "ok",
            KeyStatus::Missing => "missing key",
            KeyStatus::Invalid => "invalid key",
        }
    }
}

impl std::fmt::Display for KeyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single verification: a validity flag plus its status.
///
/// Only [`ApiKeyVerifier::verify`] builds these, so `valid` is always
/// true exactly when the status is [`KeyStatus::Ok`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    valid: bool,
    status: KeyStatus,
}

impl Verification {
    fn from_status(status: KeyStatus) -> Self {
        Self {
            valid: status == KeyStatus::Ok,
            status,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn status(&self) -> KeyStatus {
        self.status
    }

    /// Turn this verification into what the gate should do with the request.
    pub fn decision(&self) -> GateDecision {
        if self.is_valid() {
            GateDecision::Allow
        } else {
            GateDecision::Reject(self.status())
        }
    }
}

/// What the route gate does with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Pass the request on to its handler
    Allow,

    /// Stop the request and answer with the given reason
    Reject(KeyStatus),
}

/// Compares caller-supplied keys against the configured key.
#[derive(Clone)]
pub struct ApiKeyVerifier {
    expected: String,
}

impl ApiKeyVerifier {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone())
    }

    /// Verify a supplied key.
    ///
    /// # Outcomes
    ///
    /// - `None` or `Some("")` → invalid, `missing key`
    /// - key differs from the configured one → invalid, `invalid key`
    /// - key matches → valid, `ok`
    pub fn verify(&self, supplied: Option<&str>) -> Verification {
        let status = match supplied {
            None | Some("") => KeyStatus::Missing,
            Some(key) if key == self.expected => KeyStatus::Ok,
            Some(_) => KeyStatus::Invalid,
        };

        Verification::from_status(status)
    }
}

impl std::fmt::Debug for ApiKeyVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyVerifier").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> ApiKeyVerifier {
        ApiKeyVerifier::new("secret")
    }

    #[test]
    fn absent_key_is_missing() {
        let result = verifier().verify(None);

        assert!(!result.is_valid());
        assert_eq!(result.status(), KeyStatus::Missing);
        assert_eq!(result.status().as_str(), "missing key");
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let result = verifier().verify(Some(""));
        assert_eq!(result.status(), KeyStatus::Missing);
    }

    #[test]
    fn wrong_key_is_invalid() {
        let result = verifier().verify(Some("wrong"));

        assert!(!result.is_valid());
        assert_eq!(result.status().to_string(), "invalid key");
    }

    #[test]
    fn comparison_is_exact() {
        let v = verifier();
        assert!(!v.verify(Some("Secret")).is_valid());
        assert!(!v.verify(Some("secret ")).is_valid());
        assert!(!v.verify(Some("secre")).is_valid());
    }

    #[test]
    fn matching_key_is_ok() {
        let result = verifier().verify(Some("secret"));

        assert!(result.is_valid());
        assert_eq!(result.status().as_str(), "ok");
    }

    #[test]
    fn verification_is_idempotent() {
        let v = verifier();
        for key in [None, Some(""), Some("wrong"), Some("secret")] {
            assert_eq!(v.verify(key), v.verify(key));
        }
    }

    #[test]
    fn decision_follows_validity() {
        let v = verifier();
        assert_eq!(v.verify(Some("secret")).decision(), GateDecision::Allow);
        assert_eq!(
            v.verify(None).decision(),
            GateDecision::Reject(KeyStatus::Missing)
        );
        assert_eq!(
            v.verify(Some("wrong")).decision(),
            GateDecision::Reject(KeyStatus::Invalid)
        );
    }

    #[test]
    fn empty_configured_key_admits_nobody() {
        let v = ApiKeyVerifier::new("");
        assert_eq!(v.verify(Some("")).status(), KeyStatus::Missing);
        assert_eq!(v.verify(Some("anything")).status(), KeyStatus::Invalid);
    }

    #[test]
    fn debug_output_hides_expected_key() {
        let rendered = format!("{:?}", verifier());
        assert!(!rendered.contains("secret"));
    }
}
