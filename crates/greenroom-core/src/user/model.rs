//! User provisioning models.
//!
//! An identity provider emits an [`IdentityRecord`] when an account is
//! created. Provisioning derives a [`UserProfile`] from it: each field takes
//! the primary value, falls back to the first linked provider's value, and
//! lands on an empty string when both are absent. Field names keep their
//! original wire form (`displayName`, `photoURL`).

use serde::{Deserialize, Serialize};

/// A linked provider entry inside an identity record (e.g. a Google or
/// GitHub account tied to the user).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRecord {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
}

/// The account-creation payload from the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub provider_data: Vec<ProviderRecord>,
}

impl IdentityRecord {
    /// Resolves the stable user identifier: the primary uid, falling back to
    /// the first linked provider's uid. Empty when neither is present.
    pub fn user_id(&self) -> String {
        if !self.uid.is_empty() {
            return self.uid.clone();
        }
        self.provider_data
            .first()
            .map(|p| p.uid.clone())
            .unwrap_or_default()
    }

    /// Derives the profile to store, applying the per-field fallback chain.
    /// Never fails; missing values become empty strings.
    pub fn derive_profile(&self) -> UserProfile {
        let first = self.provider_data.first();
        UserProfile {
            email: pick(&self.email, first.and_then(|p| p.email.as_ref())),
            display_name: pick(&self.display_name, first.and_then(|p| p.display_name.as_ref())),
            photo_url: pick(&self.photo_url, first.and_then(|p| p.photo_url.as_ref())),
        }
    }
}

/// Primary value if present and non-empty, else the fallback, else "".
fn pick(primary: &Option<String>, fallback: Option<&String>) -> String {
    primary
        .as_deref()
        .filter(|v| !v.is_empty())
        .or(fallback.map(String::as_str).filter(|v| !v.is_empty()))
        .unwrap_or_default()
        .to_string()
}

/// The document stored in the `users` collection, keyed by user identifier.
///
/// All fields are concrete strings so consumers never see null or missing
/// values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    pub display_name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_fields_win() {
        let record = IdentityRecord {
            uid: "u1".into(),
            email: Some("a@x.com".into()),
            display_name: Some("Ada".into()),
            photo_url: Some("https://x.com/a.png".into()),
            provider_data: vec![ProviderRecord {
                uid: "g1".into(),
                email: Some("g@x.com".into()),
                display_name: Some("G".into()),
                photo_url: None,
            }],
        };

        assert_eq!(record.user_id(), "u1");
        let profile = record.derive_profile();
        assert_eq!(profile.email, "a@x.com");
        assert_eq!(profile.display_name, "Ada");
        assert_eq!(profile.photo_url, "https://x.com/a.png");
    }

    #[test]
    fn test_provider_fallback_per_field() {
        let record = IdentityRecord {
            uid: String::new(),
            email: None,
            display_name: Some("Ada".into()),
            photo_url: None,
            provider_data: vec![ProviderRecord {
                uid: "g1".into(),
                email: Some("g@x.com".into()),
                display_name: Some("G".into()),
                photo_url: Some("https://g.com/a.png".into()),
            }],
        };

        assert_eq!(record.user_id(), "g1");
        let profile = record.derive_profile();
        assert_eq!(profile.email, "g@x.com");
        // Primary displayName present, so the provider value is ignored.
        assert_eq!(profile.display_name, "Ada");
        assert_eq!(profile.photo_url, "https://g.com/a.png");
    }

    #[test]
    fn test_missing_everywhere_becomes_empty_strings() {
        let record = IdentityRecord {
            uid: "u1".into(),
            email: Some("a@x.com".into()),
            ..Default::default()
        };

        let profile = record.derive_profile();
        assert_eq!(profile.display_name, "");
        assert_eq!(profile.photo_url, "");

        // Stored document carries empty strings, not nulls.
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["displayName"], "");
        assert_eq!(value["photoURL"], "");
    }

    #[test]
    fn test_empty_string_primary_falls_through() {
        let record = IdentityRecord {
            uid: "u1".into(),
            email: Some(String::new()),
            provider_data: vec![ProviderRecord {
                email: Some("g@x.com".into()),
                ..Default::default()
            }],
            ..Default::default()
        };

        assert_eq!(record.derive_profile().email, "g@x.com");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let record = IdentityRecord {
            uid: "u1".into(),
            email: Some("a@x.com".into()),
            ..Default::default()
        };

        assert_eq!(record.derive_profile(), record.derive_profile());
    }
}
