//! Certification model - credentials earned by the user.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::error::{optional, required, CoreError, Result};
use crate::id::{CertificationId, SkillId};
use crate::skill::Skill;
use crate::Time;

/// An earned certification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    /// Unique identifier
    pub id: CertificationId,

    /// Certification name
    pub name: String,

    /// Issuer
    pub issuing_organization: String,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Skills this certification covers
    #[serde(default)]
    pub skills: Vec<SkillRef>,

    /// Date issued
    pub issue_date: NaiveDate,

    /// Date it lapses, if ever
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,

    /// Issuer's credential identifier
    #[serde(default)]
    pub credential_id: Option<String>,

    /// Verification link
    #[serde(default)]
    pub credential_url: Option<String>,

    /// When created
    pub created_at: Time,

    /// Last updated
    pub updated_at: Time,
}

impl Certification {
    /// Whether the certification lapsed before `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiration_date.is_some_and(|date| date < today)
    }
}

/// A covered skill: nested on reads, a bare id in write responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillRef {
    /// Primary key only
    Id(SkillId),
    /// Full skill record
    Skill(Box<Skill>),
}

impl SkillRef {
    /// Id of the referenced skill.
    pub fn id(&self) -> SkillId {
        match self {
            Self::Id(id) => *id,
            Self::Skill(skill) => skill.id,
        }
    }

    /// Name, when the full record was sent.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Skill(skill) => Some(&skill.name),
        }
    }
}

/// Payload for creating or updating a certification.
///
/// Optional text fields are trimmed and left out of the payload when blank,
/// since the backend rejects empty strings for URL fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificationDraft {
    /// Certification name
    pub name: String,

    /// Issuer
    pub issuing_organization: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Covered skills, by id
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<SkillId>,

    /// Date issued
    pub issue_date: Option<NaiveDate>,

    /// Expiration date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,

    /// Credential identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,

    /// Credential URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
}

impl CertificationDraft {
    /// Pre-fill from an existing certification.
    pub fn from_certification(cert: &Certification) -> Self {
        Self {
            name: cert.name.clone(),
            issuing_organization: cert.issuing_organization.clone(),
            description: cert.description.clone(),
            skills: cert.skills.iter().map(SkillRef::id).collect(),
            issue_date: Some(cert.issue_date),
            expiration_date: cert.expiration_date,
            credential_id: cert.credential_id.clone(),
            credential_url: cert.credential_url.clone(),
        }
    }

    /// Validate and normalize.
    pub fn validate(&self) -> Result<Self> {
        let name = required("name", &self.name)?;
        let issuing_organization = required("issuing_organization", &self.issuing_organization)?;
        let issue_date = self
            .issue_date
            .ok_or_else(|| CoreError::validation("issue_date", "This field is required."))?;

        if let Some(expires) = self.expiration_date {
            if expires < issue_date {
                return Err(CoreError::validation(
                    "expiration_date",
                    "Expiration date cannot be before the issue date.",
                ));
            }
        }

        let mut skills = self.skills.clone();
        skills.sort();
        skills.dedup();

        Ok(Self {
            name,
            issuing_organization,
            description: optional(self.description.as_deref()),
            skills,
            issue_date: Some(issue_date),
            expiration_date: self.expiration_date,
            credential_id: optional(self.credential_id.as_deref()),
            credential_url: optional(self.credential_url.as_deref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_blank_optionals_are_omitted() {
        let draft = CertificationDraft {
            name: " AWS SAA ".into(),
            issuing_organization: "Amazon".into(),
            description: Some("  ".into()),
            credential_url: Some("".into()),
            issue_date: Some(date(2024, 3, 1)),
            ..Default::default()
        };
        let clean = draft.validate().unwrap();
        let json = serde_json::to_value(&clean).unwrap();
        assert_eq!(json["name"], "AWS SAA");
        assert!(json.get("description").is_none());
        assert!(json.get("credential_url").is_none());
        assert!(json.get("skills").is_none());
        assert_eq!(json["issue_date"], "2024-03-01");
    }

    #[test]
    fn test_requires_issue_date_and_ordering() {
        let mut draft = CertificationDraft {
            name: "CKA".into(),
            issuing_organization: "CNCF".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap_err().field(), "issue_date");

        draft.issue_date = Some(date(2024, 5, 1));
        draft.expiration_date = Some(date(2024, 4, 1));
        assert_eq!(draft.validate().unwrap_err().field(), "expiration_date");
    }

    #[test]
    fn test_is_expired() {
        let json = r#"{
            "id": 2, "name": "CKA", "issuing_organization": "CNCF", "skills": [],
            "issue_date": "2021-01-01", "expiration_date": "2024-01-01",
            "created_at": "2021-01-01T00:00:00Z", "updated_at": "2021-01-01T00:00:00Z"
        }"#;
        let cert: Certification = serde_json::from_str(json).unwrap();
        assert!(!cert.is_expired(date(2024, 1, 1)));
        assert!(cert.is_expired(date(2024, 1, 2)));
    }

    #[test]
    fn test_skills_as_ids_or_records() {
        let json = r#"{
            "id": 2, "name": "CKA", "issuing_organization": "CNCF",
            "skills": [4, {"id": 5, "name": "Kubernetes", "target_hours": "0.00",
                           "difficulty_level": "Advanced",
                           "created_at": "2021-01-01T00:00:00Z", "updated_at": "2021-01-01T00:00:00Z"}],
            "issue_date": "2021-01-01",
            "created_at": "2021-01-01T00:00:00Z", "updated_at": "2021-01-01T00:00:00Z"
        }"#;
        let cert: Certification = serde_json::from_str(json).unwrap();
        assert_eq!(cert.skills[0].id(), SkillId::new(4));
        assert_eq!(cert.skills[1].name(), Some("Kubernetes"));
        let draft = CertificationDraft::from_certification(&cert);
        assert_eq!(draft.skills, vec![SkillId::new(4), SkillId::new(5)]);
    }
}
