use serde::{Deserialize, Serialize};

/// Normalized candidate profile — the input to resume assembly.
///
/// Only `name` is required. Every other field is `Option`/`Vec` and an absent
/// field suppresses its output entirely; the adapter never stores empty-string
/// sentinels, so composers branch on presence, not emptiness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
}

/// One education entry. `school` is required for the entry to exist at all —
/// the adapter drops entries without it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: Option<String>,
    pub year: Option<String>,
}

/// One experience entry. `company` is required; `bullets` keep the
/// caller-supplied order verbatim — no reordering, dedup, or truncation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: Option<String>,
    pub location: Option<String>,
    pub dates: Option<String>,
    pub bullets: Vec<String>,
}

/// Input for cover-letter assembly: the profile (header reuse) plus the
/// letter prose. Paragraph boundaries in `letter_body` are blank lines only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterInput {
    pub profile: Profile,
    pub letter_body: String,
}

/// The two document kinds the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    #[serde(alias = "coverLetter")]
    CoverLetter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_kind_deserializes_snake_case() {
        let kind: DocumentKind = serde_json::from_str("\"resume\"").unwrap();
        assert_eq!(kind, DocumentKind::Resume);
        let kind: DocumentKind = serde_json::from_str("\"cover_letter\"").unwrap();
        assert_eq!(kind, DocumentKind::CoverLetter);
    }

    #[test]
    fn test_document_kind_accepts_camel_case_alias() {
        let kind: DocumentKind = serde_json::from_str("\"coverLetter\"").unwrap();
        assert_eq!(kind, DocumentKind::CoverLetter);
    }
}
