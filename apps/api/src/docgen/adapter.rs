//! Document Model Adapter — normalizes loose caller/AI-supplied JSON into the
//! typed `Profile` / `LetterInput` model.
//!
//! Pure functions, no side effects. The policy throughout: an optional field
//! absent from input (or present as an empty/whitespace-only string) becomes
//! `None`, never an empty string, so composers branch on presence and can
//! never render a dangling separator. Sequence entries missing their required
//! field (school, company) are dropped — an entry that cannot render does not
//! exist in the normalized model.

use serde_json::{Map, Value};

use crate::docgen::DocError;
use crate::models::profile::{EducationEntry, ExperienceEntry, LetterInput, Profile};

/// Normalizes a raw mapping into a `Profile`.
///
/// Fails with `Validation { field: "name" }` when the one required field is
/// missing or empty; a non-mapping input fails naming `profile`.
pub fn normalize_profile(raw: &Value) -> Result<Profile, DocError> {
    let map = as_mapping(raw, "profile")?;

    Ok(Profile {
        name: required_text(map, "name")?,
        email: optional_text(map, "email"),
        phone: optional_text(map, "phone"),
        linkedin: optional_text(map, "linkedin"),
        education: education_entries(map),
        experience: experience_entries(map),
        skills: text_sequence(map.get("skills")),
    })
}

/// Normalizes a raw mapping into a `LetterInput`.
///
/// Accepts either a nested `profile` object or profile fields inlined at the
/// top level. The body key may arrive as `letter_body` or `letterBody`
/// (AI collaborators tend to emit the latter); missing/empty either way fails
/// with `Validation { field: "letter_body" }`.
pub fn normalize_letter(raw: &Value) -> Result<LetterInput, DocError> {
    let map = as_mapping(raw, "letter")?;

    let profile_value = map.get("profile").unwrap_or(raw);
    let profile = normalize_profile(profile_value)?;

    let letter_body = optional_text(map, "letter_body")
        .or_else(|| optional_text(map, "letterBody"))
        .ok_or_else(|| DocError::validation("letter_body"))?;

    Ok(LetterInput {
        profile,
        letter_body,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Field extraction
// ────────────────────────────────────────────────────────────────────────────

fn as_mapping<'a>(raw: &'a Value, field: &str) -> Result<&'a Map<String, Value>, DocError> {
    raw.as_object().ok_or_else(|| DocError::validation(field))
}

/// Scalar field as trimmed non-empty text. Numbers are accepted and rendered
/// as digits (AI output frequently carries `year: 2020` unquoted).
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn optional_text(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(scalar_text)
}

fn required_text(map: &Map<String, Value>, key: &str) -> Result<String, DocError> {
    optional_text(map, key).ok_or_else(|| DocError::validation(key))
}

/// A sequence of non-empty strings, input order preserved.
fn text_sequence(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(scalar_text).collect())
        .unwrap_or_default()
}

fn education_entries(map: &Map<String, Value>) -> Vec<EducationEntry> {
    sequence_of(map.get("education"), |entry| {
        Some(EducationEntry {
            school: optional_text(entry, "school")?,
            degree: optional_text(entry, "degree"),
            year: optional_text(entry, "year"),
        })
    })
}

fn experience_entries(map: &Map<String, Value>) -> Vec<ExperienceEntry> {
    sequence_of(map.get("experience"), |entry| {
        Some(ExperienceEntry {
            company: optional_text(entry, "company")?,
            role: optional_text(entry, "role"),
            location: optional_text(entry, "location"),
            dates: optional_text(entry, "dates"),
            bullets: text_sequence(entry.get("bullets")),
        })
    })
}

/// Maps each mapping element of an array through `f`, dropping non-mappings
/// and entries where `f` returns `None`. Order preserved.
fn sequence_of<T>(
    value: Option<&Value>,
    f: impl Fn(&Map<String, Value>) -> Option<T>,
) -> Vec<T> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .filter_map(|entry| f(entry))
                .collect()
        })
        .unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_name_fails_naming_the_field() {
        let err = normalize_profile(&json!({ "email": "a@b.com" })).unwrap_err();
        assert!(
            matches!(err, DocError::Validation { ref field } if field == "name"),
            "expected Validation for `name`, got {err:?}"
        );
    }

    #[test]
    fn test_empty_string_name_fails() {
        let err = normalize_profile(&json!({ "name": "   " })).unwrap_err();
        assert!(matches!(err, DocError::Validation { ref field } if field == "name"));
    }

    #[test]
    fn test_non_mapping_input_fails() {
        let err = normalize_profile(&json!("just a string")).unwrap_err();
        assert!(matches!(err, DocError::Validation { ref field } if field == "profile"));
    }

    #[test]
    fn test_empty_optional_fields_become_absent() {
        let profile = normalize_profile(&json!({
            "name": "Jane Doe",
            "email": "",
            "phone": "  ",
        }))
        .unwrap();
        assert_eq!(profile.email, None);
        assert_eq!(profile.phone, None);
        assert_eq!(profile.linkedin, None);
    }

    #[test]
    fn test_numeric_year_is_accepted() {
        let profile = normalize_profile(&json!({
            "name": "Jane Doe",
            "education": [{ "school": "MIT", "year": 2020 }],
        }))
        .unwrap();
        assert_eq!(profile.education[0].year.as_deref(), Some("2020"));
    }

    #[test]
    fn test_entries_without_required_field_are_dropped() {
        let profile = normalize_profile(&json!({
            "name": "Jane Doe",
            "education": [
                { "degree": "B.A." },
                { "school": "MIT" },
            ],
            "experience": [
                { "role": "Engineer" },
                { "company": "Tech Corp" },
            ],
        }))
        .unwrap();
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].school, "MIT");
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].company, "Tech Corp");
    }

    #[test]
    fn test_bullets_preserve_input_order() {
        let profile = normalize_profile(&json!({
            "name": "Jane Doe",
            "experience": [{
                "company": "Tech Corp",
                "bullets": ["third", "first", "second"],
            }],
        }))
        .unwrap();
        assert_eq!(
            profile.experience[0].bullets,
            vec!["third", "first", "second"]
        );
    }

    #[test]
    fn test_letter_requires_body() {
        let err = normalize_letter(&json!({ "name": "Jane Doe" })).unwrap_err();
        assert!(
            matches!(err, DocError::Validation { ref field } if field == "letter_body"),
            "expected Validation for `letter_body`, got {err:?}"
        );
    }

    #[test]
    fn test_letter_accepts_camel_case_body_key() {
        let letter = normalize_letter(&json!({
            "name": "Jane Doe",
            "letterBody": "Dear team,\n\nHello.",
        }))
        .unwrap();
        assert_eq!(letter.letter_body, "Dear team,\n\nHello.");
    }

    #[test]
    fn test_letter_with_nested_profile() {
        let letter = normalize_letter(&json!({
            "profile": { "name": "Jane Doe", "email": "jane@example.com" },
            "letter_body": "Hello.",
        }))
        .unwrap();
        assert_eq!(letter.profile.name, "Jane Doe");
        assert_eq!(letter.profile.email.as_deref(), Some("jane@example.com"));
    }
}
