//! Document Assembler — folds composer output into the final DOCX bytes.
//!
//! The assembler owns global document state (margins, section order from the
//! plan) and nothing else: composers return immutable node sequences and the
//! assembler concatenates them in plan order, then serializes. Output is a
//! byte-stable function of (plan, model, style registry, letter date) — no
//! embedded timestamps beyond the explicit letter date, no random ids.

use std::io::Write as _;
use std::path::Path;

use chrono::NaiveDate;

use crate::docgen::compose::{
    compose_education, compose_experience, compose_header, compose_letter_body,
    compose_letter_date, compose_skills, LayoutNode,
};
use crate::docgen::docx::render_document;
use crate::docgen::styles::StyleRegistry;
use crate::docgen::template::{LayoutPlan, SectionId};
use crate::docgen::DocError;
use crate::models::profile::{LetterInput, Profile};

/// The normalized model a build operates on, one variant per document kind.
#[derive(Debug, Clone)]
pub enum DocumentModel {
    Resume(Profile),
    Letter(LetterInput),
}

impl DocumentModel {
    pub fn profile(&self) -> &Profile {
        match self {
            DocumentModel::Resume(profile) => profile,
            DocumentModel::Letter(letter) => &letter.profile,
        }
    }
}

/// Builds the complete DOCX byte buffer for one document.
///
/// `letter_date` is the date rendered on cover letters; it is an explicit
/// argument (not read from the clock here) so the whole pipeline stays a
/// pure function of its inputs.
pub fn assemble(
    plan: &LayoutPlan,
    model: &DocumentModel,
    styles: &StyleRegistry,
    letter_date: NaiveDate,
) -> Result<Vec<u8>, DocError> {
    let mut nodes: Vec<LayoutNode> = Vec::new();

    for section in plan.sections {
        let composed = match section {
            SectionId::Header => compose_header(model.profile(), styles)?,
            SectionId::Education => compose_education(model.profile(), styles)?,
            SectionId::Experience => compose_experience(model.profile(), styles)?,
            SectionId::Skills => compose_skills(model.profile(), styles)?,
            SectionId::Date => compose_letter_date(letter_date, styles)?,
            SectionId::Body => match model {
                DocumentModel::Letter(letter) => compose_letter_body(letter, styles)?,
                // A resume plan never names Body; an empty sequence keeps the
                // fold total without inventing content.
                DocumentModel::Resume(_) => Vec::new(),
            },
        };
        nodes.extend(composed);
    }

    render_document(&plan.margins, &nodes)
}

/// Persists assembled bytes to `path`: they land in a scratch file in the
/// destination directory first, then move into place atomically. A failed
/// write never leaves a partial document behind.
pub fn persist_document(bytes: &[u8], path: &Path) -> Result<(), DocError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut scratch = tempfile::NamedTempFile::new_in(dir).map_err(DocError::build)?;
    scratch.write_all(bytes).map_err(DocError::build)?;
    scratch.persist(path).map_err(DocError::build)?;
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docgen::template;
    use crate::models::profile::{DocumentKind, EducationEntry};
    use std::io::Read as _;

    fn jane_doe() -> Profile {
        Profile {
            name: "Jane Doe".to_string(),
            email: Some("jane@example.com".to_string()),
            phone: None,
            linkedin: None,
            education: vec![EducationEntry {
                school: "MIT".to_string(),
                degree: None,
                year: Some("2020".to_string()),
            }],
            experience: vec![],
            skills: vec!["Python".to_string()],
        }
    }

    fn build_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn extract_document_xml(bytes: &[u8]) -> String {
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut part = archive.by_name("word/document.xml").unwrap();
        let mut xml = String::new();
        part.read_to_string(&mut xml).unwrap();
        xml
    }

    fn build_resume(profile: Profile) -> String {
        let plan = template::resolve("harvard", DocumentKind::Resume).unwrap();
        let bytes = assemble(
            plan,
            &DocumentModel::Resume(profile),
            StyleRegistry::builtin(),
            build_date(),
        )
        .unwrap();
        extract_document_xml(&bytes)
    }

    #[test]
    fn test_end_to_end_harvard_resume() {
        let xml = build_resume(jane_doe());

        // Centered bold name.
        assert!(xml.contains("Jane Doe"));
        assert!(xml.contains(r#"<w:jc w:val="center"/>"#));
        // Contact line with a single field carries no separator.
        assert!(xml.contains("jane@example.com"));
        assert!(!xml.contains(" | "));
        // Education renders; empty experience leaves no trace.
        assert!(xml.contains("EDUCATION"));
        assert!(xml.contains("MIT, 2020"));
        assert!(!xml.contains("EXPERIENCE"));
        // Skills paragraph.
        assert!(xml.contains("SKILLS"));
        assert!(xml.contains("Python"));
    }

    #[test]
    fn test_empty_skills_renders_no_skills_title() {
        let mut profile = jane_doe();
        profile.skills.clear();
        let xml = build_resume(profile);
        assert!(!xml.contains("SKILLS"));
    }

    #[test]
    fn test_repeated_builds_are_byte_identical() {
        let plan = template::resolve("harvard", DocumentKind::Resume).unwrap();
        let model = DocumentModel::Resume(jane_doe());
        let first = assemble(plan, &model, StyleRegistry::builtin(), build_date()).unwrap();
        let second = assemble(plan, &model, StyleRegistry::builtin(), build_date()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cover_letter_renders_date_and_paragraphs() {
        let plan = template::resolve("harvard", DocumentKind::CoverLetter).unwrap();
        let model = DocumentModel::Letter(LetterInput {
            profile: jane_doe(),
            letter_body: "Para one.\n\nPara two.".to_string(),
        });
        let bytes = assemble(plan, &model, StyleRegistry::builtin(), build_date()).unwrap();
        let xml = extract_document_xml(&bytes);

        assert!(xml.contains("March 01, 2025"));
        assert!(xml.contains("Para one."));
        assert!(xml.contains("Para two."));
        // The date precedes the body, which keeps paragraph order.
        let date_at = xml.find("March 01, 2025").unwrap();
        let one_at = xml.find("Para one.").unwrap();
        let two_at = xml.find("Para two.").unwrap();
        assert!(date_at < one_at && one_at < two_at);
        // Letter plan applies 1.0" margins.
        assert!(xml.contains(r#"w:top="1440""#));
    }

    #[test]
    fn test_persist_document_writes_complete_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        let plan = template::resolve("harvard", DocumentKind::Resume).unwrap();
        let bytes = assemble(
            plan,
            &DocumentModel::Resume(jane_doe()),
            StyleRegistry::builtin(),
            build_date(),
        )
        .unwrap();
        persist_document(&bytes, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, bytes);
        assert!(extract_document_xml(&written).contains("Jane Doe"));
    }
}
