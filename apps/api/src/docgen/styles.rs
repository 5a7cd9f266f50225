//! Named paragraph/run styles for the built-in document look.
//!
//! Styles are pure value objects registered once in a process-lifetime static
//! table. Composers request styles by name and never construct ad-hoc
//! formatting inline, so every visual decision lives here and the registry is
//! independently testable. An unregistered name is `UnknownStyle` — never a
//! silent default.

use crate::docgen::DocError;

// ────────────────────────────────────────────────────────────────────────────
// Style value objects
// ────────────────────────────────────────────────────────────────────────────

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

/// An immutable bundle of text and paragraph formatting.
///
/// `size_pt` and the spacing fields are points; the DOCX writer converts them
/// to half-points and twentieths of a point at serialization time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSpec {
    pub font_family: &'static str,
    pub size_pt: f32,
    pub bold: bool,
    pub italic: bool,
    pub alignment: Alignment,
    pub space_before_pt: f32,
    pub space_after_pt: f32,
}

const FONT: &str = "Times New Roman";

const fn base(size_pt: f32) -> StyleSpec {
    StyleSpec {
        font_family: FONT,
        size_pt,
        bold: false,
        italic: false,
        alignment: Alignment::Left,
        space_before_pt: 0.0,
        space_after_pt: 0.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────

/// Immutable name → `StyleSpec` table, populated at process start.
/// Reads are unsynchronized-safe because the table never mutates.
pub struct StyleRegistry {
    entries: &'static [(&'static str, StyleSpec)],
}

impl StyleRegistry {
    /// Resolves a style by name. Unknown names fail fast — a composer asking
    /// for a missing style is a registry gap, not a rendering choice.
    pub fn resolve(&self, name: &str) -> Result<&StyleSpec, DocError> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, spec)| spec)
            .ok_or_else(|| DocError::UnknownStyle(name.to_string()))
    }

    /// The built-in registry used by all production builds.
    pub fn builtin() -> &'static StyleRegistry {
        &BUILTIN
    }
}

static BUILTIN: StyleRegistry = StyleRegistry {
    entries: &[
        // Candidate name at the top of every document.
        (
            "name",
            StyleSpec {
                bold: true,
                alignment: Alignment::Center,
                ..base(16.0)
            },
        ),
        // Single contact line under the name.
        (
            "contact",
            StyleSpec {
                alignment: Alignment::Center,
                ..base(10.0)
            },
        ),
        // Upper-cased section heading (EDUCATION, EXPERIENCE, SKILLS).
        (
            "section-title",
            StyleSpec {
                bold: true,
                space_before_pt: 6.0,
                space_after_pt: 2.0,
                ..base(11.0)
            },
        ),
        // Thin horizontal rule under a section heading.
        (
            "section-rule",
            StyleSpec {
                space_after_pt: 2.0,
                ..base(2.0)
            },
        ),
        // First line of an education/experience entry (school, company).
        ("entry-primary", base(11.0)),
        // Second line of an entry (degree, role + dates).
        (
            "entry-secondary",
            StyleSpec {
                space_after_pt: 2.0,
                ..base(11.0)
            },
        ),
        // One bullet item under an experience entry.
        ("bullet", base(10.5)),
        // Skills paragraph and other plain body text.
        ("body", base(10.5)),
        // Date line of a cover letter.
        (
            "letter-date",
            StyleSpec {
                space_before_pt: 12.0,
                ..base(11.0)
            },
        ),
        // One paragraph of cover-letter prose.
        (
            "letter-body",
            StyleSpec {
                space_after_pt: 12.0,
                ..base(11.0)
            },
        ),
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_style() {
        let spec = StyleRegistry::builtin().resolve("name").unwrap();
        assert!(spec.bold);
        assert_eq!(spec.alignment, Alignment::Center);
        assert_eq!(spec.size_pt, 16.0);
    }

    #[test]
    fn test_resolve_unknown_style_fails() {
        let err = StyleRegistry::builtin().resolve("no-such-style").unwrap_err();
        assert!(
            matches!(err, DocError::UnknownStyle(ref name) if name == "no-such-style"),
            "expected UnknownStyle, got {err:?}"
        );
    }

    #[test]
    fn test_all_styles_share_font_family() {
        for (name, spec) in BUILTIN.entries {
            assert_eq!(
                spec.font_family, "Times New Roman",
                "style `{name}` uses an unexpected font"
            );
        }
    }

    #[test]
    fn test_section_title_spacing() {
        let spec = StyleRegistry::builtin().resolve("section-title").unwrap();
        assert_eq!(spec.space_before_pt, 6.0);
        assert_eq!(spec.space_after_pt, 2.0);
    }
}
