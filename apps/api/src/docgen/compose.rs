//! Section Composers — pure functions from the normalized model and the style
//! registry to ordered `LayoutNode` sequences.
//!
//! Composers own no document state: each returns an immutable node sequence
//! and the assembler concatenates them in plan order. A composer whose source
//! data is absent returns an empty sequence — never an empty titled section,
//! never placeholder text.

use chrono::NaiveDate;

use crate::docgen::styles::{StyleRegistry, StyleSpec};
use crate::docgen::DocError;
use crate::models::profile::{LetterInput, Profile};

// ────────────────────────────────────────────────────────────────────────────
// Layout nodes
// ────────────────────────────────────────────────────────────────────────────

/// A serializer-agnostic unit of document content.
#[derive(Debug, Clone)]
pub enum LayoutNode {
    Paragraph(Paragraph),
    BulletList(BulletList),
}

/// One paragraph: a run sequence plus the named style carrying its
/// paragraph-level format (alignment, spacing, base font).
#[derive(Debug, Clone)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub style: StyleSpec,
}

/// A contiguous bullet list; each item becomes its own list paragraph.
#[derive(Debug, Clone)]
pub struct BulletList {
    pub items: Vec<String>,
    pub item_style: StyleSpec,
}

/// A text run with optional emphasis overrides. `None` inherits the
/// paragraph style's setting.
#[derive(Debug, Clone)]
pub struct Run {
    pub text: String,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            bold: None,
            italic: None,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Run {
            bold: Some(true),
            ..Run::plain(text)
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Run {
            italic: Some(true),
            ..Run::plain(text)
        }
    }
}

fn paragraph(style: StyleSpec, runs: Vec<Run>) -> LayoutNode {
    LayoutNode::Paragraph(Paragraph { runs, style })
}

/// Width of the rule drawn under every section title, in underscore glyphs.
const RULE_WIDTH: usize = 90;
const CONTACT_SEPARATOR: &str = " | ";

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

/// Name (bold, large, centered) plus one contact line joining only the
/// present fields in fixed order phone → email → linkedin. With k present
/// fields the line carries exactly k-1 separators; with none, no contact
/// paragraph is emitted at all.
pub fn compose_header(
    profile: &Profile,
    styles: &StyleRegistry,
) -> Result<Vec<LayoutNode>, DocError> {
    let mut nodes = vec![paragraph(
        *styles.resolve("name")?,
        vec![Run::plain(&profile.name)],
    )];

    let contact: Vec<&str> = [&profile.phone, &profile.email, &profile.linkedin]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .collect();

    if !contact.is_empty() {
        nodes.push(paragraph(
            *styles.resolve("contact")?,
            vec![Run::plain(contact.join(CONTACT_SEPARATOR))],
        ));
    }

    Ok(nodes)
}

// ────────────────────────────────────────────────────────────────────────────
// Titled resume sections
// ────────────────────────────────────────────────────────────────────────────

/// Upper-cased section heading followed by a fixed-width rule. Shared by all
/// titled sections so headings cannot drift apart visually.
fn compose_section_title(
    title: &str,
    styles: &StyleRegistry,
) -> Result<Vec<LayoutNode>, DocError> {
    Ok(vec![
        paragraph(
            *styles.resolve("section-title")?,
            vec![Run::plain(title.to_uppercase())],
        ),
        paragraph(
            *styles.resolve("section-rule")?,
            vec![Run::plain("_".repeat(RULE_WIDTH))],
        ),
    ])
}

/// Per entry: school (bold) with optional ", {year}" on line one, degree
/// (italic) on line two when present. Entries keep input order — no sorting
/// by year. An empty education list omits the whole section, title included.
pub fn compose_education(
    profile: &Profile,
    styles: &StyleRegistry,
) -> Result<Vec<LayoutNode>, DocError> {
    if profile.education.is_empty() {
        return Ok(Vec::new());
    }

    let mut nodes = compose_section_title("Education", styles)?;
    for entry in &profile.education {
        let mut line = vec![Run::bold(&entry.school)];
        if let Some(year) = &entry.year {
            line.push(Run::plain(format!(", {year}")));
        }
        nodes.push(paragraph(*styles.resolve("entry-primary")?, line));

        if let Some(degree) = &entry.degree {
            nodes.push(paragraph(
                *styles.resolve("entry-secondary")?,
                vec![Run::italic(degree)],
            ));
        }
    }
    Ok(nodes)
}

/// Per entry: company (bold) with optional " — {location}", then role
/// (italic) with optional " ({dates})", then that entry's bullets in input
/// order. An entry with zero bullets still renders both header lines.
pub fn compose_experience(
    profile: &Profile,
    styles: &StyleRegistry,
) -> Result<Vec<LayoutNode>, DocError> {
    if profile.experience.is_empty() {
        return Ok(Vec::new());
    }

    let mut nodes = compose_section_title("Experience", styles)?;
    for entry in &profile.experience {
        let mut line = vec![Run::bold(&entry.company)];
        if let Some(location) = &entry.location {
            line.push(Run::plain(format!(" — {location}")));
        }
        nodes.push(paragraph(*styles.resolve("entry-primary")?, line));

        let mut subtitle = Vec::new();
        if let Some(role) = &entry.role {
            subtitle.push(Run::italic(role));
        }
        if let Some(dates) = &entry.dates {
            let text = if subtitle.is_empty() {
                format!("({dates})")
            } else {
                format!(" ({dates})")
            };
            subtitle.push(Run::plain(text));
        }
        if !subtitle.is_empty() {
            nodes.push(paragraph(*styles.resolve("entry-secondary")?, subtitle));
        }

        if !entry.bullets.is_empty() {
            nodes.push(LayoutNode::BulletList(BulletList {
                items: entry.bullets.clone(),
                item_style: *styles.resolve("bullet")?,
            }));
        }
    }
    Ok(nodes)
}

/// One paragraph joining all skills with ", ". Empty list omits the section.
pub fn compose_skills(
    profile: &Profile,
    styles: &StyleRegistry,
) -> Result<Vec<LayoutNode>, DocError> {
    if profile.skills.is_empty() {
        return Ok(Vec::new());
    }

    let mut nodes = compose_section_title("Skills", styles)?;
    nodes.push(paragraph(
        *styles.resolve("body")?,
        vec![Run::plain(profile.skills.join(", "))],
    ));
    Ok(nodes)
}

// ────────────────────────────────────────────────────────────────────────────
// Cover letter
// ────────────────────────────────────────────────────────────────────────────

/// The letter's date line. The date is an explicit input to the pipeline so
/// assembly stays a pure function of its arguments.
pub fn compose_letter_date(
    date: NaiveDate,
    styles: &StyleRegistry,
) -> Result<Vec<LayoutNode>, DocError> {
    Ok(vec![paragraph(
        *styles.resolve("letter-date")?,
        vec![Run::plain(date.format("%B %d, %Y").to_string())],
    )])
}

/// Splits the letter body into paragraphs on blank-line boundaries only —
/// no other splitting heuristic, no reflow, no word-wrap (wrapping belongs
/// to the viewer). Paragraph order is preserved.
pub fn compose_letter_body(
    letter: &LetterInput,
    styles: &StyleRegistry,
) -> Result<Vec<LayoutNode>, DocError> {
    let style = *styles.resolve("letter-body")?;
    Ok(letter
        .letter_body
        .split("\n\n")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| paragraph(style, vec![Run::plain(segment)]))
        .collect())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
