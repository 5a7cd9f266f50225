//! Template Selector — resolves `(template_id, document_kind)` to a
//! `LayoutPlan`: the ordered sections to render and the margin set to apply.
//!
//! Section ordering is data, not control flow. Adding a template means
//! registering another plan here — composers never branch on template id.
//! An unknown id always fails with `UnknownTemplate`; there is no silent
//! fallback, for any id.

use crate::docgen::DocError;
use crate::models::profile::DocumentKind;

/// Default template applied when a build request names none.
pub const DEFAULT_TEMPLATE: &str = "harvard";

/// Identifies one logical document block for the assembler to dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Header,
    Education,
    Experience,
    Skills,
    Date,
    Body,
}

/// Page margins in inches, uniform on all four sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top_in: f32,
    pub bottom_in: f32,
    pub left_in: f32,
    pub right_in: f32,
}

impl Margins {
    pub const fn uniform(inches: f32) -> Self {
        Margins {
            top_in: inches,
            bottom_in: inches,
            left_in: inches,
            right_in: inches,
        }
    }
}

/// A resolved rendering plan: which sections, in which order, inside which
/// margins. Plans are immutable statics, safe for concurrent reads.
#[derive(Debug)]
pub struct LayoutPlan {
    pub template_id: &'static str,
    pub kind: DocumentKind,
    pub sections: &'static [SectionId],
    pub margins: Margins,
}

static PLANS: &[LayoutPlan] = &[
    // Harvard: education-first resume on tight half-inch margins.
    LayoutPlan {
        template_id: "harvard",
        kind: DocumentKind::Resume,
        sections: &[
            SectionId::Header,
            SectionId::Education,
            SectionId::Experience,
            SectionId::Skills,
        ],
        margins: Margins::uniform(0.5),
    },
    LayoutPlan {
        template_id: "harvard",
        kind: DocumentKind::CoverLetter,
        sections: &[SectionId::Header, SectionId::Date, SectionId::Body],
        margins: Margins::uniform(1.0),
    },
    // Professional: same blocks, experience-first.
    LayoutPlan {
        template_id: "professional",
        kind: DocumentKind::Resume,
        sections: &[
            SectionId::Header,
            SectionId::Experience,
            SectionId::Education,
            SectionId::Skills,
        ],
        margins: Margins::uniform(0.5),
    },
    LayoutPlan {
        template_id: "professional",
        kind: DocumentKind::CoverLetter,
        sections: &[SectionId::Header, SectionId::Date, SectionId::Body],
        margins: Margins::uniform(1.0),
    },
];

/// Resolves a template id and document kind to its registered plan.
pub fn resolve(template_id: &str, kind: DocumentKind) -> Result<&'static LayoutPlan, DocError> {
    PLANS
        .iter()
        .find(|plan| plan.template_id == template_id && plan.kind == kind)
        .ok_or_else(|| DocError::UnknownTemplate(template_id.to_string()))
}
