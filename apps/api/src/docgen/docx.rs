//! DOCX serialization: WordprocessingML parts assembled as strings, packaged
//! into the OPC zip container.
//!
//! Reproducibility contract: the output bytes are a pure function of the
//! layout nodes and margins. Zip entries carry a fixed timestamp, part order
//! is fixed, and every numeric attribute is integer (half-points for font
//! sizes, twentieths of a point for spacing, twips for margins).

use std::fmt::Write as _;
use std::io::Write as _;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::docgen::compose::{BulletList, LayoutNode, Paragraph, Run};
use crate::docgen::styles::{Alignment, StyleSpec};
use crate::docgen::template::Margins;
use crate::docgen::DocError;

// US letter page, in twips.
const PAGE_WIDTH_TWIPS: u32 = 12240;
const PAGE_HEIGHT_TWIPS: u32 = 15840;
// numId of the single bullet-list definition in numbering.xml.
const BULLET_NUM_ID: u32 = 1;

// ────────────────────────────────────────────────────────────────────────────
// Unit conversions
// ────────────────────────────────────────────────────────────────────────────

/// Font size in half-points (`w:sz`).
fn half_points(pt: f32) -> u32 {
    (pt * 2.0).round() as u32
}

/// Paragraph spacing in twentieths of a point (`w:spacing`).
fn twentieths(pt: f32) -> u32 {
    (pt * 20.0).round() as u32
}

/// Page measurements in twips (`w:pgMar`).
fn twips(inches: f32) -> u32 {
    (inches * 1440.0).round() as u32
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ────────────────────────────────────────────────────────────────────────────
// word/document.xml
// ────────────────────────────────────────────────────────────────────────────

fn write_run_properties(
    xml: &mut String,
    style: &StyleSpec,
    bold: bool,
    italic: bool,
) -> std::fmt::Result {
    write!(
        xml,
        r#"<w:rPr><w:rFonts w:ascii="{font}" w:hAnsi="{font}"/>"#,
        font = xml_escape(style.font_family)
    )?;
    if bold {
        write!(xml, "<w:b/>")?;
    }
    if italic {
        write!(xml, "<w:i/>")?;
    }
    let sz = half_points(style.size_pt);
    write!(xml, r#"<w:sz w:val="{sz}"/><w:szCs w:val="{sz}"/></w:rPr>"#)
}

fn write_run(xml: &mut String, run: &Run, style: &StyleSpec) -> std::fmt::Result {
    write!(xml, "<w:r>")?;
    write_run_properties(
        xml,
        style,
        run.bold.unwrap_or(style.bold),
        run.italic.unwrap_or(style.italic),
    )?;
    write!(
        xml,
        r#"<w:t xml:space="preserve">{}</w:t></w:r>"#,
        xml_escape(&run.text)
    )
}

fn write_paragraph_properties(
    xml: &mut String,
    style: &StyleSpec,
    bullet: bool,
) -> std::fmt::Result {
    write!(xml, "<w:pPr>")?;
    if bullet {
        write!(
            xml,
            r#"<w:numPr><w:ilvl w:val="0"/><w:numId w:val="{BULLET_NUM_ID}"/></w:numPr>"#
        )?;
    }
    write!(
        xml,
        r#"<w:spacing w:before="{}" w:after="{}"/>"#,
        twentieths(style.space_before_pt),
        twentieths(style.space_after_pt)
    )?;
    if style.alignment == Alignment::Center {
        write!(xml, r#"<w:jc w:val="center"/>"#)?;
    }
    write!(xml, "</w:pPr>")
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> std::fmt::Result {
    write!(xml, "<w:p>")?;
    write_paragraph_properties(xml, &paragraph.style, false)?;
    for run in &paragraph.runs {
        write_run(xml, run, &paragraph.style)?;
    }
    write!(xml, "</w:p>")
}

fn write_bullet_list(xml: &mut String, list: &BulletList) -> std::fmt::Result {
    for item in &list.items {
        write!(xml, "<w:p>")?;
        write_paragraph_properties(xml, &list.item_style, true)?;
        let run = Run::plain(item.as_str());
        write_run(xml, &run, &list.item_style)?;
        write!(xml, "</w:p>")?;
    }
    Ok(())
}

fn document_xml(margins: &Margins, nodes: &[LayoutNode]) -> Result<String, std::fmt::Error> {
    let mut xml = String::new();
    write!(
        xml,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#
    )?;
    write!(
        xml,
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body>"#
    )?;

    for node in nodes {
        match node {
            LayoutNode::Paragraph(p) => write_paragraph(&mut xml, p)?,
            LayoutNode::BulletList(list) => write_bullet_list(&mut xml, list)?,
        }
    }

    write!(
        xml,
        r#"<w:sectPr><w:pgSz w:w="{PAGE_WIDTH_TWIPS}" w:h="{PAGE_HEIGHT_TWIPS}"/><w:pgMar w:top="{top}" w:right="{right}" w:bottom="{bottom}" w:left="{left}" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr>"#,
        top = twips(margins.top_in),
        right = twips(margins.right_in),
        bottom = twips(margins.bottom_in),
        left = twips(margins.left_in),
    )?;
    write!(xml, "</w:body></w:document>")?;
    Ok(xml)
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed package parts
// ────────────────────────────────────────────────────────────────────────────

const CONTENT_TYPES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"<Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>"#,
    r#"</Types>"#,
);

const PACKAGE_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"</Relationships>"#,
);

const DOCUMENT_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>"#,
    r#"</Relationships>"#,
);

const NUMBERING_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:abstractNum w:abstractNumId="0"><w:multiLevelType w:val="singleLevel"/>"#,
    r#"<w:lvl w:ilvl="0"><w:numFmt w:val="bullet"/><w:lvlText w:val="&#8226;"/><w:lvlJc w:val="left"/>"#,
    r#"<w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl></w:abstractNum>"#,
    r#"<w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>"#,
    r#"</w:numbering>"#,
);

// ────────────────────────────────────────────────────────────────────────────
// Container
// ────────────────────────────────────────────────────────────────────────────

/// Serializes layout nodes into a complete DOCX byte buffer.
pub fn render_document(margins: &Margins, nodes: &[LayoutNode]) -> Result<Vec<u8>, DocError> {
    let body = document_xml(margins, nodes).map_err(DocError::build)?;

    let mut archive = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    // Fixed timestamp on every entry keeps identical input byte-identical.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    let parts: [(&str, &str); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML),
        ("_rels/.rels", PACKAGE_RELS_XML),
        ("word/document.xml", &body),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML),
        ("word/numbering.xml", NUMBERING_XML),
    ];

    for (name, content) in parts {
        archive.start_file(name, options).map_err(DocError::build)?;
        archive
            .write_all(content.as_bytes())
            .map_err(DocError::build)?;
    }

    let cursor = archive.finish().map_err(DocError::build)?;
    Ok(cursor.into_inner())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docgen::styles::StyleRegistry;

    fn sample_nodes() -> Vec<LayoutNode> {
        let style = *StyleRegistry::builtin().resolve("body").unwrap();
        vec![
            LayoutNode::Paragraph(Paragraph {
                runs: vec![Run::bold("A & B"), Run::plain(" <tag>")],
                style,
            }),
            LayoutNode::BulletList(BulletList {
                items: vec!["first".to_string(), "second".to_string()],
                item_style: style,
            }),
        ]
    }

    #[test]
    fn test_xml_escape_covers_markup_characters() {
        assert_eq!(
            xml_escape(r#"a & b < c > "d""#),
            "a &amp; b &lt; c &gt; &quot;d&quot;"
        );
    }

    #[test]
    fn test_unit_conversions() {
        assert_eq!(half_points(10.5), 21);
        assert_eq!(half_points(16.0), 32);
        assert_eq!(twentieths(6.0), 120);
        assert_eq!(twips(0.5), 720);
        assert_eq!(twips(1.0), 1440);
    }

    #[test]
    fn test_document_xml_escapes_run_text() {
        let xml = document_xml(&Margins::uniform(1.0), &sample_nodes()).unwrap();
        assert!(xml.contains("A &amp; B"));
        assert!(xml.contains("&lt;tag&gt;"));
        assert!(!xml.contains("<tag>"));
    }

    #[test]
    fn test_document_xml_margins_in_twips() {
        let xml = document_xml(&Margins::uniform(0.5), &[]).unwrap();
        assert!(xml.contains(r#"<w:pgMar w:top="720" w:right="720" w:bottom="720" w:left="720""#));
    }

    #[test]
    fn test_bullet_items_reference_numbering() {
        let xml = document_xml(&Margins::uniform(1.0), &sample_nodes()).unwrap();
        assert_eq!(xml.matches("<w:numPr>").count(), 2);
        assert!(xml.contains(r#"<w:numId w:val="1"/>"#));
    }

    #[test]
    fn test_render_produces_zip_container() {
        let bytes = render_document(&Margins::uniform(1.0), &sample_nodes()).unwrap();
        // OPC containers are zip archives: local file header magic.
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_render_is_byte_stable() {
        let nodes = sample_nodes();
        let first = render_document(&Margins::uniform(1.0), &nodes).unwrap();
        let second = render_document(&Margins::uniform(1.0), &nodes).unwrap();
        assert_eq!(first, second);
    }
}
