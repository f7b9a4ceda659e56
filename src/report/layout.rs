//! Spec sheet structure and page layout.
//!
//! `build_blocks` fixes the order of the document. `paginate` wraps each
//! block to the text width and stacks lines top-down, opening a new page
//! whenever the next line would cross the bottom margin.

use crate::report::metrics::{self, FontFace};
use crate::report::render::{Report, ReportOptions};
use serde::Serialize;

/// 1 inch = 72 pt = 25.4 mm
pub const MM_PER_PT: f32 = 25.4 / 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Align {
    Left,
    Center,
}

/// Kind of content block; each maps to one typographic treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockStyle {
    Title,
    Attribution,
    SectionHeading,
    ProfileTitle,
    Body,
    Question,
    Disclaimer,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontHint {
    pub face: FontFace,
    pub size_pt: f32,
    pub line_height_pt: f32,
    pub align: Align,
    pub space_before_pt: f32,
    pub indent_pt: f32,
}

impl BlockStyle {
    pub fn hint(&self) -> FontHint {
        let (face, size_pt, align, space_before_pt, indent_pt) = match self {
            BlockStyle::Title => (FontFace::Bold, 16.0, Align::Center, 0.0, 0.0),
            BlockStyle::Attribution => (FontFace::Regular, 11.0, Align::Center, 6.0, 0.0),
            BlockStyle::SectionHeading => (FontFace::Bold, 12.0, Align::Left, 18.0, 0.0),
            BlockStyle::ProfileTitle => (FontFace::Bold, 13.0, Align::Left, 8.0, 0.0),
            BlockStyle::Body => (FontFace::Regular, 11.0, Align::Left, 6.0, 0.0),
            BlockStyle::Question => (FontFace::Regular, 10.0, Align::Left, 4.0, 8.0),
            BlockStyle::Disclaimer => (FontFace::Italic, 8.0, Align::Left, 18.0, 0.0),
        };
        FontHint {
            face,
            size_pt,
            line_height_pt: size_pt * 1.4,
            align,
            space_before_pt,
            indent_pt,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BlockStyle::Title => "title",
            BlockStyle::Attribution => "attribution",
            BlockStyle::SectionHeading => "section heading",
            BlockStyle::ProfileTitle => "profile title",
            BlockStyle::Body => "body",
            BlockStyle::Question => "vetting question",
            BlockStyle::Disclaimer => "disclaimer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub style: BlockStyle,
    pub text: String,
}

impl Block {
    fn new(style: BlockStyle, text: impl Into<String>) -> Self {
        Self { style, text: text.into() }
    }
}

/// Lay out the spec sheet content in its fixed order
pub fn build_blocks(report: &Report<'_>, options: &ReportOptions) -> Vec<Block> {
    let mut blocks = vec![
        Block::new(BlockStyle::Title, options.title.as_str()),
        Block::new(
            BlockStyle::Attribution,
            format!("Confidential. Prepared for: {}", report.investor_name),
        ),
        Block::new(BlockStyle::SectionHeading, "RECOMMENDED SPECIALIST"),
        Block::new(BlockStyle::ProfileTitle, report.profile.title),
        Block::new(BlockStyle::Body, report.profile.description),
        Block::new(
            BlockStyle::Body,
            format!("Recommended credentials: {}", report.profile.credentials_line()),
        ),
        Block::new(BlockStyle::SectionHeading, "VETTING PROTOCOL"),
    ];

    if let Some(intro) = &options.protocol_intro {
        blocks.push(Block::new(BlockStyle::Body, intro.as_str()));
    }

    blocks.extend(
        report
            .vetting_questions
            .iter()
            .enumerate()
            .map(|(i, question)| Block::new(BlockStyle::Question, format!("{}. {}", i + 1, question))),
    );

    if let Some(disclaimer) = &options.disclaimer {
        blocks.push(Block::new(BlockStyle::Disclaimer, disclaimer.as_str()));
    }

    blocks
}

// ────────────────────────────────────────────────────────────────────────────
// Pagination
// ────────────────────────────────────────────────────────────────────────────

/// Page size and margins, in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_mm: f32,
}

impl PageGeometry {
    pub fn a4() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_mm: 20.0,
        }
    }

    pub fn width_pt(&self) -> f32 {
        self.width_mm / MM_PER_PT
    }

    pub fn height_pt(&self) -> f32 {
        self.height_mm / MM_PER_PT
    }

    pub fn margin_pt(&self) -> f32 {
        self.margin_mm / MM_PER_PT
    }

    pub fn text_width_pt(&self) -> f32 {
        self.width_pt() - 2.0 * self.margin_pt()
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// A single line of text positioned on a page. Coordinates are PDF user
/// space in points, origin at the bottom-left corner, `y` is the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLine {
    pub text: String,
    pub style: BlockStyle,
    pub face: FontFace,
    pub size_pt: f32,
    pub x_pt: f32,
    pub y_pt: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

/// Wrap and place blocks onto as many pages as needed.
///
/// Always returns at least one page and never an empty one. A line taller
/// than the usable height stays on the page it starts.
pub fn paginate(blocks: &[Block], geometry: &PageGeometry) -> Vec<Page> {
    let top = geometry.height_pt() - geometry.margin_pt();
    let bottom = geometry.margin_pt();
    let left = geometry.margin_pt();

    let mut pages = vec![Page::default()];
    let mut cursor = top;

    for block in blocks {
        let hint = block.style.hint();
        let max_width = geometry.text_width_pt() - hint.indent_pt;
        let lines = metrics::wrap(&block.text, hint.face, hint.size_pt, max_width);

        if lines.is_empty() {
            continue;
        }

        // No leading space at the top of a page
        if cursor < top {
            cursor -= hint.space_before_pt;
        }

        for text in lines {
            let page_has_lines = pages.last().map_or(false, |p| !p.lines.is_empty());
            if cursor - hint.line_height_pt < bottom && page_has_lines {
                pages.push(Page::default());
                cursor = top;
            }
            cursor -= hint.line_height_pt;

            let x_pt = match hint.align {
                Align::Left => left + hint.indent_pt,
                Align::Center => {
                    let width = metrics::measure(&text, hint.face, hint.size_pt);
                    left + ((geometry.text_width_pt() - width) / 2.0).max(0.0)
                }
            };

            let y_pt = cursor + (hint.line_height_pt - hint.size_pt) / 2.0;

            if let Some(page) = pages.last_mut() {
                page.lines.push(PlacedLine {
                    text,
                    style: block.style,
                    face: hint.face,
                    size_pt: hint.size_pt,
                    x_pt,
                    y_pt,
                });
            }
        }
    }

    pages
}
