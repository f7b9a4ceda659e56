use crate::models::SpecialistProfile;
use crate::report::layout::{build_blocks, paginate, Block, PageGeometry, MM_PER_PT};
use crate::report::metrics::{supports_char, FontFace};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use thiserror::Error;

/// Errors that can occur while producing the spec sheet
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unsupported character {ch:?} in {context}")]
    UnsupportedCharacter { ch: char, context: &'static str },

    #[error("document error: {0}")]
    Document(String),
}

/// Everything printed on one spec sheet
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub investor_name: &'a str,
    pub profile: &'a SpecialistProfile,
    pub vetting_questions: &'a [String],
}

impl<'a> Report<'a> {
    pub fn new(
        investor_name: &'a str,
        profile: &'a SpecialistProfile,
        vetting_questions: &'a [String],
    ) -> Self {
        Self {
            investor_name,
            profile,
            vetting_questions,
        }
    }
}

/// Fixed wording around the variable content
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub title: String,
    pub protocol_intro: Option<String>,
    pub disclaimer: Option<String>,
    /// PDF document info title
    pub document_title: String,
}

pub const DEFAULT_TITLE: &str = "EDUCATED INVESTOR™ | ADVISOR SPEC SHEET";
pub const DEFAULT_PROTOCOL_INTRO: &str =
    "Ask these questions. If they don't answer 'Yes' to the Fiduciary Oath, walk away.";
pub const DEFAULT_DISCLAIMER: &str = "This spec sheet is educational material based on your \
    self-reported answers. It is not investment, tax or legal advice.";

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            protocol_intro: Some(DEFAULT_PROTOCOL_INTRO.to_string()),
            disclaimer: Some(DEFAULT_DISCLAIMER.to_string()),
            document_title: "Educated Investor Advisor Spec Sheet".to_string(),
        }
    }
}

/// Renders reports to PDF using the built-in Helvetica faces
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    options: ReportOptions,
    geometry: PageGeometry,
}

impl ReportRenderer {
    pub fn new(options: ReportOptions) -> Self {
        Self {
            options,
            geometry: PageGeometry::a4(),
        }
    }

    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Produce the complete PDF. Either the whole document is returned or an error.
    ///
    /// Text is reflowed to the page width: runs of whitespace, including
    /// newlines, print as a single space.
    pub fn render(&self, report: &Report<'_>) -> Result<Vec<u8>, RenderError> {
        let blocks = build_blocks(report, &self.options);
        check_glyphs(&blocks)?;

        let pages = paginate(&blocks, &self.geometry);
        let width = Mm(self.geometry.width_mm);
        let height = Mm(self.geometry.height_mm);

        let (doc, first_page, first_layer) =
            PdfDocument::new(self.options.document_title.as_str(), width, height, "Layer 1");

        let regular = add_font(&doc, BuiltinFont::Helvetica)?;
        let bold = add_font(&doc, BuiltinFont::HelveticaBold)?;
        let italic = add_font(&doc, BuiltinFont::HelveticaOblique)?;

        for (index, page) in pages.iter().enumerate() {
            let (page_index, layer_index) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(width, height, "Layer 1")
            };
            let layer = doc.get_page(page_index).get_layer(layer_index);

            for line in &page.lines {
                let font = match line.face {
                    FontFace::Regular => &regular,
                    FontFace::Bold => &bold,
                    FontFace::Italic => &italic,
                };
                layer.use_text(
                    line.text.as_str(),
                    line.size_pt,
                    Mm(line.x_pt * MM_PER_PT),
                    Mm(line.y_pt * MM_PER_PT),
                    font,
                );
            }
        }

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| RenderError::Document(e.to_string()))?;

        tracing::debug!(pages = pages.len(), bytes = bytes.len(), "rendered spec sheet");

        Ok(bytes)
    }
}

/// Render with the default wording. Whitespace is reflowed as in
/// [`ReportRenderer::render`].
pub fn render(
    investor_name: &str,
    profile: &SpecialistProfile,
    vetting_questions: &[String],
) -> Result<Vec<u8>, RenderError> {
    ReportRenderer::default().render(&Report::new(investor_name, profile, vetting_questions))
}

fn add_font(
    doc: &printpdf::PdfDocumentReference,
    font: BuiltinFont,
) -> Result<IndirectFontRef, RenderError> {
    doc.add_builtin_font(font)
        .map_err(|e| RenderError::Document(e.to_string()))
}

fn check_glyphs(blocks: &[Block]) -> Result<(), RenderError> {
    for block in blocks {
        if let Some(ch) = block
            .text
            .chars()
            .find(|c| !c.is_whitespace() && !supports_char(*c))
        {
            return Err(RenderError::UnsupportedCharacter {
                ch,
                context: block.style.name(),
            });
        }
    }
    Ok(())
}
