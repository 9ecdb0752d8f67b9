pub mod pdf_assertions;

use boxpaint::{parse_document, PipelineBuilder};
use lopdf::Document as LopdfDocument;
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Renders a JSON document description with default settings.
#[allow(dead_code)]
pub fn render_json(description: &Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    render_with(PipelineBuilder::new(), description)
}

/// Renders a JSON document description through a configured pipeline.
pub fn render_with(
    builder: PipelineBuilder,
    description: &Value,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let pages = parse_document(&description.to_string())?;
    let bytes = builder.build().render(&pages)?;
    GeneratedPdf::from_bytes(bytes)
}
