//! From box trees (or their JSON descriptions) to PDF bytes.

use boxpaint_paint::{PaintConfig, PaintPass, PaintSummary};
use boxpaint_render_core::{BaseUrlResolver, DocumentContext, UrlResolver};
use boxpaint_render_lopdf::{PdfDocumentBuilder, PdfPageConfig};
use boxpaint_style::PageSize;
use boxpaint_tree::BoxTree;
use serde_json::Value;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::PipelineError;

struct RgbImage {
    name: String,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Configures a [`DocumentPipeline`].
pub struct PipelineBuilder {
    paint: PaintConfig,
    page: PdfPageConfig,
    document: DocumentContext,
    urls: Box<dyn UrlResolver + Send + Sync>,
    images: Vec<RgbImage>,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            paint: PaintConfig::default(),
            page: PdfPageConfig::default(),
            document: DocumentContext::default(),
            urls: Box::new(BaseUrlResolver),
            images: Vec::new(),
        }
    }
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_paint_config(mut self, config: PaintConfig) -> Self {
        self.paint = config;
        self
    }

    /// Reads a [`PaintConfig`] from JSON. Missing fields keep their defaults.
    pub fn with_paint_config_json(mut self, json: &str) -> Result<Self, PipelineError> {
        self.paint = serde_json::from_str(json)?;
        Ok(self)
    }

    pub fn with_page_config(mut self, page: PdfPageConfig) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(self, size: PageSize) -> Self {
        self.with_page_config(PdfPageConfig::from(size))
    }

    /// Sets the location relative links are resolved against.
    pub fn with_document_context(mut self, document: DocumentContext) -> Self {
        self.document = document;
        self
    }

    pub fn with_url_resolver<U>(mut self, urls: U) -> Self
    where
        U: UrlResolver + Send + Sync + 'static,
    {
        self.urls = Box::new(urls);
        self
    }

    /// Makes 8-bit RGB pixel data available to `background-image` under `name`.
    pub fn with_rgb_image(
        mut self,
        name: impl Into<String>,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Self {
        self.images.push(RgbImage {
            name: name.into(),
            width,
            height,
            pixels,
        });
        self
    }

    pub fn build(self) -> DocumentPipeline {
        DocumentPipeline {
            paint: self.paint,
            page: self.page,
            document: self.document,
            urls: self.urls,
            images: self.images,
        }
    }
}

/// Paints one box tree per page and writes the result as a PDF.
pub struct DocumentPipeline {
    paint: PaintConfig,
    page: PdfPageConfig,
    document: DocumentContext,
    urls: Box<dyn UrlResolver + Send + Sync>,
    images: Vec<RgbImage>,
}

impl DocumentPipeline {
    pub fn paint_config(&self) -> &PaintConfig {
        &self.paint
    }

    pub fn page_config(&self) -> PdfPageConfig {
        self.page
    }

    /// Renders `pages` and returns the PDF with one paint summary per page.
    pub fn render_with_summary(
        &self,
        pages: &[BoxTree],
    ) -> Result<(Vec<u8>, Vec<PaintSummary>), PipelineError> {
        let mut pdf = PdfDocumentBuilder::new(self.page);
        for image in &self.images {
            pdf.register_rgb_image(
                image.name.clone(),
                image.width,
                image.height,
                image.pixels.clone(),
            )?;
        }

        let mut summaries = Vec::with_capacity(pages.len());
        for (index, tree) in pages.iter().enumerate() {
            let summary = pdf.add_page(|canvas| {
                PaintPass::new(tree)
                    .with_config(self.paint)
                    .with_url_resolver(self.urls.as_ref())
                    .with_document(self.document.clone())
                    .run(canvas)
            })?;
            log::debug!(
                "Page {}: {} boxes painted, {} links",
                index + 1,
                summary.painted,
                summary.links
            );
            summaries.push(summary);
        }
        log::info!("Rendered {} page(s)", pages.len());
        Ok((pdf.to_bytes()?, summaries))
    }

    pub fn render(&self, pages: &[BoxTree]) -> Result<Vec<u8>, PipelineError> {
        Ok(self.render_with_summary(pages)?.0)
    }

    /// Renders a JSON document description; see [`parse_document`].
    pub fn render_json(&self, json: &str) -> Result<Vec<u8>, PipelineError> {
        self.render(&parse_document(json)?)
    }

    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        pages: &[BoxTree],
        path: P,
    ) -> Result<(), PipelineError> {
        let bytes = self.render(pages)?;
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        std::io::Write::write_all(&mut writer, &bytes)?;
        Ok(())
    }
}

/// Parses a document description into one tree per page.
///
/// The description is either `{"pages": [page, ...]}` or a single page,
/// where a page is a box description or an array of root descriptions.
pub fn parse_document(json: &str) -> Result<Vec<BoxTree>, PipelineError> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Object(mut map) if map.contains_key("pages") => {
            let Some(Value::Array(pages)) = map.remove("pages") else {
                return Err(PipelineError::InvalidDocument(
                    "'pages' must be an array".to_string(),
                ));
            };
            pages
                .into_iter()
                .map(|page| BoxTree::from_value(page).map_err(PipelineError::from))
                .collect()
        }
        page => Ok(vec![BoxTree::from_value(page)?]),
    }
}

/// Renders a single tree on a default A4 page.
pub fn render_to_pdf(tree: &BoxTree) -> Result<Vec<u8>, PipelineError> {
    PipelineBuilder::new()
        .build()
        .render(std::slice::from_ref(tree))
}
