//! Assembles painted pages into a PDF document.

use boxpaint_render_core::RenderError;
use boxpaint_style::PageSize;
use boxpaint_types::{Point, Size};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::collections::{BTreeMap, HashMap};
use std::io::Write;

use crate::canvas::{ImageXObject, LopdfCanvas, PageContent};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfPageConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for PdfPageConfig {
    fn default() -> Self {
        PdfPageConfig::from(PageSize::A4)
    }
}

impl From<PageSize> for PdfPageConfig {
    fn from(size: PageSize) -> Self {
        let (width, height) = size.dimensions_pt();
        Self { width, height }
    }
}

/// Builds a PDF one page at a time.
///
/// Images are registered up front and can then be used as background tiles
/// on any page. Named destinations from every page end up in the catalog's
/// `/Dests` dictionary, so `#name` links can point across pages.
pub struct PdfDocumentBuilder {
    doc: Document,
    pages_id: ObjectId,
    config: PdfPageConfig,
    images: HashMap<String, ImageXObject>,
    page_ids: Vec<ObjectId>,
    named_dests: BTreeMap<String, (ObjectId, Point)>,
}

impl PdfDocumentBuilder {
    pub fn new(config: PdfPageConfig) -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            config,
            images: HashMap::new(),
            page_ids: Vec::new(),
            named_dests: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> PdfPageConfig {
        self.config
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Registers 8-bit RGB pixel data under `name`, the value background
    /// image references use. One pixel maps to one point.
    pub fn register_rgb_image(
        &mut self,
        name: impl Into<String>,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Result<(), RenderError> {
        let name = name.into();
        let expected = width as usize * height as usize * 3;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(RenderError::InvalidImage {
                name,
                reason: format!(
                    "expected {} bytes for {}x{} RGB, got {}",
                    expected,
                    width,
                    height,
                    pixels.len()
                ),
            });
        }

        let stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            pixels,
        );
        let object_id = self.doc.add_object(stream);
        let resource_name = format!("Im{}", self.images.len() + 1);
        log::debug!("Registered image '{}' as /{}", name, resource_name);
        self.images.insert(
            name,
            ImageXObject {
                object_id,
                resource_name,
                size: Size::new(width as f32, height as f32),
            },
        );
        Ok(())
    }

    /// Adds a page and lets `paint` draw on it.
    pub fn add_page<F, R>(&mut self, paint: F) -> Result<R, RenderError>
    where
        F: FnOnce(&mut LopdfCanvas<'_>) -> R,
    {
        let mut canvas = LopdfCanvas::new(self.config.height, &self.images);
        let result = paint(&mut canvas);
        let page = canvas.finish();
        self.write_page(page)?;
        Ok(result)
    }

    fn write_page(&mut self, page: PageContent) -> Result<ObjectId, RenderError> {
        let content_id = self
            .doc
            .add_object(Stream::new(dictionary! {}, page.content.encode()?));

        let mut resources = Dictionary::new();
        if !page.ext_gstates.is_empty() {
            let mut states = Dictionary::new();
            for (name, alpha) in &page.ext_gstates {
                states.set(
                    name.as_bytes(),
                    dictionary! { "Type" => "ExtGState", "ca" => *alpha, "CA" => *alpha },
                );
            }
            resources.set("ExtGState", states);
        }
        if !page.xobjects.is_empty() {
            let mut xobjects = Dictionary::new();
            for image in self.images.values() {
                if page.xobjects.contains(&image.resource_name) {
                    xobjects.set(image.resource_name.as_bytes(), image.object_id);
                }
            }
            resources.set("XObject", xobjects);
        }

        let page_id = self.doc.new_object_id();
        let annotations: Vec<Object> = page
            .links
            .iter()
            .map(|(href, rect)| {
                let mut annot = dictionary! {
                    "Type" => "Annot",
                    "Subtype" => "Link",
                    "Rect" => rect.iter().map(|v| Object::from(*v)).collect::<Vec<_>>(),
                    "Border" => vec![0.into(), 0.into(), 0.into()],
                };
                match href.internal_target() {
                    Some(name) => annot.set("Dest", Object::Name(name.as_bytes().to_vec())),
                    None => annot.set(
                        "A",
                        dictionary! {
                            "S" => "URI",
                            "URI" => Object::string_literal(href.as_str()),
                        },
                    ),
                }
                Object::Reference(self.doc.add_object(annot))
            })
            .collect();

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), self.config.width.into(), self.config.height.into()],
            "Contents" => content_id,
            "Resources" => resources,
        };
        if !annotations.is_empty() {
            page_dict.set("Annots", annotations);
        }
        self.doc.objects.insert(page_id, Object::Dictionary(page_dict));

        for (id, point) in page.named_dests {
            if self
                .named_dests
                .insert(id.to_string(), (page_id, point))
                .is_some()
            {
                log::debug!("Named destination '{}' registered again; keeping the latest", id);
            }
        }
        self.page_ids.push(page_id);
        Ok(page_id)
    }

    /// Writes the page tree and catalog and returns the finished document.
    pub fn finish(mut self) -> Result<Document, RenderError> {
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<_>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.doc.objects.insert(self.pages_id, Object::Dictionary(pages));

        let mut catalog = dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        };
        if !self.named_dests.is_empty() {
            let mut dests = Dictionary::new();
            for (name, (page_id, point)) in &self.named_dests {
                dests.set(
                    name.as_bytes(),
                    vec![
                        Object::Reference(*page_id),
                        "XYZ".into(),
                        point.x.into(),
                        point.y.into(),
                        Object::Null,
                    ],
                );
            }
            catalog.set("Dests", dests);
        }
        let catalog_id = self.doc.add_object(catalog);
        self.doc.trailer.set("Root", catalog_id);
        Ok(self.doc)
    }

    pub fn save<W: Write>(self, writer: &mut W) -> Result<(), RenderError> {
        let mut doc = self.finish()?;
        doc.save_to(writer)?;
        Ok(())
    }

    pub fn to_bytes(self) -> Result<Vec<u8>, RenderError> {
        let mut buffer = Vec::new();
        self.save(&mut buffer)?;
        Ok(buffer)
    }
}
