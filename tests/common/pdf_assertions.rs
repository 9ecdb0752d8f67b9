#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document as LopdfDocument, Object};

/// Decoded content stream operations of page `page_num` (1-based).
pub fn page_operations(doc: &LopdfDocument, page_num: u32) -> Vec<Operation> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_num) else {
        return Vec::new();
    };
    doc.get_page_content(*page_id)
        .ok()
        .and_then(|bytes| Content::decode(&bytes).ok())
        .map(|content| content.operations)
        .unwrap_or_default()
}

pub fn count_operator(ops: &[Operation], operator: &str) -> usize {
    ops.iter().filter(|op| op.operator == operator).count()
}

pub fn operands_f32(op: &Operation) -> Vec<f32> {
    op.operands
        .iter()
        .filter_map(|o| o.as_float().ok())
        .collect()
}

/// Each `rg` fill colour set on the page, in order, as 0..=255 channels.
pub fn fill_colors(ops: &[Operation]) -> Vec<[u8; 3]> {
    ops.iter()
        .filter(|op| op.operator == "rg")
        .map(|op| {
            let c = operands_f32(op);
            let channel = |v: f32| (v * 255.0).round() as u8;
            [channel(c[0]), channel(c[1]), channel(c[2])]
        })
        .collect()
}

/// The `re` rectangles (`[x, y, w, h]` in PDF space) that are filled with `f`.
pub fn filled_rects(ops: &[Operation]) -> Vec<[f32; 4]> {
    ops.windows(2)
        .filter(|pair| pair[0].operator == "re" && pair[1].operator == "f")
        .map(|pair| {
            let v = operands_f32(&pair[0]);
            [v[0], v[1], v[2], v[3]]
        })
        .collect()
}

/// Number of closed polygon paths (`m ... h f`).
pub fn polygon_count(ops: &[Operation]) -> usize {
    count_operator(ops, "h")
}

fn page_dict(doc: &LopdfDocument, page_num: u32) -> Option<&Dictionary> {
    let page_id = doc.get_pages().get(&page_num).copied()?;
    doc.get_object(page_id).ok()?.as_dict().ok()
}

/// Alpha values of the page's ExtGState resources.
pub fn ext_gstate_alphas(doc: &LopdfDocument, page_num: u32) -> Vec<f32> {
    let Some(page) = page_dict(doc, page_num) else {
        return Vec::new();
    };
    page.get(b"Resources")
        .and_then(Object::as_dict)
        .and_then(|resources| resources.get(b"ExtGState"))
        .and_then(Object::as_dict)
        .map(|states| {
            states
                .iter()
                .filter_map(|(_, state)| state.as_dict().ok()?.get(b"ca").ok()?.as_float().ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Information about a link annotation
#[derive(Debug)]
pub struct LinkAnnotation {
    pub rect: [f32; 4],
    pub is_internal: bool,
    /// Destination name for internal links, URI for external ones.
    pub destination: String,
}

pub fn extract_link_annotations(doc: &LopdfDocument) -> Vec<LinkAnnotation> {
    let mut annotations = Vec::new();
    for page_num in doc.get_pages().keys() {
        let Some(page) = page_dict(doc, *page_num) else {
            continue;
        };
        let Ok(annots) = page.get(b"Annots").and_then(Object::as_array) else {
            continue;
        };
        for annot_ref in annots {
            let Some(annot) = annot_ref
                .as_reference()
                .ok()
                .and_then(|id| doc.get_object(id).ok())
                .and_then(|obj| obj.as_dict().ok())
            else {
                continue;
            };

            let rect = annot
                .get(b"Rect")
                .and_then(Object::as_array)
                .map(|arr| {
                    let v: Vec<f32> = arr.iter().filter_map(|o| o.as_float().ok()).collect();
                    [v[0], v[1], v[2], v[3]]
                })
                .unwrap_or_default();

            if let Ok(dest) = annot.get(b"Dest").and_then(Object::as_name) {
                annotations.push(LinkAnnotation {
                    rect,
                    is_internal: true,
                    destination: String::from_utf8_lossy(dest).to_string(),
                });
            } else if let Ok(uri) = annot
                .get(b"A")
                .and_then(Object::as_dict)
                .and_then(|action| action.get(b"URI"))
                .and_then(Object::as_str)
            {
                annotations.push(LinkAnnotation {
                    rect,
                    is_internal: false,
                    destination: String::from_utf8_lossy(uri).to_string(),
                });
            }
        }
    }
    annotations
}

/// Named destinations from the catalog: name, x, y in PDF space.
pub fn named_destinations(doc: &LopdfDocument) -> Vec<(String, f32, f32)> {
    let Ok(dests) = doc
        .catalog()
        .and_then(|catalog| catalog.get(b"Dests"))
        .and_then(Object::as_dict)
    else {
        return Vec::new();
    };
    dests
        .iter()
        .filter_map(|(name, dest)| {
            let arr = dest.as_array().ok()?;
            Some((
                String::from_utf8_lossy(name).to_string(),
                arr.get(2)?.as_float().ok()?,
                arr.get(3)?.as_float().ok()?,
            ))
        })
        .collect()
}

pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let media_box = page_dict(doc, page_num)?.get(b"MediaBox").ok()?.as_array().ok()?;
    let width = media_box.get(2)?.as_float().ok()? - media_box.first()?.as_float().ok()?;
    let height = media_box.get(3)?.as_float().ok()? - media_box.get(1)?.as_float().ok()?;
    Some((width, height))
}
