//! Document collaborator: extract per-page dimensions from a PDF.
//!
//! This is the only module that touches PDF internals, and it delegates all
//! parsing to `lopdf`. It walks the page tree and reads each page's MediaBox,
//! yielding one [`PageDescriptor`] per page in document order. Everything
//! downstream consumes descriptors and never sees the document itself.

use std::path::Path;

use log::{debug, warn};
use lopdf::{Document, Object};

use crate::data::dimension::Dimension;
use crate::error::PageSizeError;
use crate::Result;

/// MediaBox fallback when a page carries none: US Letter in points.
const DEFAULT_MEDIA_BOX: [f64; 4] = [0.0, 0.0, 612.0, 792.0];

/// One page's physical extent as reported by the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDescriptor {
    /// 1-based page number.
    pub index: u32,
    /// Width in points.
    pub width_pt: f64,
    /// Height in points.
    pub height_pt: f64,
}

impl PageDescriptor {
    /// The page's canonical dimension in millimeters.
    pub fn dimension(&self) -> Dimension {
        Dimension::from_points(self.width_pt, self.height_pt)
    }
}

/// Read the per-page dimensions of a PDF file.
///
/// Returns one descriptor per page, in page order, with 1-based indices.
/// Pages without a readable MediaBox count as US Letter (612x792 pt) and
/// log a warning. An unreadable document is an error; the caller decides
/// how to surface it.
pub fn read_page_descriptors(path: impl AsRef<Path>) -> Result<Vec<PageDescriptor>> {
    let path = path.as_ref();
    let doc = Document::load(path).map_err(|source| PageSizeError::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;

    let pages = doc.get_pages();
    let mut descriptors = Vec::with_capacity(pages.len());

    for (page_num, page_id) in pages {
        let media_box = page_media_box(&doc, page_id).unwrap_or_else(|| {
            warn!(
                "page {} has no readable MediaBox, assuming US Letter",
                page_num
            );
            DEFAULT_MEDIA_BOX
        });

        descriptors.push(PageDescriptor {
            index: page_num,
            width_pt: media_box[2] - media_box[0],
            height_pt: media_box[3] - media_box[1],
        });
    }

    debug!(
        "read {} page descriptors from '{}'",
        descriptors.len(),
        path.display()
    );
    Ok(descriptors)
}

/// Resolve a page's MediaBox to `[x0, y0, x1, y1]` in points.
///
/// Returns `None` when the entry is missing or is not a 4-number array.
/// MediaBox can be inherited from an ancestor Pages node, so missing
/// entries walk up the Parent chain before giving up. The walk is bounded
/// so a malformed document with a Parent cycle cannot hang it.
fn page_media_box(doc: &Document, page_id: lopdf::ObjectId) -> Option<[f64; 4]> {
    let mut dict = doc.get_object(page_id).ok()?.as_dict().ok()?;

    for _ in 0..32 {
        if let Ok(obj) = dict.get(b"MediaBox") {
            return media_box_array(doc, obj);
        }
        let parent_id = dict.get(b"Parent").ok()?.as_reference().ok()?;
        dict = doc.get_object(parent_id).ok()?.as_dict().ok()?;
    }
    None
}

/// Interpret an object as a MediaBox array of four numbers.
fn media_box_array(doc: &Document, obj: &Object) -> Option<[f64; 4]> {
    let obj = match obj {
        Object::Reference(id) => doc.get_object(*id).ok()?,
        other => other,
    };
    let array = obj.as_array().ok()?;
    if array.len() != 4 {
        return None;
    }

    let mut media_box = [0.0; 4];
    for (i, value) in array.iter().enumerate() {
        media_box[i] = match value {
            Object::Integer(n) => *n as f64,
            Object::Real(n) => *n as f64,
            _ => return None,
        };
    }
    Some(media_box)
}
