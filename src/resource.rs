//! External resources referenced by a tree.
//!
//! Embedded files and images only carry a name and a path. Turning a path
//! into bytes is the job of a [`ResourceResolver`] supplied by the caller;
//! nothing in the tree or the serializer touches the file system.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dom::{DocumentObject, Node};
use crate::error::{Error, Result};
use crate::model::{Document, EmbeddedFile, Image};
use crate::render::visitor::{walk, DocumentVisitor, VisitorAction};

/// What kind of node referenced a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// An image shape
    Image,
    /// An embedded file attachment
    Attachment,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Image => write!(f, "image"),
            ResourceKind::Attachment => write!(f, "attachment"),
        }
    }
}

/// A resource reference found in a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Referencing node kind
    pub kind: ResourceKind,
    /// Display label
    pub name: String,
    /// Locator handed to the resolver
    pub path: String,
}

/// Bytes behind a [`ResourceRef`].
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedResource {
    /// The reference that was resolved
    pub reference: ResourceRef,

    /// Raw data
    #[serde(skip_serializing)]
    pub data: Vec<u8>,

    /// MIME type sniffed from the data, if recognized
    pub mime_type: Option<&'static str>,
}

impl ResolvedResource {
    /// Get the size of the resource data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Resolves resource paths to bytes.
pub trait ResourceResolver: Send + Sync {
    /// Fetch the bytes for `path`. `name` is the label of the referencing
    /// node, for diagnostics.
    fn resolve(&self, name: &str, path: &str) -> Result<Vec<u8>>;
}

/// Resolver backed by an in-memory map from path to bytes.
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    entries: HashMap<String, Vec<u8>>,
}

impl MapResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the bytes for `path`.
    pub fn with_entry(mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(path, data);
        self
    }

    /// Register the bytes for `path`.
    pub fn insert(&mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.entries.insert(path.into(), data.into());
    }
}

impl ResourceResolver for MapResolver {
    fn resolve(&self, name: &str, path: &str) -> Result<Vec<u8>> {
        self.entries
            .get(path)
            .cloned()
            .ok_or_else(|| Error::ResourceNotFound(format!("{} ({})", path, name)))
    }
}

#[derive(Default)]
struct Collector {
    found: Vec<ResourceRef>,
}

impl DocumentVisitor for Collector {
    fn visit_image(&mut self, image: &Image) -> VisitorAction {
        let name = image.name();
        let base = image
            .node()
            .owner_of::<Document>()
            .map(|doc| doc.image_path())
            .unwrap_or_default();
        let path = if base.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", base.trim_end_matches('/'), name)
        };
        self.found.push(ResourceRef {
            kind: ResourceKind::Image,
            name,
            path,
        });
        VisitorAction::Continue
    }

    fn visit_embedded_file(&mut self, file: &EmbeddedFile) -> VisitorAction {
        self.found.push(ResourceRef {
            kind: ResourceKind::Attachment,
            name: file.name(),
            path: file.path(),
        });
        VisitorAction::Continue
    }
}

/// List every resource referenced under `root`, in document order.
///
/// Image paths are prefixed with the owning document's image path when one
/// is set.
pub fn collect_resources(root: &Node) -> Vec<ResourceRef> {
    let mut collector = Collector::default();
    walk(root, &mut collector);
    collector.found
}

/// Resolve every reference, in parallel. Fails on the first missing resource.
pub fn resolve_all<R: ResourceResolver + ?Sized>(
    references: &[ResourceRef],
    resolver: &R,
) -> Result<Vec<ResolvedResource>> {
    references
        .par_iter()
        .map(|reference| {
            let data = resolver.resolve(&reference.name, &reference.path)?;
            log::debug!("Resolved {} '{}' ({} bytes)", reference.kind, reference.path, data.len());
            Ok(ResolvedResource {
                reference: reference.clone(),
                mime_type: detect_mime_type(&data),
                data,
            })
        })
        .collect()
}

/// Detect MIME type from data magic bytes.
pub fn detect_mime_type(data: &[u8]) -> Option<&'static str> {
    // PDF: %PDF
    if data.starts_with(b"%PDF") {
        return Some("application/pdf");
    }

    if data.len() < 8 {
        return None;
    }

    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }

    // GIF: GIF87a or GIF89a
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some("image/gif");
    }

    // BMP: BM
    if data.starts_with(b"BM") {
        return Some("image/bmp");
    }

    None
}
