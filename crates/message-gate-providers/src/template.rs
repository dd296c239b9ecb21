// crates/message-gate-providers/src/template.rs
// ============================================================================
// Module: Template Store Providers
// Description: In-memory and JSON-file-backed template stores.
// Purpose: Supply template records to the content selector.
// Dependencies: message-gate-core, serde_json
// ============================================================================

//! ## Overview
//! Two built-in template stores: an in-memory map for embedding and tests,
//! and a read-only store loaded from a JSON catalog file at startup. Catalog
//! files are size-limited before parsing. Both stores are infallible after
//! construction; lookup misses surface as `Ok(None)`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use message_gate_core::TemplateName;
use message_gate_core::TemplateRecord;
use message_gate_core::TemplateStore;
use message_gate_core::TemplateStoreError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum catalog file size allowed, in bytes.
const MAX_CATALOG_BYTES: usize = 1024 * 1024;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// Template store over an in-memory map.
#[derive(Debug, Default)]
pub struct InMemoryTemplateStore {
    /// Template records keyed by name.
    templates: BTreeMap<TemplateName, TemplateRecord>,
}

impl InMemoryTemplateStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Inserts or replaces one template record.
    pub fn insert(&mut self, name: TemplateName, record: TemplateRecord) {
        self.templates.insert(name, record);
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn fetch(&self, name: &TemplateName) -> Result<Option<TemplateRecord>, TemplateStoreError> {
        Ok(self.templates.get(name).cloned())
    }
}

// ============================================================================
// SECTION: JSON Catalog Store
// ============================================================================

/// Template store loaded from one JSON catalog file.
///
/// The catalog maps template names to records:
/// `{"low-balance": {"MessageBody": "...", "Subject": "..."}}`.
#[derive(Debug)]
pub struct JsonTemplateStore {
    /// Catalog contents loaded at construction.
    templates: BTreeMap<TemplateName, TemplateRecord>,
}

impl JsonTemplateStore {
    /// Loads a catalog from the given path.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateStoreError`] when the file cannot be read, exceeds
    /// the size limit, or fails to parse.
    pub fn load(path: &Path) -> Result<Self, TemplateStoreError> {
        let content = read_catalog_limited(path, MAX_CATALOG_BYTES)?;
        let templates: BTreeMap<TemplateName, TemplateRecord> =
            serde_json::from_slice(&content)
                .map_err(|err| TemplateStoreError::Store(format!("invalid catalog: {err}")))?;
        Ok(Self {
            templates,
        })
    }

    /// Returns the number of loaded templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateStore for JsonTemplateStore {
    fn fetch(&self, name: &TemplateName) -> Result<Option<TemplateRecord>, TemplateStoreError> {
        Ok(self.templates.get(name).cloned())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads a catalog file while enforcing a maximum byte limit.
fn read_catalog_limited(path: &Path, max_bytes: usize) -> Result<Vec<u8>, TemplateStoreError> {
    let file = File::open(path)
        .map_err(|_| TemplateStoreError::Store("unable to open catalog file".to_string()))?;
    let mut buf = Vec::new();
    let limit = max_bytes.saturating_add(1);
    let limit = u64::try_from(limit)
        .map_err(|_| TemplateStoreError::Store("catalog size limit exceeds u64".to_string()))?;
    let mut handle = file.take(limit);
    handle
        .read_to_end(&mut buf)
        .map_err(|_| TemplateStoreError::Store("unable to read catalog file".to_string()))?;
    if buf.len() > max_bytes {
        return Err(TemplateStoreError::Store("catalog file exceeds size limit".to_string()));
    }
    Ok(buf)
}
