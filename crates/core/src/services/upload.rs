//! Upload extraction for video file fields.
//!
//! A video carries up to four uploaded files. Before anything touches the
//! database or the file store, raw upload payloads are swapped for their
//! generated stored names; the payloads themselves are returned as a pending
//! list for the orchestrator to persist after the row is written.
//!
//! Extraction is pure and idempotent: a field already holding a stored name
//! is left untouched, and a second pass over an extracted set yields an
//! empty pending list.

use catalog_common::storage::generate_stored_name;

/// A raw uploaded file, not yet persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    /// Original filename as submitted by the client.
    pub original_name: String,
    /// MIME content type.
    pub content_type: String,
    /// File contents.
    pub data: Vec<u8>,
}

/// Value of one file-bearing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileField {
    /// A raw upload awaiting extraction.
    Upload(FilePayload),
    /// A stored name, either freshly generated or carried over from a
    /// previous operation.
    Stored(String),
}

impl FileField {
    /// The stored name, if this field has been extracted.
    #[must_use]
    pub fn stored_name(&self) -> Option<&str> {
        match self {
            Self::Stored(name) => Some(name),
            Self::Upload(_) => None,
        }
    }
}

/// The four recognized file-bearing fields of a video.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoFiles {
    pub banner_file: Option<FileField>,
    pub trailer_file: Option<FileField>,
    pub thumb_file: Option<FileField>,
    pub video_file: Option<FileField>,
}

impl VideoFiles {
    /// Stored name for a field, if any.
    #[must_use]
    pub fn stored_name(&self, field: &str) -> Option<String> {
        let value = match field {
            "banner_file" => &self.banner_file,
            "trailer_file" => &self.trailer_file,
            "thumb_file" => &self.thumb_file,
            "video_file" => &self.video_file,
            _ => &None,
        };
        value
            .as_ref()
            .and_then(|f| f.stored_name().map(ToString::to_string))
    }
}

/// An extracted upload waiting to be written to the file store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    /// Which field this file came from.
    pub field: &'static str,
    /// Generated stored name.
    pub stored_name: String,
    /// The raw payload.
    pub payload: FilePayload,
}

fn extract_one(
    field: &mut Option<FileField>,
    name: &'static str,
    pending: &mut Vec<PendingFile>,
) {
    if matches!(field, Some(FileField::Upload(_)))
        && let Some(FileField::Upload(payload)) = field.take()
    {
        let stored_name = generate_stored_name(&payload.original_name);
        pending.push(PendingFile {
            field: name,
            stored_name: stored_name.clone(),
            payload,
        });
        *field = Some(FileField::Stored(stored_name));
    }
}

/// Replace raw upload payloads with generated stored names, returning the
/// payloads as a pending list. Absent fields and fields already holding a
/// stored name are left untouched.
pub fn extract_files(files: &mut VideoFiles) -> Vec<PendingFile> {
    let mut pending = Vec::new();
    extract_one(&mut files.banner_file, "banner_file", &mut pending);
    extract_one(&mut files.trailer_file, "trailer_file", &mut pending);
    extract_one(&mut files.thumb_file, "thumb_file", &mut pending);
    extract_one(&mut files.video_file, "video_file", &mut pending);
    pending
}
