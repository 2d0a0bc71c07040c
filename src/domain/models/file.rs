use bytes::Bytes;
use serde::Serialize;

/// Multipart field name carrying staged files, both from the page and to the optimizer.
pub const FILES_FIELD: &str = "files";

/// A file the user picked or dropped, held in memory until it is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile {
    pub filename: String,
    pub content: Bytes,
    pub mime_type: Option<String>,
}

impl StagedFile {
    pub fn new(filename: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Ordered, non-deduplicated collection of staged files.
///
/// Only ever replaced as a whole; there is no per-file add or remove.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagedSet {
    files: Vec<StagedFile>,
}

impl StagedSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(StagedFile::size).sum()
    }

    pub fn summaries(&self) -> Vec<StagedFileSummary> {
        self.files
            .iter()
            .map(|file| StagedFileSummary {
                filename: file.filename.clone(),
                size: file.size(),
            })
            .collect()
    }
}

impl FromIterator<StagedFile> for StagedSet {
    fn from_iter<I: IntoIterator<Item = StagedFile>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

/// Name and size of a staged file, without its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedFileSummary {
    pub filename: String,
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_set_keeps_insertion_order_and_duplicates() {
        let set: StagedSet = vec![
            StagedFile::new("b.png", vec![0u8; 3]),
            StagedFile::new("a.png", vec![0u8; 5]),
            StagedFile::new("b.png", vec![0u8; 3]),
        ]
        .into_iter()
        .collect();

        let names: Vec<_> = set.files().iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["b.png", "a.png", "b.png"]);
        assert_eq!(set.total_bytes(), 11);
    }

    #[test]
    fn size_is_payload_length() {
        let file = StagedFile::new("x.jpg", vec![1u8; 1000]).with_mime_type("image/jpeg");
        assert_eq!(file.size(), 1000);
        assert_eq!(file.mime_type.as_deref(), Some("image/jpeg"));
    }
}
