//! Upload form state, independent of the browser file type.
//!
//! `F` is the file handle (`web_sys::File` in the page, `()` in tests).

use crate::shared::format::format_kilobytes;
use crate::shared::op_status::OpStatus;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Image,
}

impl FileKind {
    /// PDF for a `.pdf` extension (any case), image otherwise
    pub fn from_file_name(name: &str) -> Self {
        let ext = name.rsplit('.').next().unwrap_or_default();
        if ext.eq_ignore_ascii_case("pdf") {
            FileKind::Pdf
        } else {
            FileKind::Image
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            FileKind::Pdf => "file-pdf",
            FileKind::Image => "image",
        }
    }
}

/// A local file picked for upload
#[derive(Debug, Clone)]
pub struct ChosenFile<F> {
    /// Unique per pick, used as list key
    pub key: String,
    pub name: String,
    pub size_bytes: u64,
    pub handle: F,
}

impl<F> ChosenFile<F> {
    pub fn new(name: impl Into<String>, size_bytes: u64, handle: F) -> Self {
        Self {
            key: Uuid::new_v4().to_string(),
            name: name.into(),
            size_bytes,
            handle,
        }
    }

    pub fn summary(&self) -> FileSummary {
        FileSummary {
            key: self.key.clone(),
            name: self.name.clone(),
            size_label: format_kilobytes(self.size_bytes),
            kind: FileKind::from_file_name(&self.name),
        }
    }
}

/// Display row for a chosen file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub key: String,
    pub name: String,
    pub size_label: String,
    pub kind: FileKind,
}

/// Inline message under the upload controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadNotice {
    NothingChosen,
    Uploaded,
    Failed,
}

impl UploadNotice {
    pub fn text(&self) -> &'static str {
        match self {
            UploadNotice::NothingChosen => "⚠️ Please choose at least one file.",
            UploadNotice::Uploaded => "✅ Files uploaded and processed successfully!",
            UploadNotice::Failed => "❌ Upload failed. Check console for details.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Batch accepted; the document list must refetch
    RefreshParent,
    /// Batch kept as is so the user can retry
    KeepForRetry,
}

#[derive(Debug, Clone)]
pub struct UploadForm<F> {
    files: Vec<ChosenFile<F>>,
    status: OpStatus,
    notice: Option<UploadNotice>,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            status: OpStatus::Idle,
            notice: None,
        }
    }
}

impl<F: Clone> UploadForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[ChosenFile<F>] {
        &self.files
    }

    pub fn summaries(&self) -> Vec<FileSummary> {
        self.files.iter().map(ChosenFile::summary).collect()
    }

    pub fn notice(&self) -> Option<UploadNotice> {
        self.notice
    }

    pub fn status(&self) -> &OpStatus {
        &self.status
    }

    pub fn is_uploading(&self) -> bool {
        self.status.is_busy()
    }

    pub fn can_choose(&self) -> bool {
        !self.is_uploading()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_uploading() && !self.files.is_empty()
    }

    /// Replace the batch with a new pick. Ignored while a batch is in flight.
    pub fn choose(&mut self, files: Vec<ChosenFile<F>>) {
        if self.is_uploading() {
            return;
        }
        self.files = files;
        self.notice = None;
    }

    /// Start a submission.
    ///
    /// Returns the handles to send, or `None` when nothing may be sent:
    /// an empty batch (warning shown) or a batch already in flight.
    pub fn begin_submit(&mut self) -> Option<Vec<F>> {
        if self.is_uploading() {
            return None;
        }
        if self.files.is_empty() {
            self.notice = Some(UploadNotice::NothingChosen);
            return None;
        }
        self.status = OpStatus::InFlight;
        Some(self.files.iter().map(|f| f.handle.clone()).collect())
    }

    /// Apply the server's answer to the submission started by `begin_submit`
    pub fn finish(&mut self, result: Result<(), String>) -> SubmitOutcome {
        match result {
            Ok(()) => {
                self.files.clear();
                self.status = OpStatus::Idle;
                self.notice = Some(UploadNotice::Uploaded);
                SubmitOutcome::RefreshParent
            }
            Err(e) => {
                self.status = OpStatus::Failed(e);
                self.notice = Some(UploadNotice::Failed);
                SubmitOutcome::KeepForRetry
            }
        }
    }

    /// Drop the batch and any message. Ignored while a batch is in flight.
    pub fn reset(&mut self) {
        if self.is_uploading() {
            return;
        }
        *self = Self::default();
    }
}
