use crate::domain::entities::Complaint;
use crate::domain::errors::ComplaintError;
use crate::domain::repositories::ComplaintLog;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use typed_builder::TypedBuilder;

/// Appends one human-readable block per complaint to a flat text file,
/// creating the file on first use. The handle is opened per append and
/// dropped on every exit path, so nothing stays open between writes.
#[derive(Clone, TypedBuilder)]
pub struct FileComplaintLog {
    #[builder(setter(into))]
    path: PathBuf,
}

impl ComplaintLog for FileComplaintLog {
    fn append(&self, complaint: &Complaint) -> Result<(), ComplaintError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        // The block ends with a newline; the extra one is the separator.
        writeln!(file, "{complaint}")?;
        file.flush()?;
        Ok(())
    }
}
