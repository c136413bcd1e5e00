use crate::domain::errors::ComplaintError;
use crate::domain::value_objects::{Category, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;

/// One customer complaint. Immutable once constructed; construction and
/// validation are coupled, so invalid input never yields a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Complaint {
    customer_name: String,
    subject: String,
    complaint_description: String,
    category: Category,
    created_at: Timestamp,
}

impl Complaint {
    /// Builds a record stamped with the current local time.
    ///
    /// Every text field must be non-empty after trimming surrounding
    /// whitespace. Name and subject are stored verbatim as typed; the
    /// description is stored trimmed.
    pub fn new(
        customer_name: String,
        subject: String,
        complaint_description: String,
        category: Category,
    ) -> Result<Self, ComplaintError> {
        let complaint_description = complaint_description.trim();
        if customer_name.trim().is_empty()
            || subject.trim().is_empty()
            || complaint_description.is_empty()
        {
            return Err(ComplaintError::MissingInformation);
        }

        Ok(Self {
            customer_name,
            subject,
            complaint_description: complaint_description.to_string(),
            category,
            created_at: Timestamp::now(),
        })
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn complaint_description(&self) -> &str {
        &self.complaint_description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// Renders the labelled block written to the log and shown in listings.
/// Five newline-terminated lines; callers add the separating blank line.
impl fmt::Display for Complaint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer Name: {}", self.customer_name)?;
        writeln!(f, "Subject: {}", self.subject)?;
        writeln!(f, "Complaint Description: {}", self.complaint_description)?;
        writeln!(f, "Category: {}", self.category)?;
        writeln!(f, "Timestamp: {}", self.created_at)
    }
}
