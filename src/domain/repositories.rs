use crate::domain::entities::Complaint;
use crate::domain::errors::ComplaintError;

/// Durable, append-only destination for recorded complaints.
pub trait ComplaintLog {
    fn append(&self, complaint: &Complaint) -> Result<(), ComplaintError>;
}
