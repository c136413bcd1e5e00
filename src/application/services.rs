use crate::domain::entities::Complaint;
use crate::domain::errors::ComplaintError;
use crate::domain::repositories::ComplaintLog;
use crate::domain::value_objects::Category;
use typed_builder::TypedBuilder;

/// Holds every complaint recorded in the current run and mirrors each
/// successful add to the durable log. Nothing is reloaded at startup and
/// records are never edited or removed.
#[derive(TypedBuilder)]
pub struct ComplaintService<L: ComplaintLog> {
    log: L,
    #[builder(default)]
    complaints: Vec<Complaint>,
}

impl<L: ComplaintLog> ComplaintService<L> {
    /// Validates, stores, and logs one complaint.
    ///
    /// Memory is written before the file; a failed append keeps the
    /// in-memory record and surfaces the I/O error to the caller.
    pub fn add(
        &mut self,
        customer_name: String,
        subject: String,
        complaint_description: String,
        category: Category,
    ) -> Result<Complaint, ComplaintError> {
        let complaint = Complaint::new(customer_name, subject, complaint_description, category)?;
        self.complaints.push(complaint.clone());
        tracing::info!(category = %complaint.category(), "complaint recorded");

        match self.log.append(&complaint) {
            Ok(()) => Ok(complaint),
            Err(e) => {
                tracing::error!("failed to append complaint to the log: {e}");
                Err(e)
            }
        }
    }

    /// All records, most recent first. The sort is stable, so records with
    /// identical timestamps keep their insertion order.
    pub fn list_sorted_by_time_desc(&self) -> Vec<Complaint> {
        let mut complaints = self.complaints.clone();
        complaints.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        complaints
    }
}
