use crate::application::services::ComplaintService;
use crate::domain::errors::ComplaintError;
use crate::domain::repositories::ComplaintLog;
use crate::domain::value_objects::Category;
use std::io::{BufRead, Write};
use typed_builder::TypedBuilder;

/// Line-oriented presentation surface over the complaint service. Collects
/// the four fields, shows the notices, and never touches the store except
/// through `add` and `list_sorted_by_time_desc`.
#[derive(TypedBuilder)]
pub struct Console<R: BufRead, W: Write, L: ComplaintLog> {
    reader: R,
    writer: W,
    service: ComplaintService<L>,
}

impl<R: BufRead, W: Write, L: ComplaintLog> Console<R, W, L> {
    pub fn run(&mut self) -> Result<(), ComplaintError> {
        writeln!(self.writer, "Complaint Management System")?;

        loop {
            writeln!(self.writer)?;
            writeln!(self.writer, "1) Add complaint")?;
            writeln!(self.writer, "2) Display complaints")?;
            writeln!(self.writer, "3) Quit")?;

            let Some(choice) = self.prompt("> ")? else {
                return Ok(());
            };

            match choice.trim() {
                "1" => self.add_complaint()?,
                "2" => self.display_complaints()?,
                "3" => return Ok(()),
                other => {
                    tracing::warn!("unknown menu choice: {other:?}");
                    writeln!(self.writer, "Please choose 1, 2 or 3.")?;
                }
            }
        }
    }

    fn add_complaint(&mut self) -> Result<(), ComplaintError> {
        let Some(customer_name) = self.prompt("Customer Name: ")? else {
            return Ok(());
        };
        let Some(subject) = self.prompt("Subject: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Complaint Description: ")? else {
            return Ok(());
        };
        let Some(category) = self.read_category()? else {
            return Ok(());
        };

        match self.service.add(customer_name, subject, description, category) {
            Ok(_) => writeln!(self.writer, "Complaint added successfully!")?,
            Err(ComplaintError::MissingInformation) => {
                writeln!(self.writer, "Missing information: please fill in all fields.")?;
            }
            Err(ComplaintError::Io(e)) => {
                writeln!(self.writer, "Complaint kept in memory, but saving it failed: {e}")?;
            }
        }

        Ok(())
    }

    fn display_complaints(&mut self) -> Result<(), ComplaintError> {
        let complaints = self.service.list_sorted_by_time_desc();
        if complaints.is_empty() {
            writeln!(self.writer, "No complaints found.")?;
            return Ok(());
        }

        for complaint in complaints {
            writeln!(self.writer, "{complaint}")?;
        }

        Ok(())
    }

    /// Empty input keeps the default category; anything else is re-prompted
    /// until it names one of the fixed set.
    fn read_category(&mut self) -> Result<Option<Category>, ComplaintError> {
        loop {
            let label = format!(
                "Category [{}] (default {}): ",
                Category::ALL.map(|c| c.to_string()).join("/"),
                Category::default(),
            );
            let Some(input) = self.prompt(&label)? else {
                return Ok(None);
            };

            if input.trim().is_empty() {
                return Ok(Some(Category::default()));
            }
            match Category::parse(&input) {
                Some(category) => return Ok(Some(category)),
                None => writeln!(self.writer, "Unknown category: {}", input.trim())?,
            }
        }
    }

    /// One line of input; `None` on end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, ComplaintError> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Complaint;
    use std::cell::RefCell;
    use std::io::Cursor;

    #[derive(Default)]
    struct NullLog {
        appended: RefCell<usize>,
    }

    impl ComplaintLog for NullLog {
        fn append(&self, _complaint: &Complaint) -> Result<(), ComplaintError> {
            *self.appended.borrow_mut() += 1;
            Ok(())
        }
    }

    fn run_script(script: &str) -> String {
        let service = ComplaintService::builder().log(NullLog::default()).build();
        let mut console = Console::builder()
            .reader(Cursor::new(script.to_string()))
            .writer(Vec::new())
            .service(service)
            .build();
        console.run().unwrap();
        String::from_utf8(console.writer).unwrap()
    }

    #[test]
    fn test_empty_store_shows_no_complaints_notice() {
        let output = run_script("2\n3\n");
        assert!(output.contains("No complaints found."));
    }

    #[test]
    fn test_successful_add_confirms_and_lists_newest_first() {
        let output = run_script(
            "1\nAlice\nLate delivery\n  package arrived 3 days late  \ndelivery\n\
             1\nBob\nNo signal\nrouter drops every hour\n\n\
             2\n3\n",
        );

        assert_eq!(output.matches("Complaint added successfully!").count(), 2);
        // Bob's complaint was added last, so it is listed first.
        let bob = output.find("Customer Name: Bob").unwrap();
        let alice = output.find("Customer Name: Alice").unwrap();
        assert!(bob < alice);
        assert!(output.contains("Complaint Description: package arrived 3 days late"));
        // Empty category input falls back to the default.
        assert!(output.contains("Category: Technical"));
    }

    #[test]
    fn test_missing_information_notice() {
        let output = run_script("1\n\nX\nY\nbilling\n2\n3\n");
        assert!(output.contains("Missing information"));
        assert!(output.contains("No complaints found."));
    }

    #[test]
    fn test_unknown_category_is_reprompted() {
        let output = run_script("1\nAlice\nS\nD\nnonsense\nbilling\n3\n");
        assert!(output.contains("Unknown category: nonsense"));
        assert!(output.contains("Complaint added successfully!"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let output = run_script("");
        assert!(output.contains("Complaint Management System"));
    }
}
