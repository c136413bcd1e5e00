use complaint_desk::application::services::ComplaintService;
use complaint_desk::domain::errors::ComplaintError;
use complaint_desk::infrastructure::repositories_impl::FileComplaintLog;
use complaint_desk::interface::console::Console;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ComplaintError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let log = FileComplaintLog::builder().path("complaints.txt").build();
    let service = ComplaintService::builder().log(log).build();

    let stdin = io::stdin();
    let mut console = Console::builder()
        .reader(stdin.lock())
        .writer(io::stdout())
        .service(service)
        .build();

    console.run()
}
