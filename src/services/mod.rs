pub mod assignment_service;
pub mod email_service;
pub mod summary;
pub mod tutor_service;

pub use assignment_service::{AggregationOutcome, AssignmentService};
pub use email_service::EmailService;
pub use summary::{DashboardSummary, summarize};
pub use tutor_service::TutorService;
