pub mod assignment;
pub mod course;
pub mod coursework;
pub mod email;
pub mod submission;
pub mod tutor;

pub use assignment::{AggregatedAssignment, NOT_TURNED_IN};
pub use course::Course;
pub use coursework::{Coursework, DueDate, DueTime};
pub use email::{SendEmailRequest, SendEmailResponse};
pub use submission::StudentSubmission;
pub use tutor::{AiAssistRequest, AiAssistResponse};
