pub mod classes;

pub mod enrolments;

pub use classes::ClassService;
pub use enrolments::EnrolmentService;
