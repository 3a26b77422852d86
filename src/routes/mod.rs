pub mod classes;

pub mod enrolments;

pub use classes::configure_classes_routes;
pub use enrolments::configure_enrolments_routes;
