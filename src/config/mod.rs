pub mod structs;

mod r#impl;

pub use structs::AppConfig;
