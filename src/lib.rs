pub mod config;
pub mod credentials;
pub mod error;
pub mod github;
pub mod output;
pub mod report;
pub mod review;

pub use error::ReportError;
