pub mod engine;

pub use engine::first_review;
