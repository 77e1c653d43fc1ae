pub mod inference;
pub mod transcript;
