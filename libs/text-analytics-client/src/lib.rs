pub mod client;
pub mod dto;
pub mod error;
pub mod summarizer;
pub mod translator;
