pub mod fetcher;
pub mod summarizer;
pub mod transcoder;
pub mod transcriber;
