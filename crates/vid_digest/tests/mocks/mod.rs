#![allow(dead_code)]

pub mod audio;
pub mod captions;
pub mod summarizer;
pub mod transcriber;
