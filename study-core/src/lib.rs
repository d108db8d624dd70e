//! Core of the study helper: the workflow registry, prompt composition and the parsers
//! that turn model replies into typed results.

pub mod models;
pub mod parser;
pub mod prompts;
pub mod workflows;
