//! Deterministic question paper generation from plain-text documents.
//!
//! `paper-forge` tokenizes source lines, ranks keywords by corpus frequency,
//! scores lines by keyword density, and synthesizes multiple-choice,
//! fill-in-the-blank, short-answer and long-answer questions from them.
//! Every stage is a pure function of its input. The only randomness (MCQ
//! distractor sampling) comes from a caller-supplied generator, so a seeded
//! run always produces byte-identical output.

pub mod config;
pub mod document;
pub mod export;
pub mod keywords;
pub mod pipeline;
pub mod questions;
pub mod scoring;
pub mod text;
pub mod types;
