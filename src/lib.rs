//! LearnFlow - language learning backend
//!
//! Serves a catalog of subtitled videos, generates multiple choice quizzes
//! from their transcripts through a text-generation service, and translates
//! words and phrases for learners.

pub mod error;
pub mod config;
pub mod models;
pub mod subtitle;
pub mod catalog;
pub mod llm;
pub mod quiz;
pub mod server;
pub mod cli;
