//! fpreport: build LaTeX/PDF reports of features, policies and user stories.
//!
//! The pipeline is linear: load a [`model::Catalog`], reconcile priorities
//! ([`inference`]), assemble the three content blocks ([`assemble`]), fill
//! them into a template ([`template`]), apply the substitution table
//! ([`postprocess`]) and typeset the result twice ([`compile`]).

pub mod assemble;
pub mod cli;
pub mod commands;
pub mod compile;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod inference;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod postprocess;
pub mod template;
