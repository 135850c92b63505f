//! Docfam - document family resolution for translated documentation trees
//!
//! Docfam groups per-locale files (`index.mdx`, `index.zh.mdx`, `messages/en.json`, ...)
//! into document families, elects the source of truth in each family for the next
//! translation pass, and plans which locale variants to create or update. The actual
//! translation is delegated to an external backend.
//!
//! ## Module Structure
//!
//! - `backend`: Translation backend trait and the external command backend
//! - `cli`: Command-line interface layer (user-facing commands and reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Classification, family building, resolution and planning

pub mod backend;
pub mod cli;
pub mod config;
pub mod core;
