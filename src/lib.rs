//! Xala - design-system compliance checks and migration tooling
//!
//! Regex-based analysis of React/TypeScript sources against the Xala UI
//! System conventions, plus phased text rewrites toward them.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod mappings;
pub mod migration;
pub mod models;
pub mod reporters;
pub mod rules;
pub mod scanner;
pub mod scoring;
pub mod transform;
