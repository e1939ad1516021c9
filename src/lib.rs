//! # Mimus - Mock Payload Generator
//!
//! Mimus synthesizes realistic mock request/response payloads from an
//! already-dereferenced OpenAPI document, and assembles ordered test-case
//! suites from hierarchical collections of test-definition files.
//!
//! ## Features
//!
//! - **Schema-driven generation**: walks object/array/primitive schema trees
//!   and fills leaves with domain-aware synthetic values
//! - **Field semantics**: field names, declared patterns and formats resolve
//!   to semantic categories (currency, UUID, FSP identifier, geo coordinate, ...)
//! - **Reference overrides**: caller-supplied dotted-path overrides force a
//!   field's generated shape before walking
//! - **Cross-field consistency**: sibling `fees.currency` always follows
//!   `amount.currency`
//! - **Test-suite assembly**: flat file lists become manifest-ordered trees,
//!   flattened into one re-numbered test-case sequence
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mimus::adapters::mock_generator::MockPayloadGenerator;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let spec = json!({ "paths": {} });
//!     let generator = MockPayloadGenerator::new(spec);
//!     let body = generator.generate_request_body("/quotes", "post", &[]).await;
//!     println!("{}", body);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Mimus follows Hexagonal Architecture:
//! - **Domain**: semantic classification, core types, error taxonomy
//! - **Adapters**: generation engines, tree builder/assembler, loaders
//! - **Config**: configuration management

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

pub use adapters::mock_generator::MockPayloadGenerator;
pub use adapters::testcase_assembler::{assemble, flatten, sequence_test_cases};
pub use domain::{FolderNode, RefOverride};
