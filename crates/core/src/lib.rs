//! Core library for jiratools
//!
//! This crate implements the **Functional Core** of the jiratools
//! application: pure transformation functions with zero I/O. The sibling
//! `jiratools` crate is the Imperative Shell: it owns the HTTP client,
//! configuration, and console output, and calls into this crate for
//! everything that can be computed from plain data.
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`adf`]: Conversion between Atlassian Document Format and plain text
//! - [`error`]: The typed API error taxonomy and error-body parsing
//! - [`fields`]: Request payload builders (issue fields, worklogs, comments)
//! - [`types`]: Domain models for Jira API requests and responses

pub mod adf;
pub mod error;
pub mod fields;
pub mod types;
