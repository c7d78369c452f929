//! podist - packaging driver for gettext-localized script distributions
//!
//! podist stages a project's scripts and data files, keeps its gettext
//! translation catalogs in sync with the sources, and installs everything,
//! compiled translations included, under a target root.
//!
//! ## Module Structure
//!
//! - `catalog`: Template generation, catalog merging and catalog installation
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `package`: Script staging and script/data file installation
//! - `project`: Project root discovery and path layout
//! - `tools`: Invocation of the external gettext tools

pub mod catalog;
pub mod cli;
pub mod config;
pub mod package;
pub mod project;
pub mod tools;
