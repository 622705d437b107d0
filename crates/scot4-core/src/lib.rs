//! # SCOT4 Core
//!
//! Core utilities, configuration management, and logging for the SCOT4
//! secret manifest generator.
//!
//! This crate provides:
//!
//! - **Configuration**: where skeleton templates live and where manifests go
//! - **Logging**: `tracing` subscriber setup
//! - **File Operations**: YAML loading and block-style YAML writing
//!
//! ## Example
//!
//! ```no_run
//! use scot4_core::config::LayoutConfig;
//!
//! let layout = LayoutConfig::default().with_base_dir("/srv/scot4-deploy");
//! layout.ensure_templates_exist()?;
//!
//! let skeleton = scot4_core::util::load_yaml_file(layout.env_template_path())?;
//! # Ok::<(), scot4_core::Scot4Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod log;
pub mod util;

// Re-export commonly used items
pub use config::LayoutConfig;
pub use scot4_types::{Scot4Error, Result};
