//! Configuration module for SEO-Lens
//!
//! Audits run with [`Config::default`] unless a TOML file is supplied. The
//! file is parsed and validated before any request is made.
//!
//! # Example
//!
//! ```no_run
//! use seo_lens::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("seo-lens.toml")).unwrap();
//! println!("Probing up to {} links", config.audit.probe_limit);
//! ```

mod parser;
mod types;
mod validation;

pub use types::{AuditSettings, Config, UserAgentConfig};

pub use parser::{load_config, parse_config};
pub use validation::validate;
