//! README rendering using Handlebars.
//!
//! The replacement README is a template evaluated once per source
//! repository, so each retired repository points at its own section of the
//! destination.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, ReadmeContext, TemplateRenderer};
