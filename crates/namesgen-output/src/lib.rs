//! Output generation for service name constants.
//!
//! - **Render**: service records through a handlebars template into Go source
//! - **Format**: gofmt-style validation and layout ([`gofmt`])
//! - **Write**: append to or replace the target file

mod error;
pub mod gofmt;
mod render;
mod writer;

pub use error::{OutputError, Result};
pub use gofmt::{FormatError, format_source};
pub use render::{
    DEFAULT_GENERATOR, DEFAULT_PACKAGE, RenderOptions, Renderer, go_quote, render,
};
pub use writer::{WriteMode, ensure_parent_dir, write_output};
