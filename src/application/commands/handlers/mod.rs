//! Command Handlers

mod render_handlers;

pub use render_handlers::{RenderScriptHandler, RenderScriptResponse};
