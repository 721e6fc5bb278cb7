//! Deployment asset rendering.

pub mod assets;
pub mod template;

pub use assets::{build_context, render_target, DeployTarget, RenderedAsset};
pub use template::{extract_variables, parse_template, render, Segment, TemplateContext};
