//! Host toolchain preflight checks.
//!
//! Before touching the project environment, stagehand verifies that the
//! host interpreters it depends on are resolvable. A missing tool aborts
//! the run with a descriptive message before any setup work happens.

pub mod probe;
pub mod report;
pub mod toolchain;

pub use probe::{is_executable, parse_system_path, resolve_tool_path};
pub use report::PreflightReport;
pub use toolchain::{probe_tool, ToolSpec, ToolStatus};
