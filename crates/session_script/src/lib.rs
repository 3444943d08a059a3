//! # session_script
//!
//! Key scripts replayed through an [`EditSession`](input_core::EditSession),
//! for golden tests and the `numfield-replay` tool.
//!
//! A script is a TOML document: an `[options]` table (a
//! [`FormatOptions`](policy::FormatOptions)), an `initial` value and a list
//! of `steps`. Replaying it yields one [`StepReport`] per step, each
//! rendering to a single transcript line.

mod diff;
mod run;
mod script;

pub use diff::{diff_lines, escape_text, render_caret};
pub use run::{StepReport, describe_notification, run};
pub use script::{KeyStroke, Script, ScriptError, Step};
