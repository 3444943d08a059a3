//! # input_core
//!
//! UI-agnostic editing state for formatted numeric fields.
//!
//! - [`EditSession`]: one field's display, raw value, caret and selection,
//!   driven by focus, key, paste and submit events
//! - [`FieldRegistry`]: sessions keyed by [`InputId`], focus routing and
//!   persistence through a [`ValueStorage`]
//! - [`SelectionRange`] and the caret helpers: byte offsets that always
//!   fall on UTF-8 character boundaries
//!
//! The crate does not depend on any graphics framework, layout system or
//! platform API. Hosts translate their events into calls on a session and
//! copy [`EditSession::formatted_value`] and the caret back into the
//! element.
//!
//! ```
//! use input_core::{EditSession, HostElement, Key, Modifiers};
//! use policy::FormatOptions;
//!
//! let host = HostElement::input(Some("text"));
//! let mut field = EditSession::with_options(&host, &FormatOptions::dollar(), "").unwrap();
//! field.on_focus_gained();
//! for ch in "1234.5".chars() {
//!     field.on_key_down(Key::Char(ch), Modifiers::NONE);
//!     field.on_key_press(ch);
//! }
//! assert_eq!(field.formatted_value(), "$1,234.5");
//! field.on_focus_lost();
//! assert_eq!(field.formatted_value(), "$1,234.50");
//! assert_eq!(field.raw_value(), "1234.5");
//! ```

mod caret;
mod error;
mod host;
mod id;
mod key;
mod notification;
mod registry;
mod selection;
mod session;
mod storage;

pub use caret::{
    clamp_to_char_boundary, next_cursor_boundary, numeric_span, prev_cursor_boundary,
    relocate_caret,
};
pub use error::SessionError;
pub use host::{HostElement, HostKind, host_kind};
pub use id::InputId;
pub use key::{Key, KeyOutcome, Modifiers, UnknownKey};
pub use notification::Notification;
pub use registry::FieldRegistry;
pub use selection::SelectionRange;
pub use session::EditSession;
pub use storage::{MemoryStorage, ValueStorage};
