//! Screen model and pure flow bookkeeping.
//!
//! This module contains the pure side of the screen flow:
//! - `Screen` and `FlowEvent`, the states and inputs of the flow
//! - Guard predicates for transition control
//! - Immutable screen history
//!
//! Nothing here performs I/O; effects live in `crate::effects`.

mod event;
mod guard;
mod history;
mod screen;

pub use event::{EventKind, FlowEvent};
pub use guard::Guard;
pub use history::{ScreenChange, ScreenHistory};
pub use screen::{Screen, ScreenKind};
