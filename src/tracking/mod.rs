//! Tracked targets: ids, the host-facing traits, the membership set, and the
//! lifecycle hooks that keep it current.

mod lifecycle;
mod registry;
mod target;

pub use lifecycle::TrackedObject;
pub use registry::TargetRegistry;
pub use target::{BodyTarget, TargetId, TargetLookup, Trackable};
