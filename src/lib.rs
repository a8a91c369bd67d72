// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Follow-and-zoom camera controller for keeping a group of objects in view.
//!
//! Each frame the controller moves a camera rig toward the center of the
//! tracked objects' positions with a critically damped smooth-damp, then
//! nudges the camera in or out along its forward axis depending on whether
//! every object's render bounds fit inside the view frustum.
//!
//! # Key entry points
//!
//! - [`controller::GroupCameraController`] - owns the target set and the rig,
//!   advanced once per frame with
//!   [`late_update`](controller::GroupCameraController::late_update)
//! - [`tracking`] - target ids, the [`Trackable`](tracking::Trackable) and
//!   [`TargetLookup`](tracking::TargetLookup) host seams, and lifecycle hooks
//! - [`camera`] - projection, rig transform and frustum extraction
//! - [`options::Options`] - speed, smoothing and projection settings with
//!   TOML preset support
//!
//! # Host integration
//!
//! The crate never owns scene objects. The host keeps its objects wherever it
//! likes, implements [`TargetLookup`](tracking::TargetLookup) to resolve ids,
//! and calls `late_update` after all game logic for the frame has run.

pub mod camera;
pub mod controller;
pub mod error;
pub mod options;
pub mod tracking;
pub mod util;
