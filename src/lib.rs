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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math: intentional truncating/precision-losing casts and
// float comparisons against exact constants
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::default_trait_access)]

//! Drag-to-rotate 3D object viewer built on wgpu.
//!
//! Spinview renders a single lit object (a cube) and lets the user spin it
//! with a mouse or single-finger drag. Pointer deltas become incremental
//! rotations applied in the viewer's frame, so drag direction always maps
//! to the visible tilt direction no matter how far the object has already
//! been rotated.
//!
//! # Key entry points
//!
//! - [`Viewer`] - standalone winit window (feature `viewer`)
//! - [`RenderEngine`] - the embeddable engine for hosts with their own
//!   event loop
//! - [`DragTracker`] / [`Orientation`] - the interaction core, usable
//!   without a GPU
//! - [`Options`] - runtime configuration (camera projection, scene colors)
//!
//! # Architecture
//!
//! Input events flow through a [`DragTracker`], which emits pixel deltas
//! only while a drag session is active. Deltas are mapped to incremental
//! quaternions and pre-multiplied into the [`Orientation`]; the render
//! loop reads the orientation once per frame and never mutates it. Resizes
//! reconfigure the surface and recompute the camera aspect independently
//! of input.

/// Perspective camera and its GPU uniform.
pub mod camera;
/// Cube mesh and render pipeline.
pub mod cube_renderer;
/// Engine composing GPU context, scene, and interaction.
pub mod engine;
/// Crate-level error types.
pub mod error;
/// GPU resource ownership.
pub mod gpu;
/// Pointer events and drag tracking.
pub mod input;
/// Directional lighting uniform.
pub mod lighting;
/// TOML-backed viewer options.
pub mod options;
/// Quaternion orientation and the drag-to-rotation mapping.
pub mod orientation;
/// Standalone winit viewer window.
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::RenderEngine;
pub use error::SpinviewError;
pub use input::{DragTracker, PointerEvent};
pub use options::Options;
pub use orientation::Orientation;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
