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

//! Instanced point-cloud rendering core with animated hover uniforms.
//!
//! Stipple rebuilds a mesh as a cloud of tiny cubes, one instance per source
//! vertex, and keeps a per-instance uniform table in sync with pointer
//! interaction: a ray cast against the original mesh decides whether the
//! pointer hovers it, and eased ramps carry a shared "hover strength" and
//! "focus point" to every instance.
//!
//! # Key entry points
//!
//! - [`engine::Engine`] - load gate, input routing and per-frame advance
//! - [`placement::build_instances`] - vertex buffer to instance table
//! - [`uniforms::UniformStore`] - GPU-layout per-instance uniforms
//! - [`picking::resolve`] - pointer to mesh hit
//! - [`interaction::InteractionMachine`] - Idle/Hovering state machine
//! - [`options::Options`] - runtime configuration (camera, interaction,
//!   placement)
//!
//! # Architecture
//!
//! Everything runs on the host's event thread. Pointer events go through
//! the resolver into the state machine, which only starts or retargets
//! ramps. [`engine::Engine::advance`] ticks the ramps and commits their
//! values to the uniform store; [`engine::Engine::render_state`] then hands
//! out a read-only view for upload via [`gpu::InstanceBuffers`].

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod interaction;
pub mod options;
pub mod picking;
pub mod placement;
pub mod uniforms;
pub mod util;
