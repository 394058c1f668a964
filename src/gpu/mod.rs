//! GPU resource management utilities.
//!
//! Growable wgpu buffers and the per-engine instance buffer set that mirrors
//! [`RenderState`](crate::engine::RenderState) on the GPU.

/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// Instance, uniform and camera buffers kept in sync with the engine.
pub mod instance_buffers;

pub use dynamic_buffer::{DynamicBuffer, TypedBuffer};
pub use instance_buffers::{
    InstanceBuffers, SyncReport, UploadPlan, UploadTracker,
};
