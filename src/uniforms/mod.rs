//! Per-instance uniform storage.
//!
//! Holds one [`InstanceUniforms`] record per instance in the layout the
//! instanced shader reads. Broadcast channels (focus point, hover strength)
//! keep a canonical value and are fanned out to every record by
//! [`UniformStore::set_all`]; static channels are written per index once at
//! build time by [`UniformStore::set_one`].

mod store;

pub use store::{BroadcastValue, InstanceUniforms, InstanceValue, UniformStore};
