//! GPU-side copies of the instance table, uniforms and camera.

use wgpu::util::DeviceExt;

use super::dynamic_buffer::TypedBuffer;
use crate::camera::CameraUniform;
use crate::engine::RenderState;
use crate::placement::{CubeGeometry, CubeVertex};
use crate::uniforms::InstanceUniforms;

/// Which parts of a [`RenderState`] need uploading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UploadPlan {
    /// Transforms changed (new scene).
    pub transforms: bool,
    /// Uniform records changed (new scene or store writes).
    pub uniforms: bool,
}

/// Remembers what was last uploaded so unchanged frames are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct UploadTracker {
    scene_generation: Option<u64>,
    revision: Option<u64>,
}

impl UploadTracker {
    /// Decide what to upload for a frame and record it as uploaded.
    pub fn plan(&mut self, scene_generation: u64, revision: u64) -> UploadPlan {
        let new_scene = self.scene_generation != Some(scene_generation);
        let plan = UploadPlan {
            transforms: new_scene,
            uniforms: new_scene || self.revision != Some(revision),
        };
        self.scene_generation = Some(scene_generation);
        self.revision = Some(revision);
        plan
    }
}

/// Outcome of one [`InstanceBuffers::sync`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncReport {
    /// What was uploaded.
    pub plan: UploadPlan,
    /// A buffer was reallocated; bind groups referencing it must be
    /// rebuilt.
    pub reallocated: bool,
}

/// Instance, uniform, camera and cube geometry buffers for one engine.
#[derive(Debug)]
pub struct InstanceBuffers {
    transforms: TypedBuffer<[f32; 16]>,
    uniforms: TypedBuffer<InstanceUniforms>,
    camera: wgpu::Buffer,
    cube_vertices: wgpu::Buffer,
    cube_indices: wgpu::Buffer,
    cube_index_count: u32,
    tracker: UploadTracker,
}

impl InstanceBuffers {
    /// Allocate buffers sized for `capacity` instances and upload the cube.
    pub fn new(
        device: &wgpu::Device,
        cube: &CubeGeometry,
        capacity: usize,
    ) -> Self {
        let cube_vertices =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cube Vertices"),
                contents: bytemuck::cast_slice::<CubeVertex, u8>(
                    &cube.vertices,
                ),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let cube_indices =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cube Indices"),
                contents: bytemuck::cast_slice::<u16, u8>(&cube.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        let camera =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Uniform"),
                contents: bytemuck::bytes_of(&CameraUniform::new()),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        Self {
            transforms: TypedBuffer::with_capacity(
                device,
                "Instance Transforms",
                capacity,
                wgpu::BufferUsages::VERTEX,
            ),
            uniforms: TypedBuffer::with_capacity(
                device,
                "Instance Uniforms",
                capacity,
                wgpu::BufferUsages::STORAGE,
            ),
            camera,
            cube_vertices,
            cube_indices,
            cube_index_count: cube.indices.len() as u32,
            tracker: UploadTracker::default(),
        }
    }

    /// Upload whatever changed since the last sync.
    ///
    /// Transforms go up once per loaded scene, uniforms whenever the store
    /// revision moved, the camera every call.
    pub fn sync(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        state: &RenderState<'_>,
    ) -> SyncReport {
        let plan = self.tracker.plan(state.scene_generation, state.revision);
        let mut reallocated = false;
        if plan.transforms {
            reallocated |=
                self.transforms.write(device, queue, state.transforms_raw);
        }
        if plan.uniforms {
            reallocated |= self.uniforms.write(device, queue, state.uniforms);
        }
        queue.write_buffer(&self.camera, 0, bytemuck::bytes_of(&state.camera));

        if reallocated {
            log::debug!(
                "instance buffers reallocated for {} instances",
                state.instance_count
            );
        }
        SyncReport { plan, reallocated }
    }

    /// Per-instance transform buffer (vertex step mode: instance).
    pub fn transforms(&self) -> &wgpu::Buffer {
        self.transforms.buffer()
    }

    /// Per-instance uniform storage buffer.
    pub fn uniforms(&self) -> &wgpu::Buffer {
        self.uniforms.buffer()
    }

    /// Camera uniform buffer.
    pub fn camera(&self) -> &wgpu::Buffer {
        &self.camera
    }

    /// Shared cube vertex buffer.
    pub fn cube_vertices(&self) -> &wgpu::Buffer {
        &self.cube_vertices
    }

    /// Shared cube index buffer (`u16`).
    pub fn cube_indices(&self) -> &wgpu::Buffer {
        &self.cube_indices
    }

    /// Indices per cube draw.
    pub fn cube_index_count(&self) -> u32 {
        self.cube_index_count
    }

    /// Instances uploaded by the last transform write.
    pub fn instance_count(&self) -> usize {
        self.transforms.count()
    }
}
