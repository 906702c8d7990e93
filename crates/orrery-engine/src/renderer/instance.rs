use bytemuck::{Pod, Zeroable};

use crate::core::system::SolarSystem;
use crate::orbit::path::OrbitPath;

/// Per-body render data read by the host renderer.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    /// World position.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Rendered radius (`radius * visual_scale`).
    pub scale: f32,
    /// Orientation quaternion.
    pub qx: f32,
    pub qy: f32,
    pub qz: f32,
    pub qw: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// One instance per body, in arena order (index == `BodyId`).
pub struct InstanceBuffer {
    pub instances: Vec<BodyInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(32),
        }
    }

    /// Repack from the system's current output state.
    pub fn rebuild(&mut self, system: &SolarSystem) {
        self.instances.clear();
        self.instances.extend(system.iter().map(|body| {
            let (p, q) = (body.position, body.orientation);
            BodyInstance {
                x: p.x as f32,
                y: p.y as f32,
                z: p.z as f32,
                scale: body.scaled_radius() as f32,
                qx: q.x as f32,
                qy: q.y as f32,
                qz: q.z as f32,
                qw: q.w as f32,
            }
        }));
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for host-side reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(self.instances.as_slice())
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// A world-space orbit path vertex. 3 floats = 12 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PathVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PathVertex {
    pub const FLOATS: usize = 3;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Every orbit path as one line-strip vertex list.
/// `spans[k]` is the vertex count of the k-th path; paths are contiguous.
pub struct PathBuffer {
    pub vertices: Vec<PathVertex>,
    pub spans: Vec<u32>,
}

impl PathBuffer {
    pub fn new() -> Self {
        Self {
            vertices: Vec::with_capacity(4096),
            spans: Vec::with_capacity(32),
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.spans.clear();
    }

    /// Translate each path onto its parent's current position and pack it.
    /// Paths whose parent is missing are skipped.
    pub fn rebuild(&mut self, paths: &[OrbitPath], system: &SolarSystem) {
        self.clear();
        for path in paths {
            let Some(parent) = system.get(path.parent) else {
                continue;
            };
            let start = self.vertices.len();
            self.vertices.extend(path.translated(parent.position).map(|p| PathVertex {
                x: p.x as f32,
                y: p.y as f32,
                z: p.z as f32,
            }));
            self.spans.push((self.vertices.len() - start) as u32);
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn path_count(&self) -> u32 {
        self.spans.len() as u32
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }

    pub fn spans_ptr(&self) -> *const u32 {
        self.spans.as_ptr()
    }
}

impl Default for PathBuffer {
    fn default() -> Self {
        Self::new()
    }
}
