//! Procedural terrain chunks for the streamed ground grid.
//!
//! The surface is a fixed analytic function of world position, so the same
//! chunk coordinates always yield bit-identical geometry regardless of the
//! order in which chunks are generated.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Horizontal frequency of the height function.
const HEIGHT_FREQUENCY: f32 = 0.05;
/// Peak height of the surface.
const HEIGHT_AMPLITUDE: f32 = 3.0;

/// Integer address of a chunk on the ground grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkKey {
    pub x: i32,
    pub z: i32,
}

impl ChunkKey {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// `max(|dx|, |dz|)`: the ring this key sits on around `other`.
    pub fn chebyshev_distance(&self, other: ChunkKey) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    /// Every key within `radius` of this one, row by row along +Z.
    pub fn window(&self, radius: i32) -> impl Iterator<Item = ChunkKey> {
        let center = *self;
        (center.x - radius..=center.x + radius).flat_map(move |x| {
            (center.z - radius..=center.z + radius).map(move |z| ChunkKey::new(x, z))
        })
    }
}

impl From<(i32, i32)> for ChunkKey {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}

/// A line between two vertices of the same mesh.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Edge {
    pub a: u32,
    pub b: u32,
}

impl Edge {
    pub const fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }
}

/// Static geometry of one terrain tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainChunk {
    key: ChunkKey,
    points_per_side: u32,
    vertices: Vec<Vec3>,
    edges: Vec<Edge>,
}

impl TerrainChunk {
    /// Sample the chunk at `key`.
    ///
    /// The chunk is centred at `key * 2 * size` and spans `[-size, +size]`
    /// on both axes with a point every `grid_spacing` units. `size` and
    /// `grid_spacing` must be positive; configuration validates both.
    pub fn generate(key: ChunkKey, size: u32, grid_spacing: u32) -> Self {
        let points_per_side = 2 * size / grid_spacing + 1;
        let side = points_per_side as usize;
        let half = size as f32;
        let step = grid_spacing as f32;
        let origin_x = key.x as f32 * 2.0 * half;
        let origin_z = key.z as f32 * 2.0 * half;

        let mut vertices = Vec::with_capacity(side * side);
        for row in 0..side {
            let world_z = origin_z - half + row as f32 * step;
            for col in 0..side {
                let world_x = origin_x - half + col as f32 * step;
                vertices.push(Vec3::new(world_x, height_at(world_x, world_z), world_z));
            }
        }

        // Right and down neighbour of every cell corner; the last row and
        // column contribute no edges of their own.
        let cells = side.saturating_sub(1);
        let mut edges = Vec::with_capacity(2 * cells * cells);
        for row in 0..cells {
            for col in 0..cells {
                let idx = (row * side + col) as u32;
                edges.push(Edge::new(idx, idx + 1));
                edges.push(Edge::new(idx, idx + points_per_side));
            }
        }

        Self {
            key,
            points_per_side,
            vertices,
            edges,
        }
    }

    pub fn key(&self) -> ChunkKey {
        self.key
    }

    pub fn points_per_side(&self) -> u32 {
        self.points_per_side
    }

    /// Row-major grid points, rows advancing along +Z.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges as a flat line-list index buffer.
    pub fn index_buffer(&self) -> &[u32] {
        bytemuck::cast_slice(&self.edges)
    }

    /// Endpoints of every edge, for immediate-mode line drawing.
    pub fn line_segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.edges
            .iter()
            .map(|e| (self.vertices[e.a as usize], self.vertices[e.b as usize]))
    }
}

/// Generate the chunk at `(chunk_x, chunk_z)`.
pub fn generate_chunk(chunk_x: i32, chunk_z: i32, size: u32, grid_spacing: u32) -> TerrainChunk {
    TerrainChunk::generate(ChunkKey::new(chunk_x, chunk_z), size, grid_spacing)
}

/// Surface height at a world position.
#[inline]
pub fn height_at(world_x: f32, world_z: f32) -> f32 {
    (world_x * HEIGHT_FREQUENCY).sin() * (world_z * HEIGHT_FREQUENCY).cos() * HEIGHT_AMPLITUDE
}
