//! Low-poly aircraft model in body space: nose along +Z, wings along X.

use glam::Vec3;

use crate::terrain::Edge;

/// Vertex positions and line/triangle topology of the aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftModel {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<Edge>,
    /// Triangle list for solid rendering, with a grey level per triangle.
    pub triangles: Vec<([u32; 3], f32)>,
}

impl AircraftModel {
    /// Triangular fuselage prism with swept wings and a V tail.
    pub fn build() -> Self {
        let vertices = vec![
            // Fuselage
            Vec3::new(0.0, 0.0, 2.0), // nose
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(0.0, 0.5, 0.0),
            // Wingtips
            Vec3::new(-3.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            // Tail
            Vec3::new(0.0, 0.5, -2.0),
            Vec3::new(-1.0, 0.0, -2.0),
            Vec3::new(1.0, 0.0, -2.0),
        ];

        let edges = [
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 2),
            (2, 3),
            (3, 1),
            (1, 4),
            (4, 3),
            (2, 5),
            (5, 3),
            (3, 6),
            (1, 7),
            (7, 6),
            (2, 8),
            (8, 6),
        ]
        .into_iter()
        .map(|(a, b)| Edge::new(a, b))
        .collect();

        let fuselage = 0.7;
        let wing = 0.6;
        let tail = 0.5;
        let triangles = vec![
            ([0, 1, 2], fuselage),
            ([0, 2, 3], fuselage),
            ([0, 3, 1], fuselage),
            ([1, 2, 3], fuselage),
            ([1, 4, 3], wing),
            ([2, 5, 3], wing),
            ([3, 6, 7], tail),
            ([3, 6, 8], tail),
        ];

        Self {
            vertices,
            edges,
            triangles,
        }
    }

    /// Endpoints of every wireframe edge.
    pub fn line_segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.edges
            .iter()
            .map(|e| (self.vertices[e.a as usize], self.vertices[e.b as usize]))
    }

    /// Half the wingspan.
    pub fn half_span(&self) -> f32 {
        self.vertices.iter().map(|v| v.x.abs()).fold(0.0, f32::max)
    }
}

impl Default for AircraftModel {
    fn default() -> Self {
        Self::build()
    }
}
