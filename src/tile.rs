//! Fundamental tile geometry
//!
//! The fundamental tile is a maximal region that doesn't overlap itself
//! when the group acts on it; its transformed copies tile the whole sphere.
//! Here it is one or more triangles forming a closed fan, with every vertex
//! at distance 1 from the origin. One triangle starts from the north pole
//! and extends in the X direction, and the XZ plane is a mirror whenever
//! the group has any mirrors. Different dispositions occur according to the
//! order of the centers in the orbifold signature.
//!
//! Hosts that reuse an existing object's data ("symmetry group from
//! object") never call this; it exists for the Tile entry point that asks
//! the engine to supply geometry.
//!
//! Author: Moroya Sakamoto

use crate::group::{pyritohedral_apex, triangle_vertices};
use crate::types::{Embedding, GroupSpec};
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Triangle mesh of the fundamental tile, vertices on the unit sphere
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileMesh {
    /// Vertex positions, all at distance 1 from the origin
    pub vertices: Vec<DVec3>,
    /// Triangles as vertex indices
    pub faces: Vec<[u32; 3]>,
}

impl TileMesh {
    fn new(vertices: Vec<DVec3>, faces: Vec<[u32; 3]>) -> Self {
        TileMesh { vertices, faces }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Octahedron vertices: the default tile when there is no symmetry at all
fn octahedron() -> Vec<DVec3> {
    vec![
        DVec3::Z,
        -DVec3::Z,
        DVec3::X,
        -DVec3::X,
        DVec3::Y,
        -DVec3::Y,
    ]
}

/// Compute the fundamental tile for a group specification.
pub fn fundamental_tile(spec: &GroupSpec) -> TileMesh {
    match &spec.embedding {
        Embedding::Trivial => TileMesh::new(
            octahedron(),
            vec![
                [0, 2, 4],
                [0, 5, 2],
                [0, 4, 3],
                [0, 3, 5],
                [1, 4, 2],
                [1, 2, 5],
                [1, 3, 4],
                [1, 5, 3],
            ],
        ),
        // A hemisphere: half the octahedron, cut along the mirror
        Embedding::MirrorOnly | Embedding::Rotoreflection { n: 1 } => {
            let mut vertices = octahedron();
            vertices.pop();
            TileMesh::new(vertices, vec![[0, 2, 4], [0, 4, 3], [1, 4, 2], [1, 3, 4]])
        }
        // A full lune of width 2*pi/n around the pole axis
        Embedding::Cyclic { n } => {
            let step = PI / f64::from(*n);
            TileMesh::new(
                vec![
                    DVec3::Z,
                    -DVec3::Z,
                    DVec3::X,
                    DQuat::from_axis_angle(DVec3::Z, step) * DVec3::X,
                    DQuat::from_axis_angle(DVec3::Z, 2.0 * step) * DVec3::X,
                ],
                vec![[0, 2, 3], [0, 3, 4], [1, 3, 2], [1, 4, 3]],
            )
        }
        // Half-lune between two adjacent mirrors
        Embedding::Kaleido { n } => {
            let step = PI / f64::from(*n);
            TileMesh::new(
                vec![
                    DVec3::Z,
                    -DVec3::Z,
                    DVec3::X,
                    DQuat::from_axis_angle(DVec3::Z, step) * DVec3::X,
                ],
                vec![[0, 2, 3], [1, 3, 2]],
            )
        }
        // Wedge on the upper hemisphere around the Y axis
        Embedding::HorizontalMirror { n } | Embedding::Rotoreflection { n } => {
            let step = PI / f64::from(*n);
            let pb = DVec3::Z;
            TileMesh::new(
                vec![
                    DVec3::Y,
                    pb,
                    DQuat::from_axis_angle(DVec3::Y, step) * pb,
                    DQuat::from_axis_angle(DVec3::Y, 2.0 * step) * pb,
                ],
                vec![[0, 1, 2], [0, 2, 3]],
            )
        }
        Embedding::Antiprismatic { n } => {
            let half = PI / (2.0 * f64::from(*n));
            let pb = DVec3::Z;
            TileMesh::new(
                vec![
                    DVec3::X,
                    pb,
                    DQuat::from_axis_angle(DVec3::X, half) * pb,
                    DQuat::from_axis_angle(DVec3::X, 2.0 * half) * pb,
                ],
                vec![[0, 1, 2], [0, 2, 3]],
            )
        }
        Embedding::Pyritohedral => {
            let pa = DVec3::Z;
            let pb = DQuat::from_axis_angle(DVec3::Y, PI / 4.0) * pa;
            let pc = DVec3::X;
            let pd = pyritohedral_apex();
            TileMesh::new(vec![pa, pb, pc, pd], vec![[0, 1, 3], [1, 2, 3]])
        }
        Embedding::Triangle { orders, mirrored } => {
            let [m, n, p] = *orders;
            let (pa, pb, pc) = triangle_vertices(m, n, p);
            if *mirrored {
                TileMesh::new(vec![pa, pb, pc], vec![[0, 1, 2]])
            } else {
                // The gyrational domain is the doubled triangle: the mirror
                // image of pc joins the fan
                let pc_mirrored = DVec3::new(pc.x, -pc.y, pc.z);
                TileMesh::new(vec![pa, pb, pc, pc_mirrored], vec![[0, 1, 2], [0, 3, 1]])
            }
        }
    }
}
