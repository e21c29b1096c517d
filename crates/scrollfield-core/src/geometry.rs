//! Wireframe polyhedra for the central mesh and the node cloud.
//!
//! Faces are subdivided on an integer barycentric grid and projected onto
//! the sphere. Grid points are keyed by their exact weights over the base
//! vertices, so points on shared edges merge without any distance epsilon.

use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;
use smallvec::SmallVec;

/// Line-list mesh: unique vertex positions plus unique undirected edges.
#[derive(Clone, Debug, Default)]
pub struct LineMesh {
    pub positions: Vec<Vec3>,
    pub edges: Vec<[u32; 2]>,
}

impl LineMesh {
    /// Flattened index buffer for a line-list draw.
    pub fn line_indices(&self) -> Vec<u32> {
        self.edges.iter().flat_map(|e| [e[0], e[1]]).collect()
    }
}

const PHI: f32 = 1.618_034;

const ICOSAHEDRON_VERTICES: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

const INV_PHI: f32 = 1.0 / PHI;

const DODECAHEDRON_VERTICES: [[f32; 3]; 20] = [
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [0.0, -INV_PHI, -PHI],
    [0.0, -INV_PHI, PHI],
    [0.0, INV_PHI, -PHI],
    [0.0, INV_PHI, PHI],
    [-INV_PHI, -PHI, 0.0],
    [-INV_PHI, PHI, 0.0],
    [INV_PHI, -PHI, 0.0],
    [INV_PHI, PHI, 0.0],
    [-PHI, 0.0, -INV_PHI],
    [PHI, 0.0, -INV_PHI],
    [-PHI, 0.0, INV_PHI],
    [PHI, 0.0, INV_PHI],
];

// Each pentagon is fanned into three triangles.
const DODECAHEDRON_FACES: [[u32; 3]; 36] = [
    [3, 11, 7],
    [3, 7, 15],
    [3, 15, 13],
    [7, 19, 17],
    [7, 17, 6],
    [7, 6, 15],
    [17, 4, 8],
    [17, 8, 10],
    [17, 10, 6],
    [8, 0, 16],
    [8, 16, 2],
    [8, 2, 10],
    [0, 12, 1],
    [0, 1, 18],
    [0, 18, 16],
    [6, 10, 2],
    [6, 2, 13],
    [6, 13, 15],
    [2, 16, 18],
    [2, 18, 3],
    [2, 3, 13],
    [18, 1, 9],
    [18, 9, 11],
    [18, 11, 3],
    [4, 14, 12],
    [4, 12, 0],
    [4, 0, 8],
    [11, 9, 5],
    [11, 5, 19],
    [11, 19, 7],
    [19, 5, 14],
    [19, 14, 4],
    [19, 4, 17],
    [1, 12, 14],
    [1, 14, 5],
    [1, 5, 9],
];

pub fn icosahedron(radius: f32, detail: u32) -> LineMesh {
    polyhedron(&ICOSAHEDRON_VERTICES, &ICOSAHEDRON_FACES, radius, detail)
}

pub fn dodecahedron(radius: f32, detail: u32) -> LineMesh {
    polyhedron(&DODECAHEDRON_VERTICES, &DODECAHEDRON_FACES, radius, detail)
}

type WeightKey = SmallVec<[(u32, u32); 3]>;

struct Builder<'a> {
    base: &'a [[f32; 3]],
    radius: f32,
    index_of: FnvHashMap<WeightKey, u32>,
    positions: Vec<Vec3>,
    edges: FnvHashSet<[u32; 2]>,
}

impl Builder<'_> {
    fn vertex(&mut self, weights: [(u32, u32); 3]) -> u32 {
        let mut key: WeightKey = weights.iter().copied().filter(|(_, w)| *w > 0).collect();
        key.sort_unstable();
        if let Some(&i) = self.index_of.get(&key) {
            return i;
        }
        let mut p = Vec3::ZERO;
        for &(v, w) in &key {
            p += Vec3::from(self.base[v as usize]) * w as f32;
        }
        let p = p.normalize_or_zero() * self.radius;
        let i = self.positions.len() as u32;
        self.positions.push(p);
        self.index_of.insert(key, i);
        i
    }

    fn triangle(&mut self, a: u32, b: u32, c: u32) {
        for (x, y) in [(a, b), (b, c), (c, a)] {
            self.edges.insert([x.min(y), x.max(y)]);
        }
    }
}

fn polyhedron(base: &[[f32; 3]], faces: &[[u32; 3]], radius: f32, detail: u32) -> LineMesh {
    let n = detail + 1;
    let mut b = Builder {
        base,
        radius,
        index_of: FnvHashMap::default(),
        positions: Vec::new(),
        edges: FnvHashSet::default(),
    };
    for &[fa, fb, fc] in faces {
        // grid[i][j]: i steps toward c, j steps from a toward b within row i
        let grid: Vec<Vec<u32>> = (0..=n)
            .map(|i| {
                (0..=n - i)
                    .map(|j| b.vertex([(fa, n - i - j), (fb, j), (fc, i)]))
                    .collect()
            })
            .collect();
        for i in 0..n as usize {
            let row = n as usize - i;
            for j in 0..2 * row - 1 {
                let k = j / 2;
                if j % 2 == 0 {
                    b.triangle(grid[i][k + 1], grid[i + 1][k], grid[i][k]);
                } else {
                    b.triangle(grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]);
                }
            }
        }
    }
    let mut edges: Vec<[u32; 2]> = b.edges.into_iter().collect();
    edges.sort_unstable();
    LineMesh {
        positions: b.positions,
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_icosahedron_counts() {
        let m = icosahedron(1.0, 0);
        assert_eq!(m.positions.len(), 12);
        assert_eq!(m.edges.len(), 30);
    }

    #[test]
    fn subdivided_icosahedron_counts() {
        // 10 * n^2 + 2 vertices and 30 * n^2 edges for n = detail + 1
        let m = icosahedron(6.0, 3);
        assert_eq!(m.positions.len(), 162);
        assert_eq!(m.edges.len(), 480);
    }

    #[test]
    fn dodecahedron_counts() {
        let m = dodecahedron(1.5, 0);
        assert_eq!(m.positions.len(), 20);
        // 30 pentagon edges plus 2 fan diagonals per face
        assert_eq!(m.edges.len(), 54);
    }
}
