// Vertex data for the debug scene: anchor cubes and axis reference lines.

use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

// 12 triangles, counter-clockwise seen from outside
const CUBE_CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];
const CUBE_INDICES: [usize; 36] = [
    0, 2, 1, 0, 3, 2, // -z
    4, 5, 6, 4, 6, 7, // +z
    0, 1, 5, 0, 5, 4, // -y
    3, 7, 6, 3, 6, 2, // +y
    0, 4, 7, 0, 7, 3, // -x
    1, 2, 6, 1, 6, 5, // +x
];

/// Append a triangle-list cube centred on `center`.
pub fn push_cube(out: &mut Vec<Vertex>, center: Vec3, half_extent: f32, color: [f32; 4]) {
    out.extend(CUBE_INDICES.iter().map(|&i| {
        let corner = Vec3::from_array(CUBE_CORNERS[i]);
        Vertex {
            position: (center + corner * half_extent).to_array(),
            color,
        }
    }));
}

/// Append a line-list segment.
pub fn push_line(out: &mut Vec<Vertex>, from: Vec3, to: Vec3, color: [f32; 4]) {
    out.push(Vertex {
        position: from.to_array(),
        color,
    });
    out.push(Vertex {
        position: to.to_array(),
        color,
    });
}

#[inline]
pub fn with_alpha(rgb: [f32; 3], alpha: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], alpha]
}
