use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use crate::resources::{Ground, TerrainConfig, WorldOffset};
use crate::utils::heading_vector;

/// Vertex data of the ground patch, in the vehicle-local frame.
#[derive(Debug, Clone, Default)]
pub struct GroundPatchData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

/// Centre of the patch: behind the vehicle by the trailing offset, so more
/// ground is visible ahead than behind.
pub fn patch_center(heading_deg: f64, trailing_offset: f32) -> Vec2 {
    let (hx, hz) = heading_vector(heading_deg);
    Vec2::new(-(hx as f32), -(hz as f32)) * trailing_offset
}

/// Build the square ground patch around the vehicle.
///
/// Heights and texture coordinates come from world coordinates, so the
/// surface and its texture stay fixed to the world while the patch follows
/// the vehicle. UVs are shifted by whole texture repeats to stay small.
pub fn ground_patch(
    config: &TerrainConfig,
    heading_deg: f64,
    offset: &WorldOffset,
    ground: &Ground,
) -> GroundPatchData {
    let cells = config.resolution.max(1);
    let side = cells + 1;
    let half = config.half_size;
    let step = 2.0 * half / cells as f32;
    let center = patch_center(heading_deg, config.trailing_offset);
    let corner = center - Vec2::splat(half);

    let tex = config.texture_scale as f64;
    let corner_world = offset.to_world(DVec2::new(corner.x as f64, corner.y as f64));
    let uv_base = (corner_world / tex).floor();

    let vertex_count = (side * side) as usize;
    let mut data = GroundPatchData {
        positions: Vec::with_capacity(vertex_count),
        normals: Vec::with_capacity(vertex_count),
        uvs: Vec::with_capacity(vertex_count),
        indices: Vec::with_capacity((cells * cells * 6) as usize),
    };

    let eps = (step as f64 * 0.5).max(0.1);
    for j in 0..side {
        for i in 0..side {
            let local = corner + Vec2::new(i as f32 * step, j as f32 * step);
            let world = offset.to_world(DVec2::new(local.x as f64, local.y as f64));
            let height = ground.height_world(world.x, world.y);

            let dx = ground.height_world(world.x - eps, world.y)
                - ground.height_world(world.x + eps, world.y);
            let dz = ground.height_world(world.x, world.y - eps)
                - ground.height_world(world.x, world.y + eps);
            let normal = Vec3::new(dx as f32, (2.0 * eps) as f32, dz as f32).normalize();

            let uv = world / tex - uv_base;

            data.positions.push([local.x, height as f32, local.y]);
            data.normals.push(normal.to_array());
            data.uvs.push([uv.x as f32, uv.y as f32]);
        }
    }

    for j in 0..cells {
        for i in 0..cells {
            let a = j * side + i;
            let b = a + 1;
            let c = a + side;
            let d = c + 1;
            data.indices.extend_from_slice(&[a, c, b, b, c, d]);
        }
    }

    data
}

impl GroundPatchData {
    pub fn into_mesh(self) -> Mesh {
        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, self.uvs)
        .with_inserted_indices(Indices::U32(self.indices))
    }
}
