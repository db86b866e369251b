use bevy::math::DVec2;
use bevy::prelude::*;

/// How far the vehicle has travelled from the world origin, on the ground plane.
///
/// The vehicle stays pinned near the local origin and the world scrolls under it:
/// everything stored in world coordinates is drawn at `world - offset`. The
/// offset is kept in `f64` so long flights do not erode precision, and only the
/// small local coordinates are handed to the renderer as `f32`.
///
/// `x` is east-west, `y` of the vector holds the world `z` axis.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct WorldOffset {
    offset: DVec2,
}

impl WorldOffset {
    pub fn new(x: f64, z: f64) -> Self {
        Self {
            offset: DVec2::new(x, z),
        }
    }

    /// Accumulate one tick of planar displacement.
    pub fn advance(&mut self, dx: f64, dz: f64) {
        self.offset.x += dx;
        self.offset.y += dz;
    }

    /// World position of the vehicle.
    pub fn current(&self) -> DVec2 {
        self.offset
    }

    pub fn to_local(&self, world: DVec2) -> DVec2 {
        world - self.offset
    }

    pub fn to_world(&self, local: DVec2) -> DVec2 {
        local + self.offset
    }
}
