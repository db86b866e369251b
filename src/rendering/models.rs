use bevy::prelude::*;

use super::stack::ModelBuilder;

/// Primitive a model part is drawn with. Every primitive is unit-sized and
/// takes its size from the part transform, except where it carries its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Unit cube centred on the origin.
    Cuboid,
    /// Upright cylinder centred on the origin.
    Cylinder { radius: f32, height: f32 },
    /// Unit square in the XZ plane, facing down.
    Quad,
    Sphere { radius: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Part {
    pub shape: Shape,
    /// Placement relative to the model root.
    pub transform: Transform,
    /// sRGB colour with alpha.
    pub color: [f32; 4],
    pub unlit: bool,
}

/// Uniform scale applied to the airplane model on top of its parts.
pub const AIRPLANE_SCALE: f32 = 2.0;

/// Box-built airplane, nose along +Z.
pub fn airplane() -> Vec<Part> {
    let mut model = ModelBuilder::new();

    // Fuselage, nose, cockpit, tail
    model
        .cuboid([0.0, 0.0, 0.0], [1.2, 1.2, 7.0], [0.85, 0.86, 0.90])
        .cuboid([0.0, 0.0, 4.5], [0.9, 0.9, 1.8], [0.80, 0.82, 0.88])
        .cuboid([0.0, 0.35, 4.4], [0.7, 0.4, 0.8], [0.15, 0.25, 0.45])
        .cuboid([0.0, 0.0, -4.5], [0.9, 0.9, 2.5], [0.83, 0.84, 0.88]);

    let wing = [0.90, 0.92, 0.95];
    let wing_tip = [0.75, 0.77, 0.80];
    for side in [-1.0, 1.0] {
        model
            .cuboid([3.8 * side, -0.1, 0.0], [5.5, 0.2, 2.0], wing)
            .cuboid([6.4 * side, -0.1, 0.0], [0.5, 0.22, 2.1], wing_tip);
    }

    // Tailplane and fin
    model
        .cuboid([0.0, 0.3, -5.2], [3.0, 0.18, 1.4], wing)
        .cuboid([0.0, 1.6, -5.0], [0.6, 2.2, 1.2], [0.82, 0.83, 0.88]);

    for side in [-1.0, 1.0] {
        model
            .cuboid([2.2 * side, -0.9, 0.4], [0.9, 0.9, 1.8], [0.45, 0.47, 0.50])
            .cuboid([2.2 * side, -0.9, 1.4], [0.8, 0.8, 0.3], [0.20, 0.22, 0.25]);
    }

    model.finish()
}

/// Trunk standing on the origin with two stacked cubes for a crown.
pub fn tree() -> Vec<Part> {
    let mut model = ModelBuilder::new();
    let (radius, height) = (0.12, 1.5);

    {
        let mut trunk = model.push();
        trunk
            .translate(0.0, height * 0.5, 0.0)
            .part(Shape::Cylinder { radius, height }, [0.38, 0.26, 0.15]);
    }

    let crown = [0.05, 0.45, 0.15];
    model
        .translate(0.0, height, 0.0)
        .uniform_scale(1.6)
        .part(Shape::Cuboid, crown)
        .translate(0.0, 0.8, 0.0)
        .uniform_scale(0.7)
        .part(Shape::Cuboid, crown);

    model.finish()
}

/// Walls centred on the origin with a flattened roof block on top.
pub fn house() -> Vec<Part> {
    let mut model = ModelBuilder::new();
    model
        .scale(4.0, 3.0, 4.0)
        .part(Shape::Cuboid, [0.75, 0.70, 0.65])
        .translate(0.0, 0.7, 0.0)
        .scale(1.0, 0.6, 1.0)
        .part(Shape::Cuboid, [0.45, 0.15, 0.12]);
    model.finish()
}

/// Three overlapping translucent sheets, one unit across.
pub fn cloud() -> Vec<Part> {
    let white = [1.0, 1.0, 1.0, 0.8];
    let mut model = ModelBuilder::new();
    model.unlit_part(Shape::Quad, white);

    for (dx, dz, s) in [(-0.15, 0.15, 0.7), (0.15, -0.1, 0.6)] {
        let mut puff = model.push();
        puff.translate(dx, 0.0, dz)
            .scale(s, 1.0, s)
            .unlit_part(Shape::Quad, white);
    }

    model.finish()
}

/// Sun or moon sphere; its colour is replaced per time of day.
pub fn sky_body(radius: f32) -> Part {
    Part {
        shape: Shape::Sphere { radius },
        transform: Transform::IDENTITY,
        color: [1.0, 1.0, 1.0, 1.0],
        unlit: true,
    }
}
