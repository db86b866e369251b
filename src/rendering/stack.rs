use bevy::prelude::*;
use std::ops::{Deref, DerefMut};

use super::models::{Part, Shape};

/// Builds a model as a flat list of parts, the way immediate-mode drawing
/// code nests transforms.
///
/// [`ModelBuilder::push`] saves the current transform and hands back a
/// [`Scope`]; the saved transform is restored when the scope is dropped, so
/// an early return can never leave the stack unbalanced.
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    current: Transform,
    saved: Vec<Transform>,
    parts: Vec<Part>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Transform {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.current = self
            .current
            .mul_transform(Transform::from_xyz(x, y, z));
        self
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.current = self
            .current
            .mul_transform(Transform::from_scale(Vec3::new(x, y, z)));
        self
    }

    pub fn uniform_scale(&mut self, s: f32) -> &mut Self {
        self.scale(s, s, s)
    }

    pub fn rotate(&mut self, rotation: Quat) -> &mut Self {
        self.current = self
            .current
            .mul_transform(Transform::from_rotation(rotation));
        self
    }

    pub fn push(&mut self) -> Scope<'_> {
        self.saved.push(self.current);
        Scope { builder: self }
    }

    /// Emit a lit part at the current transform.
    pub fn part(&mut self, shape: Shape, color: [f32; 3]) -> &mut Self {
        self.parts.push(Part {
            shape,
            transform: self.current,
            color: [color[0], color[1], color[2], 1.0],
            unlit: false,
        });
        self
    }

    /// Emit a part that ignores scene lighting.
    pub fn unlit_part(&mut self, shape: Shape, color: [f32; 4]) -> &mut Self {
        self.parts.push(Part {
            shape,
            transform: self.current,
            color,
            unlit: true,
        });
        self
    }

    /// Unit cube scaled to `size` and centred on `center`.
    pub fn cuboid(&mut self, center: [f32; 3], size: [f32; 3], color: [f32; 3]) -> &mut Self {
        let mut scope = self.push();
        scope
            .translate(center[0], center[1], center[2])
            .scale(size[0], size[1], size[2])
            .part(Shape::Cuboid, color);
        drop(scope);
        self
    }

    pub fn finish(self) -> Vec<Part> {
        self.parts
    }
}

pub struct Scope<'a> {
    builder: &'a mut ModelBuilder,
}

impl Deref for Scope<'_> {
    type Target = ModelBuilder;

    fn deref(&self) -> &ModelBuilder {
        self.builder
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut ModelBuilder {
        self.builder
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.builder.saved.pop() {
            self.builder.current = saved;
        }
    }
}
