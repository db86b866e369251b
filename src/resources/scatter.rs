use bevy::math::DVec2;
use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::utils::FlyoverError;

/// Per-object data a scatter field re-rolls every time it places an object.
pub trait ScatterAttributes: Clone + Send + Sync + 'static {
    /// Uniform scale applied to the object's model.
    fn scale(&self) -> f32;

    /// Height the object is drawn at, given the ground height below it.
    fn elevation(&self, ground: f64) -> f64 {
        ground
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeAttributes {
    pub scale: f64,
}

impl ScatterAttributes for TreeAttributes {
    fn scale(&self) -> f32 {
        self.scale as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseAttributes {
    pub scale: f64,
}

impl ScatterAttributes for HouseAttributes {
    fn scale(&self) -> f32 {
        self.scale as f32
    }
}

/// Clouds float at their own height but never closer than `clearance` to the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudAttributes {
    pub size: f64,
    pub height: f64,
    pub clearance: f64,
}

impl ScatterAttributes for CloudAttributes {
    fn scale(&self) -> f32 {
        self.size as f32
    }

    fn elevation(&self, ground: f64) -> f64 {
        self.height.max(ground + self.clearance)
    }
}

/// Placement parameters for one category of decorative objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScatterConfig {
    /// Number of objects; fixed for the lifetime of the field.
    pub count: usize,
    /// Inner radius of the respawn ring around the vehicle.
    pub radius_min: f64,
    /// Retention radius: objects further away than this are respawned.
    pub radius_max: f64,
    /// Inner radius used only for the initial population, defaults to `radius_min`.
    pub initial_radius_min: Option<f64>,
    /// Half-width of the respawn sector centred on the heading, in degrees.
    pub front_arc_deg: f64,
    pub scale_min: f64,
    pub scale_max: f64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self::trees()
    }
}

impl ScatterConfig {
    pub fn trees() -> Self {
        Self {
            count: 260,
            radius_min: 40.0,
            radius_max: 160.0,
            initial_radius_min: None,
            front_arc_deg: 70.0,
            scale_min: 0.8,
            scale_max: 1.6,
        }
    }

    pub fn houses() -> Self {
        Self {
            count: 12,
            radius_min: 40.0,
            radius_max: 160.0,
            initial_radius_min: Some(60.0),
            front_arc_deg: 70.0,
            scale_min: 1.2,
            scale_max: 1.8,
        }
    }

    pub fn clouds() -> Self {
        Self {
            count: 40,
            radius_min: 80.0,
            radius_max: 260.0,
            initial_radius_min: None,
            front_arc_deg: 80.0,
            scale_min: 15.0,
            scale_max: 30.0,
        }
    }

    pub fn initial_radius_min(&self) -> f64 {
        self.initial_radius_min.unwrap_or(self.radius_min)
    }

    pub fn validate(&self, name: &str) -> Result<(), FlyoverError> {
        let invalid = |reason: String| Err(FlyoverError::InvalidConfig(format!("{name}: {reason}")));

        if !(self.radius_max.is_finite() && self.scale_max.is_finite()) {
            return invalid(format!(
                "radius_max {} and scale_max {} must be finite",
                self.radius_max, self.scale_max
            ));
        }
        if !(self.radius_min >= 0.0 && self.radius_min <= self.radius_max) {
            return invalid(format!(
                "radius range [{}, {}] must satisfy 0 <= min <= max",
                self.radius_min, self.radius_max
            ));
        }
        let initial = self.initial_radius_min();
        if !(initial >= 0.0 && initial <= self.radius_max) {
            return invalid(format!(
                "initial_radius_min {} must lie in [0, {}]",
                initial, self.radius_max
            ));
        }
        if !(0.0..=180.0).contains(&self.front_arc_deg) {
            return invalid(format!(
                "front_arc_deg {} must lie in [0, 180]",
                self.front_arc_deg
            ));
        }
        if !(self.scale_min > 0.0 && self.scale_min <= self.scale_max) {
            return invalid(format!(
                "scale range [{}, {}] must be positive and ordered",
                self.scale_min, self.scale_max
            ));
        }
        Ok(())
    }
}

/// One decorative object, positioned in world coordinates on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterObject<A> {
    pub position: DVec2,
    pub attributes: A,
}

pub type AttributeGenerator<A> = Box<dyn Fn(&mut ChaCha8Rng) -> A + Send + Sync>;

/// A fixed-size pool of decorative objects that follows the vehicle.
///
/// Objects live in world coordinates. Whenever one drifts beyond the retention
/// radius it is overwritten in its own slot by a fresh object placed ahead of
/// the vehicle's heading, so the pool never grows or shrinks and the landscape
/// looks endless.
#[derive(Resource)]
pub struct ScatterField<A: ScatterAttributes> {
    name: String,
    config: ScatterConfig,
    objects: Vec<ScatterObject<A>>,
    rng: ChaCha8Rng,
    generator: AttributeGenerator<A>,
}

impl<A: ScatterAttributes> ScatterField<A> {
    pub fn new(
        name: impl Into<String>,
        config: ScatterConfig,
        rng: ChaCha8Rng,
        generator: impl Fn(&mut ChaCha8Rng) -> A + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            config,
            objects: Vec::new(),
            rng,
            generator: Box::new(generator),
        }
    }

    /// Populate the field with objects spread uniformly by area over the
    /// initial annulus around `center`.
    pub fn initialize(&mut self, center: DVec2) {
        let r_min = self.config.initial_radius_min();
        let r_max = self.config.radius_max;

        self.objects.clear();
        self.objects.reserve_exact(self.config.count);
        for _ in 0..self.config.count {
            let position = point_in_annulus(&mut self.rng, center, r_min, r_max);
            let attributes = (self.generator)(&mut self.rng);
            self.objects.push(ScatterObject {
                position,
                attributes,
            });
        }

        info!(
            "Scattered {} {} in [{:.0}, {:.0}] around ({:.1}, {:.1})",
            self.objects.len(),
            self.name,
            r_min,
            r_max,
            center.x,
            center.y
        );
    }

    /// Respawn every object beyond the retention radius of `center` somewhere
    /// inside the forward sector of `heading_deg`. Returns how many moved.
    pub fn update(&mut self, center: DVec2, heading_deg: f64) -> usize {
        let max_r2 = self.config.radius_max * self.config.radius_max;
        let heading = heading_deg.to_radians();
        let arc = self.config.front_arc_deg.to_radians();
        let mut respawned = 0;

        for object in self.objects.iter_mut() {
            if object.position.distance_squared(center) <= max_r2 {
                continue;
            }
            object.position = point_ahead(
                &mut self.rng,
                center,
                heading,
                arc,
                self.config.radius_min,
                self.config.radius_max,
            );
            object.attributes = (self.generator)(&mut self.rng);
            respawned += 1;
        }

        if respawned > 0 {
            debug!(
                "{}: respawned {} ahead of heading {:.1}",
                self.name, respawned, heading_deg
            );
        }
        respawned
    }

    pub fn objects(&self) -> &[ScatterObject<A>] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ScatterField<TreeAttributes> {
    pub fn trees(config: ScatterConfig, rng: ChaCha8Rng) -> Self {
        let (lo, hi) = (config.scale_min, config.scale_max);
        Self::new("trees", config, rng, move |rng| TreeAttributes {
            scale: uniform(rng, lo, hi),
        })
    }
}

impl ScatterField<HouseAttributes> {
    pub fn houses(config: ScatterConfig, rng: ChaCha8Rng) -> Self {
        let (lo, hi) = (config.scale_min, config.scale_max);
        Self::new("houses", config, rng, move |rng| HouseAttributes {
            scale: uniform(rng, lo, hi),
        })
    }
}

impl ScatterField<CloudAttributes> {
    pub fn clouds(
        config: ScatterConfig,
        height: (f64, f64),
        clearance: f64,
        rng: ChaCha8Rng,
    ) -> Self {
        let (lo, hi) = (config.scale_min, config.scale_max);
        Self::new("clouds", config, rng, move |rng| CloudAttributes {
            size: uniform(rng, lo, hi),
            height: uniform(rng, height.0, height.1),
            clearance,
        })
    }
}

/// Uniform sample in `[lo, hi]` that tolerates a degenerate range.
fn uniform(rng: &mut ChaCha8Rng, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        lo
    } else {
        rng.gen_range(lo..=hi)
    }
}

/// Random point in the ring `[r_min, r_max]`, uniform by area.
fn point_in_annulus(rng: &mut ChaCha8Rng, center: DVec2, r_min: f64, r_max: f64) -> DVec2 {
    let angle = rng.gen_range(0.0..TAU);
    let radius = uniform(rng, r_min * r_min, r_max * r_max).sqrt();
    center + DVec2::new(angle.sin(), angle.cos()) * radius
}

/// Random point within `arc` radians either side of `heading`, at a radius
/// drawn uniformly from `[r_min, r_max]`.
fn point_ahead(
    rng: &mut ChaCha8Rng,
    center: DVec2,
    heading: f64,
    arc: f64,
    r_min: f64,
    r_max: f64,
) -> DVec2 {
    let angle = heading + uniform(rng, -arc, arc);
    let radius = uniform(rng, r_min, r_max);
    center + DVec2::new(angle.sin(), angle.cos()) * radius
}
