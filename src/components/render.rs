use bevy::prelude::*;
use std::marker::PhantomData;

use crate::resources::ScatterAttributes;

/// Root entity of the drawn airplane.
#[derive(Component, Debug, Default)]
pub struct VehicleModel;

/// Root entity drawing the object stored in slot `index` of a scatter field.
#[derive(Component, Debug)]
pub struct ScatterSlot<A: ScatterAttributes> {
    pub index: usize,
    _marker: PhantomData<A>,
}

impl<A: ScatterAttributes> ScatterSlot<A> {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }
}

/// The ground patch mesh that trails the vehicle.
#[derive(Component, Debug, Default)]
pub struct GroundPatch;

/// The light standing in for the sun or moon.
#[derive(Component, Debug, Default)]
pub struct SkyLight;

/// The visible sun or moon sphere.
#[derive(Component, Debug, Default)]
pub struct SkyBody;
