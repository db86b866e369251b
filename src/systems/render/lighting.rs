use bevy::prelude::*;

use crate::components::{SkyBody, SkyLight};
use crate::resources::TimeOfDay;
use crate::utils::{AMBIENT_BRIGHTNESS, SUN_ILLUMINANCE};

fn srgb([r, g, b]: [f32; 3]) -> Color {
    Color::srgb(r, g, b)
}

/// Push the current time-of-day preset into the clear colour, the ambient
/// light, the sky light and the sun or moon. Only runs when it changed.
pub fn apply_time_of_day(
    time_of_day: Res<TimeOfDay>,
    mut clear_color: ResMut<ClearColor>,
    mut ambient: ResMut<AmbientLight>,
    mut lights: Query<(&mut DirectionalLight, &mut Transform), (With<SkyLight>, Without<SkyBody>)>,
    mut bodies: Query<
        (&mut Transform, &MeshMaterial3d<StandardMaterial>),
        (With<SkyBody>, Without<SkyLight>),
    >,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !time_of_day.is_changed() {
        return;
    }

    let preset = time_of_day.preset();
    clear_color.0 = srgb(preset.background);
    ambient.color = srgb(preset.total_ambient());
    ambient.brightness = AMBIENT_BRIGHTNESS;

    for (mut light, mut transform) in lights.iter_mut() {
        light.color = srgb(preset.diffuse);
        light.illuminance = SUN_ILLUMINANCE;
        *transform =
            Transform::from_translation(preset.light_position).looking_at(Vec3::ZERO, Vec3::Z);
    }

    for (mut transform, material) in bodies.iter_mut() {
        transform.translation = preset.light_position;
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = srgb(time_of_day.sky_body_color());
        }
    }

    info!("Lighting set for {:?}", *time_of_day);
}
