use approx::assert_relative_eq;
use bevy::prelude::*;
use flyover::{
    components::{ScatterSlot, VehicleModel, VehicleState},
    plugins::{FlightCommand, FlightSet},
    rendering::AIRPLANE_SCALE,
    resources::{CloudAttributes, ScatterField, ScatterObject, TreeAttributes, WorldOffset},
    systems::render::{sync_scatter_slots, sync_vehicle_model},
};

use crate::common::{create_test_scenery, TestApp, TestAppBuilder};

fn spawn_slots<A: flyover::resources::ScatterAttributes>(app: &mut TestApp) -> usize {
    let count = app.resource::<ScatterField<A>>().len();
    for index in 0..count {
        app.app
            .world_mut()
            .spawn((ScatterSlot::<A>::new(index), Transform::default()));
    }
    count
}

fn slot_transforms<A: flyover::resources::ScatterAttributes>(
    app: &mut TestApp,
) -> Vec<(usize, Transform)> {
    let world = app.app.world_mut();
    let mut query = world.query::<(&ScatterSlot<A>, &Transform)>();
    query
        .iter(world)
        .map(|(slot, transform)| (slot.index, *transform))
        .collect()
}

#[test]
fn test_scatter_slots_are_drawn_relative_to_vehicle() {
    let mut app = TestAppBuilder::new()
        .with_scenery(create_test_scenery(5))
        .with_time_step(0.1)
        .build();
    app.app.add_systems(
        Update,
        sync_scatter_slots::<TreeAttributes>.after(FlightSet::Scatter),
    );
    let count = spawn_slots::<TreeAttributes>(&mut app);

    app.send(FlightCommand::Yaw(30.0));
    app.run_steps(20);

    let offset = app.resource::<WorldOffset>().current();
    let objects: Vec<ScatterObject<TreeAttributes>> = app
        .resource::<ScatterField<TreeAttributes>>()
        .objects()
        .to_vec();
    let transforms = slot_transforms::<TreeAttributes>(&mut app);
    assert_eq!(transforms.len(), count);

    for (index, transform) in transforms {
        let object = objects[index];
        assert_relative_eq!(
            transform.translation.x as f64,
            object.position.x - offset.x,
            epsilon = 1e-3
        );
        assert_relative_eq!(
            transform.translation.z as f64,
            object.position.y - offset.y,
            epsilon = 1e-3
        );
        // Trees stand on the flat default ground
        assert_eq!(transform.translation.y, 0.0);
        assert_eq!(transform.scale, Vec3::splat(object.attributes.scale as f32));
    }
}

#[test]
fn test_cloud_slots_float_above_ground() {
    let mut app = TestAppBuilder::new()
        .with_scenery(create_test_scenery(6))
        .build();
    app.app.add_systems(
        Update,
        sync_scatter_slots::<CloudAttributes>.after(FlightSet::Scatter),
    );
    spawn_slots::<CloudAttributes>(&mut app);
    app.run_frame();

    for (_, transform) in slot_transforms::<CloudAttributes>(&mut app) {
        assert!(transform.translation.y >= 80.0);
        assert!(transform.translation.y <= 160.0);
        assert!((15.0..=30.0).contains(&transform.scale.x));
    }
}

#[test]
fn test_vehicle_model_follows_state() {
    let mut app = TestAppBuilder::new().with_time_step(0.05).build();
    app.app
        .add_systems(Update, sync_vehicle_model.after(FlightSet::Kinematics));
    app.app
        .world_mut()
        .spawn((VehicleModel, Transform::default()));

    app.send(FlightCommand::Pitch(15.0));
    app.send(FlightCommand::Yaw(90.0));
    app.run_steps(3);

    let state = *app.query_single::<VehicleState>().expect("vehicle spawned");
    let world = app.app.world_mut();
    let transform = *world
        .query_filtered::<&Transform, With<VehicleModel>>()
        .single(world);

    assert_eq!(transform.translation, Vec3::new(0.0, state.altitude as f32, 0.0));
    assert_eq!(transform.scale, Vec3::splat(AIRPLANE_SCALE));

    let nose = transform.rotation * Vec3::Z;
    let forward = state.forward();
    assert_relative_eq!(nose.x, forward.x as f32, epsilon = 1e-5);
    assert_relative_eq!(nose.y, forward.y as f32, epsilon = 1e-5);
    assert_relative_eq!(nose.z, forward.z as f32, epsilon = 1e-5);
    assert!(nose.x > 0.9);
}
