use bevy::math::DVec2;
use flyover::{
    components::VehicleState,
    plugins::FlightCommand,
    resources::{
        CloudAttributes, Ground, HouseAttributes, ScatterAttributes, ScatterField,
        TreeAttributes, WorldOffset,
    },
    utils::{angle_difference_deg, bearing_deg},
};

use crate::common::{assert_field_around, create_test_hills, create_test_scenery, TestAppBuilder};

fn positions<A: ScatterAttributes>(field: &ScatterField<A>) -> Vec<DVec2> {
    field.objects().iter().map(|object| object.position).collect()
}

#[test]
fn test_fields_start_around_vehicle() {
    let app = TestAppBuilder::new().with_scenery(create_test_scenery(1)).build();

    let trees = app.resource::<ScatterField<TreeAttributes>>();
    assert_field_around(trees, DVec2::ZERO, 40);

    // Houses keep clear of the vehicle's starting point
    let houses = app.resource::<ScatterField<HouseAttributes>>();
    assert_field_around(houses, DVec2::ZERO, 6);
    for house in houses.objects() {
        assert!(house.position.length() >= 60.0 - 1e-9);
    }

    let clouds = app.resource::<ScatterField<CloudAttributes>>();
    assert_field_around(clouds, DVec2::ZERO, 10);
}

#[test]
fn test_default_counts() {
    let app = TestAppBuilder::new().build();
    assert_eq!(app.resource::<ScatterField<TreeAttributes>>().len(), 260);
    assert_eq!(app.resource::<ScatterField<HouseAttributes>>().len(), 12);
    assert_eq!(app.resource::<ScatterField<CloudAttributes>>().len(), 40);
}

#[test]
fn test_fields_follow_a_long_turning_flight() {
    let mut app = TestAppBuilder::new()
        .with_scenery(create_test_scenery(2))
        .with_time_step(0.1)
        .build();

    for frame in 0..1500 {
        if frame % 50 == 0 {
            app.send(FlightCommand::Yaw(21.0));
        }
        app.run_frame();

        let center = app.resource::<WorldOffset>().current();
        assert_field_around(app.resource::<ScatterField<TreeAttributes>>(), center, 40);
        assert_field_around(app.resource::<ScatterField<HouseAttributes>>(), center, 6);
        assert_field_around(app.resource::<ScatterField<CloudAttributes>>(), center, 10);
    }

    // 150 s at 60 units/s
    let travelled = app.resource::<WorldOffset>().current().length();
    assert!(travelled > 1000.0);
}

#[test]
fn test_respawned_objects_land_ahead() {
    let mut app = TestAppBuilder::new()
        .with_scenery(create_test_scenery(3))
        .with_time_step(0.25)
        .build();
    app.send(FlightCommand::Yaw(60.0));

    let mut moved = 0;
    for _ in 0..16 {
        let before = positions(app.resource::<ScatterField<TreeAttributes>>());
        app.run_frame();

        let center = app.resource::<WorldOffset>().current();
        let heading = app
            .query_single::<VehicleState>()
            .expect("vehicle spawned")
            .yaw;
        let field = app.resource::<ScatterField<TreeAttributes>>();
        let config = field.config();

        for (object, old) in field.objects().iter().zip(&before) {
            if object.position == *old {
                continue;
            }
            moved += 1;
            let rel = object.position - center;
            let bearing = bearing_deg(rel.x, rel.y);
            assert!(angle_difference_deg(bearing, heading).abs() <= config.front_arc_deg + 1e-6);
            assert!(rel.length() >= config.radius_min - 1e-6);
        }
    }
    assert!(moved > 0, "about 240 units of travel should recycle some trees");
}

#[test]
fn test_same_seed_same_scenery() {
    let build = |seed| {
        let mut app = TestAppBuilder::new()
            .with_scenery(create_test_scenery(seed))
            .with_time_step(0.2)
            .build();
        app.send(FlightCommand::Yaw(45.0));
        app.run_steps(60);
        (
            positions(app.resource::<ScatterField<TreeAttributes>>()),
            positions(app.resource::<ScatterField<CloudAttributes>>()),
        )
    };

    assert_eq!(build(9), build(9));
    assert_ne!(build(9).0, build(10).0);
}

#[test]
fn test_clouds_keep_clearance_over_hills() {
    let mut app = TestAppBuilder::new()
        .with_scenery(create_test_scenery(4))
        .with_ground(create_test_hills())
        .with_time_step(0.2)
        .build();

    for _ in 0..100 {
        app.run_frame();
        let ground = app.resource::<Ground>();
        let clouds = app.resource::<ScatterField<CloudAttributes>>();
        for cloud in clouds.objects() {
            let below = ground.height_world(cloud.position.x, cloud.position.y);
            let elevation = cloud.attributes.elevation(below);
            assert!(elevation >= below + 80.0);
            assert!(elevation >= cloud.attributes.height);
        }
    }
}
