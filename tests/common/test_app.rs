use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use flyover::{
    components::VehicleConfig,
    plugins::FlightSimPlugin,
    resources::{FlyoverConfig, GroundConfig, SceneryConfig},
};
use std::time::Duration;

// Builder for a headless app running the simulation at a fixed frame time
pub struct TestAppBuilder {
    config: FlyoverConfig,
    time_step: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: FlyoverConfig::default(),
            time_step: 1.0 / 60.0,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: FlyoverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_vehicle(mut self, config: VehicleConfig) -> Self {
        self.config.vehicle = config;
        self
    }

    pub fn with_scenery(mut self, config: SceneryConfig) -> Self {
        self.config.scenery = config;
        self
    }

    pub fn with_ground(mut self, ground: GroundConfig) -> Self {
        self.config.terrain.ground = ground;
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(
                Duration::from_secs_f64(self.time_step),
            ))
            .add_plugins(FlightSimPlugin::new(self.config));

        // Run an initial update to initialize everything. Its frame time is zero.
        app.update();

        TestApp {
            app,
            time_step: self.time_step,
        }
    }
}

pub struct TestApp {
    pub app: App,
    pub time_step: f64,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn resource_mut<T: Resource>(&mut self) -> Mut<T> {
        self.app.world_mut().resource_mut::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }
}
