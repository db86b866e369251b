// Flight envelope
pub const PITCH_LIMIT_DEG: f64 = 45.0;
pub const ROLL_LIMIT_DEG: f64 = 60.0;

// Orbit camera
pub const CAMERA_MIN_DISTANCE: f32 = 20.0;
pub const CAMERA_MAX_DISTANCE: f32 = 500.0;

// Key command step sizes
pub const ATTITUDE_STEP_DEG: f64 = 3.0;
pub const SPEED_STEP: f64 = 5.0;
pub const ORBIT_STEP_DEG: f32 = 3.0;
pub const ZOOM_STEP: f32 = 5.0;

// Lighting
pub const GLOBAL_AMBIENT: [f32; 3] = [0.15, 0.15, 0.20];
pub const SKY_BODY_RADIUS: f32 = 10.0;
pub const SUN_ILLUMINANCE: f32 = 10_000.0;
pub const AMBIENT_BRIGHTNESS: f32 = 600.0;
