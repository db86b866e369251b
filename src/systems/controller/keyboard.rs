use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;

use crate::plugins::FlightCommand;
use crate::utils::{ATTITUDE_STEP_DEG, ORBIT_STEP_DEG, SPEED_STEP, ZOOM_STEP};

/// Commands issued by one key press. `+` and `-` both throttle and zoom.
pub fn commands_for_key(key: KeyCode) -> &'static [FlightCommand] {
    use FlightCommand::*;

    match key {
        KeyCode::KeyA => &[Yaw(ATTITUDE_STEP_DEG)],
        KeyCode::KeyD => &[Yaw(-ATTITUDE_STEP_DEG)],
        KeyCode::KeyW => &[Pitch(ATTITUDE_STEP_DEG)],
        KeyCode::KeyS => &[Pitch(-ATTITUDE_STEP_DEG)],
        KeyCode::KeyQ => &[Roll(ATTITUDE_STEP_DEG)],
        KeyCode::KeyE => &[Roll(-ATTITUDE_STEP_DEG)],
        KeyCode::Equal | KeyCode::NumpadAdd => &[Speed(SPEED_STEP), Zoom(-ZOOM_STEP)],
        KeyCode::Minus | KeyCode::NumpadSubtract => &[Speed(-SPEED_STEP), Zoom(ZOOM_STEP)],
        KeyCode::Space => &[ResetOrientation],
        KeyCode::Digit1 => &[SetTimeOfDay(0)],
        KeyCode::Digit2 => &[SetTimeOfDay(1)],
        KeyCode::Digit3 => &[SetTimeOfDay(2)],
        KeyCode::Digit4 => &[SetTimeOfDay(3)],
        KeyCode::ArrowLeft => &[Orbit {
            yaw: -ORBIT_STEP_DEG,
            pitch: 0.0,
        }],
        KeyCode::ArrowRight => &[Orbit {
            yaw: ORBIT_STEP_DEG,
            pitch: 0.0,
        }],
        KeyCode::ArrowUp => &[Orbit {
            yaw: 0.0,
            pitch: ORBIT_STEP_DEG,
        }],
        KeyCode::ArrowDown => &[Orbit {
            yaw: 0.0,
            pitch: -ORBIT_STEP_DEG,
        }],
        KeyCode::PageUp => &[Zoom(-ZOOM_STEP)],
        KeyCode::PageDown => &[Zoom(ZOOM_STEP)],
        KeyCode::Escape => &[Quit],
        _ => &[],
    }
}

/// Turn key presses into flight commands.
///
/// Works on press events rather than held state: holding a key repeats at the
/// operating system's key-repeat rate, one step per repeat.
pub fn keyboard_command_system(
    mut keys: EventReader<KeyboardInput>,
    mut flight_commands: EventWriter<FlightCommand>,
) {
    for event in keys.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        flight_commands.send_batch(commands_for_key(event.key_code).iter().copied());
    }
}
