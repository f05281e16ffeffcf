//! Scene state machine and animation driver
//!
//! [`SceneState`] is the only state that survives between frames. The
//! [`SceneController`] changes it in two ways:
//!
//! - discrete [`SceneEvent`]s (next scene, next/previous axis, mode toggle)
//! - elapsed time, turned into fixed-size animation ticks
//!
//! # Example
//! ```
//! use poly4d_core::{SceneController, SceneEvent, SceneState};
//!
//! let mut controller = SceneController::default();
//! let mut state = SceneState::default();
//! controller.handle_event(&mut state, SceneEvent::AdvanceScene);
//! let ticks = controller.update(&mut state, 1.0 / 60.0);
//! assert_eq!(state.scene.index(), 1);
//! assert_eq!(ticks, 1);
//! ```

use poly4d_math::{RotationAngles, RotationPlane};
use serde::{Serialize, Deserialize};

use crate::scene::Scene;

/// Which planes advance on each tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationMode {
    /// Only the active axis turns
    #[default]
    SingleAxis,
    /// All six planes turn at their own rates
    AllAxes,
}

impl RotationMode {
    pub const fn toggled(self) -> Self {
        match self {
            RotationMode::SingleAxis => RotationMode::AllAxes,
            RotationMode::AllAxes => RotationMode::SingleAxis,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RotationMode::SingleAxis => "single axis",
            RotationMode::AllAxes => "all axes",
        }
    }
}

/// Discrete input the state machine reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneEvent {
    /// Move to the next scene in the cycle
    AdvanceScene,
    /// Make the next rotation plane active
    AdvanceAxis,
    /// Make the previous rotation plane active
    RetreatAxis,
    /// Switch between single-axis and all-axes rotation
    ToggleRotationMode,
}

/// Everything that changes from frame to frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneState {
    /// Active shape and style
    pub scene: Scene,
    /// Which planes the animation advances
    pub mode: RotationMode,
    /// Plane advanced in single-axis mode
    pub axis: RotationPlane,
    /// Accumulated angles, each kept in `[0, 2π)`
    pub angles: RotationAngles,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(RotationPlane::XW, RotationMode::SingleAxis)
    }
}

impl SceneState {
    /// First scene, zero angles, given axis and mode
    pub fn new(axis: RotationPlane, mode: RotationMode) -> Self {
        Self {
            scene: Scene::FIRST,
            mode,
            axis,
            angles: RotationAngles::ZERO,
        }
    }
}

/// Animation rates and tick timing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Radians added to the active plane per tick in single-axis mode
    pub single_axis_step: f32,
    /// Radians added per tick to each plane in all-axes mode (plane order)
    pub all_axes_steps: [f32; 6],
    /// Ticks per second
    pub tick_rate: f32,
    /// Upper bound on ticks run by one [`SceneController::update`] call
    pub max_ticks_per_update: u32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            single_axis_step: 0.02,
            all_axes_steps: [0.010, 0.015, 0.020, 0.025, 0.030, 0.035],
            tick_rate: 60.0,
            max_ticks_per_update: 4,
        }
    }
}

impl AnimationSettings {
    /// Seconds per tick
    #[inline]
    pub fn tick_period(&self) -> f32 {
        1.0 / self.tick_rate.max(1.0)
    }
}

/// Longest stretch of elapsed time a single update will consider
const MAX_FRAME_TIME: f32 = 0.25;

/// Applies events and time to a [`SceneState`]
#[derive(Clone, Debug, Default)]
pub struct SceneController {
    settings: AnimationSettings,
    /// Elapsed time not yet consumed by a whole tick
    accumulator: f32,
}

impl SceneController {
    pub fn new(settings: AnimationSettings) -> Self {
        Self { settings, accumulator: 0.0 }
    }

    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    /// Apply one discrete event
    pub fn handle_event(&self, state: &mut SceneState, event: SceneEvent) {
        match event {
            SceneEvent::AdvanceScene => {
                state.scene = state.scene.next();
                log::info!("Scene {}: {}", state.scene.index(), state.scene);
            }
            SceneEvent::AdvanceAxis => {
                state.axis = state.axis.next();
                log::debug!("Rotation axis: {}", state.axis);
            }
            SceneEvent::RetreatAxis => {
                state.axis = state.axis.prev();
                log::debug!("Rotation axis: {}", state.axis);
            }
            SceneEvent::ToggleRotationMode => {
                state.mode = state.mode.toggled();
                log::info!("Rotation mode: {}", state.mode.name());
            }
        }
    }

    /// Advance the angles by exactly one tick
    pub fn tick(&self, state: &mut SceneState) {
        match state.mode {
            RotationMode::SingleAxis => {
                state.angles.advance(state.axis, self.settings.single_axis_step);
            }
            RotationMode::AllAxes => {
                for (plane, step) in RotationPlane::ALL.into_iter().zip(self.settings.all_axes_steps) {
                    state.angles.advance(plane, step);
                }
            }
        }
    }

    /// Consume `dt` seconds of elapsed time and run the ticks it covers
    ///
    /// Leftover time carries into the next call. Returns the number of
    /// ticks run, at most `max_ticks_per_update`.
    pub fn update(&mut self, state: &mut SceneState, dt: f32) -> u32 {
        if !dt.is_finite() {
            return 0;
        }
        let period = self.settings.tick_period();
        self.accumulator += dt.clamp(0.0, MAX_FRAME_TIME);

        let mut ticks = 0;
        // Small slack so exact multiples of the period are not lost to rounding
        while self.accumulator + period * 1e-3 >= period {
            if ticks == self.settings.max_ticks_per_update {
                // Drop the backlog instead of spinning the shape forward
                self.accumulator = 0.0;
                break;
            }
            self.tick(state);
            self.accumulator = (self.accumulator - period).max(0.0);
            ticks += 1;
        }
        ticks
    }
}
