use std::time::Duration;

use cgmath::Point3;
use typed_builder::TypedBuilder;

use crate::state::world::WorldPos;

/// What happens when the player drops below ground level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundClamp {
    /// Stop falling, but stay wherever we ended up
    VelocityOnly,
    /// Stop falling and get put back on the ground
    SnapToGround,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct KinematicsConfig {
    /// Distance moved per movement key press
    #[builder(default = 0.3)]
    pub move_step: f32,
    /// Vertical velocity set by a jump, per tick
    #[builder(default = 0.2)]
    pub jump_velocity: f32,
    /// Vertical velocity lost each tick
    #[builder(default = 0.01)]
    pub gravity: f32,
    /// Camera height when standing on the ground
    #[builder(default = 2.)]
    pub ground_level: f32,
    #[builder(default = GroundClamp::SnapToGround)]
    pub ground_clamp: GroundClamp,
    /// Radians turned per screen width of mouse movement
    #[builder(default = std::f32::consts::PI)]
    pub turn_speed: f32,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct SandboxConfig {
    #[builder(default)]
    pub kinematics: KinematicsConfig,
    /// Time between gravity ticks. Must be non-zero; starting a game with a zero period panics.
    #[builder(default = Duration::from_millis(50))]
    pub tick_period: Duration,
    #[builder(default = WorldPos(Point3::new(0., 2., 5.)))]
    pub start_pos: WorldPos,
    /// The starting terrain spans [-half_extent, half_extent) on x and z
    #[builder(default = 5)]
    pub world_half_extent: i32,
    /// Seed for world generation. Random if not given.
    #[builder(default)]
    pub seed: Option<u64>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
