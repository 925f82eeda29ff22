use crate::{
    camera::{Camera, walking::WalkingController},
    config::KinematicsConfig,
    state::world::WorldPos,
};

/// Information about the player
#[derive(Debug)]
pub struct Player {
    pub camera: Camera,
    pub controller: WalkingController,
}

impl Player {
    pub fn new(pos: WorldPos, kinematics: KinematicsConfig) -> Self {
        Self {
            camera: Camera::new(pos),
            controller: WalkingController::new(kinematics),
        }
    }
}
