use std::f32::consts::FRAC_PI_2;

use cgmath::{Angle, Rad};

use crate::{
    camera::Camera,
    config::{GroundClamp, KinematicsConfig},
    input::Direction,
};

/// Moves the camera in discrete steps, with a fixed-rate gravity tick for the vertical axis
#[derive(Debug)]
pub struct WalkingController {
    config: KinematicsConfig,
    // Stateful variables
    vertical_velocity: f32,
}

impl WalkingController {
    pub fn new(config: KinematicsConfig) -> Self {
        assert!(config.move_step >= 0.);
        assert!(config.gravity >= 0.);
        assert!(config.turn_speed >= 0.);

        Self {
            config,
            vertical_velocity: 0.,
        }
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// Move one step along a world axis. Facing direction doesn't matter.
    pub fn step(&self, direction: Direction, camera: &mut Camera) {
        camera.pos.0 += direction.offset() * self.config.move_step;
    }

    /// Jumping is allowed mid-air
    pub fn jump(&mut self) {
        self.vertical_velocity = self.config.jump_velocity;
    }

    /// Advance the vertical axis by one gravity tick
    pub fn tick(&mut self, camera: &mut Camera) {
        camera.pos.0.y += self.vertical_velocity;
        self.vertical_velocity -= self.config.gravity;

        if camera.pos.0.y < self.config.ground_level {
            self.vertical_velocity = 0.;
            if self.config.ground_clamp == GroundClamp::SnapToGround {
                camera.pos.0.y = self.config.ground_level;
            }
        }
    }

    /// Turn the camera. delta is in normalised screen coordinates -1 to 1
    pub fn look(&self, delta: (f32, f32), camera: &mut Camera) {
        camera.yaw = (camera.yaw + Rad(self.config.turn_speed * delta.0)).normalize();

        camera.pitch -= Rad(self.config.turn_speed * delta.1);
        // Clip just under fully vertical to avoid weirdness
        camera.pitch.0 = camera.pitch.0.clamp(-FRAC_PI_2 * 0.99, FRAC_PI_2 * 0.99);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::WalkingController;
    use crate::{
        camera::Camera,
        config::{GroundClamp, KinematicsConfig},
        input::Direction,
        state::world::WorldPos,
    };

    fn controller(ground_clamp: GroundClamp) -> WalkingController {
        WalkingController::new(
            KinematicsConfig::builder()
                .ground_clamp(ground_clamp)
                .build(),
        )
    }

    #[test]
    fn test_steps() {
        let controller = controller(GroundClamp::SnapToGround);
        let mut camera = Camera::new(WorldPos::new(0., 2., 5.));

        controller.step(Direction::Forward, &mut camera);
        assert!((camera.pos.0.z - 4.7).abs() < 1e-6);
        controller.step(Direction::Right, &mut camera);
        controller.step(Direction::Right, &mut camera);
        assert!((camera.pos.0.x - 0.6).abs() < 1e-6);
        controller.step(Direction::Left, &mut camera);
        controller.step(Direction::Back, &mut camera);
        assert!((camera.pos.0.x - 0.3).abs() < 1e-6);
        assert!((camera.pos.0.z - 5.).abs() < 1e-6);
        assert_eq!(camera.pos.0.y, 2.);
    }

    #[test]
    fn test_jump_tick() {
        let mut controller = controller(GroundClamp::SnapToGround);
        let mut camera = Camera::new(WorldPos::new(0., 2., 5.));

        assert_eq!(controller.vertical_velocity(), 0.);
        controller.jump();
        assert_eq!(controller.vertical_velocity(), 0.2);

        controller.tick(&mut camera);
        assert!((camera.pos.0.y - 2.2).abs() < 1e-6);
        assert!((controller.vertical_velocity() - 0.19).abs() < 1e-6);

        // Double jump resets velocity mid-air
        controller.tick(&mut camera);
        controller.jump();
        assert_eq!(controller.vertical_velocity(), 0.2);
    }

    #[test]
    fn test_jump_lands() {
        let mut controller = controller(GroundClamp::SnapToGround);
        let mut camera = Camera::new(WorldPos::new(0., 2., 5.));

        controller.jump();
        for _ in 0..100 {
            controller.tick(&mut camera);
            assert!(camera.pos.0.y >= 2.);
        }
        assert_eq!(camera.pos.0.y, 2.);
        assert!(controller.vertical_velocity() <= 0.);
    }

    #[test]
    fn test_ground_clamp_velocity_only() {
        let mut controller = controller(GroundClamp::VelocityOnly);
        let mut camera = Camera::new(WorldPos::new(0., 2., 5.));

        // First tick only builds up downwards velocity
        controller.tick(&mut camera);
        assert_eq!(camera.pos.0.y, 2.);
        assert!((controller.vertical_velocity() + 0.01).abs() < 1e-6);

        // Second tick sinks below ground, which zeroes velocity but leaves the position
        controller.tick(&mut camera);
        assert!(camera.pos.0.y < 2.);
        assert_eq!(controller.vertical_velocity(), 0.);
    }

    #[test]
    fn test_ground_clamp_snap() {
        let mut controller = controller(GroundClamp::SnapToGround);
        let mut camera = Camera::new(WorldPos::new(0., 2., 5.));

        controller.tick(&mut camera);
        controller.tick(&mut camera);
        assert_eq!(camera.pos.0.y, 2.);
        assert_eq!(controller.vertical_velocity(), 0.);
    }

    #[test]
    fn test_look_clamps_pitch() {
        let controller = controller(GroundClamp::SnapToGround);
        let mut camera = Camera::new(WorldPos::new(0., 2., 5.));

        controller.look((0., 10.), &mut camera);
        assert!(camera.pitch.0 >= -FRAC_PI_2);
        assert!(camera.forward().y < -0.99);

        controller.look((0., -10.), &mut camera);
        assert!(camera.pitch.0 <= FRAC_PI_2);
        assert!(camera.forward().y > 0.99);
    }
}
