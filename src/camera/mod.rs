use std::f32::consts::FRAC_PI_2;

use cgmath::{Rad, Vector3};

use crate::{math::angles_to_vec3, math::ray::Ray, state::world::WorldPos};

pub mod walking;

/// Where the player is and which way they're looking
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub pos: WorldPos,
    pub yaw: Rad<f32>,
    pub pitch: Rad<f32>,
}

impl Camera {
    /// New camera looking horizontally along -Z
    pub fn new(pos: WorldPos) -> Self {
        Self {
            pos,
            yaw: Rad(-FRAC_PI_2),
            pitch: Rad(0.),
        }
    }

    #[inline]
    pub fn forward(&self) -> Vector3<f32> {
        angles_to_vec3(self.yaw, self.pitch)
    }

    /// Ray straight out of the centre of the view
    #[inline]
    pub fn ray(&self) -> Ray {
        Ray::new(self.pos.0, self.forward())
    }
}
