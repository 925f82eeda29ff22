use cgmath::{Angle, InnerSpace, Rad, Vector3};

pub mod bbox;
pub mod ray;

/// Unit view vector for a yaw (around +Y, 0 == +X) and pitch (0 == horizontal)
#[inline]
pub fn angles_to_vec3(yaw: Rad<f32>, pitch: Rad<f32>) -> Vector3<f32> {
    let (y, verticality) = pitch.sin_cos();
    let (z, x) = yaw.sin_cos();
    Vector3::new(x * verticality, y, z * verticality).normalize()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use cgmath::Rad;

    use super::angles_to_vec3;

    #[test]
    fn test_angles() {
        let v = angles_to_vec3(Rad(-FRAC_PI_2), Rad(0.));
        assert!(v.x.abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
        assert!((v.z + 1.).abs() < 1e-6);

        let v = angles_to_vec3(Rad(0.), Rad(-FRAC_PI_2));
        assert!((v.y + 1.).abs() < 1e-6);
    }
}
