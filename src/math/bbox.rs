use cgmath::{BaseNum, InnerSpace, Point3, Vector3, Zero};

use super::ray::{Ray, RayCollision};

#[derive(Debug, Clone, PartialEq)]
pub struct AABB<S: BaseNum> {
    pub start: Point3<S>,
    pub end: Point3<S>,
}

impl AABB<f32> {
    /// Unit cube centred on the given point
    pub fn unit_cube(centre: &Point3<f32>) -> Self {
        let half = Vector3::new(0.5, 0.5, 0.5);
        Self {
            start: *centre - half,
            end: *centre + half,
        }
    }

    /// Check if a ray intersects with this AABB. Returns the smallest non-negative distance to
    /// the surface along the ray, along with the surface normal there.
    /// https://en.wikipedia.org/wiki/Slab_method
    pub fn intersect_ray(&self, ray: &Ray) -> Option<RayCollision> {
        assert!(ray.direction.magnitude2() > 0.);
        let mut tmin = f32::NEG_INFINITY;
        let mut tmax = f32::INFINITY;
        let mut entry_axis = 0;
        let mut entry_min_face = true;
        let mut exit_axis = 0;
        let mut exit_min_face = true;

        for i in 0..3 {
            if ray.direction[i].abs() < f32::EPSILON {
                // Ray is parallel to the slab
                if ray.pos[i] < self.start[i] || ray.pos[i] > self.end[i] {
                    return None;
                }
            } else {
                let inv_dir = 1.0 / ray.direction[i];
                let mut t1 = (self.start[i] - ray.pos[i]) * inv_dir;
                let mut t2 = (self.end[i] - ray.pos[i]) * inv_dir;

                let mut swapped = false;
                if t1 > t2 {
                    std::mem::swap(&mut t1, &mut t2);
                    swapped = true;
                }

                // Track which faces we enter and leave through for the normal
                if t1 > tmin {
                    tmin = t1;
                    entry_axis = i;
                    entry_min_face = !swapped;
                }
                if t2 < tmax {
                    tmax = t2;
                    exit_axis = i;
                    exit_min_face = swapped;
                }

                if tmin > tmax {
                    return None;
                }
            }
        }

        // Box is entirely behind the ray
        if tmax < 0. {
            return None;
        }

        // Ray starting inside the box hits the exit face
        let (distance, axis, min_face) = if tmin >= 0. {
            (tmin, entry_axis, entry_min_face)
        } else {
            (tmax, exit_axis, exit_min_face)
        };

        // The normal points outward from the face that was hit
        let mut normal = Vector3::zero();
        normal[axis] = if min_face { -1.0 } else { 1.0 };

        Some(RayCollision {
            distance,
            intersection: ray.project(distance),
            normal,
        })
    }
}
