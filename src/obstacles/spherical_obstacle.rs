use crate::est::state::RealVectorState;
use crate::obstacles::AnalyticObstacle;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A static spherical (hyper-ball) obstacle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticSphericalObstacle<F: Float, const N: usize> {
    center: RealVectorState<F, N>,
    radius: F,
}

impl<F: Float, const N: usize> StaticSphericalObstacle<F, N> {
    pub fn new(center: RealVectorState<F, N>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Returns the center of the obstacle.
    pub fn center(&self) -> &RealVectorState<F, N> {
        &self.center
    }

    /// Returns the radius of the obstacle.
    pub fn radius(&self) -> F {
        self.radius
    }
}

impl<F: Float, const N: usize> AnalyticObstacle<F, N> for StaticSphericalObstacle<F, N> {
    /// Checks if a point is inside the sphere.
    fn contains(&self, state: &RealVectorState<F, N>) -> bool {
        let distance_squared = self.center.euclidean_distance_squared(state);
        distance_squared < self.radius.powi(2)
    }

    /// Check if a segment intersects the sphere by solving the quadratic for
    /// the intersection parameters along the segment.
    fn intersects_edge(&self, start: &RealVectorState<F, N>, end: &RealVectorState<F, N>) -> bool {
        if self.contains(start) || self.contains(end) {
            return true; // One of the endpoints is inside the sphere
        }

        let direction = end - start;
        let center_to_start = start - &self.center;
        let a = direction.dot(&direction);
        let b = F::from(2.0).unwrap() * center_to_start.dot(&direction);
        let c = center_to_start.dot(&center_to_start) - self.radius.powi(2);
        let discriminant = b * b - F::from(4.0).unwrap() * a * c;

        if discriminant < F::zero() {
            return false; // No real roots; no intersection
        }

        let sqrt_discriminant = discriminant.sqrt();
        let two_a = F::from(2.0).unwrap() * a;

        let t1 = (-b - sqrt_discriminant) / two_a;
        let t2 = (-b + sqrt_discriminant) / two_a;

        // Check if either intersection point is within the segment [0, 1]
        (t1 >= F::zero() && t1 <= F::one()) || (t2 >= F::zero() && t2 <= F::one())
    }
}
