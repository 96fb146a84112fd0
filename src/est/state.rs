use num_traits::Float;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Index, Mul, Sub};

/// A state (configuration) in N-dimensional real vector space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RealVectorState<F: Float, const N: usize> {
    values: [F; N],
}

impl<F: Float, const N: usize> RealVectorState<F, N> {
    /// Constructs a new state from an array of coordinates.
    pub fn new(values: [F; N]) -> Self {
        Self { values }
    }

    /// Returns the coordinate array.
    pub fn values(&self) -> &[F; N] {
        &self.values
    }

    /// Returns the dot product with another state.
    pub fn dot(&self, other: &Self) -> F {
        let mut sum = F::zero();
        for i in 0..N {
            sum = sum + self.values[i] * other.values[i];
        }
        sum
    }

    /// Returns the Euclidean norm of the state treated as a vector.
    pub fn norm(&self) -> F {
        self.dot(self).sqrt()
    }

    /// Returns the squared Euclidean distance to another state.
    pub fn euclidean_distance_squared(&self, other: &Self) -> F {
        let mut sum = F::zero();
        for i in 0..N {
            let diff = self.values[i] - other.values[i];
            sum = sum + diff * diff;
        }
        sum
    }

    /// Returns the Euclidean distance to another state.
    pub fn euclidean_distance(&self, other: &Self) -> F {
        self.euclidean_distance_squared(other).sqrt()
    }
}

impl<F: Float, const N: usize> Index<usize> for RealVectorState<F, N> {
    type Output = F;

    fn index(&self, index: usize) -> &F {
        &self.values[index]
    }
}

impl<F: Float, const N: usize> Add for RealVectorState<F, N> {
    type Output = RealVectorState<F, N>;

    fn add(self, other: Self) -> Self::Output {
        let mut values = self.values;
        for i in 0..N {
            values[i] = values[i] + other.values[i];
        }
        RealVectorState { values }
    }
}

impl<F: Float, const N: usize> Add for &RealVectorState<F, N> {
    type Output = RealVectorState<F, N>;

    fn add(self, other: Self) -> Self::Output {
        *self + *other
    }
}

impl<F: Float, const N: usize> Sub for RealVectorState<F, N> {
    type Output = RealVectorState<F, N>;

    fn sub(self, other: Self) -> Self::Output {
        let mut values = self.values;
        for i in 0..N {
            values[i] = values[i] - other.values[i];
        }
        RealVectorState { values }
    }
}

impl<F: Float, const N: usize> Sub for &RealVectorState<F, N> {
    type Output = RealVectorState<F, N>;

    fn sub(self, other: Self) -> Self::Output {
        *self - *other
    }
}

impl<F: Float, const N: usize> Mul<F> for RealVectorState<F, N> {
    type Output = RealVectorState<F, N>;

    fn mul(self, scalar: F) -> Self::Output {
        let mut values = self.values;
        for i in 0..N {
            values[i] = values[i] * scalar;
        }
        RealVectorState { values }
    }
}

impl<F: Float, const N: usize> Div<F> for RealVectorState<F, N> {
    type Output = RealVectorState<F, N>;

    fn div(self, scalar: F) -> Self::Output {
        let mut values = self.values;
        for i in 0..N {
            values[i] = values[i] / scalar;
        }
        RealVectorState { values }
    }
}

// serde does not provide Deserialize for const-generic arrays, so both
// directions are implemented by hand as a fixed-length tuple of coordinates.
impl<F: Float + Serialize, const N: usize> Serialize for RealVectorState<F, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for value in &self.values {
            tuple.serialize_element(value)?;
        }
        tuple.end()
    }
}

impl<'de, F: Float + Deserialize<'de>, const N: usize> Deserialize<'de> for RealVectorState<F, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StateVisitor<F, const N: usize>(PhantomData<F>);

        impl<'de, F: Float + Deserialize<'de>, const N: usize> Visitor<'de> for StateVisitor<F, N> {
            type Value = RealVectorState<F, N>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a sequence of {} coordinates", N)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut values = [F::zero(); N];
                for (i, value) in values.iter_mut().enumerate() {
                    *value = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(RealVectorState { values })
            }
        }

        deserializer.deserialize_tuple(N, StateVisitor(PhantomData))
    }
}

/// Axis-aligned bounds of the configuration space.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RealVectorBounds<F: Float, const N: usize> {
    lower: RealVectorState<F, N>,
    upper: RealVectorState<F, N>,
}

impl<F: Float, const N: usize> RealVectorBounds<F, N> {
    /// Constructs new bounds. Panics if any lower coordinate exceeds the
    /// corresponding upper coordinate.
    pub fn new(lower: RealVectorState<F, N>, upper: RealVectorState<F, N>) -> Self {
        for i in 0..N {
            assert!(
                lower[i] <= upper[i],
                "Lower bound exceeds upper bound in dimension {}.",
                i
            );
        }
        Self { lower, upper }
    }

    pub fn lower(&self) -> &RealVectorState<F, N> {
        &self.lower
    }

    pub fn upper(&self) -> &RealVectorState<F, N> {
        &self.upper
    }

    /// Checks if a state lies within the bounds.
    pub fn contains(&self, state: &RealVectorState<F, N>) -> bool {
        (0..N).all(|i| state[i] >= self.lower[i] && state[i] <= self.upper[i])
    }

    /// Clamps a state to the bounds, coordinate-wise.
    pub fn clamp(&self, state: &RealVectorState<F, N>) -> RealVectorState<F, N> {
        let mut values = *state.values();
        for i in 0..N {
            values[i] = values[i].max(self.lower[i]).min(self.upper[i]);
        }
        RealVectorState::new(values)
    }

    /// Returns the length of the bounds diagonal (the maximum extent of the
    /// space). Used to self-configure the planner range.
    pub fn max_extent(&self) -> F {
        self.lower.euclidean_distance(&self.upper)
    }
}
