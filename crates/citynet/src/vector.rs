//! Fixed-dimension vector usable as a hash-map key.
//!
//! Purpose
//! - A small value type over `nalgebra::SVector<f64, N>` with exact equality and
//!   a deterministic hash, so points can key `HashMap`s directly.
//!
//! Semantics worth knowing
//! - Equality is exact component-wise `==`; no epsilon. `-0.0 == 0.0` and both
//!   hash the same. NaN components are not supported as keys.
//! - `<`/`>` compare Euclidean magnitude, not coordinates. Two distinct vectors
//!   of equal magnitude are unordered (`partial_cmp` returns `None`), so neither
//!   `<` nor `>` holds. Do not use this order for canonical sorting.

use nalgebra::SVector;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Index, Mul, Sub};

use crate::error::{CoreError, Result};

/// N real components, fixed at compile time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedVector<const N: usize>(SVector<f64, N>);

/// 2D position used for cities and net points.
pub type Point = FixedVector<2>;

impl<const N: usize> FixedVector<N> {
    /// Build from exactly `N` components; a wrong count does not compile.
    #[inline]
    pub fn new(components: [f64; N]) -> Self {
        Self(SVector::from(components))
    }

    #[inline]
    pub fn zeros() -> Self {
        Self(SVector::zeros())
    }

    /// Checked component access.
    #[inline]
    pub fn component(&self, index: usize) -> Result<f64> {
        if index >= N {
            return Err(CoreError::IndexOutOfRange { index, dim: N });
        }
        Ok(self.0[index])
    }

    #[inline]
    pub fn to_array(&self) -> [f64; N] {
        std::array::from_fn(|i| self.0[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }

    /// Euclidean magnitude.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.0.norm()
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        (self.0 - other.0).norm()
    }

    /// Total preorder by magnitude (equal magnitudes compare `Equal`).
    pub fn magnitude_cmp(&self, other: &Self) -> Ordering {
        self.norm().total_cmp(&other.norm())
    }

    /// Order-sensitive combination of per-component hashes.
    pub fn hash_key(&self) -> u64 {
        self.0.iter().fold(0u64, |seed, &c| {
            let h = mix(canonical_bits(c));
            seed ^ h
                .wrapping_add(0x9e37_79b9_7f4a_7c15)
                .wrapping_add(seed << 6)
                .wrapping_add(seed >> 2)
        })
    }

    #[inline]
    pub fn as_svector(&self) -> &SVector<f64, N> {
        &self.0
    }
}

impl FixedVector<2> {
    #[inline]
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new([x, y])
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.0[0]
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.0[1]
    }
}

// Folds -0.0 onto 0.0 so that `==` and `hash` agree.
#[inline]
fn canonical_bits(c: f64) -> u64 {
    if c == 0.0 {
        0
    } else {
        c.to_bits()
    }
}

// SplitMix64 finalizer.
#[inline]
fn mix(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

impl<const N: usize> Eq for FixedVector<N> {}

impl<const N: usize> Hash for FixedVector<N> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_key());
    }
}

impl<const N: usize> PartialOrd for FixedVector<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.norm().partial_cmp(&other.norm()) {
            Some(Ordering::Equal) => None,
            ord => ord,
        }
    }
}

impl<const N: usize> Add for FixedVector<N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<const N: usize> Sub for FixedVector<N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<const N: usize> Mul<f64> for FixedVector<N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

/// Unchecked access; panics past `N`. Use [`FixedVector::component`] for a `Result`.
impl<const N: usize> Index<usize> for FixedVector<N> {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        assert!(index < N, "component index {index} out of range for dimension {N}");
        &self.0[index]
    }
}

impl<T: Into<f64>, const N: usize> From<[T; N]> for FixedVector<N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::new(value.map(Into::into))
    }
}

impl<const N: usize> From<SVector<f64, N>> for FixedVector<N> {
    #[inline]
    fn from(value: SVector<f64, N>) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<FixedVector<N>> for SVector<f64, N> {
    #[inline]
    fn from(value: FixedVector<N>) -> Self {
        value.0
    }
}

impl<const N: usize> fmt::Display for FixedVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashMap;

    fn std_hash<T: Hash>(v: &T) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn arithmetic_componentwise() {
        let a = Point::xy(1.0, 2.0);
        let b = Point::xy(3.0, -4.0);
        assert_eq!(a + b, Point::xy(4.0, -2.0));
        assert_eq!(a - b, Point::xy(-2.0, 6.0));
        assert_eq!(a * 2.0, Point::xy(2.0, 4.0));
        assert_eq!(a.dot(&b), 3.0 - 8.0);
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn component_access_checks_range() {
        let v = FixedVector::new([1.0, 2.0, 3.0]);
        assert_eq!(v.component(2), Ok(3.0));
        assert_eq!(
            v.component(3),
            Err(CoreError::IndexOutOfRange { index: 3, dim: 3 })
        );
        assert_eq!(v[0], 1.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_past_dimension_panics() {
        let v = Point::xy(1.0, 2.0);
        let _c: f64 = v[2];
    }

    #[test]
    fn from_integer_components() {
        let v: Point = [3i32, 4].into();
        assert_eq!(v, Point::xy(3.0, 4.0));
        assert_eq!(v.norm(), 5.0);
    }

    #[test]
    fn magnitude_order_ignores_direction() {
        let a = Point::xy(3.0, 4.0);
        let b = Point::xy(5.0, 0.0);
        let c = Point::xy(1.0, 1.0);
        assert!(c < a);
        assert!(a > c);
        // equal magnitude, different direction: neither < nor >
        assert!(!(a < b) && !(a > b));
        assert_ne!(a, b);
        assert_eq!(a.partial_cmp(&b), None);
        assert_eq!(a.magnitude_cmp(&b), Ordering::Equal);
        assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));
    }

    #[test]
    fn signed_zero_is_one_key() {
        let a = Point::xy(0.0, 1.0);
        let b = Point::xy(-0.0, 1.0);
        assert_eq!(a, b);
        assert_eq!(a.hash_key(), b.hash_key());
        assert_eq!(std_hash(&a), std_hash(&b));
    }

    #[test]
    fn hash_is_order_sensitive() {
        let a = Point::xy(1.0, 2.0);
        let b = Point::xy(2.0, 1.0);
        assert_ne!(a.hash_key(), b.hash_key());
        assert_eq!(a.hash_key(), Point::xy(1.0, 2.0).hash_key());
    }

    #[test]
    fn usable_as_map_key() {
        let mut m = HashMap::new();
        m.insert(Point::xy(1.5, 2.5), "a");
        m.insert(Point::xy(1.5, 2.5), "b");
        assert_eq!(m.len(), 1);
        assert_eq!(m[&Point::xy(1.5, 2.5)], "b");
    }

    #[test]
    fn display_lists_components() {
        assert_eq!(Point::xy(1.0, -2.5).to_string(), "(1, -2.5)");
    }
}
