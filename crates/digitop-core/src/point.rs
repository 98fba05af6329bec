//! Integer lattice points and the [`Coord`] storage alias.

use smallvec::SmallVec;
use std::fmt;
use std::ops::{Add, Index, Sub};

/// Raw coordinate storage of a [`Point`].
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for lattices
/// up to 4 dimensions, covering the usual 2D and 3D digital spaces.
/// Higher-dimensional points spill to the heap transparently.
pub type Coord = SmallVec<[i32; 4]>;

/// A displacement between two points. Shares the representation of [`Point`].
pub type Vector = Point;

/// Norm used to measure a displacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Norm {
    /// Sum of absolute coordinates (Manhattan).
    L1,
    /// Euclidean length.
    #[default]
    L2,
    /// Largest absolute coordinate (Chebyshev).
    LInf,
}

/// A point of the integer lattice `Z^d`.
///
/// Points are immutable values: arithmetic produces new points. The
/// ordering is lexicographic on coordinates, which gives sorted
/// containers a deterministic iteration order.
///
/// # Examples
///
/// ```
/// use digitop_core::{Norm, Point};
///
/// let p = Point::from([3, -4]);
/// let q = Point::origin(2);
/// let v = &p - &q;
/// assert_eq!(v.norm1(), 7);
/// assert_eq!(v.norm_inf(), 4);
/// assert_eq!(v.norm(Norm::L2), 5.0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point(Coord);

impl Point {
    /// Build a point from any sequence of coordinates.
    pub fn new(coords: impl IntoIterator<Item = i32>) -> Self {
        Self(coords.into_iter().collect())
    }

    /// The origin of `Z^dim`.
    pub fn origin(dim: usize) -> Self {
        Self(SmallVec::from_elem(0, dim))
    }

    /// Number of coordinates.
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Coordinates as a slice.
    pub fn coords(&self) -> &[i32] {
        &self.0
    }

    /// Consume the point, returning its raw coordinate storage.
    pub fn into_coord(self) -> Coord {
        self.0
    }

    /// Sum of absolute coordinates.
    pub fn norm1(&self) -> u64 {
        self.0.iter().map(|&c| u64::from(c.unsigned_abs())).sum()
    }

    /// Largest absolute coordinate, `0` for a zero-dimensional point.
    pub fn norm_inf(&self) -> u64 {
        self.0
            .iter()
            .map(|&c| u64::from(c.unsigned_abs()))
            .max()
            .unwrap_or(0)
    }

    /// Euclidean length.
    pub fn norm2(&self) -> f64 {
        self.0
            .iter()
            .map(|&c| {
                let c = f64::from(c);
                c * c
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Length under the given norm.
    pub fn norm(&self, norm: Norm) -> f64 {
        match norm {
            Norm::L1 => self.norm1() as f64,
            Norm::L2 => self.norm2(),
            Norm::LInf => self.norm_inf() as f64,
        }
    }

    /// Coordinate-wise combination of two points of the same dimension.
    fn zip_with(&self, other: &Point, f: impl Fn(i32, i32) -> i32) -> Point {
        assert_eq!(
            self.dim(),
            other.dim(),
            "point dimension mismatch: {} vs {}",
            self.dim(),
            other.dim()
        );
        Point(
            self.0
                .iter()
                .zip(other.0.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        )
    }
}

impl Index<usize> for Point {
    type Output = i32;

    fn index(&self, axis: usize) -> &i32 {
        &self.0[axis]
    }
}

impl Sub<&Point> for &Point {
    type Output = Vector;

    fn sub(self, rhs: &Point) -> Vector {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        &self - &rhs
    }
}

impl Add<&Vector> for &Point {
    type Output = Point;

    fn add(self, rhs: &Vector) -> Point {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        &self + &rhs
    }
}

impl<const N: usize> From<[i32; N]> for Point {
    fn from(coords: [i32; N]) -> Self {
        Self(SmallVec::from_slice(&coords))
    }
}

impl From<Coord> for Point {
    fn from(coord: Coord) -> Self {
        Self(coord)
    }
}

impl From<Vec<i32>> for Point {
    fn from(coords: Vec<i32>) -> Self {
        Self(SmallVec::from_vec(coords))
    }
}

impl From<&[i32]> for Point {
    fn from(coords: &[i32]) -> Self {
        Self(SmallVec::from_slice(coords))
    }
}

impl fmt::Display for Point {
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
