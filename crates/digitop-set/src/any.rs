//! Run-time choice of point-set backend.

use crate::dense::{DenseIter, DensePointSet};
use crate::hashed::HashPointSet;
use crate::point_set::PointSet;
use crate::small::SmallPointSet;
use digitop_core::{HyperRectDomain, Point};
use std::fmt;

/// Expected number of points relative to the domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetSize {
    /// A handful of points, such as a neighbourhood.
    Small,
    /// A sparse subset of the domain.
    Medium,
    /// A large share of the domain.
    Big,
}

/// Dominant access pattern of a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetAccess {
    /// Mostly walked from start to end.
    HighIteration,
    /// Mostly queried with membership tests.
    HighMembership,
}

/// Which [`PointSet`] backend to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SetKind {
    /// [`SmallPointSet`].
    Small,
    /// [`HashPointSet`].
    #[default]
    Hashed,
    /// [`DensePointSet`].
    Dense,
}

impl SetKind {
    /// The backend suited to a size and access pattern.
    ///
    /// ```
    /// use digitop_set::{SetAccess, SetKind, SetSize};
    ///
    /// assert_eq!(SetKind::select(SetSize::Small, SetAccess::HighMembership), SetKind::Small);
    /// assert_eq!(SetKind::select(SetSize::Big, SetAccess::HighMembership), SetKind::Dense);
    /// assert_eq!(SetKind::select(SetSize::Big, SetAccess::HighIteration), SetKind::Hashed);
    /// ```
    pub fn select(size: SetSize, access: SetAccess) -> Self {
        match (size, access) {
            (SetSize::Small, _) => SetKind::Small,
            (SetSize::Medium, _) => SetKind::Hashed,
            (SetSize::Big, SetAccess::HighMembership) => SetKind::Dense,
            (SetSize::Big, SetAccess::HighIteration) => SetKind::Hashed,
        }
    }
}

impl fmt::Display for SetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetKind::Small => write!(f, "small"),
            SetKind::Hashed => write!(f, "hashed"),
            SetKind::Dense => write!(f, "dense"),
        }
    }
}

/// A point set whose backend is picked at run time.
#[derive(Clone, Debug)]
pub enum AnyPointSet {
    /// Inline vector backend.
    Small(SmallPointSet),
    /// Hash backend.
    Hashed(HashPointSet),
    /// Bit-per-point backend.
    Dense(DensePointSet),
}

impl AnyPointSet {
    /// An empty set of the given kind.
    pub fn new(kind: SetKind, domain: HyperRectDomain) -> Self {
        match kind {
            SetKind::Small => AnyPointSet::Small(SmallPointSet::with_domain(domain)),
            SetKind::Hashed => AnyPointSet::Hashed(HashPointSet::with_domain(domain)),
            SetKind::Dense => AnyPointSet::Dense(DensePointSet::with_domain(domain)),
        }
    }

    /// The backend in use.
    pub fn kind(&self) -> SetKind {
        match self {
            AnyPointSet::Small(_) => SetKind::Small,
            AnyPointSet::Hashed(_) => SetKind::Hashed,
            AnyPointSet::Dense(_) => SetKind::Dense,
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $s:ident => $body:expr) => {
        match $self {
            AnyPointSet::Small($s) => $body,
            AnyPointSet::Hashed($s) => $body,
            AnyPointSet::Dense($s) => $body,
        }
    };
}

impl PointSet for AnyPointSet {
    type Iter<'a> = AnyIter<'a>;

    /// Defaults to the hash backend; use [`AnyPointSet::new`] to pick one.
    fn with_domain(domain: HyperRectDomain) -> Self {
        AnyPointSet::new(SetKind::default(), domain)
    }

    fn domain(&self) -> &HyperRectDomain {
        dispatch!(self, s => s.domain())
    }

    fn len(&self) -> usize {
        dispatch!(self, s => s.len())
    }

    fn contains(&self, p: &Point) -> bool {
        dispatch!(self, s => s.contains(p))
    }

    fn insert(&mut self, p: Point) -> bool {
        dispatch!(self, s => s.insert(p))
    }

    fn insert_new(&mut self, p: Point) {
        dispatch!(self, s => s.insert_new(p))
    }

    fn erase(&mut self, p: &Point) -> bool {
        dispatch!(self, s => s.erase(p))
    }

    fn clear(&mut self) {
        dispatch!(self, s => s.clear())
    }

    fn iter(&self) -> AnyIter<'_> {
        match self {
            AnyPointSet::Small(s) => AnyIter::Small(s.iter()),
            AnyPointSet::Hashed(s) => AnyIter::Hashed(s.iter()),
            AnyPointSet::Dense(s) => AnyIter::Dense(s.iter()),
        }
    }
}

/// Iterator over an [`AnyPointSet`].
#[derive(Clone, Debug)]
pub enum AnyIter<'a> {
    /// Over a [`SmallPointSet`].
    Small(<SmallPointSet as PointSet>::Iter<'a>),
    /// Over a [`HashPointSet`].
    Hashed(<HashPointSet as PointSet>::Iter<'a>),
    /// Over a [`DensePointSet`].
    Dense(DenseIter<'a>),
}

impl Iterator for AnyIter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        match self {
            AnyIter::Small(it) => it.next(),
            AnyIter::Hashed(it) => it.next(),
            AnyIter::Dense(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            AnyIter::Small(it) => it.size_hint(),
            AnyIter::Hashed(it) => it.size_hint(),
            AnyIter::Dense(it) => it.size_hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point_set::contract;

    #[test]
    fn contract_holds_for_default_backend() {
        contract::run_full_contract::<AnyPointSet>();
    }

    #[test]
    fn every_kind_behaves_alike() {
        let d = contract::square(3);
        let sets: Vec<AnyPointSet> = [SetKind::Small, SetKind::Hashed, SetKind::Dense]
            .into_iter()
            .map(|kind| {
                let mut s = AnyPointSet::new(kind, d.clone());
                assert_eq!(s.kind(), kind);
                for p in d.iter().filter(|p| p.norm_inf() == 2) {
                    s.insert_new(p);
                }
                s.erase(&Point::from([2, 2]));
                s
            })
            .collect();
        for s in &sets {
            assert_eq!(s.len(), 15);
            assert!(s.same_points(&sets[0]));
            assert_eq!(s.iter().count(), s.len());
        }
    }

    #[test]
    fn selection_table() {
        use SetAccess::*;
        use SetSize::*;
        let table = [
            (Small, HighIteration, SetKind::Small),
            (Small, HighMembership, SetKind::Small),
            (Medium, HighIteration, SetKind::Hashed),
            (Medium, HighMembership, SetKind::Hashed),
            (Big, HighMembership, SetKind::Dense),
            (Big, HighIteration, SetKind::Hashed),
        ];
        for (size, access, kind) in table {
            assert_eq!(SetKind::select(size, access), kind, "{size:?} {access:?}");
        }
    }

    #[test]
    fn kind_display() {
        assert_eq!(SetKind::Dense.to_string(), "dense");
        assert_eq!(SetKind::default(), SetKind::Hashed);
    }
}
