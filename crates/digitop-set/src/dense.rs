//! Characteristic-vector point set: one bit per domain point.

use crate::point_set::PointSet;
use digitop_core::{HyperRectDomain, Point};

const WORD_BITS: usize = u64::BITS as usize;

/// A point set stored as a bit per point of its domain.
///
/// Membership, insertion and erasure are index arithmetic plus a bit
/// operation, and [`insert_new`](PointSet::insert_new) skips even the
/// read. Memory is proportional to the domain size, so this backend suits
/// large sets filling a good part of their domain. Iteration visits points
/// in domain order (first axis fastest).
#[derive(Clone, Debug)]
pub struct DensePointSet {
    domain: HyperRectDomain,
    bits: Vec<u64>,
    len: usize,
}

impl DensePointSet {
    /// Memory used by the bit vector, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.bits.len() * std::mem::size_of::<u64>()
    }

    fn bit(&self, index: usize) -> bool {
        self.bits[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    fn index_of(&self, p: &Point) -> usize {
        match self.domain.linear_index(p) {
            Some(i) => i,
            None => panic!("{p} outside {}", self.domain),
        }
    }
}

impl PointSet for DensePointSet {
    type Iter<'a> = DenseIter<'a>;

    fn with_domain(domain: HyperRectDomain) -> Self {
        let words = domain.size().div_ceil(WORD_BITS);
        Self {
            domain,
            bits: vec![0; words],
            len: 0,
        }
    }

    fn domain(&self) -> &HyperRectDomain {
        &self.domain
    }

    fn len(&self) -> usize {
        self.len
    }

    fn contains(&self, p: &Point) -> bool {
        self.domain.linear_index(p).is_some_and(|i| self.bit(i))
    }

    fn insert(&mut self, p: Point) -> bool {
        let i = self.index_of(&p);
        let word = &mut self.bits[i / WORD_BITS];
        let mask = 1u64 << (i % WORD_BITS);
        if *word & mask != 0 {
            return false;
        }
        *word |= mask;
        self.len += 1;
        true
    }

    fn insert_new(&mut self, p: Point) {
        let i = self.index_of(&p);
        debug_assert!(!self.bit(i), "{p} already in set");
        self.bits[i / WORD_BITS] |= 1u64 << (i % WORD_BITS);
        self.len += 1;
    }

    fn erase(&mut self, p: &Point) -> bool {
        let Some(i) = self.domain.linear_index(p) else {
            return false;
        };
        let word = &mut self.bits[i / WORD_BITS];
        let mask = 1u64 << (i % WORD_BITS);
        if *word & mask == 0 {
            return false;
        }
        *word &= !mask;
        self.len -= 1;
        true
    }

    fn clear(&mut self) {
        self.bits.fill(0);
        self.len = 0;
    }

    fn iter(&self) -> DenseIter<'_> {
        DenseIter {
            set: self,
            word_index: 0,
            word: self.bits.first().copied().unwrap_or(0),
            remaining: self.len,
        }
    }
}

/// Iterator over a [`DensePointSet`], in domain order.
#[derive(Clone, Debug)]
pub struct DenseIter<'a> {
    set: &'a DensePointSet,
    word_index: usize,
    /// Unvisited bits of the current word.
    word: u64,
    remaining: usize,
}

impl Iterator for DenseIter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        while self.word == 0 {
            self.word_index += 1;
            self.word = self.set.bits[self.word_index];
        }
        let bit = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1;
        self.remaining -= 1;
        Some(self.set.domain.point_at(self.word_index * WORD_BITS + bit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for DenseIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point_set::contract;
    use crate::{HashPointSet, SmallPointSet};
    use proptest::prelude::*;

    #[test]
    fn contract() {
        contract::run_full_contract::<DensePointSet>();
    }

    #[test]
    fn assign_across_backends() {
        contract::assert_assign_and_subtract::<DensePointSet, SmallPointSet>();
        contract::assert_assign_and_subtract::<DensePointSet, HashPointSet>();
    }

    #[test]
    fn iterates_in_domain_order() {
        let d = contract::square(2);
        let mut s = DensePointSet::with_domain(d.clone());
        s.insert(Point::from([1, 1]));
        s.insert(Point::from([-2, -2]));
        s.insert(Point::from([2, -2]));
        assert_eq!(
            s.to_vec(),
            vec![Point::from([-2, -2]), Point::from([2, -2]), Point::from([1, 1])]
        );
    }

    #[test]
    fn full_domain_spanning_several_words() {
        let d = contract::square(10);
        let mut s = DensePointSet::with_domain(d.clone());
        for p in d.iter() {
            s.insert_new(p);
        }
        assert_eq!(s.len(), 441);
        assert_eq!(s.memory_bytes(), 441usize.div_ceil(64) * 8);
        assert_eq!(s.to_vec(), d.iter().collect::<Vec<_>>());
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.iter().next(), None);
    }

    #[test]
    fn erase_outside_domain_is_noop() {
        let mut s = DensePointSet::with_domain(contract::square(1));
        assert!(!s.erase(&Point::from([7, 7])));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn insert_outside_domain_panics() {
        let mut s = DensePointSet::with_domain(contract::square(1));
        s.insert(Point::from([7, 7]));
    }

    proptest! {
        #[test]
        fn iteration_matches_membership(xs in proptest::collection::vec((-6i32..=6, -6i32..=6), 0..80)) {
            let d = contract::square(6);
            let mut s = DensePointSet::with_domain(d.clone());
            for (x, y) in xs {
                s.insert(Point::from([x, y]));
            }
            let listed = s.to_vec();
            prop_assert_eq!(listed.len(), s.len());
            let expected: Vec<Point> = d.iter().filter(|p| s.contains(p)).collect();
            prop_assert_eq!(listed, expected);
        }
    }
}
