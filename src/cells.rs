//! A fixed-capacity set of board cells packed into an unsigned integer.
//!
//! `CellSet<T, N>` addresses an `N×N` grid; cell `(row, col)` maps to bit
//! `row * N + col` of `T`. It is `no_std` friendly and never allocates.
//! Boards smaller than `N` simply leave the outer rows and columns unused.

use core::ops::{BitAnd, BitOr, BitOrAssign};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::MAX_BOARD_SIZE;
use crate::coord::Coordinate;

/// Cell set able to hold any supported board.
pub type BoardCells = CellSet<u128, MAX_BOARD_SIZE>;

/// Errors returned by cell set operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellSetError {
    /// Requested grid N*N exceeds the capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column is outside [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for CellSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSetError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            CellSetError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty set without a capacity check.
    #[inline]
    pub fn new() -> Self {
        CellSet { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, CellSetError> {
        let capacity = mem::size_of::<T>() * 8;
        if N * N > capacity {
            Err(CellSetError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Build a set from an iterator of coordinates.
    pub fn from_cells<I>(cells: I) -> Result<Self, CellSetError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut set = Self::new();
        for cell in cells {
            set.insert(cell)?;
        }
        Ok(set)
    }

    #[inline]
    fn bit(coord: Coordinate) -> Result<T, CellSetError> {
        if coord.row >= N || coord.col >= N {
            return Err(CellSetError::IndexOutOfBounds {
                row: coord.row,
                col: coord.col,
            });
        }
        Ok(T::one() << (coord.row * N + coord.col))
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns `true` if `coord` is in the set. Coordinates outside the grid
    /// are never members.
    pub fn contains(&self, coord: Coordinate) -> bool {
        Self::bit(coord)
            .map(|bit| !(self.bits & bit).is_zero())
            .unwrap_or(false)
    }

    /// Add `coord`, returning `true` if it was not already present.
    pub fn insert(&mut self, coord: Coordinate) -> Result<bool, CellSetError> {
        let bit = Self::bit(coord)?;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Returns `true` if the two sets share at least one cell.
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// Iterate over the members in row-major order.
    pub fn iter(&self) -> Cells<'_, T, N> {
        Cells { set: self, idx: 0 }
    }
}

impl<T, const N: usize> Default for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let mark = if self.contains(Coordinate::new(r, c)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the members of a cell set.
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    set: &'a CellSet<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if !((self.set.bits >> idx) & T::one()).is_zero() {
                return Some(Coordinate::new(idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
