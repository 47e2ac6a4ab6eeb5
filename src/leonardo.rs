//! Leonardo numbers and the heap-chain bookkeeping built on them.
//!
//! The Leonardo numbers are `L(0) = L(1) = 1` and `L(k) = L(k - 1) + L(k - 2) + 1`.
//! A Leonardo heap of order `k` holds exactly `L(k)` elements; smoothsort keeps the
//! processed prefix of the input as a chain of such heaps.

use cuneiform::cuneiform;

/// Number of Leonardo numbers representable in a `usize`.
pub const LEONARDO_LEN: usize = count_representable();

/// Every Leonardo number that fits in a `usize`, indexed by order.
pub const LEONARDO: [usize; LEONARDO_LEN] = build_table();

const fn count_representable() -> usize {
    let (mut previous, mut current) = (1usize, 1usize);
    let mut count = 2;
    loop {
        match current.checked_add(previous) {
            Some(sum) => match sum.checked_add(1) {
                Some(next) => {
                    previous = current;
                    current = next;
                    count += 1;
                }
                None => return count,
            },
            None => return count,
        }
    }
}

const fn build_table() -> [usize; LEONARDO_LEN] {
    let mut table = [1usize; LEONARDO_LEN];
    let mut k = 2;
    while k < LEONARDO_LEN {
        table[k] = table[k - 1] + table[k - 2] + 1;
        k += 1;
    }
    table
}

/// Returns the Leonardo number `L(k)`.
///
/// # Panics
///
/// Panics if `L(k)` does not fit in a `usize` (`k >= LEONARDO_LEN`).
///
/// # Examples
///
/// ```
/// use smoothsort::leonardo;
///
/// assert_eq!(leonardo(0), 1);
/// assert_eq!(leonardo(4), 9);
/// assert_eq!(leonardo(10), 177);
/// ```
#[inline(always)]
pub const fn leonardo(k: usize) -> usize {
    LEONARDO[k]
}

/// Iterator over the Leonardo numbers, starting at `L(0)`.
///
/// Walks the sequence one step at a time by carrying the pair `(L(k), L(k + 1))`,
/// and ends once the next number would overflow a `usize`.
///
/// ```
/// use smoothsort::LeonardoNumbers;
///
/// let first: Vec<usize> = LeonardoNumbers::new().take(8).collect();
/// assert_eq!(first, vec![1, 1, 3, 5, 9, 15, 25, 41]);
/// ```
#[derive(Clone, Debug)]
pub struct LeonardoNumbers {
    current: Option<usize>,
    next: Option<usize>,
}

impl LeonardoNumbers {
    pub fn new() -> Self {
        Self {
            current: Some(1),
            next: Some(1),
        }
    }
}

impl Default for LeonardoNumbers {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for LeonardoNumbers {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.current?;
        let following = self
            .next
            .and_then(|next| next.checked_add(current))
            .and_then(|sum| sum.checked_add(1));
        self.current = self.next;
        self.next = following;
        Some(current)
    }
}

/// Maximum number of heaps in a chain.
///
/// Orders in a chain are strictly decreasing, so there is at most one heap per order.
pub(crate) const CHAIN_CAPACITY: usize = LEONARDO_LEN;

/// Fixed-capacity stack of `(root, order)` pairs describing the heap-chain.
///
/// Entry `i` is a Leonardo heap of order `orders[i]` whose root sits at
/// `roots[i]` and which covers `roots[i] + 1 - L(orders[i]) ..= roots[i]`.
/// Entries are ordered left to right; together they cover the processed prefix
/// with no gaps. Orders strictly decrease and neighbours differ by at least two,
/// except the last pair which may be consecutive.
#[cuneiform]
pub(crate) struct HeapChain {
    roots: [usize; CHAIN_CAPACITY],
    orders: [u8; CHAIN_CAPACITY],
    len: usize,
}

impl HeapChain {
    pub(crate) fn new() -> Self {
        Self {
            roots: [0; CHAIN_CAPACITY],
            orders: [0; CHAIN_CAPACITY],
            len: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub(crate) fn root(&self, index: usize) -> usize {
        debug_assert!(index < self.len);
        self.roots[index]
    }

    #[inline(always)]
    pub(crate) fn order(&self, index: usize) -> usize {
        debug_assert!(index < self.len);
        self.orders[index] as usize
    }

    /// Rightmost entry.
    #[inline(always)]
    pub(crate) fn last(&self) -> Option<(usize, usize)> {
        let index = self.len.checked_sub(1)?;
        Some((self.roots[index], self.orders[index] as usize))
    }

    /// Returns `true` if the two rightmost heaps have consecutive orders and
    /// can be merged under a new root.
    #[inline(always)]
    pub(crate) fn can_merge(&self) -> bool {
        self.len >= 2 && self.orders[self.len - 2] == self.orders[self.len - 1] + 1
    }

    #[inline(always)]
    pub(crate) fn push(&mut self, root: usize, order: usize) {
        assert!(self.len < CHAIN_CAPACITY, "heap-chain capacity exceeded");
        self.roots[self.len] = root;
        self.orders[self.len] = order as u8;
        self.len += 1;
        debug_assert!(self.is_well_formed());
    }

    #[inline(always)]
    pub(crate) fn pop(&mut self) -> Option<(usize, usize)> {
        let last = self.last()?;
        self.len -= 1;
        Some(last)
    }

    /// Checks the shape invariants of the chain.
    pub(crate) fn is_well_formed(&self) -> bool {
        let entries = &self.orders[..self.len];
        let shaped = entries.windows(2).enumerate().all(|(i, pair)| {
            let is_last_pair = i + 2 == entries.len();
            if is_last_pair {
                pair[0] > pair[1]
            } else {
                pair[0] >= pair[1] + 2
            }
        });

        let contiguous = (1..self.len).all(|i| {
            let span = leonardo(self.orders[i] as usize);
            self.roots[i] >= span && self.roots[i] - span == self.roots[i - 1]
        });

        let anchored = self.len == 0 || self.roots[0] + 1 == leonardo(self.orders[0] as usize);

        shaped && contiguous && anchored
    }
}
