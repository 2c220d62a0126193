use std::cmp::Ordering;

/// A binary "precedes" predicate: `true` when the first argument sorts before the second.
pub type Comparator<T> = fn(&T, &T) -> bool;

pub fn compare_greater_than<T: PartialOrd>(a: &T, b: &T) -> bool {
    a > b
}

pub fn compare_less_than<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

// =============================================================================
// Milestone 1: Runtime direction selects a comparator
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Smaller values first (less-than).
    #[default]
    Ascending,
    /// Larger values first (greater-than).
    Descending,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

impl From<bool> for Direction {
    fn from(is_greater_than: bool) -> Self {
        if is_greater_than {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }
}

/// Returns the predicate for `direction` as a plain function pointer.
pub fn build_comparator<T: PartialOrd>(direction: Direction) -> Comparator<T> {
    match direction {
        Direction::Ascending => compare_less_than::<T>,
        Direction::Descending => compare_greater_than::<T>,
    }
}

// =============================================================================
// Milestone 2: Marker types pick the direction at compile time
// =============================================================================

pub struct LessThan;
pub struct GreaterThan;

pub trait OrderDirection {
    fn precedes<T: PartialOrd>(a: &T, b: &T) -> bool;
}

impl OrderDirection for LessThan {
    fn precedes<T: PartialOrd>(a: &T, b: &T) -> bool {
        a < b
    }
}

impl OrderDirection for GreaterThan {
    fn precedes<T: PartialOrd>(a: &T, b: &T) -> bool {
        a > b
    }
}

pub fn comparator_for<D: OrderDirection, T: PartialOrd>() -> Comparator<T> {
    D::precedes::<T>
}

// =============================================================================
// Milestone 3: Comparators over derived keys
// =============================================================================

pub fn by_key<T, K, F>(key_fn: F, direction: Direction) -> impl Fn(&T, &T) -> bool
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    let precedes = build_comparator::<K>(direction);
    move |a: &T, b: &T| precedes(&key_fn(a), &key_fn(b))
}

/// Three-way comparison from a less-than predicate. Elements neither of which
/// precedes the other compare `Equal`.
pub fn to_ordering<T, F>(less: F, a: &T, b: &T) -> Ordering
where
    F: Fn(&T, &T) -> bool,
{
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
