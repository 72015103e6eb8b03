use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// An opaque node identifier.
///
/// `Ord` is required on top of `Hash`: frontier keys are composite tuples
/// ending in the node itself, so equal-priority entries pop in identifier
/// order and every run is deterministic.
pub trait NodeId: Clone + Debug + Display + Eq + Hash + Ord {}

impl NodeId for String {}
impl NodeId for &'static str {}
impl NodeId for u32 {}
impl NodeId for u64 {}
impl NodeId for usize {}

/// An edge or path cost.
///
/// `max_value()` doubles as the "unknown heuristic" sentinel, so additions
/// involving it must saturate rather than wrap.
pub trait Cost:
    Copy
    + Debug
    + Display
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + num_traits::SaturatingAdd
    + num_traits::bounds::UpperBounded
    + num_traits::Zero
    + num_traits::One
    + std::ops::Add<Self, Output = Self>
    + std::ops::AddAssign
{
    #[inline(always)]
    fn valid(&self) -> bool {
        *self != Self::max_value()
    }
}

impl Cost for u16 {}
impl Cost for u32 {}
impl Cost for u64 {}
impl Cost for usize {}

/// A reconstructed path and its total cost.
///
/// For A* the cost is the summed edge cost of the walk; for AO* it is the
/// number of decomposition steps taken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<N, C>
where
    N: NodeId,
    C: Cost,
{
    pub nodes: Vec<N>,
    pub cost: C,
}

impl<N, C> Path<N, C>
where
    N: NodeId,
    C: Cost,
{
    #[inline(always)]
    #[must_use]
    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    #[inline(always)]
    #[must_use]
    pub fn end(&self) -> Option<&N> {
        self.nodes.last()
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<N, C> Display for Path<N, C>
where
    N: NodeId,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut nodes = self.nodes.iter();
        match nodes.next() {
            Some(first) => {
                write!(f, "{first}")?;
                for n in nodes {
                    write!(f, " -> {n}")?;
                }
                Ok(())
            }
            None => write!(f, "(empty path)"),
        }
    }
}
