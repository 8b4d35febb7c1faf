//! # Cycle Detection Module
//!
//! Cycles are found while the dependency graph is being built, not in a
//! separate pass. The graph builder keeps every package on the active
//! traversal path in the *in-progress* state; an edge that points back at such
//! a package is a back-edge, and the cycle is the slice of the active path
//! from that package to the top of the traversal stack, closed by repeating
//! the package.
//!
//! ## Occurrence semantics
//!
//! A [`Cycle`] records one *occurrence of circularity in the traversal*, not
//! one simple cycle of the mathematical graph. Two back-edges reaching the
//! same ancestor from different descendants are reported as two separate
//! cycles even when the walks overlap. Cycles are kept in discovery order.
//!
//! ## Example
//!
//! ```
//! use deplens::detector::CycleDetector;
//!
//! let mut detector = CycleDetector::new();
//!
//! // Active path D -> A -> B -> C, and C depends on A again
//! let cycle = detector
//!     .record_back_edge(&["D", "A", "B", "C"], "A")
//!     .expect("A is on the active path");
//!
//! assert_eq!(cycle.to_string(), "A -> B -> C -> A");
//! assert_eq!(detector.cycle_count(), 1);
//! ```

mod detector_impl;

pub use detector_impl::*;
