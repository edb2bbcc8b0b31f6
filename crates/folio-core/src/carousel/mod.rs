//! Circular carousel navigation
//!
//! The carousel cycles through a fixed list of items, one of which is active.
//! Navigation goes through a transition lock so a new move cannot start while
//! the previous slide is still animating.
//!
//! - `index` - circular successor, predecessor and signed distance
//! - `lock` - Idle / Transitioning guard with a cancellable unlock timer
//! - `tier` - per-item visual tier by distance from the active item
//! - `controller` - the `Carousel` combining the three
//!
//! ```ignore
//! let mut carousel = Carousel::new(projects.len(), &config.carousel)?;
//! carousel.next();
//! for (index, assignment) in carousel.window() {
//!     // paint card `index` with `assignment.style`
//! }
//! ```

pub mod controller;
pub mod index;
pub mod lock;
pub mod tier;

pub use controller::{Carousel, Direction};
pub use index::{circular_distance, next_index, normalize_index, prev_index};
pub use lock::TransitionLock;
pub use tier::{Tier, TierAssignment, TierBand, TierPolicy, VisualStyle};
