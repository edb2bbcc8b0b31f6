//! Motion for the page and the project carousel
//!
//! - `easing` - pure easing curves mapping `[0, 1]` onto `[0, 1]`
//! - `timing` - progress and interpolation helpers
//! - `animation` - `PageScroller`, the smooth page scroll controller
//!
//! ```ignore
//! let mut scroller = PageScroller::new(config.ui.scroll.clone());
//! scroller.scroll_by(10, max_scroll);
//!
//! // each frame
//! let offset = scroller.update(max_scroll);
//! ```

pub mod animation;
pub mod easing;
pub mod timing;

pub use animation::PageScroller;
pub use easing::{EasingType, EasingTypeExt};
