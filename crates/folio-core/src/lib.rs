pub mod carousel;
pub mod config;
pub mod error;
pub mod portfolio;
pub mod progress;
pub mod typewriter;

pub use carousel::{Carousel, Direction, Tier, TierAssignment, TierPolicy, VisualStyle};
pub use config::{AppConfig, CarouselConfig, EasingType, ScrollConfig, TimelineConfig};
pub use error::{Error, Result};
pub use portfolio::{Portfolio, Project, Section};
pub use progress::{Region, ScrollMetrics, ScrollProgress, ScrollProgressTracker};
pub use typewriter::Typewriter;
