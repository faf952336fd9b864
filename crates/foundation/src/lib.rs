pub mod easing;
pub mod geometry;
pub mod handles;
pub mod time;

// Foundation crate: small, well-tested primitives only.
pub use easing::*;
pub use geometry::*;
pub use handles::*;
pub use time::*;
