pub mod anchor;
pub mod animation;
pub mod bounds;
pub mod reveal;

pub use anchor::*;
pub use animation::*;
pub use bounds::*;
pub use reveal::*;
