pub mod player;
pub mod spring;
pub mod stagger;
pub mod style;
pub mod ticker;

pub use player::*;
pub use spring::*;
pub use stagger::*;
pub use style::*;
pub use ticker::*;
