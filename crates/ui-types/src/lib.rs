pub mod config;
pub mod error;

// Geometry and the overlay positioning pass
pub mod geometry;
pub mod placement;

// Value state shared by interactive components
pub mod controllable;
pub mod focus;
pub mod range;
pub mod session;

// Presentational helpers
pub mod avatar;
pub mod pagination;
pub mod steps;

// Input formats
pub mod options;
pub mod phone;

pub use config::*;
pub use controllable::*;
pub use error::*;
pub use geometry::*;
pub use placement::*;
pub use range::*;
pub use session::*;
// focus, avatar, pagination and steps expose free functions with generic
// names (`step`, `initials`); use them through their modules.
