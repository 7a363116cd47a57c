// Presentational: no state beyond their props
pub mod badge;
pub mod button;
pub mod card;
pub mod code_block;
pub mod field;
pub mod go_back;
pub mod progress_steps;
pub mod tooltip;

// Controllable value components
pub mod checkbox;
pub mod radio_group;
pub mod switch;
pub mod tabs;

// Formatted and searchable inputs
pub mod creatable_select;
pub mod phone_input;

// Data-driven navigation
pub mod avatar;
pub mod pagination;

// Session-backed: global listeners while a drag or overlay is live
pub mod dropdown;
pub mod modal;
pub mod slider;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use checkbox::*;
pub use code_block::*;
pub use creatable_select::*;
pub use dropdown::*;
pub use field::*;
pub use go_back::*;
pub use modal::*;
pub use pagination::*;
pub use phone_input::*;
pub use progress_steps::*;
pub use radio_group::*;
pub use slider::*;
pub use switch::*;
pub use tabs::*;
pub use tooltip::*;
