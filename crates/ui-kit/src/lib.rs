pub mod components;
pub mod session;
pub mod state;

pub use components::*;
pub use session::{use_element_id, use_session_slot, SessionSlot, SessionTargets};
pub use state::{use_controllable, ControllableState};

// Re-exported so hosts can name placement and range types without a
// direct dependency on ui-types.
pub use ui_types::{Align, RangeBounds, Side, UiConfig, UiError};
