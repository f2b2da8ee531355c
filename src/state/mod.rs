// ============================================================================
// STATE MODULE - State management with Rc<RefCell> + notifications
// ============================================================================

pub mod reactivity;
pub mod profile_context;
pub mod notification;
pub mod login_state;
pub mod room_state;
pub mod app_state;

pub use reactivity::*;
pub use profile_context::*;
pub use notification::*;
pub use login_state::*;
pub use room_state::*;
pub use app_state::*;
