// ============================================================================
// STATE MODULE - Reducer + estado compartido con notificaciones
// ============================================================================

pub mod view_state;
pub mod app_state;

pub use view_state::*;
pub use app_state::*;
