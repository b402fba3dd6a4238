//! Egui input guard: prevents click-through from UI elements to the map.
//!
//! When egui (journey button, location modal) is handling pointer input, map
//! input systems should skip processing so a button click never also pans
//! the map or activates a marker underneath it.

use bevy_egui::EguiContexts;

/// Returns `true` when egui wants the pointer: the cursor is over an egui
/// element, or egui is actively handling a drag or click. Input systems
/// should early-return when this is `true`.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}
