mod central_panel;
mod context_menu;

pub use central_panel::central_panel;
pub use context_menu::{ContextMenuHandler, ContextMenuState, context_menu};
