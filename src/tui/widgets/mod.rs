pub mod common;
pub mod modal_dialog;
pub mod radio_group;

pub use modal_dialog::{DialogType, ModalDialog};
pub use radio_group::RadioGroup;
