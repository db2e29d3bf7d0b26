pub mod confirm;
pub mod picker;

pub use confirm::ConfirmModal;
pub use picker::{Picker, PickerKind, PickerOutcome};
