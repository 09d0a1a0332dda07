//! UI components for the adventure generator

mod adventure_dialog;
mod adventure_form;
mod interest_picker;
mod loading_button;
pub use adventure_dialog::{AdventureDialog, AdventureDialogProps};
pub use adventure_form::{AdventureForm, AdventureFormProps};
pub use interest_picker::{InterestPicker, InterestPickerProps};
pub use loading_button::{LoadingButton, LoadingButtonProps};
