//! Plain form widgets styled by the `form__*` classes.
//!
//! Every field takes an optional `error` that is rendered under the control.

pub mod badge;
pub mod checkbox;
pub mod field_error;
pub mod input;
pub mod radio;
pub mod select;
pub mod textarea;

pub use badge::Badge;
pub use checkbox::Checkbox;
pub use field_error::FieldErrorText;
pub use input::Input;
pub use radio::RadioGroup;
pub use select::Select;
pub use textarea::Textarea;
