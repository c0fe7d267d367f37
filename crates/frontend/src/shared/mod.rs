pub mod api_utils;
pub mod components;
pub mod config;
pub mod dialogs;
pub mod icons;
pub mod lookups;
pub mod modal_frame;
pub mod modal_stack;
pub mod notifications;
pub mod query;
