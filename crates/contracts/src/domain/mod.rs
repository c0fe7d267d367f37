pub mod a001_advance_request;
pub mod lookups;
