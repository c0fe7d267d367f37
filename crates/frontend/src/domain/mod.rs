pub mod a001_advance_request;
