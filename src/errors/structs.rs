/// Wire representation of an error returned to callers.
pub mod api_error;
