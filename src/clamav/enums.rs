pub mod engine_error;
