pub mod scan_engine;
