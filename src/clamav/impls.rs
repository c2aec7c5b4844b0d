pub mod clamd_client;
