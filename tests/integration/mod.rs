//! Integration tests with mock HTTP server

pub mod blocking;
pub mod callbacks;
pub mod endpoints;
pub mod executor;
pub mod mock_server;
