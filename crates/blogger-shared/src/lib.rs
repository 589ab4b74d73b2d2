//! # Blogger Shared
//!
//! Request/response types shared between clients and the API server.

pub mod dto;
