//! lanshare - LAN file and text sharing server
//!
//! Upload files, share the latest text snippet, and download from any device
//! on the local network through a small HTTP API.

pub mod config;
pub mod datetime;
pub mod error;
pub mod file;
pub mod logging;
pub mod network;
pub mod share;
pub mod web;

pub use config::Config;
pub use error::{Result, ShareError};
pub use file::{StoredFile, UploadStorage};
pub use share::{LatestShared, LatestSnapshot, SharedFile, SharedText};
pub use web::{create_router, AppState, WebServer};
