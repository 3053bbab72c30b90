//! Storage layer - in-memory project list and image uploads
//!
//! # Architecture
//!
//! - `store`: position-addressed project list shared across request handlers
//! - `uploads`: slugged image files on local disk

pub mod store;
pub mod uploads;

pub use store::ProjectStore;
pub use uploads::{ImageStore, PUBLIC_MOUNT, file_extension, slugify};
