//! Mediagate Provider Library
//!
//! This crate provides the media provider abstraction and the Cloudinary implementation.
//! The API talks to providers only through the [`MediaProvider`] trait, so handlers and
//! tests never depend on a concrete vendor client.

pub mod cloudinary;
pub mod factory;
pub mod traits;

// Re-export commonly used types
pub use cloudinary::CloudinaryProvider;
pub use factory::create_provider;
pub use traits::{MediaProvider, ProviderError, ProviderResult};
