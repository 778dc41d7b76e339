//! `scale_icon` squashes every image in a folder into a 128x128 icon, in place.
//!
//! The library is what the `scale_icon` binary is made of; its interface
//! is not meant to be stable.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod args;
pub mod batch;
pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod image;
pub mod init;
pub mod operations;
