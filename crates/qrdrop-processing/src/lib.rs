//! qrdrop Processing Library
//!
//! Turns validated text into a QR-code PNG raster. The module matrix comes from the
//! `qrcode` crate; this crate owns the rasterisation (size, margin, colours) and the
//! PNG encoding.

pub mod encoder;

pub use encoder::{EncodeError, Encoder, QrPngEncoder, RenderOptions};
