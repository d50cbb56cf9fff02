//! QR encoder - text to PNG raster

use std::io::Cursor;

use async_trait::async_trait;
use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};
use qrdrop_core::ErrorCorrectionLevel;
use thiserror::Error;

/// Pixels per module used when the requested size cannot fit the symbol.
const FALLBACK_MODULE_PIXELS: u32 = 4;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Text is too long to fit in a QR code at error correction level {0}")]
    DataTooLong(ErrorCorrectionLevel),

    #[error("QR encoding failed: {0}")]
    Qr(String),

    #[error("PNG encoding failed: {0}")]
    Image(String),

    #[error("Encoder task failed: {0}")]
    Task(String),
}

/// Encoding capability: text plus parameters in, image bytes out.
#[async_trait]
pub trait Encoder: Send + Sync {
    async fn encode(
        &self,
        text: &str,
        size: u32,
        level: ErrorCorrectionLevel,
    ) -> Result<Vec<u8>, EncodeError>;
}

/// Fixed rendering parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Quiet zone width, in modules
    pub margin: u32,
    pub dark: Luma<u8>,
    pub light: Luma<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            margin: 2,
            dark: Luma([0]),
            light: Luma([255]),
        }
    }
}

/// PNG renderer backed by the `qrcode` crate.
#[derive(Debug, Clone, Default)]
pub struct QrPngEncoder {
    options: RenderOptions,
}

impl QrPngEncoder {
    /// Synchronous encode; CPU-bound.
    pub fn encode_png(
        &self,
        text: &str,
        size: u32,
        level: ErrorCorrectionLevel,
    ) -> Result<Vec<u8>, EncodeError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), ec_level(level))
            .map_err(|e| match e {
                QrError::DataTooLong => EncodeError::DataTooLong(level),
                other => EncodeError::Qr(other.to_string()),
            })?;

        let image = self.rasterize(&code, size);

        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageLuma8(image)
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| EncodeError::Image(e.to_string()))?;

        Ok(buffer.into_inner())
    }

    /// Draw the module matrix onto a square canvas of `size` pixels, margin included.
    ///
    /// Modules are scaled by a fractional factor so the canvas is exactly `size`
    /// wide. When `size` is smaller than the symbol plus margin, the canvas is
    /// instead sized at a fixed number of pixels per module.
    fn rasterize(&self, code: &QrCode, size: u32) -> GrayImage {
        let modules = code.width() as u32;
        let margin = self.options.margin;
        let total = modules + margin * 2;
        let canvas = if size >= total {
            size
        } else {
            total * FALLBACK_MODULE_PIXELS
        };
        let scale = f64::from(canvas) / f64::from(total);
        let colors = code.to_colors();
        let bounds = 0..i64::from(modules);

        GrayImage::from_fn(canvas, canvas, |px, py| {
            let mx = (f64::from(px) / scale).floor() as i64 - i64::from(margin);
            let my = (f64::from(py) / scale).floor() as i64 - i64::from(margin);
            let inside = bounds.contains(&mx) && bounds.contains(&my);
            if inside && colors[(my as usize) * modules as usize + mx as usize] == Color::Dark {
                self.options.dark
            } else {
                self.options.light
            }
        })
    }
}

#[async_trait]
impl Encoder for QrPngEncoder {
    async fn encode(
        &self,
        text: &str,
        size: u32,
        level: ErrorCorrectionLevel,
    ) -> Result<Vec<u8>, EncodeError> {
        let encoder = self.clone();
        let text = text.to_string();
        let start = std::time::Instant::now();

        let bytes = tokio::task::spawn_blocking(move || encoder.encode_png(&text, size, level))
            .await
            .map_err(|e| EncodeError::Task(e.to_string()))??;

        tracing::debug!(
            size,
            level = %level,
            png_bytes = bytes.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "QR code encoded"
        );

        Ok(bytes)
    }
}

fn ec_level(level: ErrorCorrectionLevel) -> EcLevel {
    match level {
        ErrorCorrectionLevel::L => EcLevel::L,
        ErrorCorrectionLevel::M => EcLevel::M,
        ErrorCorrectionLevel::Q => EcLevel::Q,
        ErrorCorrectionLevel::H => EcLevel::H,
    }
}
