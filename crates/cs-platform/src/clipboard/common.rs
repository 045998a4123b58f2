use std::io::Cursor;

use anyhow::{anyhow, Context, Result};
use bytes::Bytes;
use clipboard_rs::{common::RustImage, Clipboard, ClipboardContext, ContentFormat, RustImageData};
use cs_core::ports::PasteboardWriteError;
use cs_core::ClipboardPayload;

/// Reads and writes shared by every platform, on top of clipboard-rs.
pub struct CommonClipboardImpl;

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

impl CommonClipboardImpl {
    pub fn read_text(ctx: &ClipboardContext) -> Result<Option<String>> {
        if !ctx.has(ContentFormat::Text) {
            return Ok(None);
        }
        let text = map_clipboard_err(ctx.get_text()).context("failed to read text")?;
        Ok(Some(text))
    }

    /// PNG encoding of the pasteboard image, without validation.
    pub fn read_png_bytes(ctx: &ClipboardContext) -> Result<Option<Vec<u8>>> {
        if !ctx.has(ContentFormat::Image) {
            return Ok(None);
        }
        let image = map_clipboard_err(ctx.get_image()).context("failed to read image")?;
        let png = map_clipboard_err(image.to_png()).context("failed to encode image as PNG")?;
        Ok(Some(png.get_bytes().to_vec()))
    }

    /// PNG image bytes that decode to a non-empty bitmap.
    pub fn read_image(ctx: &ClipboardContext) -> Result<Option<Bytes>> {
        let Some(png) = Self::read_png_bytes(ctx)? else {
            return Ok(None);
        };
        validate_png(&png)?;
        Ok(Some(Bytes::from(png)))
    }

    pub fn write(
        ctx: &ClipboardContext,
        payload: &ClipboardPayload,
    ) -> std::result::Result<(), PasteboardWriteError> {
        match payload {
            ClipboardPayload::Text(text) => {
                map_clipboard_err(ctx.set_text(text.clone())).context("failed to write text")?;
            }
            ClipboardPayload::Image(bytes) => {
                let image = RustImageData::from_bytes(bytes).map_err(|e| {
                    PasteboardWriteError::Rejected(format!("image bytes do not decode: {e}"))
                })?;
                map_clipboard_err(ctx.set_image(image)).context("failed to write image")?;
            }
        }
        Ok(())
    }
}

fn validate_png(bytes: &[u8]) -> Result<()> {
    let reader = image::ImageReader::with_format(Cursor::new(bytes), image::ImageFormat::Png);
    let (width, height) = reader
        .into_dimensions()
        .context("clipboard image is not a valid PNG")?;
    if width == 0 || height == 0 {
        return Err(anyhow!("clipboard image has no pixels ({width}x{height})"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let mut out = Vec::new();
        let image = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]));
        image
            .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .unwrap();
        out
    }

    #[test]
    fn test_validate_png_accepts_real_png() {
        assert!(validate_png(&tiny_png()).is_ok());
    }

    #[test]
    fn test_validate_png_rejects_garbage() {
        assert!(validate_png(b"definitely not a png").is_err());
    }
}
