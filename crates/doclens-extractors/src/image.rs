//! Image text extraction: format sniffing, decode, and OCR.

use crate::error::{ExtractError, ExtractResult};
use crate::types::{ExtractedContent, Modality};
use crate::Extractor;
use async_trait::async_trait;
use tracing::error;

/// Image extractor running OCR over decoded raster images.
///
/// Decoding and recognition both happen on the blocking pool; the
/// recognizer receives a grayscale rendition of the upload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageExtractor;

impl ImageExtractor {
    /// Create a new image extractor.
    pub fn new() -> Self {
        Self
    }

    /// Detect image format from magic bytes.
    fn detect_format(content: &[u8]) -> ExtractResult<String> {
        if content.len() < 4 {
            error!("image extraction error: content too short to carry a header");
            return Err(ExtractError::Image);
        }

        if content.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            Ok("png".to_string())
        } else if content.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Ok("jpeg".to_string())
        } else {
            error!("image extraction error: unrecognized image header");
            Err(ExtractError::Image)
        }
    }

    /// Decode the bytes and run Tesseract over the grayscale image.
    #[cfg(feature = "ocr")]
    async fn recognize(&self, content: &[u8]) -> ExtractResult<String> {
        use rusty_tesseract::{Args, Image};

        let content = content.to_vec();

        tokio::task::spawn_blocking(move || {
            let img = image::load_from_memory(&content)
                .map_err(|err| format!("image decode error: {err}"))?;

            // Grayscale rendition, the input Tesseract handles best.
            let gray = image::DynamicImage::ImageLuma8(img.to_luma8());
            let tess_image = Image::from_dynamic_image(&gray)
                .map_err(|err| format!("tesseract image conversion error: {err}"))?;

            let args = Args::default();
            rusty_tesseract::image_to_string(&tess_image, &args)
                .map_err(|err| format!("tesseract error: {err}"))
        })
        .await
        .map_err(|err| {
            error!("OCR task failed: {err}");
            ExtractError::Image
        })?
        .map_err(|err| {
            error!("image extraction error: {err}");
            ExtractError::Image
        })
    }

    #[cfg(not(feature = "ocr"))]
    async fn recognize(&self, _content: &[u8]) -> ExtractResult<String> {
        error!("image upload received but OCR support is not compiled in");
        Err(ExtractError::Image)
    }
}

#[async_trait]
impl Extractor for ImageExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent> {
        let format = Self::detect_format(content)?;
        let text = self.recognize(content).await?;

        Ok(ExtractedContent::new(
            text.trim().to_string(),
            Modality::Image { format },
        ))
    }

    fn supported_types(&self) -> &[&str] {
        &["image/png", "image/jpeg"]
    }

    fn name(&self) -> &str {
        "image-ocr"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection_png() {
        let png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(ImageExtractor::detect_format(&png).unwrap(), "png");
    }

    #[test]
    fn test_format_detection_jpeg() {
        let jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        assert_eq!(ImageExtractor::detect_format(&jpeg).unwrap(), "jpeg");
    }

    #[test]
    fn test_format_detection_unknown() {
        let unknown = vec![0x00, 0x01, 0x02, 0x03, 0x04];
        assert!(matches!(
            ImageExtractor::detect_format(&unknown),
            Err(ExtractError::Image)
        ));
    }

    #[test]
    fn test_format_detection_too_short() {
        let short = vec![0x89, 0x50];
        assert!(ImageExtractor::detect_format(&short).is_err());
    }

    #[tokio::test]
    async fn test_corrupt_image_fails_without_partial_result() {
        // Valid PNG header followed by garbage: the decoder rejects it.
        let mut corrupt = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        corrupt.extend_from_slice(b"not actually image data");

        let extractor = ImageExtractor::new();
        let result = extractor.extract(&corrupt).await;
        assert!(matches!(result, Err(ExtractError::Image)));
    }

    #[test]
    fn test_extractor_supports() {
        let extractor = ImageExtractor::new();
        assert!(extractor.supports("image/png"));
        assert!(extractor.supports("image/jpeg"));
        assert!(!extractor.supports("application/pdf"));
        assert!(!extractor.supports("image/webp"));
    }

    #[test]
    fn test_extractor_name() {
        assert_eq!(ImageExtractor::new().name(), "image-ocr");
    }
}
