use image::{DynamicImage, ImageFormat};

/// A decoded image together with the metadata we carry over when writing it back.
#[derive(Debug, Clone)]
pub struct Image {
    /// Format detected while decoding, `None` for formats supplied by decoding hooks
    pub format: Option<ImageFormat>,
    pub exif: Option<Vec<u8>>,
    pub icc: Option<Vec<u8>>,
    pub pixels: DynamicImage,
}

impl Image {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.pixels.width(), self.pixels.height())
    }
}
