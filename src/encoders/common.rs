//! Helpers shared between all encoders

use std::borrow::Cow;

use image::{DynamicImage, ImageEncoder};

use crate::image::Image;

pub fn write_icc_and_exif(encoder: &mut impl ImageEncoder, image: &Image) {
    if let Some(icc) = image.icc.clone() {
        let _ = encoder.set_icc_profile(icc); // ignore UnsupportedError
    };
    if let Some(exif) = image.exif.clone() {
        let _ = encoder.set_exif_metadata(exif); // ignore UnsupportedError
    };
}

/// Converts the image to Rgb8 or Rgba8, keeping the alpha channel if there is one.
pub fn to_8bit_color(pixels: &DynamicImage) -> Cow<'_, DynamicImage> {
    use DynamicImage::*;
    match pixels {
        ImageRgb8(_) | ImageRgba8(_) => Cow::Borrowed(pixels),
        _ if pixels.color().has_alpha() => Cow::Owned(ImageRgba8(pixels.to_rgba8())),
        _ => Cow::Owned(ImageRgb8(pixels.to_rgb8())),
    }
}

/// Converts the image to 8-bit grayscale or 8-bit RGB, discarding alpha.
///
/// Transparent pixels are flattened rather than rejected, unlike PIL which
/// refuses to save an image with alpha as JPEG.
pub fn to_8bit_opaque(pixels: &DynamicImage) -> Cow<'_, DynamicImage> {
    use DynamicImage::*;
    match pixels {
        ImageLuma8(_) | ImageRgb8(_) => Cow::Borrowed(pixels),
        ImageLumaA8(_) | ImageLuma16(_) | ImageLumaA16(_) => {
            Cow::Owned(ImageLuma8(pixels.to_luma8()))
        }
        _ => Cow::Owned(ImageRgb8(pixels.to_rgb8())),
    }
}
