use std::io::Write;

use image::codecs::gif::GifEncoder;
use image::{DynamicImage, ExtendedColorType};

use crate::encoders::common::to_8bit_color;
use crate::error::{ErrorKind, ScaleError};
use crate::{image::Image, si_try};

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), ScaleError> {
    let mut encoder = GifEncoder::new_with_speed(writer, 10);
    let (width, height) = image.dimensions();

    // `GifEncoder` does not implement `ImageEncoder`, so we feed it raw buffers
    // https://github.com/image-rs/image/issues/2497
    let converted = to_8bit_color(&image.pixels);
    match converted.as_ref() {
        DynamicImage::ImageRgb8(data) => si_try!(
            ErrorKind::Encode,
            encoder.encode(data.as_raw(), width, height, ExtendedColorType::Rgb8)
        ),
        DynamicImage::ImageRgba8(data) => si_try!(
            ErrorKind::Encode,
            encoder.encode(data.as_raw(), width, height, ExtendedColorType::Rgba8)
        ),
        _ => unreachable!(), // we've just converted it to RGB(A)
    }
    Ok(())
}
