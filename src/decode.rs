use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageReader};

use crate::{
    error::{ErrorKind, ScaleError},
    image::Image,
    si_try,
};

/// Guesses the format based on file contents, falling back to the file extension.
pub fn decode(path: &Path) -> Result<Image, ScaleError> {
    let reader = si_try!(ErrorKind::Decode, ImageReader::open(path));
    let reader = si_try!(ErrorKind::Decode, reader.with_guessed_format());
    let format = reader.format();
    let mut decoder = si_try!(ErrorKind::Decode, reader.into_decoder());
    // metadata is best-effort, a broken profile must not cost us the pixels
    let icc = decoder.icc_profile().unwrap_or(None);
    let exif = decoder.exif_metadata().unwrap_or(None);
    let pixels = si_try!(ErrorKind::Decode, DynamicImage::from_decoder(decoder));
    Ok(Image {
        format,
        exif,
        icc,
        pixels,
    })
}
