use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::encoders::common::write_icc_and_exif;
use crate::error::{ErrorKind, ScaleError};
use crate::{image::Image, si_try};

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), ScaleError> {
    // zlib level 7 with adaptive filtering is what imagemagick does at its default quality of 75
    let mut encoder =
        PngEncoder::new_with_quality(writer, CompressionType::Level(7), FilterType::Adaptive);
    write_icc_and_exif(&mut encoder, image);
    Ok(si_try!(
        ErrorKind::Encode,
        image.pixels.write_with_encoder(encoder)
    ))
}
