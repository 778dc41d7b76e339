use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::ImageEncoder;

use crate::encoders::common::to_8bit_opaque;
use crate::error::{ErrorKind, ScaleError};
use crate::{image::Image, si_try};

const DEFAULT_QUALITY: u8 = 92;

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), ScaleError> {
    let mut encoder = JpegEncoder::new_with_quality(writer, DEFAULT_QUALITY);
    if let Some(icc) = image.icc.clone() {
        let _ = encoder.set_icc_profile(icc); // ignore UnsupportedError
    };
    // JPEG has neither alpha nor 16-bit samples
    let pixels = to_8bit_opaque(&image.pixels);
    Ok(si_try!(ErrorKind::Encode, pixels.write_with_encoder(encoder)))
}
