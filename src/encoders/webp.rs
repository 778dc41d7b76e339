use std::io::Write;

use crate::encoders::common::to_8bit_color;
use crate::error::{ErrorKind, ScaleError};
use crate::{image::Image, si_err, si_try};
use webp::{Encoder, WebPMemory};

// default quality is not documented by imagemagick, was determined experimentally
const DEFAULT_QUALITY: f32 = 75.0;

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), ScaleError> {
    // libwebp only accepts 8-bit RGB(A)
    let pixels = to_8bit_color(&image.pixels);
    let encoder: Encoder = Encoder::from_image(&pixels)
        .map_err(|e| si_err!(ErrorKind::Encode, "WebP encoding failed: {}", e))?;

    let webp: WebPMemory = encoder
        .encode_simple(false, DEFAULT_QUALITY)
        .map_err(|e| si_err!(ErrorKind::Encode, "WebP encoding failed: {:?}", e))?;
    // TODO: `webp` crate doesn't support setting the ICC profile:
    // https://github.com/jaredforth/webp/issues/41
    Ok(si_try!(ErrorKind::Write, writer.write_all(&webp)))
}
