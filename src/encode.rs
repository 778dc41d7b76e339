use std::{
    ffi::OsStr,
    fs::File,
    io::{Cursor, Seek, Write},
    path::Path,
};

use image::ImageFormat;

use crate::{
    encoders,
    error::{ErrorKind, ScaleError},
    image::Image,
    si_err, si_try,
};

/// Overwrites `path` with the encoded image.
///
/// The whole file is encoded in memory first, so a failure to encode
/// leaves whatever was at `path` untouched.
pub fn encode(image: &Image, path: &Path) -> Result<(), ScaleError> {
    let format = choose_encoding_format(path)?;
    let mut buffer = Cursor::new(Vec::new());
    encode_into(image, &mut buffer, format)?;
    write_file(path, buffer.get_ref())
}

fn encode_into<W: Write + Seek>(
    image: &Image,
    writer: &mut W,
    format: ImageFormat,
) -> Result<(), ScaleError> {
    match format {
        #[cfg(feature = "png")]
        ImageFormat::Png => encoders::png::encode(image, writer)?,
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => encoders::jpeg::encode(image, writer)?,
        #[cfg(feature = "webp")]
        ImageFormat::WebP => encoders::webp::encode(image, writer)?,
        #[cfg(feature = "gif")]
        ImageFormat::Gif => encoders::gif::encode(image, writer)?,
        _ => si_try!(ErrorKind::Encode, image.pixels.write_to(writer, format)),
    }
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ScaleError> {
    // `File::create` automatically truncates (overwrites) the file if it exists.
    let mut file = File::create(path).map_err(|error| {
        si_err!(
            ErrorKind::Write,
            "unable to open image '{}': {}",
            path.display(),
            error
        )
    })?;
    si_try!(ErrorKind::Write, file.write_all(bytes));
    // dropping the file would swallow any error from the final write-out
    si_try!(ErrorKind::Write, file.flush());
    Ok(())
}

/// Only the extension decides, whatever format the file was read in.
/// A file without a recognizable extension is never overwritten.
fn choose_encoding_format(path: &Path) -> Result<ImageFormat, ScaleError> {
    if let Ok(format) = ImageFormat::from_path(path) {
        return Ok(format);
    }
    let extension = path.extension().unwrap_or(OsStr::new(""));
    Err(si_err!(
        ErrorKind::Encode,
        "no encode delegate for this image format `{}'",
        extension.to_ascii_uppercase().to_string_lossy()
    ))
}
