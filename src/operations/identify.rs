use std::io::Write;

use crate::{
    error::{ErrorKind, ScaleError},
    image::Image,
    si_try,
};

/// Reports the dimensions of a freshly decoded image as `(width, height)`.
pub fn print_dimensions(image: &Image, writer: &mut impl Write) -> Result<(), ScaleError> {
    let (width, height) = image.dimensions();
    si_try!(ErrorKind::Write, writeln!(writer, "({width}, {height})"));
    Ok(())
}
