use fast_image_resize::{FilterType, ResizeAlg, ResizeOptions, Resizer};
use image::DynamicImage;

use crate::{
    error::{ErrorKind, ScaleError},
    image::Image,
    si_try,
};

/// Width and height of the icons we produce.
pub const ICON_SIZE: u32 = 128;

/// Squashes the image into an `ICON_SIZE`x`ICON_SIZE` square, ignoring the aspect ratio.
pub fn thumbnail(image: &mut Image) -> Result<(), ScaleError> {
    resize_exact(&mut image.pixels, ICON_SIZE, ICON_SIZE)
}

/// Box-filter resize to exactly the requested dimensions.
/// Each destination pixel is the average of the source area that maps onto it.
pub fn resize_exact(
    image: &mut DynamicImage,
    dst_width: u32,
    dst_height: u32,
) -> Result<(), ScaleError> {
    if image.width() == dst_width && image.height() == dst_height {
        return Ok(());
    }
    let mut resizer = Resizer::new();
    let mut dst_image = DynamicImage::new(dst_width, dst_height, image.color());
    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Box));
    si_try!(
        ErrorKind::Resize,
        resizer.resize(&*image, &mut dst_image, &options)
    );
    *image = dst_image;
    Ok(())
}
