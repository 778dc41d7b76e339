//! Initialization that needs to be done on startup

/// Registers decoders that `image` does not ship on its own.
/// Must run before the first image is decoded.
pub fn init() {
    #[cfg(feature = "jxl")]
    jxl_oxide::integration::register_image_decoding_hook();
}
