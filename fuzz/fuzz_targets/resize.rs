#![no_main]

use std::{num::NonZeroU8, path::Path};

use arbitrary::Unstructured;
use image::GenericImageView;
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct StructuredImage {
    width: NonZeroU8,
    height: NonZeroU8,
    rgb_data: Vec<u8>,
}

impl StructuredImage {
    fn save_as_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        let img = image::RgbImage::from_raw(
            self.width.get() as u32,
            self.height.get() as u32,
            self.rgb_data.clone(),
        )
        .expect("buffer length matches dimensions");
        img.save_with_format(path, image::ImageFormat::Png)
    }
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let rgb_data_len = width.get() as usize * height.get() as usize * 3;
        let rgb_data = unstructured.bytes(rgb_data_len)?;

        Ok(Self {
            width,
            height,
            rgb_data: rgb_data.to_vec(),
        })
    }
}

// Arbitrary valid images always come out as icons; arbitrary bytes never abort the batch.
fuzz_target!(|input: (StructuredImage, Vec<u8>)| {
    let (image, garbage) = input;

    let temp_directory = tempfile::tempdir().expect("failed to create temporary directory");
    let image_path = temp_directory.path().join("input_image.png");
    image
        .save_as_png(&image_path)
        .expect("failed to save image as PNG");
    let garbage_path = temp_directory.path().join("garbage.png");
    std::fs::write(&garbage_path, &garbage).expect("failed to write garbage file");

    let report = scale_icon::batch::run_with_output(temp_directory.path(), &mut std::io::sink())
        .expect("listing a fresh temporary directory must work");
    assert_eq!(report.processed + report.failed, 2);

    let dimensions = image::open(&image_path)
        .expect("could not open the resized file")
        .dimensions();
    assert_eq!(dimensions, (128, 128));
});
