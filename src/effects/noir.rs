use image::DynamicImage;

/// 8-bit grayscale conversion.
pub fn noir(img: &DynamicImage) -> DynamicImage {
    DynamicImage::ImageLuma8(img.to_luma8())
}
