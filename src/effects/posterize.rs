use image::DynamicImage;

/// Quantize each color channel to `levels` evenly spaced values (0 and
/// 255 included). Alpha is left alone. The poster look is strongest in
/// the 2-8 range.
pub fn posterize(img: &DynamicImage, levels: u8) -> DynamicImage {
    let levels = levels.max(2);
    let step = 255.0 / (levels as f32 - 1.0);

    let mut rgba = img.to_rgba8();
    for pixel in rgba.pixels_mut() {
        for channel in 0..3 {
            let quantized = (pixel[channel] as f32 / step).round() * step;
            pixel[channel] = quantized.round().clamp(0.0, 255.0) as u8;
        }
    }

    DynamicImage::ImageRgba8(rgba)
}
