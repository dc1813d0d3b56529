use std::path::PathBuf;

use tempfile::TempDir;

use wallsy::domain::model::Effect;
use wallsy::effects::{self, colorize::parse_color};

fn gradient_png(dir: &std::path::Path) -> PathBuf {
    let img = image::RgbImage::from_fn(64, 48, |x, y| {
        image::Rgb([(x * 4) as u8, (y * 5) as u8, ((x + y) * 2) as u8])
    });
    let path = dir.join("gradient.png");
    image::DynamicImage::ImageRgb8(img).save(&path).unwrap();
    path
}

#[test]
fn test_blur_writes_derived_file_and_keeps_input() {
    let tmp = TempDir::new().unwrap();
    let input = gradient_png(tmp.path());

    let out = effects::apply_to_file(&Effect::Blur { radius: 3 }, &input, tmp.path()).unwrap();

    assert_eq!(out, tmp.path().join("gradient-blur.png"));
    assert!(input.exists());

    let blurred = image::open(&out).unwrap();
    assert_eq!((blurred.width(), blurred.height()), (64, 48));
}

#[test]
fn test_noir_output_decodes_as_grayscale() {
    let tmp = TempDir::new().unwrap();
    let input = gradient_png(tmp.path());

    let out = effects::apply_to_file(&Effect::Noir, &input, tmp.path()).unwrap();
    assert_eq!(out, tmp.path().join("gradient-noir.png"));

    let decoded = image::open(&out).unwrap();
    assert_eq!(decoded.color().channel_count(), 1);
}

#[test]
fn test_posterize_forces_png_and_limits_palette() {
    let tmp = TempDir::new().unwrap();

    // start from a jpeg to confirm the container switch
    let img = image::RgbImage::from_fn(32, 32, |x, y| image::Rgb([(x * 8) as u8, (y * 8) as u8, 0]));
    let input = tmp.path().join("photo.jpg");
    image::DynamicImage::ImageRgb8(img).save(&input).unwrap();

    let out =
        effects::apply_to_file(&Effect::Posterize { levels: 3 }, &input, tmp.path()).unwrap();
    assert_eq!(out, tmp.path().join("photo-posterize3.png"));

    let decoded = image::open(&out).unwrap().to_rgba8();
    let mut reds: Vec<u8> = decoded.pixels().map(|p| p[0]).collect();
    reds.sort_unstable();
    reds.dedup();
    assert!(reds.len() <= 3, "expected at most 3 red levels, got {:?}", reds);
}

#[test]
fn test_colorize_tints_toward_requested_colors() {
    let tmp = TempDir::new().unwrap();
    let input = gradient_png(tmp.path());

    let effect = Effect::Colorize {
        dark: parse_color("navy").unwrap(),
        light: parse_color("#ffffff").unwrap(),
    };
    let out = effects::apply_to_file(&effect, &input, tmp.path()).unwrap();
    assert_eq!(out, tmp.path().join("gradient-colorize.png"));

    let decoded = image::open(&out).unwrap().to_rgb8();
    for pixel in decoded.pixels() {
        // every pixel sits on the navy→white line: r == g, b >= r
        assert_eq!(pixel[0], pixel[1]);
        assert!(pixel[2] >= pixel[0]);
    }
}

#[test]
fn test_repeated_effect_runs_dedup_output_names() {
    let tmp = TempDir::new().unwrap();
    let input = gradient_png(tmp.path());

    let first = effects::apply_to_file(&Effect::Noir, &input, tmp.path()).unwrap();
    let second = effects::apply_to_file(&Effect::Noir, &input, tmp.path()).unwrap();

    assert_eq!(first, tmp.path().join("gradient-noir.png"));
    assert_eq!(second, tmp.path().join("gradient-noir-1.png"));
}
