pub mod blur;
pub mod colorize;
pub mod noir;
pub mod posterize;

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::config::store::dedup_path;
use crate::domain::model::Effect;
use crate::utils::error::Result;

impl Effect {
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Blur { .. } => "blur",
            Effect::Noir => "noir",
            Effect::Posterize { .. } => "posterize",
            Effect::Colorize { .. } => "colorize",
        }
    }

    /// Filename marker for the derived file (`sunset-blur.jpg`,
    /// `sunset-posterize4.png`).
    pub fn suffix(&self) -> String {
        match self {
            Effect::Blur { .. } => "blur".to_string(),
            Effect::Noir => "noir".to_string(),
            Effect::Posterize { levels } => format!("posterize{}", levels),
            Effect::Colorize { .. } => "colorize".to_string(),
        }
    }

    pub fn apply(&self, img: &DynamicImage) -> DynamicImage {
        match self {
            Effect::Blur { radius } => blur::blur(img, *radius),
            Effect::Noir => noir::noir(img),
            Effect::Posterize { levels } => posterize::posterize(img, *levels),
            Effect::Colorize { dark, light } => colorize::colorize(img, dark, light),
        }
    }

    /// Effects that change the color model force a specific container.
    /// Posterize always writes PNG, like the original quantizer output.
    fn forced_extension(&self) -> Option<&'static str> {
        match self {
            Effect::Posterize { .. } => Some("png"),
            _ => None,
        }
    }
}

/// Decode `input`, run the effect, write the derived file into
/// `effects_dir`. The input file is left untouched.
pub fn apply_to_file(effect: &Effect, input: &Path, effects_dir: &Path) -> Result<PathBuf> {
    let img = image::open(input)?;
    let out_img = effect.apply(&img);

    let out_path = derive_output_path(effect, input, effects_dir);
    out_img.save(&out_path)?;

    Ok(out_path)
}

fn derive_output_path(effect: &Effect, input: &Path, effects_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    let ext = effect
        .forced_extension()
        .map(str::to_string)
        .or_else(|| {
            input
                .extension()
                .map(|e| e.to_string_lossy().to_ascii_lowercase())
        })
        .unwrap_or_else(|| "png".to_string());

    dedup_path(&effects_dir.join(format!("{}-{}.{}", stem, effect.suffix(), ext)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::NamedColor;

    #[test]
    fn test_suffix_includes_posterize_levels() {
        assert_eq!(Effect::Posterize { levels: 4 }.suffix(), "posterize4");
        assert_eq!(Effect::Blur { radius: 10 }.suffix(), "blur");
    }

    #[test]
    fn test_output_path_keeps_input_extension_except_posterize() {
        let tmp = tempfile::TempDir::new().unwrap();
        let effects_dir = tmp.path();

        let path = derive_output_path(
            &Effect::Blur { radius: 5 },
            Path::new("/media/sunset.jpg"),
            effects_dir,
        );
        assert_eq!(path, effects_dir.join("sunset-blur.jpg"));

        let path = derive_output_path(
            &Effect::Posterize { levels: 8 },
            Path::new("/media/sunset.jpg"),
            effects_dir,
        );
        assert_eq!(path, effects_dir.join("sunset-posterize8.png"));
    }

    #[test]
    fn test_apply_dispatches_per_effect() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_fn(8, 8, |x, _| {
            image::Rgb([(x * 32) as u8, 100, 200])
        }));

        assert_eq!(Effect::Noir.apply(&img).color().channel_count(), 1);

        let colorized = Effect::Colorize {
            dark: NamedColor {
                spec: "black".to_string(),
                rgb: [0, 0, 0],
            },
            light: NamedColor {
                spec: "white".to_string(),
                rgb: [255, 255, 255],
            },
        }
        .apply(&img);
        assert_eq!(colorized.color().channel_count(), 3);
    }
}
