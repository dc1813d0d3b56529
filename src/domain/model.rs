use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::utils::error::{Result, WallsyError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};

/// Where an image in the pipeline came from. Carried for logging and for
/// deciding whether an import can be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    LocalFile,
    Url(String),
    UnsplashRandom,
    LocalRandom,
    CurrentWallpaper,
    Derived,
}

/// A validated image inside the wallsy media tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub path: PathBuf,
    pub origin: Origin,
}

impl ImageFile {
    pub fn new(path: PathBuf, origin: Origin) -> Self {
        Self { path, origin }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A color argument to the colorize effect: the user-supplied spelling plus
/// its resolved RGB value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColor {
    pub spec: String,
    pub rgb: [u8; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Blur { radius: u32 },
    Noir,
    Posterize { levels: u8 },
    Colorize { dark: NamedColor, light: NamedColor },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceSpec {
    File(PathBuf),
    Url(String),
    RandomOnline {
        keywords: Vec<String>,
        dimensions: Option<Dimensions>,
        count: u32,
    },
    RandomLocal {
        count: u32,
    },
    CurrentWallpaper,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SinkSpec {
    Save {
        dest: Option<PathBuf>,
        name: Option<String>,
    },
    Desktop,
    Show,
}

/// One chained subcommand, in command-line order, before phase
/// classification. `Desktop` stays unresolved here: it only becomes a
/// source or a sink once the whole chain is known.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Source(SourceSpec),
    Effect(Effect),
    Desktop,
    Sink(SinkSpec),
    Every { interval_secs: u64 },
}

/// The classified pipeline: stages partitioned into the three execution
/// phases, preserving command-line order within each phase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineSpec {
    pub sources: Vec<SourceSpec>,
    pub effects: Vec<Effect>,
    pub sinks: Vec<SinkSpec>,
    pub repeat: Option<Duration>,
}

impl PipelineSpec {
    /// Partition a raw stage chain into execution phases.
    ///
    /// Phase ordering is fixed regardless of interleaving on the command
    /// line: sources run first, then effects, then sinks. A `desktop`
    /// stage resolves to the current-wallpaper source when the chain has
    /// no other source, and to the set-wallpaper sink otherwise.
    pub fn classify(stages: Vec<Stage>) -> Self {
        let has_source = stages.iter().any(|s| matches!(s, Stage::Source(_)));

        let mut spec = PipelineSpec::default();
        let mut desktop_resolved_as_source = false;

        for stage in stages {
            match stage {
                Stage::Source(src) => spec.sources.push(src),
                Stage::Effect(effect) => spec.effects.push(effect),
                Stage::Sink(sink) => spec.sinks.push(sink),
                Stage::Desktop => {
                    if !has_source && !desktop_resolved_as_source {
                        spec.sources.push(SourceSpec::CurrentWallpaper);
                        desktop_resolved_as_source = true;
                    } else {
                        spec.sinks.push(SinkSpec::Desktop);
                    }
                }
                Stage::Every { interval_secs } => {
                    spec.repeat = Some(Duration::from_secs(interval_secs));
                }
            }
        }

        spec
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.effects.is_empty() && self.sinks.is_empty()
    }
}

impl Validate for PipelineSpec {
    fn validate(&self) -> Result<()> {
        if self.sources.is_empty() && !(self.effects.is_empty() && self.sinks.is_empty()) {
            return Err(WallsyError::UsageError {
                message: "No image in the pipeline. Run 'add' or 'random' to source an image first"
                    .to_string(),
            });
        }

        for source in &self.sources {
            match source {
                SourceSpec::Url(url) => validate_url("url", url)?,
                SourceSpec::RandomOnline {
                    keywords,
                    dimensions,
                    count,
                } => {
                    validate_positive_number("count", *count as usize, 1)?;
                    for keyword in keywords {
                        validate_non_empty_string("keyword", keyword)?;
                    }
                    if let Some(dims) = dimensions {
                        validate_positive_number("width", dims.width as usize, 1)?;
                        validate_positive_number("height", dims.height as usize, 1)?;
                    }
                }
                SourceSpec::RandomLocal { count } => {
                    validate_positive_number("count", *count as usize, 1)?;
                }
                SourceSpec::File(_) | SourceSpec::CurrentWallpaper => {}
            }
        }

        for effect in &self.effects {
            match effect {
                Effect::Blur { radius } => validate_range("radius", *radius, 1, 100)?,
                Effect::Posterize { levels } => validate_range("levels", *levels, 2u8, 255u8)?,
                Effect::Noir | Effect::Colorize { .. } => {}
            }
        }

        if let Some(repeat) = self.repeat {
            validate_positive_number("interval", repeat.as_secs() as usize, 1)?;
        }

        Ok(())
    }
}

/// What the pipeline produced: the final image stream and a record of
/// each sink action, in the order they ran.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    pub images: Vec<ImageFile>,
    pub delivered: Vec<String>,
}
