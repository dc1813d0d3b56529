//! Chained subcommand grammar.
//!
//! A wallsy invocation is a pipeline of stages on one command line, e.g.
//! `wallsy random -q mountain blur --radius 10 desktop`. The trailing
//! tokens are segmented at stage-name boundaries and each segment is
//! parsed by that stage's own clap parser, so every stage keeps its own
//! options, defaults and `--help`. Stage names are reserved words inside
//! the pipeline token stream.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::Parser;

use crate::config::store::expand_tilde;
use crate::domain::model::{Dimensions, Effect, PipelineSpec, SinkSpec, SourceSpec, Stage};
use crate::effects::colorize::parse_color;
use crate::utils::error::{Result, WallsyError};

pub const STAGE_NAMES: &[&str] = &[
    "add",
    "random",
    "blur",
    "noir",
    "posterize",
    "colorize",
    "save",
    "desktop",
    "show",
    "every",
];

/// wallsy - the best image modifier for custom wallpapers
#[derive(Debug, Parser)]
#[command(name = "wallsy", version)]
#[command(about = "Chain commands to collect, edit and use images as wallpapers")]
#[command(after_help = "\
Examples:
  wallsy random desktop
  wallsy --file my-wallpaper.jpg blur --radius 20 desktop
  wallsy random -q mountain noir save --dest ~/documents --name myphoto
  wallsy random desktop every 3600

A pipeline needs an image source first ('add', 'random', a bare 'desktop',
--file/--url, or a path piped to stdin), then any number of effects
(blur, noir, posterize, colorize), then sinks (save, show, desktop).")]
pub struct Cli {
    /// Load an image from a file path (shorthand for a leading 'add --file')
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Load an image directly from a URL pointing at an image resource
    #[arg(short, long)]
    pub url: Option<String>,

    /// Override the config directory (default: ~/.config/wallsy)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// The pipeline: chained commands such as 'random blur desktop'
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "PIPELINE")]
    pub pipeline: Vec<String>,
}

#[derive(Debug, Parser)]
#[command(name = "add", about = "Add an image to the pipeline from a file or URL")]
struct AddArgs {
    /// Load an image from a file path
    #[arg(short, long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Load an image directly from a URL
    #[arg(short, long)]
    url: Option<String>,
}

#[derive(Debug, Parser)]
#[command(name = "random", about = "Source a random image (default: Unsplash)")]
struct RandomArgs {
    /// Keyword to refine results; repeatable, e.g. -q pizza -q lemon
    #[arg(short = 'q', long = "keyword")]
    keyword: Vec<String>,

    /// Desired dimensions for online images, e.g. -s 1920 1080
    #[arg(short = 's', long = "size", num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    size: Option<Vec<u32>>,

    /// Pick from the local wallsy folder instead of Unsplash
    #[arg(long, overrides_with = "online")]
    local: bool,

    /// Fetch from Unsplash (the default)
    #[arg(long, overrides_with = "local")]
    online: bool,

    /// Number of random images to source
    #[arg(long, default_value_t = 1)]
    count: u32,
}

#[derive(Debug, Parser)]
#[command(name = "blur", about = "Apply a Gaussian blur")]
struct BlurArgs {
    /// Blur radius in pixels
    #[arg(long, default_value_t = 5)]
    radius: u32,
}

#[derive(Debug, Parser)]
#[command(name = "noir", about = "Convert the image to grayscale")]
struct NoirArgs {}

#[derive(Debug, Parser)]
#[command(name = "posterize", about = "Reduce each color channel to a few levels")]
struct PosterizeArgs {
    /// Levels per channel (2-255); lower is posterier
    #[arg(long, default_value_t = 4)]
    levels: u8,
}

#[derive(Debug, Parser)]
#[command(name = "colorize", about = "Duotone: map shadows and highlights to two colors")]
struct ColorizeArgs {
    /// Color for dark areas (name or #rrggbb)
    #[arg(long, default_value = "midnightblue")]
    dark: String,

    /// Color for light areas (name or #rrggbb)
    #[arg(long, default_value = "white")]
    light: String,
}

#[derive(Debug, Parser)]
#[command(name = "save", about = "Save a copy of the final image")]
struct SaveArgs {
    /// Destination directory (default: the configured save dir)
    #[arg(long, value_name = "DIR")]
    dest: Option<PathBuf>,

    /// New file name; extension is kept from the image when omitted
    #[arg(long)]
    name: Option<String>,
}

#[derive(Debug, Parser)]
#[command(
    name = "desktop",
    about = "Set the image as the desktop wallpaper (or source the current one)"
)]
struct DesktopArgs {}

#[derive(Debug, Parser)]
#[command(name = "show", about = "Open the image in the default viewer")]
struct ShowArgs {}

#[derive(Debug, Parser)]
#[command(name = "every", about = "Repeat the whole pipeline on an interval")]
struct EveryArgs {
    /// Interval between runs, in seconds
    #[arg(value_name = "SECONDS")]
    interval: u64,
}

/// Everything `main` needs after argument handling.
#[derive(Debug)]
pub struct ParsedCli {
    pub config_dir: Option<PathBuf>,
    pub verbose: bool,
    pub spec: PipelineSpec,
}

/// Resolve the full invocation (flags, stdin, pipeline tokens) into a
/// classified pipeline spec. An explicit `--file` takes precedence over a
/// path arriving on stdin.
pub fn build(cli: Cli, stdin_file: Option<PathBuf>) -> Result<ParsedCli> {
    if cli.file.is_some() && cli.url.is_some() {
        return Err(WallsyError::UsageError {
            message: "Provide only one of --file and --url".to_string(),
        });
    }

    let mut stages = Vec::new();

    if let Some(file) = &cli.file {
        stages.push(Stage::Source(SourceSpec::File(expand_tilde(file))));
    } else if let Some(stdin_path) = stdin_file {
        println!("📥 read file from standard input: {}", stdin_path.display());
        stages.push(Stage::Source(SourceSpec::File(stdin_path)));
    }

    if let Some(url) = &cli.url {
        stages.push(Stage::Source(SourceSpec::Url(url.clone())));
    }

    stages.extend(parse_stages(&cli.pipeline)?);

    Ok(ParsedCli {
        config_dir: cli.config_dir,
        verbose: cli.verbose,
        spec: PipelineSpec::classify(stages),
    })
}

/// Split the trailing tokens at stage-name boundaries and parse each
/// segment with its stage parser.
pub fn parse_stages(tokens: &[String]) -> Result<Vec<Stage>> {
    let mut stages = Vec::new();
    let mut idx = 0;

    while idx < tokens.len() {
        let name = tokens[idx].as_str();
        if !STAGE_NAMES.contains(&name) {
            return Err(WallsyError::UsageError {
                message: format!(
                    "Unknown command '{}'. Expected one of: {}",
                    name,
                    STAGE_NAMES.join(", ")
                ),
            });
        }

        let start = idx + 1;
        let mut end = start;
        while end < tokens.len() && !STAGE_NAMES.contains(&tokens[end].as_str()) {
            end += 1;
        }

        stages.push(parse_stage(name, &tokens[start..end])?);
        idx = end;
    }

    Ok(stages)
}

fn parse_stage(name: &str, segment: &[String]) -> Result<Stage> {
    let argv = std::iter::once(name.to_string()).chain(segment.iter().cloned());

    let stage = match name {
        "add" => {
            let args = AddArgs::try_parse_from(argv).map_err(usage_error)?;
            match (args.file, args.url) {
                (Some(file), None) => Stage::Source(SourceSpec::File(expand_tilde(&file))),
                (None, Some(url)) => Stage::Source(SourceSpec::Url(url)),
                _ => {
                    return Err(WallsyError::UsageError {
                        message: "'add': specify one of --file or --url".to_string(),
                    })
                }
            }
        }
        "random" => {
            let args = RandomArgs::try_parse_from(argv).map_err(usage_error)?;
            let dimensions = args.size.map(|wh| Dimensions {
                width: wh[0],
                height: wh[1],
            });
            if args.local {
                Stage::Source(SourceSpec::RandomLocal { count: args.count })
            } else {
                Stage::Source(SourceSpec::RandomOnline {
                    keywords: args.keyword,
                    dimensions,
                    count: args.count,
                })
            }
        }
        "blur" => {
            let args = BlurArgs::try_parse_from(argv).map_err(usage_error)?;
            Stage::Effect(Effect::Blur {
                radius: args.radius,
            })
        }
        "noir" => {
            NoirArgs::try_parse_from(argv).map_err(usage_error)?;
            Stage::Effect(Effect::Noir)
        }
        "posterize" => {
            let args = PosterizeArgs::try_parse_from(argv).map_err(usage_error)?;
            Stage::Effect(Effect::Posterize {
                levels: args.levels,
            })
        }
        "colorize" => {
            let args = ColorizeArgs::try_parse_from(argv).map_err(usage_error)?;
            Stage::Effect(Effect::Colorize {
                dark: parse_color(&args.dark)?,
                light: parse_color(&args.light)?,
            })
        }
        "save" => {
            let args = SaveArgs::try_parse_from(argv).map_err(usage_error)?;
            Stage::Sink(SinkSpec::Save {
                dest: args.dest.as_deref().map(expand_tilde),
                name: args.name,
            })
        }
        "desktop" => {
            DesktopArgs::try_parse_from(argv).map_err(usage_error)?;
            Stage::Desktop
        }
        "show" => {
            ShowArgs::try_parse_from(argv).map_err(usage_error)?;
            Stage::Sink(SinkSpec::Show)
        }
        "every" => {
            let args = EveryArgs::try_parse_from(argv).map_err(usage_error)?;
            Stage::Every {
                interval_secs: args.interval,
            }
        }
        _ => unreachable!("stage name checked against STAGE_NAMES"),
    };

    Ok(stage)
}

fn usage_error(err: clap::Error) -> WallsyError {
    // a per-stage --help is an answer, not an error
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        let _ = err.print();
        std::process::exit(0);
    }

    WallsyError::UsageError {
        message: err.to_string(),
    }
}

/// A file path arriving through a shell pipeline on stdin.
pub fn read_stdin_path() -> Option<PathBuf> {
    if atty::is(atty::Stream::Stdin) {
        return None;
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer).ok()?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(expand_tilde(Path::new(trimmed)))
}
