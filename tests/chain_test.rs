use clap::Parser;
use std::time::Duration;

use wallsy::cli::{build, Cli};
use wallsy::domain::model::{Effect, SinkSpec, SourceSpec};
use wallsy::utils::validation::Validate;

fn parse(args: &[&str]) -> wallsy::cli::ParsedCli {
    build(Cli::try_parse_from(args).unwrap(), None).unwrap()
}

#[test]
fn test_full_invocation_classifies_and_validates() {
    let parsed = parse(&[
        "wallsy", "random", "-q", "mountain", "blur", "--radius", "10", "save", "--name", "peak",
        "desktop",
    ]);

    assert_eq!(parsed.spec.sources.len(), 1);
    assert_eq!(parsed.spec.effects, vec![Effect::Blur { radius: 10 }]);
    assert_eq!(
        parsed.spec.sinks,
        vec![
            SinkSpec::Save {
                dest: None,
                name: Some("peak".to_string()),
            },
            SinkSpec::Desktop,
        ]
    );
    assert!(parsed.spec.validate().is_ok());
}

#[test]
fn test_bare_desktop_sources_current_wallpaper() {
    let parsed = parse(&["wallsy", "desktop"]);
    assert_eq!(parsed.spec.sources, vec![SourceSpec::CurrentWallpaper]);
    assert!(parsed.spec.sinks.is_empty());
    assert!(parsed.spec.validate().is_ok());
}

#[test]
fn test_effect_without_source_fails_validation() {
    let parsed = parse(&["wallsy", "blur"]);
    let err = parsed.spec.validate().unwrap_err();
    assert!(err.to_string().contains("add"));
}

#[test]
fn test_every_sets_repeat_interval() {
    let parsed = parse(&["wallsy", "random", "--local", "desktop", "every", "900"]);
    assert_eq!(parsed.spec.repeat, Some(Duration::from_secs(900)));
    assert!(parsed.spec.validate().is_ok());
}

#[test]
fn test_every_zero_fails_validation() {
    let parsed = parse(&["wallsy", "random", "--local", "every", "0"]);
    assert!(parsed.spec.validate().is_err());
}

#[test]
fn test_out_of_range_blur_radius_fails_validation() {
    let parsed = parse(&["wallsy", "random", "--local", "blur", "--radius", "400"]);
    assert!(parsed.spec.validate().is_err());
}

#[test]
fn test_global_url_feeds_pipeline() {
    let parsed = parse(&[
        "wallsy",
        "--url",
        "https://example.com/cat.jpg",
        "noir",
        "show",
    ]);
    assert_eq!(
        parsed.spec.sources,
        vec![SourceSpec::Url("https://example.com/cat.jpg".to_string())]
    );
    assert_eq!(parsed.spec.effects, vec![Effect::Noir]);
    assert_eq!(parsed.spec.sinks, vec![SinkSpec::Show]);
    assert!(parsed.spec.validate().is_ok());
}

#[test]
fn test_bare_host_url_fails_validation() {
    let parsed = parse(&["wallsy", "--url", "https://example.com/"]);
    assert!(parsed.spec.validate().is_err());
}

#[test]
fn test_unknown_command_reports_candidates() {
    let cli = Cli::try_parse_from(["wallsy", "posterise"]).unwrap();
    let err = build(cli, None).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("posterise"));
    assert!(message.contains("posterize"));
}
