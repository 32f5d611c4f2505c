//! Integration tests for rendering and formatting generated constants.

use namesgen_model::{ServiceRecord, ServiceSet};
use namesgen_output::{OutputError, RenderOptions, Renderer, format_source, render};

fn services(pairs: &[(&str, &str)]) -> ServiceSet {
    pairs
        .iter()
        .enumerate()
        .map(|(idx, (name, package))| (idx + 2, ServiceRecord::new(*name, *package)))
        .collect()
}

fn generate(set: &ServiceSet, options: &RenderOptions) -> Result<String, OutputError> {
    let rendered = render(set, options)?;
    Ok(format_source(&rendered)?)
}

#[test]
fn test_rendered_constants() {
    let set = services(&[
        ("ACM", "acm"),
        ("APIGateway", "apigateway"),
        ("AccessAnalyzer", "accessanalyzer"),
        ("Amplify", "amplify"),
    ]);
    let formatted = generate(&set, &RenderOptions::default()).expect("generate constants");
    insta::assert_snapshot!(formatted);
}

#[test]
fn test_input_order_is_kept() {
    let set = services(&[("Zebra", "zebra"), ("Alpha", "alpha"), ("Mid", "mid")]);
    let formatted = generate(&set, &RenderOptions::default()).unwrap();
    let names: Vec<&str> = formatted
        .lines()
        .filter_map(|line| line.strip_prefix('\t'))
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(names, vec!["Zebra", "Alpha", "Mid"]);
}

#[test]
fn test_rendering_is_deterministic() {
    let set = services(&[("ACM", "acm"), ("Batch", "batch")]);
    let renderer = Renderer::new(RenderOptions::default()).unwrap();
    let first = format_source(&renderer.render(&set).unwrap()).unwrap();
    let second = format_source(&renderer.render(&set).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_formatting_is_idempotent() {
    let set = services(&[("ACM", "acm"), ("CloudWatchLogs", "logs"), ("S3", "s3")]);
    let formatted = generate(&set, &RenderOptions::default()).unwrap();
    assert_eq!(format_source(&formatted).unwrap(), formatted);
}

#[test]
fn test_empty_set_formats() {
    let formatted = generate(&ServiceSet::new(), &RenderOptions::default()).unwrap();
    assert!(formatted.ends_with("package names\n\nconst ()\n"));
}

#[test]
fn test_unescaped_quote_fails_in_formatter() {
    let options = RenderOptions {
        escape_values: false,
        ..RenderOptions::default()
    };
    let set = services(&[("ACM", "acm"), ("Quoted", "bad\"value")]);
    let err = generate(&set, &options).unwrap_err();
    match err {
        OutputError::Format(format_err) => assert_eq!(format_err.line, 6),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_quote_is_escaped_by_default() {
    let set = services(&[("Quoted", "bad\"value")]);
    let formatted = generate(&set, &RenderOptions::default()).unwrap();
    assert!(formatted.contains("\tQuoted = \"bad\\\"value\"\n"));
}

#[test]
fn test_invalid_identifier_fails_in_formatter() {
    for name in ["API-Gateway", "1Password", "type", "Two Words", "ACM²", "Ⅳ"] {
        let set = services(&[(name, "pkg")]);
        let err = generate(&set, &RenderOptions::default()).unwrap_err();
        assert!(
            matches!(err, OutputError::Format(_)),
            "{name} should not format: {err}"
        );
    }
}

#[test]
fn test_unicode_letters_and_digits_are_identifiers() {
    let set = services(&[("Größe", "groesse"), ("Zone٣", "zone3")]);
    let formatted = generate(&set, &RenderOptions::default()).unwrap();
    assert!(formatted.contains("\tGröße = \"groesse\"\n"));
    assert!(formatted.contains("\tZone٣ = \"zone3\"\n"));
}

#[test]
fn test_non_printable_values_are_escaped() {
    let set = services(&[("ACM", "a\u{feff}cm"), ("NUL", "n\0l"), ("ZWSP", "z\u{200b}")]);
    let formatted = generate(&set, &RenderOptions::default()).unwrap();
    assert!(formatted.contains("\tACM  = \"a\\ufeffcm\"\n"));
    assert!(formatted.contains("\tNUL  = \"n\\x00l\"\n"));
    assert!(formatted.contains("\tZWSP = \"z\\u200b\"\n"));
    assert!(!formatted.contains('\u{feff}'));
}

#[test]
fn test_raw_non_printable_values_fail_in_formatter() {
    let options = RenderOptions {
        escape_values: false,
        ..RenderOptions::default()
    };
    for value in ["a\u{feff}cm", "n\0l"] {
        let err = generate(&services(&[("ACM", value)]), &options).unwrap_err();
        match err {
            OutputError::Format(format_err) => assert_eq!(format_err.line, 5),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn test_duplicates_are_not_rejected_by_formatter() {
    // duplicate detection belongs to the row filter
    let set = services(&[("ACM", "acm"), ("ACM", "acm2")]);
    let formatted = generate(&set, &RenderOptions::default()).unwrap();
    assert_eq!(formatted.matches("\tACM = ").count(), 2);
}
