use std::fs;

use scical::{AngleMode, evaluate};
use walkdir::WalkDir;

/// One line of a case file: `expression => expected`.
enum Expected {
    Value(f64),
    Error(String),
}

#[test]
fn case_files_pass() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let angle_mode = if path.file_stem().is_some_and(|stem| stem == "degrees") {
            AngleMode::Degrees
        } else {
            AngleMode::Radians
        };

        for (number, line) in content.lines().enumerate() {
            let Some((expression, expected)) = parse_case(line) else {
                continue;
            };
            count += 1;

            let result = evaluate(expression, angle_mode, 0.0);
            match (expected, result) {
                (Expected::Value(want), Ok(got)) => {
                    assert!((got - want).abs() <= 1e-9 * want.abs().max(1.0),
                            "{path:?}:{}: {expression} evaluated to {got}, expected {want}",
                            number + 1);
                },
                (Expected::Error(kind), Err(e)) => {
                    assert_eq!(e.kind().to_string(),
                               kind,
                               "{path:?}:{}: {expression} failed with {e}",
                               number + 1);
                },
                (Expected::Value(want), Err(e)) => {
                    panic!("{path:?}:{}: {expression} failed with {e}, expected {want}",
                           number + 1)
                },
                (Expected::Error(kind), Ok(got)) => {
                    panic!("{path:?}:{}: {expression} evaluated to {got}, expected {kind}",
                           number + 1)
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn parse_case(line: &str) -> Option<(&str, Expected)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (expression, expected) = line.rsplit_once("=>")?;
    let expected = expected.trim();
    let expected = match expected.strip_prefix("error") {
        Some(kind) => Expected::Error(kind.trim().to_string()),
        None => Expected::Value(expected.parse()
                                        .unwrap_or_else(|_| panic!("Bad expected value in {line:?}"))),
    };

    Some((expression.trim(), expected))
}
