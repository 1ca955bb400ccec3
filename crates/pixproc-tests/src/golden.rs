//! Golden hash tests.
//!
//! Every operation is run on the shared fixtures and the SHA-256 of the
//! output is compared against `golden/hashes.json`. The hash covers each
//! pixel word as four big-endian bytes in row-major order, so any change to
//! channel layout, iteration order, or arithmetic shows up here.
//!
//! # Running
//!
//! ```bash
//! cargo test --package pixproc-tests golden
//! ```

use crate::{gradient_4x4, init_tracing, pattern};
use pixproc_core::Image;
use pixproc_ops::Operation;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

const GOLDEN_JSON: &str = include_str!("../golden/hashes.json");

#[derive(Debug, serde::Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    version: String,
    #[allow(dead_code)]
    encoding: String,
    fixtures: HashMap<String, HashMap<String, String>>,
}

fn load_golden() -> GoldenData {
    serde_json::from_str(GOLDEN_JSON).expect("golden/hashes.json is valid")
}

/// SHA-256 of the image's packed words, big-endian, as lowercase hex.
fn compute_hash(img: &Image) -> String {
    let mut hasher = Sha256::new();
    for px in img.pixels() {
        hasher.update(px.to_raw().to_be_bytes());
    }
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

fn fixtures() -> Vec<(&'static str, Image)> {
    vec![
        ("gradient_4x4", gradient_4x4()),
        ("pattern_7x7", pattern(7, 7)),
        ("pattern_8x6", pattern(8, 6)),
    ]
}

fn expected<'a>(golden: &'a GoldenData, fixture: &str, key: &str) -> Option<&'a str> {
    golden
        .fixtures
        .get(fixture)
        .and_then(|hashes| hashes.get(key))
        .map(String::as_str)
}

#[test]
fn test_fixture_inputs() {
    let golden = load_golden();
    for (name, img) in fixtures() {
        assert_eq!(
            Some(compute_hash(&img).as_str()),
            expected(&golden, name, "input"),
            "{name} input drifted; golden outputs would be meaningless"
        );
    }
}

#[test]
fn test_operations_match_golden() {
    init_tracing();
    let golden = load_golden();
    let mut checked = 0;

    for (name, input) in fixtures() {
        for op in Operation::ALL {
            let Some(want) = expected(&golden, name, op.name()) else {
                // Only non-square fixtures lack a transpose entry.
                assert_eq!(op, Operation::Transpose, "{name}: missing {op} hash");
                assert!(!input.is_square());
                continue;
            };

            let (w, h) = op.output_dimensions(input.width(), input.height()).unwrap();
            let mut output = Image::new(w, h).unwrap();
            op.apply(&input, &mut output).unwrap();

            let got = compute_hash(&output);
            tracing::info!(fixture = name, op = op.name(), hash = %got, "golden");
            assert_eq!(got, want, "{name}/{op}");
            checked += 1;
        }
    }

    assert_eq!(checked, 11);
}

#[test]
fn test_gradient_emboss_values() {
    // Spot-check that the golden hash reflects readable values.
    let input = gradient_4x4();
    let mut output = Image::new(4, 4).unwrap();
    Operation::Emboss.apply(&input, &mut output).unwrap();

    let words = output.into_raw();
    assert_eq!(&words[..5], &[0x8080_80FF; 5]);
    // Interior: every channel differs by -32 from the neighbor; red wins the tie.
    assert_eq!(words[5], 0x6060_60FF);
    assert_eq!(words[15], 0x6060_60FF);
}

#[test]
fn test_gradient_ellipse_values() {
    let input = gradient_4x4();
    let mut output = Image::new(4, 4).unwrap();
    Operation::Ellipse.apply(&input, &mut output).unwrap();

    let words = output.into_raw();
    assert_eq!(
        words,
        vec![
            0x0000_00FF, 0x0000_00FF, 0x4000_20FF, 0x0000_00FF,
            0x0000_00FF, 0x2020_20FF, 0x4020_30FF, 0x6020_40FF,
            0x0040_20FF, 0x2040_30FF, 0x4040_40FF, 0x6040_50FF,
            0x0000_00FF, 0x2060_40FF, 0x4060_50FF, 0x6060_60FF,
        ]
    );
}
