use std::path::PathBuf;

use genop_core::catalog::load_catalog;
use genop_core::config::GenConfig;
use genop_core::{generate_functions_for_ops, render_ops};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .join("tests/genop/fixtures")
}

#[test]
fn golden_ops_render_exactly() {
    let ops = load_catalog(&fixtures_dir().join("golden_ops.json")).expect("load catalog");
    let (src, report) = render_ops(&ops, &GenConfig::default()).expect("render ok");
    let want = std::fs::read_to_string(fixtures_dir().join("golden_ops.go.txt"))
        .expect("read golden output");
    assert_eq!(report.emitted, ["NoOp", "AddN", "Unpack"]);
    assert!(report.skipped.is_empty());
    if src != want {
        for (i, (got, exp)) in src.lines().zip(want.lines()).enumerate() {
            assert_eq!(got, exp, "first difference at line {}", i + 1);
        }
        assert_eq!(src.lines().count(), want.lines().count(), "line count");
        panic!("outputs differ only in trailing newlines");
    }
}

#[test]
fn writer_receives_the_rendered_source() {
    let ops = load_catalog(&fixtures_dir().join("golden_ops.json")).expect("load catalog");
    let cfg = GenConfig::default();
    let mut buf: Vec<u8> = Vec::new();
    let report = generate_functions_for_ops(&mut buf, &ops, &cfg).expect("generate ok");
    let (src, again) = render_ops(&ops, &cfg).expect("render ok");
    assert_eq!(String::from_utf8(buf).expect("utf8"), src);
    assert_eq!(report, again);
}

#[test]
fn header_is_parameterized_by_config() {
    let ops = load_catalog(&fixtures_dir().join("golden_ops.json")).expect("load catalog");
    let cfg = GenConfig {
        generated_by: "example.com/tools/genop".to_string(),
        package: "ops".to_string(),
        runtime_import: "example.com/runtime".to_string(),
        ..GenConfig::default()
    };
    let (src, _) = render_ops(&ops, &cfg).expect("render ok");
    assert!(src.starts_with(
        "// DO NOT EDIT\n// This file was machine generated by example.com/tools/genop\n"
    ));
    assert!(src.contains("\npackage ops\n"));
    assert!(src.contains("\nimport tf \"example.com/runtime\"\n"));
    assert_eq!(src.matches("func makeOutputList(").count(), 1);
    assert_eq!(src.matches("// DO NOT EDIT").count(), 1);
}
