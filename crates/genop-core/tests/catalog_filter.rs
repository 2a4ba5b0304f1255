use std::path::PathBuf;

use genop_core::catalog::{load_catalog, ArgDef, AttrDef, OpDef, OpList};
use genop_core::config::GenConfig;
use genop_core::diagnostics::SkipCode;
use genop_core::driver::screen;
use genop_core::render_ops;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .join("tests/genop/fixtures")
}

fn documented(name: &str) -> OpDef {
    OpDef {
        name: name.to_string(),
        summary: format!("Does {name}."),
        ..OpDef::default()
    }
}

/// Names of the primary functions, in file order.
fn primary_functions(src: &str) -> Vec<String> {
    src.lines()
        .filter_map(|l| l.strip_prefix("func "))
        .filter_map(|rest| rest.split_once("(scope *Scope"))
        .map(|(name, _)| name.to_string())
        .collect()
}

#[test]
fn undocumented_and_ref_ops_are_excluded() {
    let ops = load_catalog(&fixtures_dir().join("five_ops.json")).expect("load catalog");
    assert_eq!(ops.op.len(), 5);
    let (src, report) = render_ops(&ops, &GenConfig::default()).expect("render ok");

    assert_eq!(primary_functions(&src), ["Bravo", "Alpha", "Charlie"]);
    assert_eq!(report.emitted, ["Bravo", "Alpha", "Charlie"]);

    let skipped: Vec<(&str, SkipCode)> = report
        .skipped
        .iter()
        .map(|s| (s.op.as_str(), s.code))
        .collect();
    assert_eq!(
        skipped,
        [
            ("Hidden", SkipCode::GOP0005Undocumented),
            ("AssignRef", SkipCode::GOP0004RefTypedArg),
        ]
    );
    assert!(!src.contains("Hidden"));
    assert!(!src.contains("AssignRef"));
}

#[test]
fn catalog_order_is_preserved() {
    let ops = OpList {
        op: vec![documented("B"), documented("A"), documented("C")],
    };
    let (src, _) = render_ops(&ops, &GenConfig::default()).expect("render ok");
    assert_eq!(primary_functions(&src), ["B", "A", "C"]);
}

#[test]
fn internal_denied_and_unmappable_ops_are_skipped() {
    let func_attr = OpDef {
        attr: vec![AttrDef {
            name: "f".to_string(),
            ty: "func".to_string(),
            ..AttrDef::default()
        }],
        ..documented("MapDataset")
    };
    let ref_output = OpDef {
        output_arg: vec![ArgDef {
            name: "ref".to_string(),
            type_attr: "dtype".to_string(),
            is_ref: true,
            ..ArgDef::default()
        }],
        ..documented("Variable")
    };
    let cfg = GenConfig::default();

    let cases = [
        (documented("_Recv"), SkipCode::GOP0002InternalOp),
        (documented("Const"), SkipCode::GOP0001DenyListed),
        (documented("PyFunc"), SkipCode::GOP0001DenyListed),
        (func_attr, SkipCode::GOP0003UnsupportedAttrType),
        (ref_output, SkipCode::GOP0004RefTypedArg),
        (
            OpDef {
                summary: String::new(),
                ..documented("Quiet")
            },
            SkipCode::GOP0005Undocumented,
        ),
    ];
    for (op, want) in &cases {
        let skip = screen(op, &cfg).unwrap_or_else(|| panic!("{} must be skipped", op.name));
        assert_eq!(skip.code, *want, "{}", op.name);
        assert_eq!(skip.op, op.name);
    }

    let ops = OpList {
        op: cases.iter().map(|(op, _)| op.clone()).collect(),
    };
    let (src, report) = render_ops(&ops, &cfg).expect("render ok");
    assert!(report.emitted.is_empty());
    assert_eq!(report.skipped.len(), cases.len());
    assert!(primary_functions(&src).is_empty());
}

#[test]
fn unsupported_attr_skip_names_the_attribute() {
    let op = OpDef {
        attr: vec![AttrDef {
            name: "branches".to_string(),
            ty: "list(func)".to_string(),
            ..AttrDef::default()
        }],
        ..documented("Case")
    };
    let skip = screen(&op, &GenConfig::default()).expect("skipped");
    assert!(skip.message.contains("\"branches\""), "{}", skip.message);
    assert!(skip.message.contains("list(func)"), "{}", skip.message);
}

#[test]
fn deny_list_is_configurable() {
    let cfg = GenConfig {
        deny_list: vec!["Alpha".to_string()],
        ..GenConfig::default()
    };
    assert!(screen(&documented("Const"), &cfg).is_none());
    assert_eq!(
        screen(&documented("Alpha"), &cfg).map(|s| s.code),
        Some(SkipCode::GOP0001DenyListed)
    );
}
