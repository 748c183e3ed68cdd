/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_int::codegen::{
    format_source,
    generate,
    render,
    run,
    write_output,
    Destination,
    GenerateError,
    GenerationRequest,
    HEADER,
};
use std::fs;

fn method_body<'a>(source: &'a str, signature: &str) -> &'a str {
    let start = source
        .find(signature)
        .unwrap_or_else(|| panic!("missing {signature} in:\n{source}"));
    let rest = &source[start..];
    let end = rest.find("\n    }").unwrap_or(rest.len());
    &rest[..end]
}

#[test]
fn test_validate_requires_name() {
    let request = GenerationRequest::new("", "i32", false);
    assert!(matches!(
        request.validate(),
        Err(GenerateError::Configuration(_))
    ));
}

#[test]
fn test_validate_requires_wrapped() {
    let request = GenerationRequest::new("Int32", "", false);
    let err = request.validate().unwrap_err();
    assert!(matches!(err, GenerateError::Configuration(_)));
    assert_eq!(err.to_string(), "flags --name and --wrapped are required");
}

#[test]
fn test_validate_accepts_complete_request() {
    assert!(GenerationRequest::new("Int32", "i32", false)
        .validate()
        .is_ok());
}

#[test]
fn test_signed_sub_uses_negation() {
    let source = generate(&GenerationRequest::new("Int32", "i32", false)).unwrap();
    let sub = method_body(&source, "pub fn sub(");
    assert!(sub.contains("wrapping_neg()"), "{sub}");
    assert!(!sub.contains("wrapping_sub(1)"), "{sub}");
}

#[test]
fn test_unsigned_sub_uses_not_of_decrement() {
    let source = generate(&GenerationRequest::new("Uint32", "u32", true)).unwrap();
    let sub = method_body(&source, "pub fn sub(");
    assert!(sub.contains("!(n.wrapping_sub(1))"), "{sub}");
    assert!(!sub.contains("wrapping_neg"), "{sub}");
}

#[test]
fn test_sub_is_the_only_difference() {
    let signed = generate(&GenerationRequest::new("Int64", "u64", false)).unwrap();
    let unsigned = generate(&GenerationRequest::new("Int64", "u64", true)).unwrap();

    let differing: Vec<(&str, &str)> = signed
        .lines()
        .zip(unsigned.lines())
        .filter(|(a, b)| a != b)
        .collect();

    assert_eq!(signed.lines().count(), unsigned.lines().count());
    assert_eq!(differing.len(), 1, "{differing:?}");
    assert!(differing[0].0.contains("wrapping_neg"));
}

#[test]
fn test_generated_type_has_full_method_set() {
    let source = generate(&GenerationRequest::new("Int32", "i32", false)).unwrap();

    assert!(source.contains("pub struct Int32"));
    assert!(source.contains("AtomicI32"));
    for method in [
        "pub const fn new(value: i32) -> Self",
        "pub fn load(&self) -> i32",
        "pub fn add(&self, n: i32) -> i32",
        "pub fn sub(&self, n: i32) -> i32",
        "pub fn inc(&self) -> i32",
        "pub fn dec(&self) -> i32",
        "pub fn cas(&self, old: i32, new: i32) -> bool",
        "pub fn store(&self, n: i32)",
        "pub fn swap(&self, n: i32) -> i32",
        "pub fn marshal_json(&self)",
        "pub fn unmarshal_json(&self, b: &[u8])",
    ] {
        assert!(source.contains(method), "missing `{method}`");
    }
    for trait_impl in [
        "impl Default for Int32",
        "impl From<i32> for Int32",
        "impl fmt::Debug for Int32",
        "impl fmt::Display for Int32",
        "impl Serialize for Int32",
        "impl<'de> Deserialize<'de> for Int32",
    ] {
        assert!(source.contains(trait_impl), "missing `{trait_impl}`");
    }
}

#[test]
fn test_cell_type_follows_wrapped_name() {
    let source = generate(&GenerationRequest::new("Size", "usize", true)).unwrap();
    assert!(source.contains("use std::sync::atomic::{AtomicUsize, Ordering};"));
    assert!(source.contains("v: AtomicUsize,"));
}

#[test]
fn test_generated_docs_mention_wrapped_type() {
    let source = generate(&GenerationRequest::new("Uint16", "u16", true)).unwrap();
    assert!(source.contains("/// `Uint16` is an atomic wrapper around `u16`."));
    assert!(source.contains("/// Atomically subtracts from the wrapped `u16` and returns the new value."));
}

#[test]
fn test_output_starts_with_header() {
    let source = generate(&GenerationRequest::new("Int8", "i8", false)).unwrap();
    assert!(source.starts_with(HEADER));
    assert!(source.contains("// @generated by gen-atomicint"));
    assert!(!source.contains("Copyright"));
    assert!(!source.contains("All rights reserved"));
}

#[test]
fn test_output_is_valid_rust() {
    for (name, wrapped, unsigned) in [
        ("Int32", "i32", false),
        ("Uint32", "u32", true),
        ("Int64", "i64", false),
        ("Uint64", "u64", true),
    ] {
        let source = generate(&GenerationRequest::new(name, wrapped, unsigned)).unwrap();
        let file = syn::parse_file(&source).unwrap();
        assert!(file.items.len() > 5);
    }
}

#[test]
fn test_generation_is_deterministic() {
    let request = GenerationRequest::new("Uint8", "u8", true);
    assert_eq!(generate(&request).unwrap(), generate(&request).unwrap());
}

#[test]
fn test_format_is_idempotent() {
    let request = GenerationRequest::new("Int16", "i16", false);
    let formatted = generate(&request).unwrap();
    let reformatted = format_source(&formatted[HEADER.len()..]).unwrap();
    assert_eq!(reformatted, formatted);
}

#[test]
fn test_for_scalar_matches_library_signedness() {
    let request = GenerationRequest::for_scalar::<i64>("Int64");
    assert_eq!(request.wrapped_type, "i64");
    assert!(!request.unsigned);

    let request = GenerationRequest::for_scalar::<usize>("Uintptr");
    assert_eq!(request.wrapped_type, "usize");
    assert!(request.unsigned);

    let source = generate(&request).unwrap();
    assert!(source.contains("AtomicUsize"));
}

#[test]
fn test_render_rejects_invalid_identifier() {
    let err = render(&GenerationRequest::new("Int-32", "i32", false)).unwrap_err();
    assert!(matches!(err, GenerateError::Render { field: "name", .. }));
    assert!(err.to_string().starts_with("render template:"));
}

#[test]
fn test_generate_checks_configuration_before_rendering() {
    let err = generate(&GenerationRequest::new("", "not an ident", false)).unwrap_err();
    assert!(matches!(err, GenerateError::Configuration(_)));
}

#[test]
fn test_format_rejects_malformed_source() {
    let err = format_source("pub struct { v: i32 ").unwrap_err();
    assert!(matches!(err, GenerateError::Format(_)));
    assert!(err.to_string().starts_with("reformat source:"));
}

#[test]
fn test_format_canonicalizes_layout() {
    let formatted = format_source("pub struct   A{v:i32}").unwrap();
    assert!(formatted.ends_with("pub struct A {\n    v: i32,\n}\n"));
}

#[test]
fn test_run_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("int32.rs");

    let request = GenerationRequest::new("Int32", "i32", false)
        .with_destination(Destination::File(path.clone()));
    run(&request).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, generate(&request).unwrap());
}

#[test]
fn test_run_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("uint8.rs");
    fs::write(&path, "x".repeat(100_000)).unwrap();

    let request = GenerationRequest::new("Uint8", "u8", true)
        .with_destination(Destination::File(path.clone()));
    run(&request).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with(HEADER));
    assert!(!written.contains("xxxx"));
}

#[test]
fn test_failed_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.rs");

    let request =
        GenerationRequest::new("", "i32", false).with_destination(Destination::File(path.clone()));
    assert!(matches!(run(&request), Err(GenerateError::Configuration(_))));
    assert!(!path.exists());

    let request = GenerationRequest::new("Int32", "3i", false)
        .with_destination(Destination::File(path.clone()));
    assert!(matches!(run(&request), Err(GenerateError::Render { .. })));
    assert!(!path.exists());
}

#[test]
fn test_write_output_reports_create_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("out.rs");

    let err = write_output("// text\n", &Destination::File(path)).unwrap_err();
    match &err {
        GenerateError::Io { action, .. } => assert_eq!(*action, "create"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("create \""));
}

#[test]
fn test_destination_display() {
    assert_eq!(Destination::Stdout.to_string(), "standard output");
    assert_eq!(Destination::default(), Destination::Stdout);
}
