//! End-to-end runs over on-disk packages.

mod helpers;

use gomust::pipeline::run;
use gomust::semantic::ResolveDiagnostic;
use helpers::GoPackage;
use once_cell::sync::Lazy;

/// A package that already contains the wrapper-named variant: the
/// original qualifies, the existing wrapper must not be wrapped again.
static READALL_PACKAGE: Lazy<String> = Lazy::new(|| {
    String::from(
        "package io\n\n\
         // ReadAll reads until EOF.\n\
         func ReadAll() (int, error) { return 0, nil }\n\n\
         func MustReadAll() (int, error) { return 0, nil }\n",
    )
});

#[test]
fn readall_example_excludes_the_must_variant() {
    let pkg = GoPackage::new().file("io.go", &READALL_PACKAGE);
    let outcome = run(pkg.path()).unwrap();

    assert_eq!(outcome.error_count(), 0);
    assert!(outcome.rendering.contains("func (must) ReadAll()"));
    assert!(!outcome.rendering.contains("MustReadAll"));
    // Doc comment rides along, verbatim, directly above the stub.
    assert!(
        outcome
            .rendering
            .contains("// ReadAll reads until EOF.\nfunc (must) ReadAll()\n")
    );
}

#[test]
fn cross_file_alias_conflict_is_reported_once() {
    let pkg = GoPackage::new()
        .file(
            "a.go",
            "package p\n\nimport f \"fmt\"\n\nfunc A(x f.Stringer) error { return nil }\n",
        )
        .file(
            "b.go",
            "package p\n\nimport f \"strings\"\n\nfunc B(x f.Builder) error { return nil }\n",
        );
    let outcome = run(pkg.path()).unwrap();

    assert_eq!(outcome.error_count(), 1);
    let message = outcome.diagnostics[0].to_string();
    assert!(message.contains("a.go"));
    assert!(message.contains("b.go"));
    assert!(message.contains("\"fmt\""));
    assert!(message.contains("\"strings\""));
    // No second, wrong mapping is inserted.
    assert_eq!(outcome.imports.len(), 1);
    assert_eq!(outcome.imports["f"].path, "fmt");
}

#[test]
fn shared_alias_same_path_merges_to_one_entry() {
    let pkg = GoPackage::new()
        .file(
            "a.go",
            "package p\n\nimport \"io\"\n\nfunc A(r io.Reader) error { return nil }\n",
        )
        .file(
            "b.go",
            "package p\n\nimport \"io\"\n\nfunc B(w io.Writer) error { return nil }\n",
        );
    let outcome = run(pkg.path()).unwrap();

    assert_eq!(outcome.error_count(), 0);
    assert_eq!(outcome.imports.len(), 1);
    assert_eq!(outcome.imports["io"].path, "io");
}

#[test]
fn dot_import_reference_is_unresolvable() {
    let pkg = GoPackage::new().file(
        "a.go",
        "package p\n\nimport . \"io\"\n\nfunc A(r io.Reader) error { return nil }\n",
    );
    let outcome = run(pkg.path()).unwrap();

    assert_eq!(outcome.error_count(), 1);
    assert!(matches!(
        outcome.diagnostics[0],
        ResolveDiagnostic::Unresolved { .. }
    ));
    assert!(outcome.imports.is_empty());
}

#[test]
fn reruns_are_byte_identical() {
    let pkg = GoPackage::new()
        .file(
            "a.go",
            "package p\n\nimport (\n\t\"io\"\n\tf \"fmt\"\n)\n\nfunc A(r io.Reader, s f.Stringer) error { return nil }\n",
        )
        .file(
            "b.go",
            "package p\n\nimport f \"strings\"\n\nfunc B(x f.Builder) error { return nil }\n",
        );

    let first = run(pkg.path()).unwrap();
    let second = run(pkg.path()).unwrap();

    assert_eq!(first.rendering, second.rendering);
    assert_eq!(first.imports, second.imports);
    assert_eq!(first.error_count(), second.error_count());
}

#[test]
fn imports_block_is_omitted_when_nothing_merged() {
    let pkg = GoPackage::new().file(
        "a.go",
        "package p\n\nfunc Close() error { return nil }\n",
    );
    let outcome = run(pkg.path()).unwrap();

    assert_eq!(outcome.error_count(), 0);
    assert!(!outcome.rendering.contains("Imports:"));
    assert!(outcome.rendering.contains("func (must) Close()"));
}

#[test]
fn parse_failure_aborts_the_whole_run() {
    let pkg = GoPackage::new()
        .file("good.go", "package p\n\nfunc A() error { return nil }\n")
        .file("bad.go", "package p\n\n)\n");
    assert!(run(pkg.path()).is_err());
}

#[test]
fn test_files_do_not_contribute_candidates() {
    let pkg = GoPackage::new()
        .file("a.go", "package p\n\nfunc A() error { return nil }\n")
        .file(
            "a_test.go",
            "package p\n\nfunc FromTest() error { return nil }\n",
        );
    let outcome = run(pkg.path()).unwrap();
    assert!(outcome.rendering.contains("func (must) A()"));
    assert!(!outcome.rendering.contains("FromTest"));
}
