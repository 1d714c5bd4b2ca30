use arch_lint::rules::{NoErrorSwallowing, NoSilentResultDrop};
use arch_lint::{Analyzer, Severity};
use std::path::Path;

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
}

/// Prompting, rendering and writing must surface every error: a lost read or
/// write failure would let dockgen report success without a Dockerfile.
/// Only the `crates/` sources are checked; integration tests are skipped.
#[test]
fn crate_sources_do_not_swallow_errors() {
    let crates_dir = workspace_root().join("crates");
    let analyzer = Analyzer::builder()
        .root(&crates_dir)
        .exclude("**/target/**")
        .exclude("**/tests/**")
        .rule(NoErrorSwallowing::new())
        .rule(NoSilentResultDrop::new())
        .build()
        .expect("build analyzer");

    let result = analyzer.analyze().expect("analyze");

    if result.has_violations_at(Severity::Warning) {
        panic!("{}", result.format_test_report(Severity::Warning));
    }
}
