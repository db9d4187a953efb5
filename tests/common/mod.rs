use std::fs;
use std::path::{Path, PathBuf};

use stemma::Witness;

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("STEMMA_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set STEMMA_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}

/// Two witnesses sharing a long opening phrase and a shorter closing one,
/// with a two-token insertion in the middle of the first.
pub fn sample_witnesses() -> Vec<Witness> {
    vec![
        Witness::plain("A", "a b c d F g h i ! K ! q r s t"),
        Witness::plain("B", "a b c d F g h i ! q r s t"),
    ]
}
