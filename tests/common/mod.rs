#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

pub const VCF_HEADER: &str =
    "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\thap1\thap2\thap3\thap4";

pub const TABLE_HEADER: &str =
    "CHROM\tPOS\tREF.Length\tALT.Length\tDELTA.Length\th1_h2\th1_h3\th1_h4\th2_h3\th2_h4\th3_h4";

/// Gzip `contents` into `dir/name` and return the path.
pub fn write_gz(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut encoder = GzEncoder::new(File::create(&path).expect("create fixture"), Compression::default());
    encoder
        .write_all(contents.as_bytes())
        .expect("write fixture");
    encoder.finish().expect("finish gzip stream");
    path
}

fn snapshot_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
        .join(name)
}

/// Compare `actual` byte for byte with `tests/snapshots/<name>`, line
/// endings included. `HAPCOMPARE_UPDATE_SNAPSHOTS=1` rewrites the file.
pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_path(name);
    if std::env::var_os("HAPCOMPARE_UPDATE_SNAPSHOTS").is_some() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected = fs::read(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if expected != actual.as_bytes() {
        let expected = String::from_utf8_lossy(&expected);
        let first_diff = expected
            .split_inclusive('\n')
            .zip(actual.split_inclusive('\n'))
            .position(|(want, got)| want != got);
        panic!(
            "Snapshot mismatch for {:?} (first differing row: {:?}).\nExpected: {:?}\nActual:   {:?}",
            path, first_diff, expected, actual
        );
    }
}
