//! Zip bundling of export artifacts.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::HfgrabError;
use crate::export::Artifact;

/// Pack artifacts into one zip container, one entry per artifact, full
/// relative paths preserved.
pub fn build_zip(artifacts: &[Artifact]) -> Result<Vec<u8>, HfgrabError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for artifact in artifacts {
        writer.start_file(artifact.path.as_str(), options)?;
        writer.write_all(&artifact.bytes)?;
    }

    Ok(writer.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn entries_keep_full_relative_paths() {
        let artifacts = vec![
            Artifact {
                path: "org/data/train.csv".to_string(),
                bytes: b"id\n1\n".to_vec(),
            },
            Artifact {
                path: "org/data/test.csv".to_string(),
                bytes: b"id\n2\n".to_vec(),
            },
        ];

        let bytes = build_zip(&artifacts).expect("zip");
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("read zip");

        assert_eq!(archive.len(), 2);
        let mut content = String::new();
        archive
            .by_name("org/data/train.csv")
            .expect("entry")
            .read_to_string(&mut content)
            .expect("read entry");
        assert_eq!(content, "id\n1\n");
    }

    #[test]
    fn empty_input_builds_an_empty_archive() {
        let bytes = build_zip(&[]).expect("zip");
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("read zip");
        assert_eq!(archive.len(), 0);
    }
}
