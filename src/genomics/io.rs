//! File wrappers: gzip VCF input and all-or-nothing table output.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use tempfile::NamedTempFile;

/// Open a gzip (or bgzip) compressed VCF as a buffered text reader.
///
/// Decompression errors surface lazily, on the first read.
pub fn open_vcf_gz<P: AsRef<Path>>(path: P) -> io::Result<BufReader<MultiGzDecoder<File>>> {
    let file = File::open(path)?;
    Ok(BufReader::new(MultiGzDecoder::new(file)))
}

/// Output file that only appears at its final path once committed.
///
/// Rows go to a temporary file in the destination directory; dropping the
/// value without calling [`AtomicOutput::commit`] removes it.
#[derive(Debug)]
pub struct AtomicOutput {
    file: BufWriter<NamedTempFile>,
    target: PathBuf,
}

impl AtomicOutput {
    /// Create the temporary file next to `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let target = path.as_ref().to_path_buf();
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let temp = NamedTempFile::new_in(dir)?;
        Ok(Self {
            file: BufWriter::new(temp),
            target,
        })
    }

    /// Final destination path.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Flush and move the temporary file onto the destination path.
    pub fn commit(self) -> io::Result<()> {
        let temp = self.file.into_inner().map_err(|err| err.into_error())?;
        temp.persist(&self.target).map_err(|err| err.error)?;
        Ok(())
    }
}

impl Write for AtomicOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
