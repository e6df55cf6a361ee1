use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> io::Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path).map_err(|e| {
        io::Error::new(e.kind(), format!("Failed to open file {}: {}", path.display(), e))
    })?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Buffered output file, gzip-compressed when the path ends in `.gz`.
///
/// Dropping a `TableSink` closes the file, but only [TableSink::finish] reports errors from the
/// final flush (and the gzip trailer).
///
pub enum TableSink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl TableSink {
    pub fn finish(self) -> io::Result<()> {
        match self {
            TableSink::Plain(mut w) => w.flush(),
            TableSink::Gzip(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for TableSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            TableSink::Plain(w) => w.write(buf),
            TableSink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            TableSink::Plain(w) => w.flush(),
            TableSink::Gzip(w) => w.flush(),
        }
    }
}

///
/// Create (or truncate) a file for writing, creating parent directories as needed.
///
/// # Arguments
///
/// - path: the path to the file to write
///
pub fn get_dynamic_writer(path: &Path) -> io::Result<TableSink> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = BufWriter::new(File::create(path)?);
    Ok(match is_gzipped(path) {
        true => TableSink::Gzip(GzEncoder::new(file, Compression::default())),
        false => TableSink::Plain(file),
    })
}
