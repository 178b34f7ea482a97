//! Byte sources that supply raw FRU images to the decoder.
//!
//! The decoder only needs a byte buffer; these helpers fetch one from a dumped
//! image or any seekable reader, in bounded blocks the way an SMBus EEPROM
//! must be read.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use log::debug;
use thiserror::Error;

/// Largest transfer a single SMBus block read can return.
pub const DEFAULT_BLOCK_SIZE: usize = 32;

/// Errors produced while reading a record from a byte source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("short read from offset {offset:#x}: wanted {wanted} bytes, got {got}")]
    ShortRead { offset: u64, wanted: usize, got: usize },
    #[error("block size must be at least 1")]
    InvalidBlockSize,
}

/// Anything that can read bytes at an absolute offset.
pub trait ByteSource {
    /// Read up to `buf.len()` bytes starting at `offset`. Returns the number
    /// of bytes read; 0 means no more data at that offset.
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, SourceError>;
}

/// Any seekable reader, e.g. a `Cursor<Vec<u8>>` holding a dump.
pub struct ReaderSource<R: Read + Seek> {
    inner: R,
}

impl<R: Read + Seek> ReaderSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> ByteSource for ReaderSource<R> {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, SourceError> {
        self.inner.seek(SeekFrom::Start(offset))?;
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(filled)
    }
}

/// A FRU image file (e.g. a dumped EEPROM). The handle is closed when dropped.
pub struct FileSource {
    reader: ReaderSource<BufReader<File>>,
    len: u64,
}

impl FileSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        Ok(Self {
            reader: ReaderSource::new(BufReader::new(file)),
            len,
        })
    }

    /// File size in bytes at open time.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl ByteSource for FileSource {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, SourceError> {
        self.reader.read_at(offset, buf)
    }
}

/// Read `length` bytes starting at `offset`, in transfers of at most `block_size` bytes.
pub fn read_record<S: ByteSource + ?Sized>(
    source: &mut S,
    offset: u64,
    length: usize,
    block_size: usize,
) -> Result<Vec<u8>, SourceError> {
    if block_size == 0 {
        return Err(SourceError::InvalidBlockSize);
    }

    let mut data = vec![0u8; length];
    let mut done = 0;
    while done < length {
        let chunk = (length - done).min(block_size);
        let Some(at) = offset.checked_add(done as u64) else {
            return Err(SourceError::ShortRead {
                offset,
                wanted: length,
                got: done,
            });
        };
        let got = source.read_at(at, &mut data[done..done + chunk])?;
        debug!("block read at {at:#x}: wanted {chunk}, got {got}");
        if got == 0 {
            return Err(SourceError::ShortRead {
                offset,
                wanted: length,
                got: done,
            });
        }
        done += got;
    }
    Ok(data)
}
