use std::io::{self, Cursor, Read};

use xz2::read::XzDecoder;
use xz2::stream::Stream;

use crate::{Error, Result};

const HEAD_SIZE: usize = 64 * 1024;

/// Streaming decoder for legacy `.lzma` ("LZMA alone") payloads.
///
/// Construction pulls the first decoded block, so a bad header is reported
/// as [`Error::Format`] before the caller has touched the filesystem.
pub struct LzmaReader<R: Read> {
    inner: io::Chain<Cursor<Vec<u8>>, XzDecoder<R>>,
}

impl<R: Read> LzmaReader<R> {
    pub fn new(reader: R) -> Result<Self> {
        let stream = Stream::new_lzma_decoder(u64::MAX).map_err(|e| Error::Format(e.into()))?;
        let mut decoder = XzDecoder::new_stream(reader, stream);

        let mut head = vec![0u8; HEAD_SIZE];
        let n = decoder.read(&mut head).map_err(Error::Format)?;
        head.truncate(n);

        Ok(Self {
            inner: Cursor::new(head).chain(decoder),
        })
    }

    /// The compressed source.
    pub fn get_ref(&self) -> &R {
        self.inner.get_ref().1.get_ref()
    }
}

impl<R: Read> Read for LzmaReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}
