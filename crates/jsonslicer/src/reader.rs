//! The input abstraction [`crate::Slicer`] pulls bytes from.
use alloc::string::ToString;
use core::fmt;

use crate::error::IoError;

/// A source of bytes, read in chunks of the caller's choosing.
///
/// Asks for at most `buf.len()` bytes and treats `Ok(0)` as end of input,
/// matching Rust's `std::io::Read` convention.
pub trait ByteSource {
    /// The error this source reports on failure.
    type Error: fmt::Display;

    /// Reads into `buf`, returning the number of bytes written. Returns
    /// `Ok(0)` only at end of input.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

// `&[u8]` already implements `std::io::Read`, so the blanket impl below
// covers it when `std` is enabled; this manual impl only applies to
// `no_std` builds.
#[cfg(not(feature = "std"))]
impl ByteSource for &[u8] {
    type Error = core::convert::Infallible;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = buf.len().min(self.len());
        buf[..n].copy_from_slice(&self[..n]);
        *self = &self[n..];
        Ok(n)
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for R {
    type Error = std::io::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        std::io::Read::read(self, buf)
    }
}

pub(crate) fn map_read_error<E: fmt::Display>(err: E) -> IoError {
    IoError::Source(err.to_string())
}
