//! Cursor views over caller-owned byte buffers.
//!
//! Both cursors keep `position <= len` at all times. An operation that would
//! cross the end of the buffer fails with [`CodecError::OutOfBounds`] and
//! leaves the position where it was.

use crate::CodecError;

fn span_end(position: usize, requested: usize, len: usize) -> Result<usize, CodecError> {
    match position.checked_add(requested) {
        Some(end) if end <= len => Ok(end),
        _ => Err(CodecError::OutOfBounds {
            position,
            requested,
            len,
        }),
    }
}

/// Sequential big-endian reader over a borrowed slice.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Move the cursor to `offset`. Seeking to the very end is allowed, after
    /// which only zero-length operations succeed.
    pub fn seek(&mut self, offset: usize) -> Result<(), CodecError> {
        span_end(offset, 0, self.buf.len())?;
        self.pos = offset;
        Ok(())
    }

    /// The next `count` bytes, without advancing.
    pub fn peek(&self, count: usize) -> Result<&'a [u8], CodecError> {
        let end = span_end(self.pos, count, self.buf.len())?;
        Ok(&self.buf[self.pos..end])
    }

    /// The next `count` bytes; advances past them.
    pub fn next(&mut self, count: usize) -> Result<&'a [u8], CodecError> {
        let out = self.peek(count)?;
        self.pos += count;
        Ok(out)
    }

    pub fn skip(&mut self, count: usize) -> Result<(), CodecError> {
        self.pos = span_end(self.pos, count, self.buf.len())?;
        Ok(())
    }

    /// Fill `target` from the next `target.len()` bytes.
    pub fn copy_next(&mut self, target: &mut [u8]) -> Result<(), CodecError> {
        target.copy_from_slice(self.next(target.len())?);
        Ok(())
    }

    pub fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        self.copy_next(&mut out)?;
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.next(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        Ok(u16::from_be_bytes(self.read_fixed()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        Ok(u32::from_be_bytes(self.read_fixed()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        Ok(u64::from_be_bytes(self.read_fixed()?))
    }

    pub fn read_i8(&mut self) -> Result<i8, CodecError> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16, CodecError> {
        Ok(i16::from_be_bytes(self.read_fixed()?))
    }

    pub fn read_i32(&mut self) -> Result<i32, CodecError> {
        Ok(i32::from_be_bytes(self.read_fixed()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, CodecError> {
        Ok(i64::from_be_bytes(self.read_fixed()?))
    }
}

/// Sequential big-endian writer into a borrowed, pre-sized slice.
#[derive(Debug)]
pub struct ByteWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> ByteWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }

    pub fn seek(&mut self, offset: usize) -> Result<(), CodecError> {
        span_end(offset, 0, self.buf.len())?;
        self.pos = offset;
        Ok(())
    }

    /// Mutable view of the next `count` bytes, without advancing.
    pub fn peek(&mut self, count: usize) -> Result<&mut [u8], CodecError> {
        let end = span_end(self.pos, count, self.buf.len())?;
        Ok(&mut self.buf[self.pos..end])
    }

    /// Reserve the next `count` bytes for the caller to fill.
    pub fn next(&mut self, count: usize) -> Result<&mut [u8], CodecError> {
        let start = self.pos;
        let end = span_end(start, count, self.buf.len())?;
        self.pos = end;
        Ok(&mut self.buf[start..end])
    }

    pub fn skip(&mut self, count: usize) -> Result<(), CodecError> {
        self.pos = span_end(self.pos, count, self.buf.len())?;
        Ok(())
    }

    pub fn write_next(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.next(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    pub fn write_fixed<const N: usize>(&mut self, bytes: &[u8; N]) -> Result<(), CodecError> {
        self.write_next(bytes)
    }

    pub fn write_u8(&mut self, v: u8) -> Result<(), CodecError> {
        self.write_next(&[v])
    }

    pub fn write_u16(&mut self, v: u16) -> Result<(), CodecError> {
        self.write_fixed(&v.to_be_bytes())
    }

    pub fn write_u32(&mut self, v: u32) -> Result<(), CodecError> {
        self.write_fixed(&v.to_be_bytes())
    }

    pub fn write_u64(&mut self, v: u64) -> Result<(), CodecError> {
        self.write_fixed(&v.to_be_bytes())
    }

    pub fn write_i8(&mut self, v: i8) -> Result<(), CodecError> {
        self.write_u8(v as u8)
    }

    pub fn write_i16(&mut self, v: i16) -> Result<(), CodecError> {
        self.write_fixed(&v.to_be_bytes())
    }

    pub fn write_i32(&mut self, v: i32) -> Result<(), CodecError> {
        self.write_fixed(&v.to_be_bytes())
    }

    pub fn write_i64(&mut self, v: i64) -> Result<(), CodecError> {
        self.write_fixed(&v.to_be_bytes())
    }

    /// Bytes written so far, i.e. everything before the cursor.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}
