//! Buffer codec primitives shared by every wire structure.
//!
//! Integers are big-endian. Variable-length blocks carry a 4-byte length
//! prefix; whether the prefix counts bytes or elements is fixed per call
//! site and the encoder/decoder pairs in this crate always agree.

use crate::errors::{WireError, WireResult};

/// Appends `[u32 length][payload]` to `buf`.
pub fn write_length_prefixed(buf: &mut Vec<u8>, payload: &[u8]) {
    buf.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    buf.extend_from_slice(payload);
}

/// Canonical encoding into a byte buffer. Fields are written in declared
/// order; the order is part of the wire contract with the circuits.
pub trait Encode {
    fn write(&self, buf: &mut Vec<u8>);

    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write(&mut buf);
        buf
    }

    /// Lowercase-hex convenience form for logging and text storage. Not a
    /// separate protocol, merely the binary buffer wrapped reversibly.
    fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

/// Canonical decoding, the inverse of [`Encode`].
pub trait Decode: Sized {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self>;

    /// Decodes a standalone buffer, rejecting trailing bytes.
    fn from_bytes(bytes: &[u8]) -> WireResult<Self> {
        let mut reader = BufferReader::new(bytes);
        let value = Self::read(&mut reader)?;
        reader.finish()?;
        Ok(value)
    }

    fn from_hex(s: &str) -> WireResult<Self> {
        Self::from_bytes(&hex::decode(s)?)
    }
}

/// Cursor over a byte slice with bounds-checked reads.
#[derive(Debug)]
pub struct BufferReader<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> BufferReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, cursor: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, n: usize) -> WireResult<&'a [u8]> {
        if n > self.remaining() {
            return Err(WireError::UnexpectedEnd {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.bytes[self.cursor..self.cursor + n];
        self.cursor += n;
        Ok(slice)
    }

    pub fn read_bytes(&mut self, n: usize) -> WireResult<&'a [u8]> {
        self.take(n)
    }

    pub fn read_array<const N: usize>(&mut self) -> WireResult<[u8; N]> {
        let slice = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> WireResult<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u32(&mut self) -> WireResult<u32> {
        Ok(u32::from_be_bytes(self.read_array::<4>()?))
    }

    pub fn read_u64(&mut self) -> WireResult<u64> {
        Ok(u64::from_be_bytes(self.read_array::<8>()?))
    }

    /// Reads a 4-byte length prefix and then exactly that many bytes.
    pub fn read_length_prefixed(&mut self) -> WireResult<&'a [u8]> {
        let declared = self.read_u32()? as usize;
        if declared > self.remaining() {
            return Err(WireError::LengthOutOfBounds {
                declared,
                remaining: self.remaining(),
            });
        }
        self.take(declared)
    }

    /// Reads repeated `(u32 length, payload)` pairs.
    ///
    /// With `limit = Some(total)` exactly `total` bytes are consumed and the
    /// framing must land on that boundary; with `limit = None` the rest of
    /// the buffer is consumed. The caller selects the mode, matching whether
    /// the surrounding context carries an explicit length.
    pub fn read_buffer_array(&mut self, limit: Option<usize>) -> WireResult<Vec<&'a [u8]>> {
        let end = match limit {
            Some(total) => {
                if total > self.remaining() {
                    return Err(WireError::LengthOutOfBounds {
                        declared: total,
                        remaining: self.remaining(),
                    });
                }
                self.cursor + total
            }
            None => self.bytes.len(),
        };

        let mut blocks = Vec::new();
        while self.cursor < end {
            if end - self.cursor < 4 {
                return Err(WireError::UnexpectedEnd {
                    needed: 4,
                    remaining: end - self.cursor,
                });
            }
            let declared = self.read_u32()? as usize;
            if declared > end - self.cursor {
                return Err(WireError::LengthOutOfBounds {
                    declared,
                    remaining: end - self.cursor,
                });
            }
            blocks.push(self.take(declared)?);
        }
        Ok(blocks)
    }

    pub fn read_object<T: Decode>(&mut self) -> WireResult<T> {
        T::read(self)
    }

    /// Reads a fixed-size array of objects in wire order.
    pub fn read_object_array<T, const N: usize>(&mut self) -> WireResult<[T; N]>
    where
        T: Decode + Copy + Default,
    {
        let mut out = [T::default(); N];
        for slot in &mut out {
            *slot = self.read_object()?;
        }
        Ok(out)
    }

    /// Asserts that the reader is exhausted.
    pub fn finish(&self) -> WireResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(WireError::TrailingBytes {
                remaining: self.remaining(),
            })
        }
    }
}

impl Encode for u8 {
    fn write(&self, buf: &mut Vec<u8>) {
        buf.push(*self);
    }
}

impl Decode for u8 {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        reader.read_u8()
    }
}

impl Encode for u32 {
    fn write(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.to_be_bytes());
    }
}

impl Decode for u32 {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        reader.read_u32()
    }
}

impl Encode for u64 {
    fn write(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.to_be_bytes());
    }
}

impl Decode for u64 {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        reader.read_u64()
    }
}

// Booleans travel as a single strict 0/1 byte.
impl Encode for bool {
    fn write(&self, buf: &mut Vec<u8>) {
        buf.push(u8::from(*self));
    }
}

impl Decode for bool {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        match reader.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            byte => Err(WireError::InvalidValue {
                context: "boolean",
                reason: format!("expected 0 or 1, found {byte}"),
            }),
        }
    }
}

impl Encode for [u8; 32] {
    fn write(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self);
    }
}

impl Decode for [u8; 32] {
    fn read(reader: &mut BufferReader<'_>) -> WireResult<Self> {
        reader.read_array::<32>()
    }
}
