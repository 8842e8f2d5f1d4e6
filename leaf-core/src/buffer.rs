// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::io::{Read, Write};

use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};

use crate::decimal::Decimal;
use crate::error::Error;
use crate::types::TextEncoding;

/// How multi-byte values move between host memory and the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteSwap {
    /// Wire order equals host order.
    PassThrough,
    /// Wire order is the reverse of host order.
    Reverse,
}

impl ByteSwap {
    /// Picks the strategy for a stream whose values are big-endian when
    /// `big_endian` is set.
    #[inline]
    pub fn select(big_endian: bool) -> ByteSwap {
        if big_endian == cfg!(target_endian = "big") {
            ByteSwap::PassThrough
        } else {
            ByteSwap::Reverse
        }
    }
}

macro_rules! swap {
    ($self:ident, $value:expr) => {
        match $self.swap {
            ByteSwap::PassThrough => $value,
            ByteSwap::Reverse => $value.swap_bytes(),
        }
    };
}

macro_rules! impl_write_int {
    ($($name:ident: $ty:ty => $raw:ident),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(&mut self, value: $ty) -> Result<(), Error> {
                let at = self.position;
                self.inner
                    .$raw::<NativeEndian>(swap!(self, value))
                    .map_err(|e| Error::from_io(e, at, std::mem::size_of::<$ty>()))?;
                self.position += std::mem::size_of::<$ty>() as u64;
                Ok(())
            }
        )*
    };
}

macro_rules! impl_read_int {
    ($($name:ident: $ty:ty => $raw:ident),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(&mut self) -> Result<$ty, Error> {
                let at = self.position;
                let raw = self
                    .inner
                    .$raw::<NativeEndian>()
                    .map_err(|e| Error::from_io(e, at, std::mem::size_of::<$ty>()))?;
                self.position += std::mem::size_of::<$ty>() as u64;
                Ok(swap!(self, raw))
            }
        )*
    };
}

/// Writes fixed-width scalars in the stream's declared byte order.
///
/// ```rust
/// use leaf_core::buffer::EndianWriter;
///
/// let mut bytes = Vec::new();
/// let mut writer = EndianWriter::new(&mut bytes, true);
/// writer.write_i32(1234567).unwrap();
/// assert_eq!(bytes, [0x00, 0x12, 0xD6, 0x87]);
/// ```
pub struct EndianWriter<W: Write> {
    inner: W,
    big_endian: bool,
    swap: ByteSwap,
    encoding: TextEncoding,
    position: u64,
}

impl<W: Write> EndianWriter<W> {
    pub fn new(inner: W, big_endian: bool) -> EndianWriter<W> {
        EndianWriter::with_encoding(inner, big_endian, TextEncoding::default())
    }

    pub fn with_encoding(inner: W, big_endian: bool, encoding: TextEncoding) -> EndianWriter<W> {
        EndianWriter {
            inner,
            big_endian,
            swap: ByteSwap::select(big_endian),
            encoding,
            position: 0,
        }
    }

    pub fn is_big_endian(&self) -> bool {
        self.big_endian
    }

    pub fn byte_swap(&self) -> ByteSwap {
        self.swap
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Bytes written through this writer so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn write_bytes(&mut self, v: &[u8]) -> Result<(), Error> {
        let at = self.position;
        self.inner
            .write_all(v)
            .map_err(|e| Error::from_io(e, at, v.len()))?;
        self.position += v.len() as u64;
        Ok(())
    }

    #[inline]
    pub fn write_u8(&mut self, value: u8) -> Result<(), Error> {
        self.write_bytes(&[value])
    }

    #[inline]
    pub fn write_i8(&mut self, value: i8) -> Result<(), Error> {
        self.write_u8(value as u8)
    }

    #[inline]
    pub fn write_bool(&mut self, value: bool) -> Result<(), Error> {
        self.write_u8(value as u8)
    }

    impl_write_int!(
        write_i16: i16 => write_i16,
        write_u16: u16 => write_u16,
        write_i32: i32 => write_i32,
        write_u32: u32 => write_u32,
        write_i64: i64 => write_i64,
        write_u64: u64 => write_u64,
        write_u128: u128 => write_u128,
    );

    #[inline]
    pub fn write_f32(&mut self, value: f32) -> Result<(), Error> {
        self.write_u32(value.to_bits())
    }

    #[inline]
    pub fn write_f64(&mut self, value: f64) -> Result<(), Error> {
        self.write_u64(value.to_bits())
    }

    /// Writes the 16 bytes of the decimal, reversed as a whole when the wire
    /// order differs from the host's.
    #[inline]
    pub fn write_decimal(&mut self, value: Decimal) -> Result<(), Error> {
        self.write_u128(value.to_bits())
    }

    /// Writes `s` in the configured encoding without a length prefix and
    /// returns the number of bytes written.
    pub fn write_text(&mut self, s: &str) -> Result<usize, Error> {
        let bytes = self.encoding.encode(s)?;
        self.write_bytes(&bytes)?;
        Ok(bytes.len())
    }
}

/// Reads fixed-width scalars written by an [`EndianWriter`] with the same
/// byte order.
pub struct EndianReader<R: Read> {
    inner: R,
    big_endian: bool,
    swap: ByteSwap,
    encoding: TextEncoding,
    position: u64,
}

impl<R: Read> EndianReader<R> {
    pub fn new(inner: R, big_endian: bool) -> EndianReader<R> {
        EndianReader::with_encoding(inner, big_endian, TextEncoding::default())
    }

    pub fn with_encoding(inner: R, big_endian: bool, encoding: TextEncoding) -> EndianReader<R> {
        EndianReader {
            inner,
            big_endian,
            swap: ByteSwap::select(big_endian),
            encoding,
            position: 0,
        }
    }

    pub fn is_big_endian(&self) -> bool {
        self.big_endian
    }

    pub fn byte_swap(&self) -> ByteSwap {
        self.swap
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Bytes consumed through this reader so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        let at = self.position;
        self.inner
            .read_exact(buf)
            .map_err(|e| Error::from_io(e, at, buf.len()))?;
        self.position += buf.len() as u64;
        Ok(())
    }

    /// Reads exactly `len` bytes.
    ///
    /// The buffer grows as data arrives rather than up front, so a corrupt
    /// length field fails with end-of-stream instead of a huge allocation.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, Error> {
        let at = self.position;
        let mut buf = Vec::with_capacity(len.min(8 * 1024));
        let read = (&mut self.inner)
            .take(len as u64)
            .read_to_end(&mut buf)
            .map_err(|e| Error::from_io(e, at, len))?;
        self.position += read as u64;
        if read < len {
            return Err(Error::end_of_stream(at, len));
        }
        Ok(buf)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, Error> {
        let mut b = [0u8; 1];
        self.read_exact(&mut b)?;
        Ok(b[0])
    }

    #[inline]
    pub fn read_i8(&mut self) -> Result<i8, Error> {
        Ok(self.read_u8()? as i8)
    }

    #[inline]
    pub fn read_bool(&mut self) -> Result<bool, Error> {
        Ok(self.read_u8()? != 0)
    }

    impl_read_int!(
        read_i16: i16 => read_i16,
        read_u16: u16 => read_u16,
        read_i32: i32 => read_i32,
        read_u32: u32 => read_u32,
        read_i64: i64 => read_i64,
        read_u64: u64 => read_u64,
        read_u128: u128 => read_u128,
    );

    #[inline]
    pub fn read_f32(&mut self) -> Result<f32, Error> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    #[inline]
    pub fn read_f64(&mut self) -> Result<f64, Error> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    #[inline]
    pub fn read_decimal(&mut self) -> Result<Decimal, Error> {
        Decimal::from_bits(self.read_u128()?)
    }

    /// Reads `len` bytes and decodes them with the configured encoding.
    pub fn read_text(&mut self, len: usize) -> Result<String, Error> {
        let bytes = self.read_bytes(len)?;
        self.encoding.decode(bytes)
    }
}
