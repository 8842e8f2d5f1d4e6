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

//! 16-byte decimal fixed-point value.
//!
//! The value is four 32-bit fields: `lo`, `mid` and `hi` hold a 96-bit
//! magnitude, `flags` holds the scale in bits 16..24 and the sign in bit 31.
//! Its canonical in-memory form is the 128-bit integer
//! `lo | mid << 32 | hi << 64 | flags << 96`, so converting between byte
//! orders is a single reversal of all 16 bytes.

use std::fmt;

use crate::error::Error;

pub const MAX_SCALE: u32 = 28;

const SCALE_SHIFT: u32 = 16;
const SCALE_MASK: u32 = 0x00FF_0000;
const SIGN_MASK: u32 = 0x8000_0000;
const MAX_MANTISSA: u128 = (1u128 << 96) - 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Decimal {
    lo: u32,
    mid: u32,
    hi: u32,
    flags: u32,
}

impl Decimal {
    pub const ZERO: Decimal = Decimal {
        lo: 0,
        mid: 0,
        hi: 0,
        flags: 0,
    };

    /// Builds `mantissa * 10^-scale`. The magnitude must fit in 96 bits.
    pub fn new(mantissa: i128, scale: u32) -> Result<Decimal, Error> {
        if scale > MAX_SCALE {
            return Err(Error::invalid_argument(format!(
                "decimal scale {} exceeds {}",
                scale, MAX_SCALE
            )));
        }
        let magnitude = mantissa.unsigned_abs();
        if magnitude > MAX_MANTISSA {
            return Err(Error::invalid_argument(format!(
                "decimal mantissa {} does not fit in 96 bits",
                mantissa
            )));
        }
        let mut flags = scale << SCALE_SHIFT;
        if mantissa < 0 {
            flags |= SIGN_MASK;
        }
        Ok(Decimal {
            lo: magnitude as u32,
            mid: (magnitude >> 32) as u32,
            hi: (magnitude >> 64) as u32,
            flags,
        })
    }

    /// Validates the flags word of a raw value.
    pub fn from_bits(bits: u128) -> Result<Decimal, Error> {
        let flags = (bits >> 96) as u32;
        let scale = (flags & SCALE_MASK) >> SCALE_SHIFT;
        if flags & !(SCALE_MASK | SIGN_MASK) != 0 || scale > MAX_SCALE {
            return Err(Error::invalid_data(format!(
                "invalid decimal flags 0x{:08X}",
                flags
            )));
        }
        Ok(Decimal {
            lo: bits as u32,
            mid: (bits >> 32) as u32,
            hi: (bits >> 64) as u32,
            flags,
        })
    }

    pub fn to_bits(self) -> u128 {
        (self.lo as u128)
            | (self.mid as u128) << 32
            | (self.hi as u128) << 64
            | (self.flags as u128) << 96
    }

    pub fn mantissa(self) -> i128 {
        let magnitude = (self.to_bits() & MAX_MANTISSA) as i128;
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    pub fn scale(self) -> u32 {
        (self.flags & SCALE_MASK) >> SCALE_SHIFT
    }

    pub fn is_negative(self) -> bool {
        self.flags & SIGN_MASK != 0
    }

    pub fn fields(self) -> [u32; 4] {
        [self.lo, self.mid, self.hi, self.flags]
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa().unsigned_abs().to_string();
        let scale = self.scale() as usize;
        if self.is_negative() {
            f.write_str("-")?;
        }
        if scale == 0 {
            return f.write_str(&digits);
        }
        if digits.len() <= scale {
            write!(f, "0.{}{}", "0".repeat(scale - digits.len()), digits)
        } else {
            let (int, frac) = digits.split_at(digits.len() - scale);
            write!(f, "{}.{}", int, frac)
        }
    }
}
