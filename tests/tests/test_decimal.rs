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

use leaf_core::buffer::{EndianReader, EndianWriter};
use leaf_core::decimal::{Decimal, MAX_SCALE};
use leaf_core::error::{should_panic_on_error, Error};

fn samples() -> Vec<Decimal> {
    vec![
        Decimal::ZERO,
        Decimal::new(1, 0).unwrap(),
        Decimal::new(-1, 0).unwrap(),
        Decimal::new(12345, 2).unwrap(),
        Decimal::new(-987_654_321_012_345_678_901, 18).unwrap(),
        Decimal::new((1i128 << 96) - 1, MAX_SCALE).unwrap(),
        Decimal::new(-((1i128 << 96) - 1), 0).unwrap(),
    ]
}

#[test]
fn test_decimal_round_trip_both_orders() {
    for big_endian in [true, false] {
        let mut writer = EndianWriter::new(Vec::new(), big_endian);
        for d in samples() {
            writer.write_decimal(d).unwrap();
        }
        let bytes = writer.into_inner();
        assert_eq!(bytes.len(), 16 * samples().len());

        let mut reader = EndianReader::new(&bytes[..], big_endian);
        for d in samples() {
            assert_eq!(reader.read_decimal().unwrap(), d);
        }
    }
}

#[test]
fn test_decimal_orders_reverse_all_sixteen_bytes() {
    for d in samples() {
        let mut be = EndianWriter::new(Vec::new(), true);
        be.write_decimal(d).unwrap();
        let mut le = EndianWriter::new(Vec::new(), false);
        le.write_decimal(d).unwrap();

        let mut reversed = le.into_inner();
        reversed.reverse();
        assert_eq!(be.into_inner(), reversed, "{}", d);
    }
}

#[test]
fn test_decimal_little_endian_layout() {
    // lo, mid, hi, flags; each little-endian
    let d = Decimal::new(-0x0000_0003_0000_0002_0000_0001, 5).unwrap();
    assert_eq!(d.fields(), [1, 2, 3, 0x8005_0000]);
    let mut writer = EndianWriter::new(Vec::new(), false);
    writer.write_decimal(d).unwrap();
    assert_eq!(
        writer.into_inner(),
        [1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 0x00, 0x00, 0x05, 0x80]
    );
}

#[test]
fn test_decimal_rejects_bad_flags_on_read() {
    if should_panic_on_error() {
        return;
    }
    let mut bytes = [0u8; 16];
    // big-endian: flags word first, scale 29
    bytes[1] = 29;
    let mut reader = EndianReader::new(&bytes[..], true);
    assert!(matches!(reader.read_decimal(), Err(Error::InvalidData(_))));
}
