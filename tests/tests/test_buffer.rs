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

use leaf_core::buffer::{ByteSwap, EndianReader, EndianWriter};
use leaf_core::error::{should_panic_on_error, Error};
use leaf_core::types::TextEncoding;

#[test]
fn test_big_endian_integers() {
    let mut bytes = Vec::new();
    let mut writer = EndianWriter::new(&mut bytes, true);
    writer.write_i16(0x0102).unwrap();
    writer.write_i32(1234567).unwrap();
    writer.write_i64(-2).unwrap();
    writer.write_u16(0xFFFE).unwrap();
    assert_eq!(
        bytes,
        [
            0x01, 0x02, // i16
            0x00, 0x12, 0xD6, 0x87, // i32
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, // i64
            0xFF, 0xFE, // u16
        ]
    );
}

#[test]
fn test_little_endian_integers() {
    let mut bytes = Vec::new();
    let mut writer = EndianWriter::new(&mut bytes, false);
    writer.write_i32(1234567).unwrap();
    writer.write_u64(1).unwrap();
    assert_eq!(bytes, [0x87, 0xD6, 0x12, 0x00, 1, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn test_endian_symmetry() {
    for big_endian in [true, false] {
        let mut writer = EndianWriter::new(Vec::new(), big_endian);
        writer.write_i16(i16::MIN).unwrap();
        writer.write_u16(u16::MAX).unwrap();
        writer.write_i32(-1234567).unwrap();
        writer.write_u32(0xDEAD_BEEF).unwrap();
        writer.write_i64(i64::MAX).unwrap();
        writer.write_u64(0x0102_0304_0506_0708).unwrap();
        writer.write_f32(f32::MIN_POSITIVE).unwrap();
        writer.write_f64(std::f64::consts::PI).unwrap();
        writer.write_i8(-5).unwrap();
        writer.write_bool(true).unwrap();
        let bytes = writer.into_inner();

        let mut reader = EndianReader::new(&bytes[..], big_endian);
        assert_eq!(reader.read_i16().unwrap(), i16::MIN);
        assert_eq!(reader.read_u16().unwrap(), u16::MAX);
        assert_eq!(reader.read_i32().unwrap(), -1234567);
        assert_eq!(reader.read_u32().unwrap(), 0xDEAD_BEEF);
        assert_eq!(reader.read_i64().unwrap(), i64::MAX);
        assert_eq!(reader.read_u64().unwrap(), 0x0102_0304_0506_0708);
        assert_eq!(reader.read_f32().unwrap(), f32::MIN_POSITIVE);
        assert_eq!(reader.read_f64().unwrap(), std::f64::consts::PI);
        assert_eq!(reader.read_i8().unwrap(), -5);
        assert!(reader.read_bool().unwrap());
        assert_eq!(reader.position(), bytes.len() as u64);
    }
}

#[test]
fn test_opposite_orders_are_byte_reversals() {
    let mut be = EndianWriter::new(Vec::new(), true);
    let mut le = EndianWriter::new(Vec::new(), false);
    be.write_f64(-1.0e-300).unwrap();
    le.write_f64(-1.0e-300).unwrap();
    let mut reversed = le.into_inner();
    reversed.reverse();
    assert_eq!(be.into_inner(), reversed);
}

#[test]
fn test_single_bytes_ignore_order() {
    for big_endian in [true, false] {
        let mut writer = EndianWriter::new(Vec::new(), big_endian);
        writer.write_u8(0xAB).unwrap();
        writer.write_i8(-1).unwrap();
        writer.write_bool(false).unwrap();
        writer.write_bytes(&[1, 2, 3]).unwrap();
        assert_eq!(writer.into_inner(), [0xAB, 0xFF, 0x00, 1, 2, 3]);
    }
}

#[test]
fn test_strategy_matches_host() {
    let native_big = cfg!(target_endian = "big");
    assert_eq!(
        EndianWriter::new(Vec::new(), native_big).byte_swap(),
        ByteSwap::PassThrough
    );
    assert_eq!(
        EndianReader::new(&[0u8; 0][..], !native_big).byte_swap(),
        ByteSwap::Reverse
    );
}

#[test]
fn test_text_round_trip() {
    let mut writer = EndianWriter::new(Vec::new(), true);
    let written = writer.write_text("héllo").unwrap();
    assert_eq!(written, 6);
    let bytes = writer.into_inner();
    let mut reader = EndianReader::new(&bytes[..], true);
    assert_eq!(reader.read_text(written).unwrap(), "héllo");
}

#[test]
fn test_latin1_text() {
    let mut writer = EndianWriter::with_encoding(Vec::new(), true, TextEncoding::Latin1);
    assert_eq!(writer.write_text("héllo").unwrap(), 5);
    let bytes = writer.into_inner();
    assert_eq!(bytes, [b'h', 0xE9, b'l', b'l', b'o']);
    let mut reader = EndianReader::with_encoding(&bytes[..], true, TextEncoding::Latin1);
    assert_eq!(reader.read_text(5).unwrap(), "héllo");
}

#[test]
fn test_encoding_failures() {
    if should_panic_on_error() {
        return;
    }
    let mut writer = EndianWriter::with_encoding(Vec::new(), true, TextEncoding::Latin1);
    assert!(matches!(
        writer.write_text("snow ☃"),
        Err(Error::EncodingError(_))
    ));

    let invalid = [0xC3, 0x28];
    let mut reader = EndianReader::new(&invalid[..], true);
    assert!(matches!(reader.read_text(2), Err(Error::EncodingError(_))));
}

#[test]
fn test_end_of_stream() {
    if should_panic_on_error() {
        return;
    }
    let data = [0u8; 7];
    let mut reader = EndianReader::new(&data[..], true);
    reader.read_i32().unwrap();
    let err = reader.read_i64().unwrap_err();
    assert!(err.is_end_of_stream());
    assert!(matches!(err, Error::EndOfStream(4, 8)));

    let mut reader = EndianReader::new(&data[..], true);
    assert!(matches!(reader.read_bytes(100), Err(Error::EndOfStream(0, 100))));
}

#[test]
fn test_writer_reports_io_errors() {
    if should_panic_on_error() {
        return;
    }
    let mut buf = [0u8; 2];
    let mut writer = EndianWriter::new(&mut buf[..], true);
    writer.write_u16(7).unwrap();
    let err = writer.write_u8(1).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(writer.position(), 2);
}
