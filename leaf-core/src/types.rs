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

use std::borrow::Cow;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::Error;

/// Wire type tag of a node. One byte on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum NodeType {
    /// Terminates the entry sequence of a composite. Never a value.
    End = 0x00,
    Flag = 0x01,
    Int16 = 0x02,
    Int32 = 0x03,
    Int64 = 0x04,
    Float32 = 0x05,
    Float64 = 0x06,
    String = 0x07,
    Time = 0x08,
    Uuid = 0x09,
    Blob = 0x0A,
    Color = 0x0B,
    Point2 = 0x0C,
    Point3 = 0x0D,
    Point4 = 0x0E,
    Vector2 = 0x0F,
    Vector3 = 0x10,
    Vector4 = 0x11,
    Rect2 = 0x12,
    Rect3 = 0x13,
    Bounds2 = 0x14,
    Bounds3 = 0x15,
    List = 0x16,
    Composite = 0x17,
    Int8 = 0x18,
}

/// Number of tag slots, used to size dispatch tables.
pub const TYPE_TAG_COUNT: usize = NodeType::Int8 as usize + 1;

impl NodeType {
    #[inline(always)]
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Maps a wire tag to a type, failing with [`Error::UnknownType`].
    #[inline]
    pub fn from_tag(tag: u8) -> Result<NodeType, Error> {
        NodeType::try_from(tag).map_err(|_| Error::unknown_type(tag))
    }

    /// Geometric types whose tags are reserved but which have no codec here.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            NodeType::Color
                | NodeType::Point2
                | NodeType::Point3
                | NodeType::Point4
                | NodeType::Vector2
                | NodeType::Vector3
                | NodeType::Vector4
                | NodeType::Rect2
                | NodeType::Rect3
                | NodeType::Bounds2
                | NodeType::Bounds3
        )
    }

    pub fn is_value(self) -> bool {
        self != NodeType::End
    }

    pub fn is_container(self) -> bool {
        matches!(self, NodeType::List | NodeType::Composite)
    }

    pub fn name(self) -> &'static str {
        match self {
            NodeType::End => "End",
            NodeType::Flag => "Flag",
            NodeType::Int8 => "Int8",
            NodeType::Int16 => "Int16",
            NodeType::Int32 => "Int32",
            NodeType::Int64 => "Int64",
            NodeType::Float32 => "Float32",
            NodeType::Float64 => "Float64",
            NodeType::String => "String",
            NodeType::Time => "Time",
            NodeType::Uuid => "Uuid",
            NodeType::Blob => "Blob",
            NodeType::Color => "Color",
            NodeType::Point2 => "Point2",
            NodeType::Point3 => "Point3",
            NodeType::Point4 => "Point4",
            NodeType::Vector2 => "Vector2",
            NodeType::Vector3 => "Vector3",
            NodeType::Vector4 => "Vector4",
            NodeType::Rect2 => "Rect2",
            NodeType::Rect3 => "Rect3",
            NodeType::Bounds2 => "Bounds2",
            NodeType::Bounds3 => "Bounds3",
            NodeType::List => "List",
            NodeType::Composite => "Composite",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Leading bytes of every container stream: ASCII "LEAF".
pub const SIGNATURE: [u8; 4] = *b"LEAF";

/// Header bytes: signature, i32 version, root tag.
pub const HEADER_SIZE: usize = SIGNATURE.len() + 4 + 1;

/// Container streams are always big-endian on the wire.
pub const WIRE_BIG_ENDIAN: bool = true;

/// Date of the Time payload's zero point.
pub const FORMAT_EPOCH_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1, 1, 1) {
    None => {
        panic!("Unreachable code")
    }
    Some(epoch) => epoch,
};

/// Zero point of the Time payload, 0001-01-01T00:00:00.
#[inline]
pub fn format_epoch() -> NaiveDateTime {
    FORMAT_EPOCH_DATE.and_time(NaiveTime::MIN)
}

/// Minimum format version of every scalar node.
pub const BASE_NODE_VERSION: i32 = 1;

/// Maximum byte length of a String payload (u16 length prefix).
pub const MAX_STRING_BYTES: usize = u16::MAX as usize;

/// Maximum byte length of a composite key (u8 length prefix).
pub const MAX_KEY_BYTES: usize = u8::MAX as usize;

/// Character encoding used for text payload bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
}

impl TextEncoding {
    pub fn encode<'a>(&self, s: &'a str) -> Result<Cow<'a, [u8]>, Error> {
        match self {
            TextEncoding::Utf8 => Ok(Cow::Borrowed(s.as_bytes())),
            TextEncoding::Latin1 => {
                if s.is_ascii() {
                    return Ok(Cow::Borrowed(s.as_bytes()));
                }
                let mut out = Vec::with_capacity(s.len());
                for ch in s.chars() {
                    let code = ch as u32;
                    if code > 0xFF {
                        return Err(Error::encoding_error(format!(
                            "character {:?} cannot be encoded as latin1",
                            ch
                        )));
                    }
                    out.push(code as u8);
                }
                Ok(Cow::Owned(out))
            }
        }
    }

    pub fn decode(&self, bytes: Vec<u8>) -> Result<String, Error> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes)
                .map_err(|e| Error::encoding_error(format!("invalid utf-8 payload: {}", e))),
            TextEncoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}
