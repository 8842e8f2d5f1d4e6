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

use std::io::Cursor;

use leaf::{Container, Engine, EngineV1, Error, Header, Node, NodeType};
use leaf_core::buffer::{EndianReader, EndianWriter};
use leaf_core::engine::{
    engine_for_version, latest_engine, lowest_compatible_engine, registered_versions,
};
use leaf_core::error::{should_panic_on_error, ErrorCategory};
use leaf_core::resolver::type_resolver::TypeResolver;
use leaf_core::types::HEADER_SIZE;
use tests::{container_roundtrip, sample_document, v1_header, v1_stream};

/// An engine older than any node can require.
#[derive(Debug)]
struct EngineV0;

impl Engine for EngineV0 {
    fn version(&self) -> i32 {
        0
    }

    fn resolver(&self) -> &'static TypeResolver {
        TypeResolver::v1()
    }
}

/// An engine whose header claims a version it does not implement.
#[derive(Debug)]
struct MislabelledEngine;

impl Engine for MislabelledEngine {
    fn version(&self) -> i32 {
        1
    }

    fn resolver(&self) -> &'static TypeResolver {
        TypeResolver::v1()
    }

    fn header(&self, root: &Node) -> Header {
        Header::new(2, root.node_type())
    }
}

static ENGINE_V0: EngineV0 = EngineV0;
static MISLABELLED: MislabelledEngine = MislabelledEngine;
static ENGINE_V1: EngineV1 = EngineV1;

#[test]
fn test_header_fixture() {
    let bytes = Container::new(Node::Int32(1234567)).unwrap().to_bytes().unwrap();
    assert_eq!(
        bytes,
        [0x4C, 0x45, 0x41, 0x46, 0x00, 0x00, 0x00, 0x01, 0x03, 0x00, 0x12, 0xD6, 0x87]
    );
}

#[test]
fn test_header_read_write() {
    let header = Header::new(1, NodeType::Composite);
    let mut writer = EndianWriter::new(Vec::new(), true);
    header.write_to(&mut writer).unwrap();
    let bytes = writer.into_inner();
    assert_eq!(bytes, v1_header(0x17));

    let mut reader = EndianReader::new(&bytes[..], true);
    assert_eq!(Header::read_from(&mut reader).unwrap(), header);
    assert_eq!(ENGINE_V1.header(&Node::Flag(true)), Header::new(1, NodeType::Flag));
}

#[test]
fn test_container_round_trip() {
    let doc = sample_document();
    assert_eq!(container_roundtrip(&doc), doc);

    let container = Container::read(&Container::new(doc.clone()).unwrap().to_bytes().unwrap()[..])
        .unwrap();
    assert_eq!(container.engine().version(), 1);
    assert_eq!(container.root(), &doc);
}

#[test]
fn test_write_is_idempotent() {
    let container = Container::new(sample_document()).unwrap();
    let first = container.to_bytes().unwrap();
    let second = container.to_bytes().unwrap();
    assert_eq!(first, second);

    let reread = Container::read(&first[..]).unwrap();
    assert_eq!(reread, container);
    assert_eq!(reread.to_bytes().unwrap(), first);
}

#[test]
fn test_write_reports_length_and_leaves_stream_usable() {
    let container = Container::new(Node::from("abc")).unwrap();
    let mut cursor = Cursor::new(Vec::new());
    let written = container.write(&mut cursor).unwrap();
    assert_eq!(written, (HEADER_SIZE + 2 + 3) as u64);
    container.write(&mut cursor).unwrap();

    let bytes = cursor.into_inner();
    assert_eq!(bytes.len(), 28);
    let mut input = &bytes[..];
    assert_eq!(Container::read(&mut input).unwrap().root(), &Node::from("abc"));
    assert_eq!(Container::read(&mut input).unwrap().root(), &Node::from("abc"));
    assert!(input.is_empty());
}

#[test]
fn test_header_version_must_match_engine() {
    if should_panic_on_error() {
        return;
    }
    let container = Container::with_engine(Node::Int32(7), &MISLABELLED);
    let mut sink = Vec::new();
    let err = container.write(&mut sink).unwrap_err();
    assert!(matches!(err, Error::InvalidState(_)));
    assert!(sink.is_empty());
}

#[test]
fn test_root_accessors() {
    let mut container = Container::new(Node::Int8(1)).unwrap();
    *container.root_mut() = Node::Int8(2);
    assert_eq!(container.root(), &Node::Int8(2));
    container.set_root(Node::Int64(3));
    container.set_engine(&ENGINE_V1);
    assert_eq!(container.clone().into_root(), Node::Int64(3));
    assert_eq!(
        Container::with_engine(Node::Int64(3), &ENGINE_V1),
        container
    );
}

#[test]
fn test_version_incompatible_engine_writes_nothing() {
    if should_panic_on_error() {
        return;
    }
    let container = Container::with_engine(sample_document(), &ENGINE_V0);
    let mut sink = Vec::new();
    let err = container.write(&mut sink).unwrap_err();
    assert!(matches!(
        err,
        Error::VersionIncompatible {
            node_version: 1,
            engine_version: 0
        }
    ));
    assert_eq!(err.category(), ErrorCategory::Version);
    assert!(sink.is_empty());
}

#[test]
fn test_bad_signature() {
    if should_panic_on_error() {
        return;
    }
    let mut bytes = v1_stream(0x03, &[0, 0, 0, 1]);
    bytes[0] = b'X';
    let err = Container::read(&bytes[..]).unwrap_err();
    assert!(matches!(err, Error::BadSignature(sig) if &sig == b"XEAF"));
    assert_eq!(err.category(), ErrorCategory::Format);
}

#[test]
fn test_unsupported_version() {
    if should_panic_on_error() {
        return;
    }
    let mut bytes = v1_stream(0x03, &[0, 0, 0, 1]);
    bytes[7] = 0x02;
    assert!(matches!(
        Container::read(&bytes[..]),
        Err(Error::UnsupportedVersion(2))
    ));
}

#[test]
fn test_bad_root_tag() {
    if should_panic_on_error() {
        return;
    }
    assert!(matches!(
        Container::read(&v1_stream(0x99, &[])[..]),
        Err(Error::UnknownType(0x99))
    ));
    assert!(matches!(
        Container::read(&v1_stream(NodeType::Rect2.tag(), &[0; 16])[..]),
        Err(Error::UnsupportedType(NodeType::Rect2))
    ));
    assert!(matches!(
        Container::read(&v1_stream(0x00, &[])[..]),
        Err(Error::InvalidData(_))
    ));
}

#[test]
fn test_truncated_streams() {
    if should_panic_on_error() {
        return;
    }
    let bytes = Container::new(sample_document()).unwrap().to_bytes().unwrap();
    for len in [0, 3, 8, 9, bytes.len() / 2, bytes.len() - 1] {
        let err = Container::read(&bytes[..len]).unwrap_err();
        assert!(err.is_end_of_stream(), "len {}: {:?}", len, err);
    }
}

#[test]
fn test_engine_registry() {
    if should_panic_on_error() {
        return;
    }
    assert_eq!(registered_versions().collect::<Vec<_>>(), [1]);
    assert_eq!(engine_for_version(1).unwrap().version(), 1);
    assert!(matches!(
        engine_for_version(7),
        Err(Error::UnsupportedVersion(7))
    ));
    assert_eq!(latest_engine().version(), 1);
    assert_eq!(lowest_compatible_engine(1).unwrap().version(), 1);
    assert!(matches!(
        lowest_compatible_engine(2),
        Err(Error::VersionIncompatible {
            node_version: 2,
            engine_version: 1
        })
    ));
}

#[test]
fn test_version_monotonicity() {
    // every engine that accepts a node has a version at least the node's
    let doc = sample_document();
    for version in registered_versions() {
        let engine = engine_for_version(version).unwrap();
        let container = Container::with_engine(doc.clone(), engine);
        let result = container.to_bytes();
        assert_eq!(result.is_ok(), engine.version() >= doc.version());
    }
}
