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

use leaf::{CompositeNode, Config, Container, Error, Leaf, Node, NodeType, TextEncoding};
use leaf_core::config::DEFAULT_MAX_DEPTH;
use leaf_core::error::should_panic_on_error;
use leaf_core::types::HEADER_SIZE;
use tests::{leaf_roundtrip, sample_document, v1_stream};

#[test]
fn test_default_config() {
    let leaf = Leaf::default();
    assert_eq!(leaf.config(), &Config::default());
    assert_eq!(leaf.config().max_depth(), DEFAULT_MAX_DEPTH);
    assert_eq!(leaf.config().engine_version(), None);
    assert_eq!(leaf.config().encoding(), TextEncoding::Utf8);

    let leaf = Leaf::default().max_depth(8).engine_version(1);
    assert_eq!(leaf.config().max_depth, 8);
    assert_eq!(leaf.config().engine_version, Some(1));
    assert_eq!(Leaf::new(leaf.config().clone()).config(), leaf.config());
}

#[test]
fn test_serialize_round_trip() {
    let doc = sample_document();
    assert_eq!(leaf_roundtrip(&doc), doc);

    let pinned = Leaf::default().engine_version(1);
    let bytes = pinned.serialize(&doc).unwrap();
    assert_eq!(bytes, Leaf::default().serialize(&doc).unwrap());
}

#[test]
fn test_serialize_to_appends() {
    let leaf = Leaf::default();
    let mut buf = vec![0xAA];
    let written = leaf.serialize_to(&mut buf, &Node::Int32(1234567)).unwrap();
    assert_eq!(written, 13);
    assert_eq!(buf.len(), 14);
    assert_eq!(buf[0], 0xAA);
    assert_eq!(leaf.deserialize(&buf[1..]).unwrap(), Node::Int32(1234567));
}

#[test]
fn test_serialize_to_restores_buffer_on_error() {
    if should_panic_on_error() {
        return;
    }
    let leaf = Leaf::default();
    let mut buf = vec![1, 2, 3];
    let err = leaf
        .serialize_to(&mut buf, &Node::from("x".repeat(70_000)))
        .unwrap_err();
    assert!(matches!(err, Error::EncodeError(_)));
    assert_eq!(buf, [1, 2, 3]);
}

#[test]
fn test_deserialize_rejects_trailing_bytes() {
    if should_panic_on_error() {
        return;
    }
    let leaf = Leaf::default();
    let mut bytes = leaf.serialize(&Node::Flag(true)).unwrap();
    bytes.push(0);
    assert!(matches!(
        leaf.deserialize(&bytes),
        Err(Error::InvalidData(_))
    ));
}

#[test]
fn test_unknown_engine_version() {
    if should_panic_on_error() {
        return;
    }
    let leaf = Leaf::default().engine_version(42);
    assert!(matches!(
        leaf.serialize(&Node::Flag(true)),
        Err(Error::UnsupportedVersion(42))
    ));
}

#[test]
fn test_latin1_strings() {
    let leaf = Leaf::default().encoding(TextEncoding::Latin1);
    let bytes = leaf.serialize(&Node::from("héllo")).unwrap();
    assert_eq!(
        bytes[HEADER_SIZE..],
        [0x00, 0x05, b'h', 0xE9, b'l', b'l', b'o']
    );
    assert_eq!(leaf.deserialize(&bytes).unwrap(), Node::from("héllo"));

    // the same bytes are not valid utf-8
    if !should_panic_on_error() {
        assert!(matches!(
            Leaf::default().deserialize(&bytes),
            Err(Error::EncodingError(_))
        ));
    }
}

#[test]
fn test_latin1_full_length_key() {
    let mut payload = vec![NodeType::Int8.tag(), 0xFF];
    payload.extend(std::iter::repeat(0xE9).take(255));
    payload.extend_from_slice(&[0x01, NodeType::End.tag()]);
    let stream = v1_stream(NodeType::Composite.tag(), &payload);

    let config = Config {
        encoding: TextEncoding::Latin1,
        ..Config::default()
    };
    let container = Container::read_with_config(&stream[..], &config).unwrap();
    let key = "é".repeat(255);
    let Node::Composite(composite) = container.root() else {
        panic!("expected a composite root");
    };
    assert_eq!(composite.len(), 1);
    assert_eq!(composite.get(&key), Some(&Node::Int8(1)));

    let mut rewritten = Vec::new();
    container.write_with_config(&mut rewritten, &config).unwrap();
    assert_eq!(rewritten, stream);

    let leaf = Leaf::new(config);
    assert_eq!(leaf.serialize(&leaf.deserialize(&stream).unwrap()).unwrap(), stream);
}

#[test]
fn test_latin1_rejects_wide_characters() {
    if should_panic_on_error() {
        return;
    }
    let leaf = Leaf::default().encoding(TextEncoding::Latin1);
    assert!(matches!(
        leaf.serialize(&Node::from("snow \u{2603}")),
        Err(Error::EncodingError(_))
    ));

    let mut doc = CompositeNode::new();
    doc.add("\u{2603}", Node::Flag(true)).unwrap();
    assert!(matches!(
        leaf.serialize(&Node::Composite(doc)),
        Err(Error::EncodingError(_))
    ));
}
