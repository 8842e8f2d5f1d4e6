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

//! # Leaf
//!
//! Leaf is a typed, self-describing binary format for recursive document
//! trees. A document is a [`Node`]: a flag, a fixed-width number, a string,
//! a time, a UUID, a blob, a homogeneous [`ListNode`] or a string-keyed
//! [`CompositeNode`] that keeps insertion order.
//!
//! Streams start with the `"LEAF"` signature and the version of the engine
//! that wrote them, so old readers reject data they cannot understand instead
//! of misreading it.
//!
//! ```rust
//! use leaf::{CompositeNode, Leaf, ListNode, Node, NodeType};
//!
//! let mut readings = ListNode::new(NodeType::Float64).unwrap();
//! readings.push(Node::Float64(20.5)).unwrap();
//! readings.push(Node::Float64(21.0)).unwrap();
//!
//! let mut doc = CompositeNode::new();
//! doc.add("sensor", Node::from("t-101")).unwrap();
//! doc.add("readings", Node::List(readings)).unwrap();
//!
//! let leaf = Leaf::default();
//! let bytes = leaf.serialize(&Node::Composite(doc.clone())).unwrap();
//! assert_eq!(leaf.deserialize(&bytes).unwrap(), Node::Composite(doc));
//! ```
//!
//! Containers give direct control over the stream and the engine:
//!
//! ```rust
//! use leaf::{Container, Node};
//!
//! let container = Container::new(Node::Int32(1234567)).unwrap();
//! let mut bytes = Vec::new();
//! container.write(&mut bytes).unwrap();
//! assert_eq!(bytes, [0x4C, 0x45, 0x41, 0x46, 0, 0, 0, 1, 0x03, 0x00, 0x12, 0xD6, 0x87]);
//! ```

pub use leaf_core::{
    config::Config,
    container::Container,
    decimal::Decimal,
    engine::{Engine, EngineV1, Header},
    error::{Error, ErrorCategory},
    leaf::Leaf,
    node::{CompositeNode, ListNode, Node},
    types::{NodeType, TextEncoding},
};
