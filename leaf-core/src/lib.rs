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

//! # leaf-core
//!
//! Core of the LEAF binary document format: a typed, self-describing tree of
//! nodes serialized with a stable, versioned, big-endian wire layout.
//!
//! ## Layers
//!
//! - [`buffer`]: endian-aware primitive reads and writes over any
//!   `Read`/`Write`, including the 16-byte [`Decimal`](decimal::Decimal).
//! - [`node`]: the document tree. Scalars, strings, times, UUIDs, blobs,
//!   homogeneous lists and insertion-ordered composites.
//! - [`serializer`] and [`resolver`]: the recursive payload codec and the
//!   per-engine tag dispatch table.
//! - [`engine`] and [`container`]: the `"LEAF"` header, engine versioning and
//!   whole-stream reads and writes.
//! - [`Leaf`]: byte-vector convenience API driven by a [`Config`](config::Config).
//!
//! ## Wire layout
//!
//! ```text
//! "LEAF" | version: i32 | root tag: u8 | root payload
//! ```
//!
//! A list payload is an `i32` count and one element tag followed by untagged
//! element payloads. A composite payload is a run of
//! `tag | key length: u8 | key | payload` entries closed by an `End` (0x00)
//! tag.
//!
//! ```rust
//! use leaf_core::node::{CompositeNode, ListNode, Node};
//! use leaf_core::types::NodeType;
//! use leaf_core::Leaf;
//!
//! let mut tags = ListNode::new(NodeType::String).unwrap();
//! tags.push(Node::from("a")).unwrap();
//!
//! let mut doc = CompositeNode::new();
//! doc.add("id", Node::Int64(7)).unwrap();
//! doc.add("tags", Node::List(tags)).unwrap();
//!
//! let leaf = Leaf::default();
//! let bytes = leaf.serialize(&Node::Composite(doc)).unwrap();
//! assert_eq!(&bytes[..4], b"LEAF");
//! let back = leaf.deserialize(&bytes).unwrap();
//! assert_eq!(back.as_composite().unwrap().len(), 2);
//! ```

pub mod buffer;
pub mod config;
pub mod container;
pub mod decimal;
pub mod engine;
pub mod error;
pub mod leaf;
pub mod node;
pub mod resolver;
pub mod serializer;
pub mod types;

pub use crate::container::Container;
pub use crate::error::Error;
pub use crate::leaf::Leaf;
pub use crate::node::Node;
