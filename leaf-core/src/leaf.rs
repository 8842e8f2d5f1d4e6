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

use crate::config::Config;
use crate::container::{write_container, Container};
use crate::engine::{self, Engine};
use crate::error::Error;
use crate::node::Node;
use crate::types::TextEncoding;

/// Entry point for turning node trees into bytes and back.
///
/// `Leaf` only holds a [`Config`]; it is cheap to build and can be shared
/// between threads.
///
/// ```rust
/// use leaf_core::node::{CompositeNode, Node};
/// use leaf_core::Leaf;
///
/// let mut doc = CompositeNode::new();
/// doc.add("answer", Node::Int32(42)).unwrap();
///
/// let leaf = Leaf::default().max_depth(32);
/// let bytes = leaf.serialize(&Node::Composite(doc.clone())).unwrap();
/// let back = leaf.deserialize(&bytes).unwrap();
/// assert_eq!(back, Node::Composite(doc));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Leaf {
    config: Config,
}

impl Leaf {
    pub fn new(config: Config) -> Leaf {
        Leaf { config }
    }

    /// Limits List/Composite nesting on both encode and decode.
    ///
    /// The default is [`DEFAULT_MAX_DEPTH`](crate::config::DEFAULT_MAX_DEPTH).
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Pins serialization to one engine version instead of the lowest
    /// compatible one. Deserialization always follows the stream header.
    pub fn engine_version(mut self, version: i32) -> Self {
        self.config.engine_version = Some(version);
        self
    }

    /// Text encoding for String payloads and Composite keys. Both sides of a
    /// stream must agree; the header does not record it.
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn serialize(&self, node: &Node) -> Result<Vec<u8>, Error> {
        let mut buf = Vec::new();
        self.serialize_to(&mut buf, node)?;
        Ok(buf)
    }

    /// Appends a full container for `node` to `buf` and returns the number of
    /// bytes added. On error `buf` is restored to its original length.
    pub fn serialize_to(&self, buf: &mut Vec<u8>, node: &Node) -> Result<usize, Error> {
        let start = buf.len();
        let engine = self.select_engine(node)?;
        match write_container(node, engine, &mut *buf, &self.config) {
            Ok(written) => Ok(written as usize),
            Err(e) => {
                buf.truncate(start);
                Err(e)
            }
        }
    }

    /// Decodes one container occupying all of `bytes`.
    pub fn deserialize(&self, bytes: &[u8]) -> Result<Node, Error> {
        let mut remaining = bytes;
        let container = Container::read_with_config(&mut remaining, &self.config)?;
        if !remaining.is_empty() {
            return Err(Error::invalid_data(format!(
                "{} trailing bytes after container",
                remaining.len()
            )));
        }
        Ok(container.into_root())
    }

    fn select_engine(&self, node: &Node) -> Result<&'static dyn Engine, Error> {
        match self.config.engine_version {
            Some(version) => engine::engine_for_version(version),
            None => engine::lowest_compatible_engine(node.version()),
        }
    }
}
