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

use tracing::{debug, trace};

use crate::buffer::{EndianReader, EndianWriter};
use crate::config::Config;
use crate::engine::{self, Engine, Header};
use crate::error::Error;
use crate::node::Node;
use crate::types::WIRE_BIG_ENDIAN;

/// A root node bound to the engine that serializes it.
///
/// ```rust
/// use leaf_core::container::Container;
/// use leaf_core::node::Node;
///
/// let container = Container::new(Node::Int32(1234567)).unwrap();
/// let bytes = container.to_bytes().unwrap();
/// assert_eq!(&bytes[..4], b"LEAF");
///
/// let back = Container::read(&bytes[..]).unwrap();
/// assert_eq!(back.root(), &Node::Int32(1234567));
/// ```
#[derive(Clone, Debug)]
pub struct Container {
    root: Node,
    engine: &'static dyn Engine,
}

impl Container {
    /// Binds `root` to the lowest registered engine that can represent it.
    pub fn new(root: Node) -> Result<Container, Error> {
        let engine = engine::lowest_compatible_engine(root.version())?;
        Ok(Container { root, engine })
    }

    /// Binds `root` to `engine`. Compatibility is checked when writing.
    pub fn with_engine(root: Node, engine: &'static dyn Engine) -> Container {
        Container { root, engine }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    pub fn set_root(&mut self, root: Node) {
        self.root = root;
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn engine(&self) -> &'static dyn Engine {
        self.engine
    }

    pub fn set_engine(&mut self, engine: &'static dyn Engine) {
        self.engine = engine;
    }

    /// Writes header and payload to `stream` and returns the number of bytes
    /// written. The stream is flushed but stays open.
    pub fn write<W: Write>(&self, stream: W) -> Result<u64, Error> {
        self.write_with_config(stream, &Config::default())
    }

    pub fn write_with_config<W: Write>(&self, stream: W, config: &Config) -> Result<u64, Error> {
        write_container(&self.root, self.engine, stream, config)
    }

    pub fn read<R: Read>(stream: R) -> Result<Container, Error> {
        Container::read_with_config(stream, &Config::default())
    }

    /// Reads one container from `stream`, decoding the payload with the engine
    /// named in the header.
    pub fn read_with_config<R: Read>(mut stream: R, config: &Config) -> Result<Container, Error> {
        let source: &mut dyn Read = &mut stream;
        let mut reader = EndianReader::with_encoding(source, WIRE_BIG_ENDIAN, config.encoding());
        let header = Header::read_from(&mut reader)?;
        let engine = engine::engine_for_version(header.version)?;
        trace!(version = engine.version(), "resolved engine from header");

        let root = engine.read_payload(header.root_type.tag(), &mut reader, config)?;
        debug!(
            version = header.version,
            root_type = %header.root_type,
            bytes = reader.position(),
            "read container"
        );
        Ok(Container { root, engine })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut bytes = Vec::new();
        self.write(&mut bytes)?;
        Ok(bytes)
    }
}

/// Writes `root` as a complete container using `engine`.
///
/// Nothing reaches the stream when the root needs a newer engine or the
/// engine's header disagrees with its own version.
pub(crate) fn write_container<W: Write>(
    root: &Node,
    engine: &dyn Engine,
    mut stream: W,
    config: &Config,
) -> Result<u64, Error> {
    let node_version = root.version();
    let engine_version = engine.version();
    if node_version > engine_version {
        return Err(Error::version_incompatible(node_version, engine_version));
    }

    let header = engine.header(root);
    if header.version != engine_version {
        return Err(Error::invalid_state(format!(
            "engine {} produced a header for version {}",
            engine_version, header.version
        )));
    }
    let sink: &mut dyn Write = &mut stream;
    let mut writer = EndianWriter::with_encoding(sink, WIRE_BIG_ENDIAN, config.encoding());
    header.write_to(&mut writer)?;
    engine.write_payload(root, &mut writer, config)?;
    writer.flush()?;

    debug!(
        version = header.version,
        root_type = %header.root_type,
        bytes = writer.position(),
        "wrote container"
    );
    Ok(writer.position())
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.engine.version() == other.engine.version() && self.root == other.root
    }
}
