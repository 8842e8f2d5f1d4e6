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

//! Versioned codec strategies and the container header.
//!
//! An [`Engine`] turns a root node into a payload and back for one format
//! version. Engines are stateless and live in a static registry keyed by
//! version; the header of every stream names the engine that wrote it.

use std::fmt;
use std::io::{Read, Write};

use tracing::trace;

use crate::buffer::{EndianReader, EndianWriter};
use crate::config::Config;
use crate::error::Error;
use crate::node::Node;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::resolver::type_resolver::TypeResolver;
use crate::serializer;
use crate::types::{NodeType, SIGNATURE};

/// Leading record of a container stream: signature, engine version, root tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub version: i32,
    pub root_type: NodeType,
}

impl Header {
    pub fn new(version: i32, root_type: NodeType) -> Header {
        Header { version, root_type }
    }

    pub fn write_to<W: Write>(&self, writer: &mut EndianWriter<W>) -> Result<(), Error> {
        writer.write_bytes(&SIGNATURE)?;
        writer.write_i32(self.version)?;
        writer.write_u8(self.root_type.tag())
    }

    /// Reads and validates a header. A stream that does not start with
    /// `"LEAF"` fails with [`Error::BadSignature`].
    pub fn read_from<R: Read>(reader: &mut EndianReader<R>) -> Result<Header, Error> {
        let mut signature = [0u8; 4];
        reader.read_exact(&mut signature)?;
        if signature != SIGNATURE {
            return Err(Error::bad_signature(signature));
        }
        let version = reader.read_i32()?;
        let root_type = NodeType::from_tag(reader.read_u8()?)?;
        trace!(version, root_type = %root_type, "parsed header");
        Ok(Header { version, root_type })
    }
}

/// One version of the wire format.
///
/// Implementors provide the version number and the decode table; the header,
/// encode and decode entry points have default implementations shared by
/// every engine.
pub trait Engine: Send + Sync + fmt::Debug {
    fn version(&self) -> i32;

    fn resolver(&self) -> &'static TypeResolver;

    fn header(&self, root: &Node) -> Header {
        Header::new(self.version(), root.node_type())
    }

    fn write_payload(
        &self,
        node: &Node,
        writer: &mut EndianWriter<&mut dyn Write>,
        config: &Config,
    ) -> Result<(), Error> {
        let mut context = WriteContext::new(writer, config);
        serializer::write_payload(node, &mut context)
    }

    fn read_payload(
        &self,
        tag: u8,
        reader: &mut EndianReader<&mut dyn Read>,
        config: &Config,
    ) -> Result<Node, Error> {
        let mut context = ReadContext::new(reader, self.resolver(), config);
        context.read_payload(tag)
    }
}

/// Format version 1: every scalar, String, Time, Uuid, Blob, List and
/// Composite. Geometry tags are reserved.
#[derive(Debug, Default)]
pub struct EngineV1;

impl Engine for EngineV1 {
    fn version(&self) -> i32 {
        1
    }

    fn resolver(&self) -> &'static TypeResolver {
        TypeResolver::v1()
    }
}

static ENGINE_V1: EngineV1 = EngineV1;

/// Registered engines in ascending version order.
static ENGINES: &[&dyn Engine] = &[&ENGINE_V1];

/// Looks up the engine that reads and writes `version`.
pub fn engine_for_version(version: i32) -> Result<&'static dyn Engine, Error> {
    ENGINES
        .iter()
        .copied()
        .find(|engine| engine.version() == version)
        .ok_or_else(|| Error::unsupported_version(version))
}

/// The oldest engine able to represent a node of `node_version`.
pub fn lowest_compatible_engine(node_version: i32) -> Result<&'static dyn Engine, Error> {
    let engine = ENGINES
        .iter()
        .copied()
        .find(|engine| engine.version() >= node_version)
        .ok_or_else(|| Error::version_incompatible(node_version, latest_engine().version()))?;
    trace!(node_version, engine_version = engine.version(), "selected engine");
    Ok(engine)
}

pub fn latest_engine() -> &'static dyn Engine {
    ENGINES[ENGINES.len() - 1]
}

pub fn registered_versions() -> impl Iterator<Item = i32> {
    ENGINES.iter().map(|engine| engine.version())
}
