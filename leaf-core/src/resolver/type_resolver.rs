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

use std::fmt;

use super::context::ReadContext;
use crate::error::Error;
use crate::node::Node;
use crate::serializer::{binary, composite, datetime, list, number, string, uuid_};
use crate::types::{NodeType, TYPE_TAG_COUNT};

/// Decodes one untagged payload.
pub type ReadFn = fn(&mut ReadContext) -> Result<Node, Error>;

/// Maps every type tag to the function that decodes its payload.
///
/// Each engine owns one table. Tags the engine has no codec for (the reserved
/// geometry range in v1) keep an empty slot and decode as
/// [`Error::UnsupportedType`].
pub struct TypeResolver {
    readers: [Option<ReadFn>; TYPE_TAG_COUNT],
}

impl TypeResolver {
    pub const fn empty() -> TypeResolver {
        TypeResolver {
            readers: [None; TYPE_TAG_COUNT],
        }
    }

    /// Returns a copy of `self` with `read_fn` registered for `node_type`.
    pub const fn with(mut self, node_type: NodeType, read_fn: ReadFn) -> TypeResolver {
        self.readers[node_type as usize] = Some(read_fn);
        self
    }

    /// Resolver for format version 1.
    pub fn v1() -> &'static TypeResolver {
        &V1
    }

    pub fn supports(&self, node_type: NodeType) -> bool {
        self.readers[node_type as usize].is_some()
    }

    #[inline]
    pub fn get_read_fn(&self, tag: u8) -> Result<ReadFn, Error> {
        let node_type = NodeType::from_tag(tag)?;
        if node_type == NodeType::End {
            return Err(Error::invalid_data(
                "found End tag where a value was expected",
            ));
        }
        self.readers[tag as usize].ok_or_else(|| Error::unsupported_type(node_type))
    }
}

impl fmt::Debug for TypeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let supported: Vec<NodeType> = (0..TYPE_TAG_COUNT as u8)
            .filter_map(|tag| NodeType::from_tag(tag).ok())
            .filter(|t| self.supports(*t))
            .collect();
        f.debug_struct("TypeResolver")
            .field("supported", &supported)
            .finish()
    }
}

static V1: TypeResolver = TypeResolver::empty()
    .with(NodeType::Flag, number::read_flag)
    .with(NodeType::Int8, number::read_int8)
    .with(NodeType::Int16, number::read_int16)
    .with(NodeType::Int32, number::read_int32)
    .with(NodeType::Int64, number::read_int64)
    .with(NodeType::Float32, number::read_float32)
    .with(NodeType::Float64, number::read_float64)
    .with(NodeType::String, string::read_string)
    .with(NodeType::Time, datetime::read_time)
    .with(NodeType::Uuid, uuid_::read_uuid)
    .with(NodeType::Blob, binary::read_blob)
    .with(NodeType::List, list::read_list)
    .with(NodeType::Composite, composite::read_composite);
