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

//! Payload codecs, one module per family of node types.
//!
//! Encoding is a single exhaustive `match` over [`Node`]; decoding goes the
//! other way through the engine's [`TypeResolver`](crate::resolver::type_resolver::TypeResolver),
//! which maps each tag to one of the `read_*` functions below.

pub(crate) mod binary;
pub(crate) mod composite;
pub(crate) mod datetime;
pub(crate) mod list;
pub(crate) mod number;
pub(crate) mod string;
pub(crate) mod uuid_;

use crate::error::Error;
use crate::node::Node;
use crate::resolver::context::WriteContext;

/// Writes the payload of `node` without its tag.
pub fn write_payload(node: &Node, context: &mut WriteContext) -> Result<(), Error> {
    match node {
        Node::Flag(v) => context.writer.write_bool(*v),
        Node::Int8(v) => context.writer.write_i8(*v),
        Node::Int16(v) => context.writer.write_i16(*v),
        Node::Int32(v) => context.writer.write_i32(*v),
        Node::Int64(v) => context.writer.write_i64(*v),
        Node::Float32(v) => context.writer.write_f32(*v),
        Node::Float64(v) => context.writer.write_f64(*v),
        Node::String(v) => string::write_string(v, context),
        Node::Time(v) => datetime::write_time(v, context),
        Node::Uuid(v) => uuid_::write_uuid(v, context),
        Node::Blob(v) => binary::write_blob(v, context),
        Node::List(v) => {
            context.inc_depth()?;
            list::write_list(v, context)?;
            context.dec_depth();
            Ok(())
        }
        Node::Composite(v) => {
            context.inc_depth()?;
            composite::write_composite(v, context)?;
            context.dec_depth();
            Ok(())
        }
    }
}
