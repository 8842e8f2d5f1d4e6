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

use tracing::trace;

use super::write_payload;
use crate::error::Error;
use crate::node::{CompositeNode, Node};
use crate::resolver::context::{ReadContext, WriteContext};
use crate::types::{NodeType, MAX_KEY_BYTES};

/// Each entry is `tag, key length (u8), key, payload`; an `End` tag closes
/// the composite.
pub fn write_composite(composite: &CompositeNode, context: &mut WriteContext) -> Result<(), Error> {
    for (key, node) in composite {
        let key_bytes = context.writer.encoding().encode(key)?;
        if key_bytes.len() > MAX_KEY_BYTES {
            return Err(Error::encode_error(format!(
                "composite key '{}' is {} bytes, the limit is {}",
                key,
                key_bytes.len(),
                MAX_KEY_BYTES
            )));
        }
        context.writer.write_u8(node.node_type().tag())?;
        context.writer.write_u8(key_bytes.len() as u8)?;
        context.writer.write_bytes(&key_bytes)?;
        write_payload(node, context)?;
    }
    context.writer.write_u8(NodeType::End.tag())
}

pub fn read_composite(context: &mut ReadContext) -> Result<Node, Error> {
    context.inc_depth()?;
    trace!(depth = context.depth(), "decoding composite");
    let mut composite = CompositeNode::new();
    loop {
        let tag = context.reader.read_u8()?;
        if tag == NodeType::End.tag() {
            break;
        }
        let read_fn = context.resolver().get_read_fn(tag)?;
        let key_len = context.reader.read_u8()?;
        let key = context.reader.read_text(key_len as usize)?;
        if composite.contains_key(&key) {
            return Err(Error::key_conflict(key));
        }
        let node = read_fn(context)?;
        composite.add_decoded(key, node)?;
    }
    context.dec_depth();
    Ok(Node::Composite(composite))
}
