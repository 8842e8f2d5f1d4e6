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
use crate::ensure;
use crate::error::Error;
use crate::node::{ListNode, Node};
use crate::resolver::context::{ReadContext, WriteContext};
use crate::types::NodeType;

/// Upper bound on up-front allocation for a decoded list; larger lists grow
/// as elements actually arrive.
const MAX_PREALLOCATED_ELEMENTS: usize = 1024;

/// `i32` count, element tag, then each element's payload without a tag.
pub fn write_list(list: &ListNode, context: &mut WriteContext) -> Result<(), Error> {
    let count = i32::try_from(list.len())
        .map_err(|_| Error::encode_error(format!("list of {} elements is too long", list.len())))?;
    context.writer.write_i32(count)?;
    context.writer.write_u8(list.element_type().tag())?;
    for element in list {
        write_payload(element, context)?;
    }
    Ok(())
}

pub fn read_list(context: &mut ReadContext) -> Result<Node, Error> {
    let count = context.reader.read_i32()?;
    ensure!(count >= 0, "negative list count {}", count);
    let tag = context.reader.read_u8()?;
    let read_fn = context.resolver().get_read_fn(tag)?;
    let element_type = NodeType::from_tag(tag)?;

    context.inc_depth()?;
    trace!(
        count,
        element_type = %element_type,
        depth = context.depth(),
        "decoding list"
    );
    let capacity = (count as usize).min(MAX_PREALLOCATED_ELEMENTS);
    let mut list = ListNode::with_capacity(element_type, capacity)?;
    for _ in 0..count {
        let element = read_fn(context)?;
        list.push(element)?;
    }
    context.dec_depth();
    Ok(Node::List(list))
}
