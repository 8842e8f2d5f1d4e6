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

use crate::error::Error;
use crate::node::Node;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::types::MAX_STRING_BYTES;

pub fn write_string(s: &str, context: &mut WriteContext) -> Result<(), Error> {
    let bytes = context.writer.encoding().encode(s)?;
    if bytes.len() > MAX_STRING_BYTES {
        return Err(Error::encode_error(format!(
            "string of {} bytes exceeds the {} byte limit",
            bytes.len(),
            MAX_STRING_BYTES
        )));
    }
    context.writer.write_u16(bytes.len() as u16)?;
    context.writer.write_bytes(&bytes)
}

pub fn read_string(context: &mut ReadContext) -> Result<Node, Error> {
    let len = context.reader.read_u16()?;
    let s = context.reader.read_text(len as usize)?;
    Ok(Node::String(s))
}
