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

use crate::ensure;
use crate::error::Error;
use crate::node::Node;
use crate::resolver::context::{ReadContext, WriteContext};

pub fn write_blob(bytes: &[u8], context: &mut WriteContext) -> Result<(), Error> {
    let len = i32::try_from(bytes.len()).map_err(|_| {
        Error::encode_error(format!("blob of {} bytes is too large", bytes.len()))
    })?;
    context.writer.write_i32(len)?;
    context.writer.write_bytes(bytes)
}

pub fn read_blob(context: &mut ReadContext) -> Result<Node, Error> {
    let len = context.reader.read_i32()?;
    ensure!(len >= 0, "negative blob length {}", len);
    let bytes = context.reader.read_bytes(len as usize)?;
    Ok(Node::Blob(bytes))
}
