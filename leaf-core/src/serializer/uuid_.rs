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

use uuid::Uuid;

use crate::error::Error;
use crate::node::Node;
use crate::resolver::context::{ReadContext, WriteContext};

/// Writes the RFC 4122 fields: a u32, two u16s, then the last eight bytes raw.
pub fn write_uuid(uuid: &Uuid, context: &mut WriteContext) -> Result<(), Error> {
    let (d1, d2, d3, d4) = uuid.as_fields();
    context.writer.write_u32(d1)?;
    context.writer.write_u16(d2)?;
    context.writer.write_u16(d3)?;
    context.writer.write_bytes(d4)
}

pub fn read_uuid(context: &mut ReadContext) -> Result<Node, Error> {
    let d1 = context.reader.read_u32()?;
    let d2 = context.reader.read_u16()?;
    let d3 = context.reader.read_u16()?;
    let mut d4 = [0u8; 8];
    context.reader.read_exact(&mut d4)?;
    Ok(Node::Uuid(Uuid::from_fields(d1, d2, d3, &d4)))
}
