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

use crate::buffer::{EndianReader, EndianWriter};
use crate::config::Config;
use crate::error::Error;
use crate::node::Node;
use crate::resolver::type_resolver::TypeResolver;

/// State threaded through one encode pass.
pub struct WriteContext<'a, 'w> {
    pub writer: &'a mut EndianWriter<&'w mut dyn Write>,
    max_depth: u32,
    current_depth: u32,
}

impl<'a, 'w> WriteContext<'a, 'w> {
    pub fn new(writer: &'a mut EndianWriter<&'w mut dyn Write>, config: &Config) -> Self {
        WriteContext {
            writer,
            max_depth: config.max_depth(),
            current_depth: 0,
        }
    }

    #[inline(always)]
    pub fn depth(&self) -> u32 {
        self.current_depth
    }

    pub fn inc_depth(&mut self) -> Result<(), Error> {
        self.current_depth += 1;
        if self.current_depth > self.max_depth {
            return Err(depth_exceeded(self.max_depth, self.current_depth));
        }
        Ok(())
    }

    #[inline(always)]
    pub fn dec_depth(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }
}

/// State threaded through one decode pass.
///
/// Holds the resolver of the engine named in the header, so nested payloads
/// are always decoded by the same engine as the root.
pub struct ReadContext<'a, 'r> {
    pub reader: &'a mut EndianReader<&'r mut dyn Read>,
    resolver: &'static TypeResolver,
    max_depth: u32,
    current_depth: u32,
}

impl<'a, 'r> ReadContext<'a, 'r> {
    pub fn new(
        reader: &'a mut EndianReader<&'r mut dyn Read>,
        resolver: &'static TypeResolver,
        config: &Config,
    ) -> Self {
        ReadContext {
            reader,
            resolver,
            max_depth: config.max_depth(),
            current_depth: 0,
        }
    }

    #[inline(always)]
    pub fn resolver(&self) -> &'static TypeResolver {
        self.resolver
    }

    #[inline(always)]
    pub fn depth(&self) -> u32 {
        self.current_depth
    }

    /// Decodes one untagged payload of the type named by `tag`.
    #[inline]
    pub fn read_payload(&mut self, tag: u8) -> Result<Node, Error> {
        let read_fn = self.resolver.get_read_fn(tag)?;
        read_fn(self)
    }

    pub fn inc_depth(&mut self) -> Result<(), Error> {
        self.current_depth += 1;
        if self.current_depth > self.max_depth {
            return Err(depth_exceeded(self.max_depth, self.current_depth));
        }
        Ok(())
    }

    #[inline(always)]
    pub fn dec_depth(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }
}

#[cold]
fn depth_exceeded(max_depth: u32, current_depth: u32) -> Error {
    Error::depth_exceed(format!(
        "maximum nesting depth ({}) exceeded, current depth: {}",
        max_depth, current_depth
    ))
}
