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

use crate::types::TextEncoding;

/// Default bound on List/Composite nesting.
pub const DEFAULT_MAX_DEPTH: u32 = 256;

/// Configuration for Leaf serialization.
///
/// Shared by the `Leaf` facade and the read/write contexts so encode and
/// decode apply the same limits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum nesting of List/Composite nodes, checked on encode and decode.
    pub max_depth: u32,
    /// Engine used when serializing. `None` picks the lowest engine able to
    /// represent the root.
    pub engine_version: Option<i32>,
    /// Encoding of String payloads and Composite keys on the wire.
    pub encoding: TextEncoding,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: DEFAULT_MAX_DEPTH,
            engine_version: None,
            encoding: TextEncoding::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[inline(always)]
    pub fn engine_version(&self) -> Option<i32> {
        self.engine_version
    }

    #[inline(always)]
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }
}
