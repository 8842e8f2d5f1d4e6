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
use crate::resolver::context::ReadContext;

macro_rules! impl_num_reader {
    ($($name:ident => $variant:ident, $read:ident);* $(;)?) => {
        $(
            #[inline(always)]
            pub fn $name(context: &mut ReadContext) -> Result<Node, Error> {
                Ok(Node::$variant(context.reader.$read()?))
            }
        )*
    };
}

impl_num_reader!(
    read_flag => Flag, read_bool;
    read_int8 => Int8, read_i8;
    read_int16 => Int16, read_i16;
    read_int32 => Int32, read_i32;
    read_int64 => Int64, read_i64;
    read_float32 => Float32, read_f32;
    read_float64 => Float64, read_f64;
);
