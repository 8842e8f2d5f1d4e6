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

use chrono::{NaiveDateTime, TimeDelta};

use crate::error::Error;
use crate::node::Node;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::types::format_epoch;

/// Microseconds between the format epoch and `time`. Anything finer than a
/// microsecond is dropped.
pub fn to_micros(time: &NaiveDateTime) -> Result<i64, Error> {
    time.signed_duration_since(format_epoch())
        .num_microseconds()
        .ok_or_else(|| Error::encode_error(format!("time {} is out of range", time)))
}

pub fn from_micros(micros: i64) -> Result<NaiveDateTime, Error> {
    format_epoch()
        .checked_add_signed(TimeDelta::microseconds(micros))
        .ok_or_else(|| {
            Error::invalid_data(format!(
                "time of {} microseconds since the epoch is out of range",
                micros
            ))
        })
}

pub fn write_time(time: &NaiveDateTime, context: &mut WriteContext) -> Result<(), Error> {
    let micros = to_micros(time)?;
    context.writer.write_i64(micros)
}

pub fn read_time(context: &mut ReadContext) -> Result<Node, Error> {
    let micros = context.reader.read_i64()?;
    Ok(Node::Time(from_micros(micros)?))
}
