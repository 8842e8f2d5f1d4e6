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

//! The document tree.
//!
//! A [`Node`] is one tagged value. Scalars carry their payload directly;
//! [`ListNode`] holds an ordered run of nodes that all share one type, and
//! [`CompositeNode`] maps string keys to nodes of any type in insertion order.
//!
//! ```rust
//! use leaf_core::node::{CompositeNode, ListNode, Node};
//! use leaf_core::types::NodeType;
//!
//! let mut scores = ListNode::new(NodeType::Int32).unwrap();
//! scores.push(Node::Int32(7)).unwrap();
//! assert!(scores.push(Node::from("seven")).is_err());
//!
//! let mut doc = CompositeNode::new();
//! doc.add("name", Node::from("leaf")).unwrap();
//! doc.add("scores", Node::List(scores)).unwrap();
//! assert_eq!(doc.len(), 2);
//! ```

mod composite;
mod list;

pub use composite::{CompositeNode, Iter as CompositeIter};
pub use list::ListNode;

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::types::{NodeType, BASE_NODE_VERSION};

/// One value of the document tree.
///
/// `Blob` owns its buffer: building a node from a `Vec<u8>` moves the bytes
/// in without copying, and the node is the only owner afterwards.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Flag(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
    Time(NaiveDateTime),
    Uuid(Uuid),
    Blob(Vec<u8>),
    List(ListNode),
    Composite(CompositeNode),
}

impl Node {
    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Flag(_) => NodeType::Flag,
            Node::Int8(_) => NodeType::Int8,
            Node::Int16(_) => NodeType::Int16,
            Node::Int32(_) => NodeType::Int32,
            Node::Int64(_) => NodeType::Int64,
            Node::Float32(_) => NodeType::Float32,
            Node::Float64(_) => NodeType::Float64,
            Node::String(_) => NodeType::String,
            Node::Time(_) => NodeType::Time,
            Node::Uuid(_) => NodeType::Uuid,
            Node::Blob(_) => NodeType::Blob,
            Node::List(_) => NodeType::List,
            Node::Composite(_) => NodeType::Composite,
        }
    }

    /// Minimum format version able to represent this node. Containers report
    /// the maximum over everything they hold, and never less than 1.
    pub fn version(&self) -> i32 {
        max_version(std::iter::once(self))
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Node::Flag(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Node::Int8(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Node::Int16(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Node::Int32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Node::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Node::Float32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<NaiveDateTime> {
        match self {
            Node::Time(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            Node::Uuid(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            Node::Blob(v) => Some(v),
            _ => None,
        }
    }

    /// Hands the blob buffer back to the caller.
    pub fn into_blob(self) -> Option<Vec<u8>> {
        match self {
            Node::Blob(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListNode> {
        match self {
            Node::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut ListNode> {
        match self {
            Node::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeNode> {
        match self {
            Node::Composite(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_composite_mut(&mut self) -> Option<&mut CompositeNode> {
        match self {
            Node::Composite(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                #[inline]
                fn from(value: $ty) -> Node {
                    Node::$variant(value)
                }
            }
        )*
    };
}

impl_from!(
    bool => Flag,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    String => String,
    NaiveDateTime => Time,
    Uuid => Uuid,
    Vec<u8> => Blob,
    ListNode => List,
    CompositeNode => Composite,
);

impl From<&str> for Node {
    fn from(value: &str) -> Node {
        Node::String(value.to_owned())
    }
}

/// Highest node version over `roots` and everything nested below them.
///
/// Walks with an explicit stack so caller-built trees of any depth are safe to
/// inspect before the encoder's depth limit applies.
pub(crate) fn max_version<'a>(roots: impl IntoIterator<Item = &'a Node>) -> i32 {
    let mut version = BASE_NODE_VERSION;
    let mut pending: Vec<&Node> = roots.into_iter().collect();
    while let Some(node) = pending.pop() {
        match node {
            Node::List(list) => pending.extend(list.iter()),
            Node::Composite(composite) => pending.extend(composite.values()),
            _ => version = version.max(BASE_NODE_VERSION),
        }
    }
    version
}

/// Drops `nodes` without recursing once per nesting level.
pub(crate) fn drop_nested(mut nodes: Vec<Node>) {
    while let Some(node) = nodes.pop() {
        match node {
            Node::List(list) => nodes.extend(list),
            Node::Composite(mut composite) => nodes.extend(composite.drain_values()),
            _ => {}
        }
    }
}
