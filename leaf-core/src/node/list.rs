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

use std::slice;

use super::{drop_nested, max_version, Node};
use crate::error::Error;
use crate::types::NodeType;

/// Ordered sequence of nodes that all have type `element_type`.
///
/// Every mutation checks the incoming node before touching the list, so a
/// rejected insert leaves the list exactly as it was.
#[derive(Clone, Debug, PartialEq)]
pub struct ListNode {
    element_type: NodeType,
    elements: Vec<Node>,
}

impl ListNode {
    /// Fails for `End`, and for the reserved geometry types, which no
    /// engine can decode.
    pub fn new(element_type: NodeType) -> Result<ListNode, Error> {
        if !element_type.is_value() {
            return Err(Error::invalid_argument(
                "list element type cannot be End",
            ));
        }
        if element_type.is_reserved() {
            return Err(Error::unsupported_type(element_type));
        }
        Ok(ListNode {
            element_type,
            elements: Vec::new(),
        })
    }

    pub fn with_capacity(element_type: NodeType, capacity: usize) -> Result<ListNode, Error> {
        let mut list = ListNode::new(element_type)?;
        list.elements.reserve(capacity);
        Ok(list)
    }

    /// Builds a list from `elements`, failing on the first element whose type
    /// is not `element_type`.
    pub fn from_elements<I>(element_type: NodeType, elements: I) -> Result<ListNode, Error>
    where
        I: IntoIterator<Item = Node>,
    {
        let mut list = ListNode::new(element_type)?;
        for node in elements {
            list.push(node)?;
        }
        Ok(list)
    }

    #[inline]
    pub fn element_type(&self) -> NodeType {
        self.element_type
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Node> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[Node] {
        &self.elements
    }

    pub fn push(&mut self, node: Node) -> Result<(), Error> {
        self.check(&node)?;
        self.elements.push(node);
        Ok(())
    }

    /// Inserts at `index`; `index == len()` appends.
    pub fn insert(&mut self, index: usize, node: Node) -> Result<(), Error> {
        if index > self.elements.len() {
            return Err(Error::index_out_of_range(index, self.elements.len()));
        }
        self.check(&node)?;
        self.elements.insert(index, node);
        Ok(())
    }

    /// Replaces the element at `index` and returns the previous one.
    pub fn set(&mut self, index: usize, node: Node) -> Result<Node, Error> {
        let len = self.elements.len();
        if index >= len {
            return Err(Error::index_out_of_range(index, len));
        }
        self.check(&node)?;
        Ok(std::mem::replace(&mut self.elements[index], node))
    }

    pub fn remove(&mut self, index: usize) -> Result<Node, Error> {
        if index >= self.elements.len() {
            return Err(Error::index_out_of_range(index, self.elements.len()));
        }
        Ok(self.elements.remove(index))
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn into_elements(mut self) -> Vec<Node> {
        std::mem::take(&mut self.elements)
    }

    pub fn version(&self) -> i32 {
        max_version(self.elements.iter())
    }

    #[inline]
    fn check(&self, node: &Node) -> Result<(), Error> {
        let actual = node.node_type();
        if actual != self.element_type {
            return Err(Error::type_mismatch(self.element_type, actual));
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ListNode {
    type Item = &'a Node;
    type IntoIter = slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for ListNode {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_elements().into_iter()
    }
}

impl Drop for ListNode {
    fn drop(&mut self) {
        if self.elements.iter().any(|n| n.node_type().is_container()) {
            drop_nested(std::mem::take(&mut self.elements));
        }
    }
}
