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

use indexmap::map::{self, Entry};
use indexmap::IndexMap;

use super::{drop_nested, max_version, Node};
use crate::error::Error;
use crate::types::MAX_KEY_BYTES;

/// String-keyed map of nodes that remembers insertion order.
///
/// Entries are encoded in iteration order, so two composites built by the
/// same sequence of calls always serialize to the same bytes. Equality is
/// order-sensitive for the same reason.
#[derive(Clone, Debug, Default)]
pub struct CompositeNode {
    entries: IndexMap<String, Node>,
}

impl CompositeNode {
    pub fn new() -> CompositeNode {
        CompositeNode::default()
    }

    pub fn with_capacity(capacity: usize) -> CompositeNode {
        CompositeNode {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Builds a composite from `(key, node)` pairs. A repeated key fails the
    /// whole construction.
    pub fn from_entries<K, I>(entries: I) -> Result<CompositeNode, Error>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        let iter = entries.into_iter();
        let mut composite = CompositeNode::with_capacity(iter.size_hint().0);
        for (key, node) in iter {
            composite.add(key, node)?;
        }
        Ok(composite)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a new entry; an existing key is a [`Error::KeyConflict`].
    pub fn add<K: Into<String>>(&mut self, key: K, node: Node) -> Result<(), Error> {
        let key = key.into();
        check_key(&key)?;
        match self.entries.entry(key) {
            Entry::Occupied(slot) => Err(Error::key_conflict(slot.key().clone())),
            Entry::Vacant(slot) => {
                slot.insert(node);
                Ok(())
            }
        }
    }

    /// Sets `key` to `node`, returning the previous value. A replaced entry
    /// keeps its original position.
    pub fn insert<K: Into<String>>(&mut self, key: K, node: Node) -> Result<Option<Node>, Error> {
        let key = key.into();
        check_key(&key)?;
        Ok(self.entries.insert(key, node))
    }

    /// Removes `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries.get_mut(key)
    }

    /// Like [`get`](Self::get) but a missing key is an error.
    pub fn lookup(&self, key: &str) -> Result<&Node, Error> {
        self.entries
            .get(key)
            .ok_or_else(|| Error::key_not_found(key.to_owned()))
    }

    pub fn get_index(&self, index: usize) -> Option<(&str, &Node)> {
        self.entries
            .get_index(index)
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Node> {
        self.entries.values()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn drain_values(&mut self) -> impl Iterator<Item = Node> {
        std::mem::take(&mut self.entries).into_values()
    }

    pub fn version(&self) -> i32 {
        max_version(self.entries.values())
    }

    /// Inserts a decoded entry. The key was already bounded by its one-byte
    /// length prefix in whatever encoding the stream uses, so only
    /// uniqueness is checked.
    pub(crate) fn add_decoded(&mut self, key: String, node: Node) -> Result<(), Error> {
        match self.entries.entry(key) {
            Entry::Occupied(slot) => Err(Error::key_conflict(slot.key().clone())),
            Entry::Vacant(slot) => {
                slot.insert(node);
                Ok(())
            }
        }
    }
}

impl Drop for CompositeNode {
    fn drop(&mut self) {
        if self.entries.values().any(|n| n.node_type().is_container()) {
            drop_nested(self.drain_values().collect());
        }
    }
}

impl PartialEq for CompositeNode {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

fn check_key(key: &str) -> Result<(), Error> {
    if key.len() > MAX_KEY_BYTES {
        return Err(Error::invalid_argument(format!(
            "composite key is {} bytes, the limit is {}",
            key.len(),
            MAX_KEY_BYTES
        )));
    }
    Ok(())
}

pub struct Iter<'a> {
    inner: map::Iter<'a, String, Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a CompositeNode {
    type Item = (&'a str, &'a Node);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
