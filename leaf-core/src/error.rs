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

//! Error type shared by every layer of the codec.
//!
//! Constructors are `#[cold]` and `#[track_caller]`: they sit on the failure
//! branch of every primitive read, so keeping them out of line keeps the
//! successful path small.

use std::borrow::Cow;
use std::io;

use thiserror::Error;

use crate::types::NodeType;

/// Set LEAF_PANIC_ON_ERROR=1 at compile time to panic where an error is created.
pub const PANIC_ON_ERROR: bool = option_env!("LEAF_PANIC_ON_ERROR").is_some();

#[inline(always)]
pub const fn should_panic_on_error() -> bool {
    PANIC_ON_ERROR
}

/// Coarse classification of an [`enum@Error`].
///
/// `InvalidArgument`, `InvalidState`, `TypeMismatch` and `KeyConflict` point at
/// a bug in the calling code. `Format` and `Version` mean the data (or the
/// chosen engine) is the problem. `Io` is whatever the underlying stream
/// reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidArgument,
    InvalidState,
    Format,
    TypeMismatch,
    Version,
    KeyConflict,
    Io,
}

/// Error type for Leaf serialization and deserialization.
///
/// # Always use the constructor functions
///
/// Build errors with [`Error::invalid_argument`], [`Error::unknown_type`] and
/// friends rather than the enum syntax. The constructors accept anything
/// convertible into `Cow<'static, str>` and honour `LEAF_PANIC_ON_ERROR`.
///
/// ```rust
/// use leaf_core::error::Error;
/// use leaf_core::types::NodeType;
///
/// let err = Error::type_mismatch(NodeType::Int32, NodeType::String);
/// assert_eq!(
///     err.to_string(),
///     "element type mismatch: expected Int32, got String"
/// );
/// ```
///
/// ## Debugging with LEAF_PANIC_ON_ERROR
///
/// ```bash
/// RUST_BACKTRACE=1 LEAF_PANIC_ON_ERROR=1 cargo test
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(Cow<'static, str>),

    #[error("invalid state: {0}")]
    InvalidState(Cow<'static, str>),

    /// A read needed `needed` more bytes at stream offset `offset`.
    #[error("unexpected end of stream at offset {0} while reading {1} bytes")]
    EndOfStream(u64, usize),

    #[error("bad signature {0:02X?}, expected \"LEAF\"")]
    BadSignature([u8; 4]),

    #[error("unknown type tag 0x{0:02X}")]
    UnknownType(u8),

    /// The tag is known but the active engine has no codec for it.
    #[error("type {0} (tag 0x{tag:02X}) is not supported by this engine", tag = .0.tag())]
    UnsupportedType(NodeType),

    #[error("unsupported format version {0}")]
    UnsupportedVersion(i32),

    #[error("{0}")]
    InvalidData(Cow<'static, str>),

    #[error("{0}")]
    EncodingError(Cow<'static, str>),

    #[error("{0}")]
    EncodeError(Cow<'static, str>),

    #[error("element type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: NodeType, actual: NodeType },

    #[error("node requires format version {node_version} but engine is version {engine_version}")]
    VersionIncompatible {
        node_version: i32,
        engine_version: i32,
    },

    #[error("key '{0}' already exists")]
    KeyConflict(Cow<'static, str>),

    #[error("key '{0}' not found")]
    KeyNotFound(Cow<'static, str>),

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{0}")]
    DepthExceed(Cow<'static, str>),

    #[error(transparent)]
    Io(#[from] io::Error),
}

macro_rules! checked {
    ($err:expr) => {{
        let err = $err;
        if PANIC_ON_ERROR {
            panic!("LEAF_PANIC_ON_ERROR: {}", err);
        }
        err
    }};
}

impl Error {
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_argument<S: Into<Cow<'static, str>>>(s: S) -> Self {
        checked!(Error::InvalidArgument(s.into()))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_state<S: Into<Cow<'static, str>>>(s: S) -> Self {
        checked!(Error::InvalidState(s.into()))
    }

    /// Creates a new [`Error::EndOfStream`].
    ///
    /// ```
    /// use leaf_core::error::Error;
    ///
    /// let err = Error::end_of_stream(9, 4);
    /// assert!(err.is_end_of_stream());
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn end_of_stream(offset: u64, needed: usize) -> Self {
        checked!(Error::EndOfStream(offset, needed))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn bad_signature(found: [u8; 4]) -> Self {
        checked!(Error::BadSignature(found))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unknown_type(tag: u8) -> Self {
        checked!(Error::UnknownType(tag))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported_type(node_type: NodeType) -> Self {
        checked!(Error::UnsupportedType(node_type))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported_version(version: i32) -> Self {
        checked!(Error::UnsupportedVersion(version))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_data<S: Into<Cow<'static, str>>>(s: S) -> Self {
        checked!(Error::InvalidData(s.into()))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn encoding_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        checked!(Error::EncodingError(s.into()))
    }

    /// Creates a new [`Error::EncodeError`], used when a value cannot be
    /// represented by the wire format (e.g. a string longer than 65535 bytes).
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn encode_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        checked!(Error::EncodeError(s.into()))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn type_mismatch(expected: NodeType, actual: NodeType) -> Self {
        checked!(Error::TypeMismatch { expected, actual })
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn version_incompatible(node_version: i32, engine_version: i32) -> Self {
        checked!(Error::VersionIncompatible {
            node_version,
            engine_version,
        })
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn key_conflict<S: Into<Cow<'static, str>>>(key: S) -> Self {
        checked!(Error::KeyConflict(key.into()))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn key_not_found<S: Into<Cow<'static, str>>>(key: S) -> Self {
        checked!(Error::KeyNotFound(key.into()))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        checked!(Error::IndexOutOfRange { index, len })
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn depth_exceed<S: Into<Cow<'static, str>>>(s: S) -> Self {
        checked!(Error::DepthExceed(s.into()))
    }

    /// Converts a stream error, turning `UnexpectedEof` into
    /// [`Error::EndOfStream`] at the given offset.
    #[inline(never)]
    #[cold]
    pub fn from_io(err: io::Error, offset: u64, needed: usize) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Error::end_of_stream(offset, needed)
        } else {
            checked!(Error::Io(err))
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidArgument(_) | Error::IndexOutOfRange { .. } | Error::KeyNotFound(_) => {
                ErrorCategory::InvalidArgument
            }
            Error::InvalidState(_) => ErrorCategory::InvalidState,
            Error::EndOfStream(..)
            | Error::BadSignature(_)
            | Error::UnknownType(_)
            | Error::InvalidData(_)
            | Error::EncodingError(_)
            | Error::EncodeError(_)
            | Error::DepthExceed(_) => ErrorCategory::Format,
            Error::TypeMismatch { .. } => ErrorCategory::TypeMismatch,
            Error::UnsupportedType(_)
            | Error::UnsupportedVersion(_)
            | Error::VersionIncompatible { .. } => ErrorCategory::Version,
            Error::KeyConflict(_) => ErrorCategory::KeyConflict,
            Error::Io(_) => ErrorCategory::Io,
        }
    }

    /// True when the error points at the calling code rather than at the data.
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::InvalidArgument
                | ErrorCategory::InvalidState
                | ErrorCategory::TypeMismatch
                | ErrorCategory::KeyConflict
        )
    }

    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Error::EndOfStream(..))
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// ```
/// use leaf_core::ensure;
/// use leaf_core::error::Error;
///
/// fn check_len(n: i32) -> Result<(), Error> {
///     ensure!(n >= 0, Error::invalid_data(format!("negative length {}", n)));
///     Ok(())
/// }
/// assert!(check_len(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::invalid_data($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::invalid_data(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with an [`Error::InvalidData`].
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::invalid_data($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::invalid_data(format!($fmt, $($arg)*)))
    };
}
