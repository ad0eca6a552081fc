// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! A [`LinePacker`] that several threads can pack into.
//!
//! A packing step reads the gap list, picks a gap and then rewrites the
//! list. Both halves run under one lock so concurrent requests are applied
//! one after the other.

use crate::{err::PackError, packer::LinePacker, placement::Placement};
use line_pack_core::line::{LineLength, LinePosition};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SharedLinePacker {
    inner: Arc<Mutex<LinePacker>>,
}

impl SharedLinePacker {
    #[inline]
    pub fn new(packer: LinePacker) -> Self {
        Self {
            inner: Arc::new(Mutex::new(packer)),
        }
    }

    #[inline]
    pub fn canfit(&self, width: LineLength) -> bool {
        self.inner.lock().canfit(width)
    }

    #[inline]
    pub fn pack(&self, width: LineLength, near: LinePosition) -> Result<Placement, PackError> {
        self.inner.lock().pack(width, near)
    }

    #[inline]
    pub fn pack_from_origin(&self, width: LineLength) -> Result<Placement, PackError> {
        self.inner.lock().pack_from_origin(width)
    }

    #[inline]
    pub fn free_space(&self) -> LineLength {
        self.inner.lock().free_space()
    }

    /// Runs `f` against the packer while holding the lock.
    #[inline]
    pub fn with<R>(&self, f: impl FnOnce(&LinePacker) -> R) -> R {
        f(&self.inner.lock())
    }

    /// A copy of the current state.
    #[inline]
    pub fn snapshot(&self) -> LinePacker {
        self.inner.lock().clone()
    }
}

impl From<LinePacker> for SharedLinePacker {
    fn from(packer: LinePacker) -> Self {
        Self::new(packer)
    }
}
