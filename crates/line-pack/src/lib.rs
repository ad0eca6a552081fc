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

//! # Line Packer (`line-pack`)
//!
//! Places segments of requested widths onto a line of fixed length without
//! overlap, each as close as possible to a caller-chosen target point.
//!
//! - [`packer::LinePacker`] owns the free gaps and the placed segments.
//! - [`placement`] decides where a segment goes without touching any state.
//! - [`shared::SharedLinePacker`] serializes packing from several threads.
//! - [`err`] holds the error types; every failed request leaves the packer
//!   unchanged.

pub mod config;
pub mod err;
pub mod packer;
pub mod placement;
pub mod shared;

pub mod prelude {
    pub use crate::config::{NearPolicy, PackerConfig};
    pub use crate::err::{
        InvalidLengthError, InvalidWidthError, NearOutOfRangeError, PackError, UnpackableError,
        WidthBelowResolutionError,
    };
    pub use crate::packer::LinePacker;
    pub use crate::placement::Placement;
    pub use crate::shared::SharedLinePacker;
    pub use line_pack_core::line::{LineInterval, LineLength, LinePosition};
}
