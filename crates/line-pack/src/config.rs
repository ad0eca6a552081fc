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

use std::fmt::Display;

/// How a target point outside `[0, length]` is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NearPolicy {
    #[default]
    Reject,
    /// Move the target onto the nearest end of the line.
    Clamp,
    /// Use the target as given; placement then hugs the gap end closest to it.
    Accept,
}

impl Display for NearPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NearPolicy::Reject => write!(f, "Reject"),
            NearPolicy::Clamp => write!(f, "Clamp"),
            NearPolicy::Accept => write!(f, "Accept"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackerConfig {
    pub near: NearPolicy,
}

impl PackerConfig {
    #[inline]
    pub fn new(near: NearPolicy) -> Self {
        Self { near }
    }

    #[inline]
    pub fn with_near(mut self, policy: NearPolicy) -> Self {
        self.near = policy;
        self
    }
}

impl Display for PackerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PackerConfig(near: {})", self.near)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rejects_out_of_range_targets() {
        assert_eq!(PackerConfig::default().near, NearPolicy::Reject);
    }

    #[test]
    fn test_with_near() {
        let cfg = PackerConfig::default().with_near(NearPolicy::Clamp);
        assert_eq!(cfg, PackerConfig::new(NearPolicy::Clamp));
        assert_eq!(cfg.to_string(), "PackerConfig(near: Clamp)");
    }
}
