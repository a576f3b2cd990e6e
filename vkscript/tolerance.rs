// vkscript
//
// Copyright (C) 2018, 2023 Neil Roberts
// Copyright (C) 2018 Intel Coporation
// Copyright (C) 2019 Google LLC
//
// Permission is hereby granted, free of charge, to any person obtaining a
// copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice (including the next
// paragraph) shall be included in all copies or substantial portions of the
// Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.  IN NO EVENT SHALL
// THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
// DEALINGS IN THE SOFTWARE.

use serde::Serialize;
use std::fmt;

/// One entry of a `tolerance` command. The value is either an
/// absolute difference or, if `is_percent` is set, a percentage of the
/// expected value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tolerance {
    value: f64,
    is_percent: bool,
}

impl Tolerance {
    pub fn new(value: f64, is_percent: bool) -> Tolerance {
        Tolerance { value, is_percent }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_percent(&self) -> bool {
        self.is_percent
    }

    /// Returns whether the observed value `a` is close enough to the
    /// expected value `b`.
    pub fn equal(&self, a: f64, b: f64) -> bool {
        if self.is_percent {
            (a - b).abs() <= (self.value / 100.0 * b).abs()
        } else {
            (a - b).abs() <= self.value
        }
    }
}

impl Default for Tolerance {
    fn default() -> Tolerance {
        Tolerance {
            value: 0.01,
            is_percent: false,
        }
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)?;

        if self.is_percent {
            write!(f, "%")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_percentage() {
        let tolerance = Tolerance::new(25.0, true);
        assert!(tolerance.equal(0.76, 1.0));
        assert!(!tolerance.equal(0.74, 1.0));

        let tolerance = Tolerance::new(50.0, true);
        assert!(tolerance.equal(41.0, 80.0));
        assert!(!tolerance.equal(39.0, 1.0));

        let tolerance = Tolerance::new(1.0, true);
        assert!(tolerance.equal(100.5, 100.0));
        assert!(!tolerance.equal(101.5, 100.0));
    }

    #[test]
    fn test_direct() {
        let tolerance = Tolerance::new(1.0, false);
        assert!(tolerance.equal(5.9, 5.0));
        assert!(!tolerance.equal(6.1, 5.0));

        let tolerance = Tolerance::new(4.0, false);
        assert!(tolerance.equal(186.1, 190.0));
        assert!(!tolerance.equal(185.9, 190.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Tolerance::new(0.5, true).to_string(), "0.5%");
        assert_eq!(Tolerance::new(2.0, false).to_string(), "2");
        assert_eq!(Tolerance::default().value(), 0.01);
        assert!(!Tolerance::default().is_percent());
    }
}
