// vkscript
//
// Copyright (C) 2018 Intel Corporation
// Copyright 2023 Neil Roberts
//
// Permission is hereby granted, free of charge, to any person obtaining a
// copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// on the rights to use, copy, modify, merge, publish, distribute, sub
// license, and/or sell copies of the Software, and to permit persons to whom
// the Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice (including the next
// paragraph) shall be included in all copies or substantial portions of the
// Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT.  IN NO EVENT SHALL
// VA LINUX SYSTEM, IBM AND/OR THEIR SUPPLIERS BE LIABLE FOR ANY CLAIM,
// DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR
// OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE
// USE OR OTHER DEALINGS IN THE SOFTWARE.

use log::LevelFilter;

/// Options that affect how a script is parsed and how much is
/// logged while doing it.
#[derive(Debug, Clone)]
pub struct Config {
    verbosity: LevelFilter,
    strict: bool,
}

impl Config {
    pub fn new() -> Config {
        Config {
            verbosity: LevelFilter::Warn,
            strict: true,
        }
    }

    /// Sets the maximum level of the messages that the
    /// [Logger](crate::logger::Logger) will write.
    pub fn set_verbosity(&mut self, verbosity: LevelFilter) {
        self.verbosity = verbosity;
    }

    /// Sets the verbosity from the number of times `-v` was passed on
    /// the command line. No flags only shows warnings and errors.
    pub fn set_verbosity_count(&mut self, count: u8) {
        self.verbosity = match count {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
    }

    /// Sets whether any text outside of a section is an error. If
    /// this is false then text before the first section header is
    /// ignored with a warning instead. Defaults to true.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    pub fn verbosity(&self) -> LevelFilter {
        self.verbosity
    }

    pub fn strict(&self) -> bool {
        self.strict
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_verbosity() {
        let mut config = Config::new();
        assert_eq!(config.verbosity(), LevelFilter::Warn);

        for (count, level) in [
            (0, LevelFilter::Warn),
            (1, LevelFilter::Info),
            (2, LevelFilter::Debug),
            (3, LevelFilter::Trace),
            (12, LevelFilter::Trace),
        ] {
            config.set_verbosity_count(count);
            assert_eq!(config.verbosity(), level);
        }

        config.set_verbosity(LevelFilter::Off);
        assert_eq!(config.verbosity(), LevelFilter::Off);
    }

    #[test]
    fn test_strict() {
        let mut config = Config::default();
        assert!(config.strict());
        config.set_strict(false);
        assert!(!config.strict());
    }
}
