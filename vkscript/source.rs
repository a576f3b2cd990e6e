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

use std::str::FromStr;

/// Where the text of a [Source] comes from. This can either be a
/// filename to open and read or directly a string containing the
/// script.
#[derive(Clone, Debug)]
pub enum Data {
    File { filename: String },
    String { source: String },
}

/// A token replacement that should be used for the source. The reader
/// should replace any occurences of `token` in the source with the
/// string in `replacement`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenReplacement {
    pub token: String,
    pub replacement: String,
}

impl FromStr for TokenReplacement {
    type Err = String;

    /// Parses a replacement written as `TOKEN=REPLACEMENT`, the form
    /// used by the `-D` command line option.
    fn from_str(s: &str) -> Result<TokenReplacement, String> {
        match s.split_once('=') {
            Some((token, replacement)) if !token.is_empty() => {
                Ok(TokenReplacement {
                    token: token.to_owned(),
                    replacement: replacement.to_owned(),
                })
            },
            _ => Err(format!("invalid token replacement: {}", s)),
        }
    }
}

/// A source for a script. The [Source] struct just contains the
/// details of where the data is stored. To read the actual lines,
/// construct a [Stream](crate::stream::Stream) using the Source.
#[derive(Clone, Debug)]
pub struct Source {
    token_replacements: Vec<TokenReplacement>,
    data: Data,
}

type TokenReplacementIter<'a> = std::slice::Iter<'a, TokenReplacement>;

impl Source {
    fn from_data(data: Data) -> Source {
        Source {
            token_replacements: Vec::new(),
            data,
        }
    }

    /// Creates a source that will read lines from the given string.
    pub fn from_string(source: String) -> Source {
        Self::from_data(Data::String { source })
    }

    /// Creates a source that will read lines from the given file.
    pub fn from_file(filename: String) -> Source {
        Self::from_data(Data::File { filename })
    }

    /// Adds a token replacement to the source. When lines are read
    /// from the source, any mentions of the token will be replaced
    /// with the replacement. The replacement can also contain tokens
    /// which will be replaced as well. This can cause the line
    /// reading to fail and return an error if it causes an infinite
    /// loop.
    pub fn add_token_replacement(
        &mut self,
        token: String,
        replacement: String,
    ) {
        self.token_replacements.push(TokenReplacement { token, replacement });
    }

    /// Builder-style version of
    /// [add_token_replacement](Source::add_token_replacement) that
    /// takes a list of replacements.
    pub fn with_token_replacements<I>(mut self, replacements: I) -> Source
    where
        I: IntoIterator<Item = TokenReplacement>
    {
        self.token_replacements.extend(replacements);
        self
    }

    pub fn token_replacements(&self) -> TokenReplacementIter {
        self.token_replacements.iter()
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Returns a filename that can be used to display to the user. If
    /// the source was constructed from a filename it will just return
    /// that, otherwise it will return `"(string source)"`.
    pub fn filename(&self) -> &str {
        match &self.data {
            Data::File { filename } => filename,
            Data::String { .. } => "(string source)",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_constructors() {
        let source = Source::from_string("[test]\nclear".to_owned());
        assert!(matches!(
            source.data(),
            Data::String { source } if source == "[test]\nclear"
        ));
        assert_eq!(source.filename(), "(string source)");

        let source = Source::from_file("draw.vkscript".to_owned());
        assert!(matches!(
            source.data(),
            Data::File { filename } if filename == "draw.vkscript"
        ));
        assert_eq!(source.filename(), "draw.vkscript");
    }

    #[test]
    fn test_token_replacements() {
        let mut source = Source::from_string("test".to_string());
        assert_eq!(source.token_replacements().count(), 0);

        source.add_token_replacement("COLOUR".to_string(), "0xf00".to_string());

        let source = source.with_token_replacements([
            "X=12".parse::<TokenReplacement>().unwrap(),
        ]);

        let replacements = source.token_replacements().collect::<Vec<_>>();
        assert_eq!(replacements.len(), 2);
        assert_eq!(replacements[0].token, "COLOUR");
        assert_eq!(replacements[0].replacement, "0xf00");
        assert_eq!(replacements[1].token, "X");
        assert_eq!(replacements[1].replacement, "12");
    }

    #[test]
    fn test_parse_token_replacement() {
        assert_eq!(
            "SIZE=1 2 = 3".parse::<TokenReplacement>(),
            Ok(TokenReplacement {
                token: "SIZE".to_owned(),
                replacement: "1 2 = 3".to_owned(),
            }),
        );
        assert_eq!(
            "EMPTY=".parse::<TokenReplacement>().unwrap().replacement,
            "",
        );
        assert!("=value".parse::<TokenReplacement>().is_err());
        assert!("novalue".parse::<TokenReplacement>().is_err());
    }
}
