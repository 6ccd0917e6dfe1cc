/// URL percent-encoding utilities
use std::borrow::Cow;

use crate::config::SpaceEncoding;
use crate::error::EncodingResult;

/// One `key[=value]` segment of a query string
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryPair<'a> {
    pub key: &'a str,
    /// `None` when the segment has no `=`
    pub value: Option<&'a str>,
}

/// A URL split into its literal prefix and parsed query pairs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryString<'a> {
    /// Everything up to and including the first `?`; empty when there is none
    pub prefix: &'a str,
    pub pairs: Vec<QueryPair<'a>>,
}

impl<'a> QueryString<'a> {
    /// Split at the first `?`. Without one, the whole input is treated as
    /// the query. Empty segments between `&` are dropped and each pair is
    /// split at its first `=`.
    pub fn parse(url: &'a str) -> Self {
        let (prefix, query) = match url.find('?') {
            Some(i) => url.split_at(i + 1),
            None => ("", url),
        };

        let pairs = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((key, value)) => QueryPair {
                    key,
                    value: Some(value),
                },
                None => QueryPair {
                    key: segment,
                    value: None,
                },
            })
            .collect();

        Self { prefix, pairs }
    }

    /// Reassemble as `prefix k1=v1&k2=v2`, encoding every key and every
    /// present value. The prefix is copied verbatim.
    pub fn encode(&self, spaces: SpaceEncoding) -> String {
        let mut out = String::from(self.prefix);
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(&encode_component(pair.key, spaces));
            if let Some(value) = pair.value {
                out.push('=');
                out.push_str(&encode_component(value, spaces));
            }
        }
        out
    }
}

/// Encode the query part of `url`, leaving the path before `?` untouched
pub fn encode_query(url: &str, spaces: SpaceEncoding) -> String {
    if url.is_empty() {
        return String::new();
    }
    QueryString::parse(url).encode(spaces)
}

/// Percent-encode `value` as a single opaque component. Only ASCII
/// alphanumerics and `-_.~` are left as-is.
pub fn encode_component(value: &str, spaces: SpaceEncoding) -> String {
    let encoded = urlencoding::encode(value);
    match spaces {
        SpaceEncoding::Percent => encoded.into_owned(),
        SpaceEncoding::Plus => encoded.replace("%20", "+"),
    }
}

/// Percent-decode `value`. Fails with `EncodingError::Charset` when the
/// decoded bytes are not UTF-8.
pub fn decode_component(value: &str, plus_as_space: bool) -> EncodingResult<String> {
    let value: Cow<'_, str> = if plus_as_space && value.contains('+') {
        Cow::Owned(value.replace('+', " "))
    } else {
        Cow::Borrowed(value)
    };
    let decoded = urlencoding::decode(&value)?;
    Ok(decoded.into_owned())
}
