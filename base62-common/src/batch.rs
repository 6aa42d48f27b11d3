use rand::Rng;
use serde::Serialize;

use crate::{
    config::Limits,
    copy::{copy_all_text, copy_text, Quoting},
    error::Error,
    generator::{generate_with, with_rng},
};

/// Parameters of a single generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    length: usize,
    prefix: String,
    count: usize,
}

impl GenerationRequest {
    /// Build a request, rejecting a zero length or count.
    pub fn new(length: usize, prefix: impl Into<String>, count: usize) -> Result<Self, Error> {
        if length == 0 {
            return Err(Error::InvalidArgument("length must be at least 1".to_owned()));
        }
        if count == 0 {
            return Err(Error::InvalidArgument("count must be at least 1".to_owned()));
        }

        Ok(GenerationRequest {
            length,
            prefix: prefix.into(),
            count,
        })
    }

    /// Build a request from raw form input.
    ///
    /// Numbers are read the way a browser `parseInt` reads them; anything
    /// unparsable or below 1 becomes 1, anything above the limits is capped.
    /// The flag tells whether a value was capped.
    pub fn clamped(
        length: Option<&str>,
        prefix: impl Into<String>,
        count: Option<&str>,
        limits: &Limits,
    ) -> (Self, bool) {
        let (length, length_capped) = clamp_input(length, limits.max_length());
        let (count, count_capped) = clamp_input(count, limits.max_count());

        let request = GenerationRequest {
            length,
            prefix: prefix.into(),
            count,
        };
        (request, length_capped || count_capped)
    }

    /// Reject requests exceeding `limits` instead of capping them.
    pub fn check_limits(&self, limits: &Limits) -> Result<(), Error> {
        if self.length > limits.max_length() {
            return Err(Error::InvalidArgument(format!(
                "length must be at most {}",
                limits.max_length()
            )));
        }
        if self.count > limits.max_count() {
            return Err(Error::InvalidArgument(format!(
                "count must be at most {}",
                limits.max_count()
            )));
        }
        if self.prefix.len() > limits.max_prefix_length() {
            return Err(Error::InvalidArgument(format!(
                "prefix must be at most {} bytes",
                limits.max_prefix_length()
            )));
        }

        Ok(())
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

fn clamp_input(raw: Option<&str>, max: usize) -> (usize, bool) {
    let value = raw.and_then(parse_leading_int).unwrap_or(1).max(1);
    let value = usize::try_from(value).unwrap_or(usize::MAX);
    (value.min(max), value > max)
}

/// Parse an optional sign followed by the leading digits, ignoring the rest.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // saturate, oversized input gets capped by the limits anyway
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// The values produced by one request, in generation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GeneratedValues(Vec<String>);

impl GeneratedValues {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Clipboard text for the value at `index`
    pub fn copy_text(&self, index: usize, quoting: Quoting) -> Option<String> {
        self.0.get(index).map(|value| copy_text(value, quoting))
    }

    /// Clipboard text for the whole batch
    pub fn copy_all_text(&self, quoting: Quoting) -> String {
        copy_all_text(&self.0, quoting)
    }
}

impl IntoIterator for GeneratedValues {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a GeneratedValues {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Generate `count` prefixed values of `length` random characters each
pub fn generate_batch(request: &GenerationRequest) -> GeneratedValues {
    with_rng(|rng| generate_batch_with(rng, request))
}

pub fn generate_batch_with<R: Rng + ?Sized>(
    rng: &mut R,
    request: &GenerationRequest,
) -> GeneratedValues {
    let values = (0..request.count)
        .map(|_| {
            let capacity = request.prefix.len().saturating_add(request.length);
            let mut value = String::with_capacity(capacity);
            value.push_str(&request.prefix);
            value.push_str(&generate_with(&mut *rng, request.length));
            value
        })
        .collect();

    GeneratedValues(values)
}
