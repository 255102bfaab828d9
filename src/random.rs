// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Random object names backed by the OS random source.

use crate::constants::{NAME_CHARSET, NAME_SEPARATOR};
use rand::rngs::OsRng;
use rand::Rng;

/// Generate a random string of `length` characters drawn from [`NAME_CHARSET`].
///
/// Panics if the OS random source is unavailable.
pub fn generate_random_string(length: usize) -> String {
    (0..length)
        .map(|_| NAME_CHARSET[OsRng.gen_range(0..NAME_CHARSET.len())] as char)
        .collect()
}

/// Generate `<prefix>-<suffix>` with a random suffix of `suffix_length` characters.
///
/// A zero length still keeps the separator, e.g. `"lt-"`.
pub fn generate_random_name(prefix: &str, suffix_length: usize) -> String {
    let mut name = String::from(prefix);
    name.push(NAME_SEPARATOR);
    name.push_str(&generate_random_string(suffix_length));
    name
}
