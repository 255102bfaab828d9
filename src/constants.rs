// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Alphabet for random name suffixes (lowercase letters and digits)
pub const NAME_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Separator between the name prefix and the random suffix
pub const NAME_SEPARATOR: char = '-';

/// Namespace used when neither the object nor the config declares one
pub const DEFAULT_NAMESPACE: &str = "default";

/// Configuration file read when no path is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Template field substitutions
pub mod template {
    /// Field bound to the generated name on every iteration
    pub const RANDOM_NAME: &str = "RandomName";
    /// Opening delimiter of a template action
    pub const LEFT_DELIM: &str = "{{";
    /// Closing delimiter of a template action
    pub const RIGHT_DELIM: &str = "}}";
}
