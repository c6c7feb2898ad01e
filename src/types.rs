//! Core identifiers and value types shared across the plan tree.

use serde::{Deserialize, Serialize};

/// SHA-1 digest bytes
pub type Sha1Digest = [u8; 20];

/// SHA-256 digest bytes
pub type Sha256Digest = [u8; 32];

/// Index of a node inside a tree arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a planned node is a directory or a regular file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    #[default]
    File,
}

/// Unix permission bits (rwx triplets plus setuid, setgid and sticky)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permission(u32);

impl Permission {
    const MASK: u32 = 0o7777;

    /// The permissive mode applied at creation time
    pub const ALL: Permission = Permission(0o777);

    /// Read-only for everybody
    pub const READ_ONLY: Permission = Permission(0o444);

    pub const fn from_mode(mode: u32) -> Self {
        Self(mode & Self::MASK)
    }

    pub const fn mode(&self) -> u32 {
        self.0
    }

    /// Parse an octal mode string such as "0444", "755" or "0o640"
    pub fn parse_octal(s: &str) -> Option<Self> {
        let digits = s.trim();
        let digits = digits.strip_prefix("0o").unwrap_or(digits);
        if digits.is_empty() {
            return None;
        }
        let mode = u32::from_str_radix(digits, 8).ok()?;
        if mode > Self::MASK {
            return None;
        }
        Some(Self(mode))
    }
}

impl Default for Permission {
    fn default() -> Self {
        Permission::ALL
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(10);
        out.push('-');
        for shift in [6u32, 3, 0] {
            let bits = (self.0 >> shift) & 0o7;
            out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
            out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
            out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
        }
        f.write_str(&out)
    }
}
