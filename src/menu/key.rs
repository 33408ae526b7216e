use std::fmt;

/// Opaque identifier of a node, unique within one tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(String);

impl NodeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Hands out node keys from a monotonic counter.
///
/// Two nodes created back to back always get distinct keys, no matter how
/// fast the user is. The generator travels with the editor state, so a
/// cloned state continues the same sequence independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyGenerator {
    next: u64,
}

impl KeyGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next key and advance the counter.
    pub fn next_key(&mut self) -> NodeKey {
        let key = NodeKey(format!("node-{}", self.next));
        self.next += 1;
        key
    }

    /// Number of keys handed out so far.
    pub fn issued(&self) -> u64 {
        self.next
    }
}
