use serde::{Deserialize, Serialize};

/// Width of the name field in a categorized database record
pub const RECORD_NAME_LEN: usize = 16;

/// Null-terminated UTF-8 string as carried in lingo payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Text(Vec<u8>);

impl Text {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(nul_terminated(text.as_ref()))
    }

    /// An empty string, i.e. a lone terminator
    pub fn empty() -> Self {
        Self(vec![0])
    }

    /// Wire bytes including the terminator
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(trim_nul(&self.0)).into_owned()
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.to_string_lossy()
    }
}

impl std::fmt::Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

/// Fixed-width, zero padded record name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RecordName([u8; RECORD_NAME_LEN]);

impl RecordName {
    pub const EMPTY: Self = Self([0; RECORD_NAME_LEN]);

    /// Encodes `name` with its terminator, truncating to the field width.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(fixed_width(&nul_terminated(name.as_ref())))
    }

    pub fn as_bytes(&self) -> &[u8; RECORD_NAME_LEN] {
        &self.0
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(trim_nul(&self.0)).into_owned()
    }
}

impl Default for RecordName {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<String> for RecordName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<RecordName> for String {
    fn from(name: RecordName) -> Self {
        name.to_string_lossy()
    }
}

/// Appends the terminating zero byte.
pub fn nul_terminated(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len() + 1);
    bytes.extend_from_slice(text.as_bytes());
    bytes.push(0);
    bytes
}

/// Copies `bytes` into a zeroed array of width `N`. Longer input is cut off.
pub fn fixed_width<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    let len = bytes.len().min(N);
    out[..len].copy_from_slice(&bytes[..len]);
    out
}

fn trim_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}
