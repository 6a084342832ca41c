use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Segment separator in the textual form of a path
pub const PATH_SEPARATOR: char = '/';

/// Location of a node inside a category, as the ordered list of node names
/// from the category's top level down.
///
/// Item paths end with the node's own name; parent paths end with the
/// container the node lives in. The empty path is the category top level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemPath(Vec<String>);

impl ItemPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last segment, the addressed node's name
    pub fn leaf(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Path of the containing node
    pub fn parent(&self) -> ItemPath {
        match self.0.split_last() {
            Some((_, rest)) => Self(rest.to_vec()),
            None => Self::root(),
        }
    }

    pub fn child(&self, name: impl Into<String>) -> ItemPath {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    pub fn starts_with(&self, prefix: &ItemPath) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl FromStr for ItemPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            s.split(PATH_SEPARATOR)
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        ))
    }
}

impl fmt::Display for ItemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(&PATH_SEPARATOR.to_string()))
    }
}

impl From<Vec<String>> for ItemPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl From<&[&str]> for ItemPath {
    fn from(segments: &[&str]) -> Self {
        Self::new(segments.iter().copied())
    }
}
