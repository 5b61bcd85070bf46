//! Votable records as the remote collection serves them.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier assigned by the remote store.
///
/// Servers encode ids either as JSON strings or integers; both decode into
/// the same textual form so `"2"` and `2` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
        })
    }
}

/// One votable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    /// Location of a displayable image. May not resolve; that is the
    /// renderer's problem.
    pub image: String,
    #[serde(default)]
    pub votes: u32,
}

/// Field of a [`Draft`] that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Image,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Image => "image",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name + image pair waiting for the server to assign an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    name: String,
    image: String,
}

impl Draft {
    /// Trim both fields and reject empty ones. `name` is checked first.
    pub fn parse(name: &str, image: &str) -> Result<Self, DraftField> {
        let name = name.trim();
        let image = image.trim();

        if name.is_empty() {
            return Err(DraftField::Name);
        }
        if image.is_empty() {
            return Err(DraftField::Image);
        }

        Ok(Self {
            name: name.to_string(),
            image: image.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Request body for `POST`. Votes always start at zero.
    pub fn payload(&self) -> DraftPayload<'_> {
        DraftPayload {
            name: &self.name,
            image: &self.image,
            votes: 0,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DraftPayload<'a> {
    pub name: &'a str,
    pub image: &'a str,
    pub votes: u32,
}
