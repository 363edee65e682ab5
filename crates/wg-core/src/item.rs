use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of an item. Two items are the same item iff their IDs match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// Create an item ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A narration or sound clip attached to an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioClip {
    /// Clip name, resolved by the audio backend.
    pub name: String,
    /// Playback length in seconds.
    pub duration: f32,
}

impl AudioClip {
    /// Create a clip with the given name and length in seconds.
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

/// An authored item record. Immutable once loaded into a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier of this item.
    pub id: ItemId,
    /// Whether the item is brought to the viewer and can be rotated.
    #[serde(default)]
    pub grabbable: bool,
    /// Whether finishing a view adds the item to the inventory.
    #[serde(default)]
    pub collectible: bool,
    /// Narration played while the item is viewed.
    #[serde(default)]
    pub audio: Option<AudioClip>,
    /// Caption shown while the item is viewed.
    #[serde(default)]
    pub text: String,
    /// Image shown while the item is viewed.
    #[serde(default)]
    pub image: Option<String>,
    /// Message shown in the inventory slot and info line once collected.
    #[serde(default)]
    pub collect_message: String,
    /// Icon shown in the inventory slot once collected.
    #[serde(default)]
    pub icon: Option<String>,
}

impl Item {
    /// Create a plain item with the given ID and every flag off.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(id),
            grabbable: false,
            collectible: false,
            audio: None,
            text: String::new(),
            image: None,
            collect_message: String::new(),
            icon: None,
        }
    }

    /// Mark the item as grabbable.
    pub fn grabbable(mut self) -> Self {
        self.grabbable = true;
        self
    }

    /// Mark the item as collectible.
    pub fn collectible(mut self) -> Self {
        self.collectible = true;
        self
    }

    /// Attach a narration clip.
    pub fn with_audio(mut self, clip: AudioClip) -> Self {
        self.audio = Some(clip);
        self
    }

    /// Set the caption text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the view image.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the collect message shown once the item is picked up.
    pub fn with_collect_message(mut self, message: impl Into<String>) -> Self {
        self.collect_message = message.into();
        self
    }

    /// Returns true if the item shows an image while viewed.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Length of the item's narration, if it has one.
    pub fn audio_duration(&self) -> Option<f32> {
        self.audio.as_ref().map(|clip| clip.duration)
    }
}
