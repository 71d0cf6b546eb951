//! Tag sets: ordered key/value attributes on entities.

/// A single key/value attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    /// Creates a tag from a key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An insertion-ordered tag set.
///
/// Key uniqueness within one entity is the caller's responsibility; nothing
/// here deduplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tags(Vec<Tag>);

impl Tags {
    /// Creates an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tag, preserving insertion order.
    pub fn push(&mut self, tag: Tag) {
        self.0.push(tag);
    }

    /// Returns the value for the first tag with the given key.
    pub fn find(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
    }

    /// Returns the number of tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set has no tags.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the tags in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }
}

impl From<Vec<Tag>> for Tags {
    fn from(tags: Vec<Tag>) -> Self {
        Self(tags)
    }
}

impl FromIterator<Tag> for Tags {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut tags = Tags::new();
        tags.push(Tag::new("highway", "residential"));
        tags.push(Tag::new("name", "Main Street"));
        tags.push(Tag::new("oneway", "yes"));

        let keys: Vec<_> = tags.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, ["highway", "name", "oneway"]);
    }

    #[test]
    fn test_find() {
        let tags: Tags = vec![
            Tag::new("amenity", "cafe"),
            Tag::new("name", "The Grind"),
        ]
        .into();

        assert_eq!(tags.find("amenity"), Some("cafe"));
        assert_eq!(tags.find("cuisine"), None);
    }

    #[test]
    fn test_duplicate_keys_not_deduplicated() {
        let mut tags = Tags::new();
        tags.push(Tag::new("ref", "A1"));
        tags.push(Tag::new("ref", "A2"));

        assert_eq!(tags.len(), 2);
        // find returns the first occurrence
        assert_eq!(tags.find("ref"), Some("A1"));
    }
}
