//! Plain descriptions of a single element.

use crate::{MountError, Result};

/// The reserved attribute name that carries the text payload.
///
/// An attribute with this name is never written to the host node, even if it was inserted into
/// [`ElementDescriptor::attributes`].
pub const CHILDREN: &str = "children";

/// A description of one element: what kind of node to create, which attributes to set on it, and the text it
/// contains.
///
/// Descriptors are plain data. Mounting one does not consume or modify it, so the same descriptor can be mounted any
/// number of times.
///
/// ```rust
/// use domount_core::ElementDescriptor;
///
/// let link = ElementDescriptor::new("a")
///     .attr("href", "https://google.com")
///     .attr("target", "_blank")
///     .with_children("Click and render Google");
///
/// assert_eq!(link.attributes.get("target"), Some("_blank"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementDescriptor {
    /// The [tag](https://developer.mozilla.org/en-US/docs/Web/API/Element/tagName) of the element
    #[cfg_attr(feature = "serialize", serde(rename = "type"))]
    pub kind: String,

    /// The attributes copied onto the element
    #[cfg_attr(feature = "serialize", serde(rename = "props", default))]
    pub attributes: Attributes,

    /// The text content of the element
    #[cfg_attr(feature = "serialize", serde(default))]
    pub children: String,
}

impl ElementDescriptor {
    /// Create a descriptor for an element of the given kind with no attributes and no text.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Attributes::default(),
            children: String::new(),
        }
    }

    /// Add an attribute, replacing any earlier value stored under the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Set the text payload.
    pub fn with_children(mut self, children: impl Into<String>) -> Self {
        self.children = children.into();
        self
    }

    /// Check that this descriptor names something a host document can create.
    ///
    /// The reserved [`CHILDREN`] attribute is not validated since it is never written.
    pub fn validate(&self) -> Result<()> {
        if self.kind.is_empty() {
            return Err(MountError::InvalidDescriptor(
                "element kind is empty".to_string(),
            ));
        }

        if !is_valid_tag(&self.kind) {
            return Err(MountError::InvalidDescriptor(format!(
                "`{}` is not a valid element name",
                self.kind
            )));
        }

        if let Some((name, _)) = self
            .attributes
            .iter()
            .find(|(name, _)| *name != CHILDREN && !is_valid_attribute_name(name))
        {
            return Err(MountError::InvalidDescriptor(format!(
                "`{name}` is not a valid attribute name"
            )));
        }

        Ok(())
    }
}

/// Build a descriptor from its three parts, in the order an element factory takes them.
///
/// ```rust
/// use domount_core::create_element;
///
/// let link = create_element(
///     "a",
///     [("href", "https://google.com"), ("target", "_blank")],
///     "Google: Click Here",
/// );
/// assert_eq!(link.kind, "a");
/// assert_eq!(link.attributes.len(), 2);
/// ```
pub fn create_element<K, V>(
    kind: impl Into<String>,
    props: impl IntoIterator<Item = (K, V)>,
    children: impl Into<String>,
) -> ElementDescriptor
where
    K: Into<String>,
    V: Into<String>,
{
    ElementDescriptor {
        kind: kind.into(),
        attributes: props.into_iter().collect(),
        children: children.into(),
    }
}

fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty()
        && !tag
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '<' | '>' | '/'))
}

fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=')
        })
}

/// An ordered set of attribute name/value pairs with unique names.
///
/// Iteration follows insertion order. Inserting a name that is already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(existing, _)| existing == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        attributes.extend(iter);
        attributes
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

#[cfg(feature = "serialize")]
mod serialize {
    use super::{Attributes, CHILDREN};
    use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
    use serde::ser::{SerializeMap, Serializer};
    use std::fmt;

    impl serde::Serialize for Attributes {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (name, value) in self.iter() {
                map.serialize_entry(name, value)?;
            }
            map.end()
        }
    }

    impl<'de> serde::Deserialize<'de> for Attributes {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(AttributesVisitor)
        }
    }

    struct AttributesVisitor;

    impl<'de> Visitor<'de> for AttributesVisitor {
        type Value = Attributes;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of attribute names to values")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Attributes, A::Error> {
            let mut attributes = Attributes::new();
            while let Some(name) = map.next_key::<String>()? {
                // The payload key may hold any shape of value and is never written as an attribute.
                if name == CHILDREN {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
                let value = map.next_value::<AttributeValue>()?;
                attributes.insert(name, value.0);
            }
            Ok(attributes)
        }
    }

    /// Attribute values arrive as strings, numbers, booleans or null and are stored in their string form.
    struct AttributeValue(String);

    impl<'de> serde::Deserialize<'de> for AttributeValue {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(AttributeValueVisitor)
        }
    }

    struct AttributeValueVisitor;

    impl Visitor<'_> for AttributeValueVisitor {
        type Value = AttributeValue;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string, number, boolean or null attribute value")
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<AttributeValue, E> {
            Ok(AttributeValue(v.to_string()))
        }

        fn visit_string<E: serde::de::Error>(self, v: String) -> Result<AttributeValue, E> {
            Ok(AttributeValue(v))
        }

        fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<AttributeValue, E> {
            Ok(AttributeValue(v.to_string()))
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<AttributeValue, E> {
            Ok(AttributeValue(v.to_string()))
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<AttributeValue, E> {
            Ok(AttributeValue(v.to_string()))
        }

        fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<AttributeValue, E> {
            Ok(AttributeValue(v.to_string()))
        }

        // `setAttribute(name, null)` stores the string "null"
        fn visit_unit<E: serde::de::Error>(self) -> Result<AttributeValue, E> {
            Ok(AttributeValue("null".to_string()))
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<AttributeValue, E> {
            self.visit_unit()
        }
    }
}
