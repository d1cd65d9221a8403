//! Resource identifiers and the accessor boundary
//!
//! Hosts hand the dialog integer-like resource ids; the [`Resources`]
//! accessor turns them into strings and drawables. [`ResourceTable`] is the
//! map-backed implementation used by examples and tests; an embedding can
//! substitute its own accessor (localized string packs, icon registries)
//! by implementing the trait.

use rustc_hash::FxHashMap;

use crate::error::DialogError;

/// Identifier for a string resource
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StringId(pub u32);

/// Identifier for a drawable resource
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawableId(pub u32);

/// Identifier for a visual style
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyleId(pub u32);

/// A drawable handle: SVG inner elements, the toolkit's icon currency
///
/// Rendering is out of scope at this layer; the dialog only stores and
/// forwards the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Drawable {
    source: String,
}

impl Drawable {
    /// Wrap SVG source as a drawable
    pub fn from_svg(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The SVG source for this drawable
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Accessor for host-provided resources
///
/// Lookup of a registered id always succeeds; passing an unregistered id is
/// a programmer error and implementations are expected to treat it as such.
pub trait Resources {
    /// Resolve a string resource
    fn string(&self, id: StringId) -> String;

    /// Resolve a drawable resource
    fn drawable(&self, id: DrawableId) -> Drawable;

    /// Standard affirmative action label. Override to localize.
    fn ok_label(&self) -> String {
        "OK".to_string()
    }

    /// Standard dismissive action label. Override to localize.
    fn cancel_label(&self) -> String {
        "Cancel".to_string()
    }
}

/// Map-backed [`Resources`] implementation
#[derive(Default)]
pub struct ResourceTable {
    strings: FxHashMap<StringId, String>,
    drawables: FxHashMap<DrawableId, Drawable>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a string resource
    pub fn with_string(mut self, id: StringId, value: impl Into<String>) -> Self {
        self.strings.insert(id, value.into());
        self
    }

    /// Register a drawable resource
    pub fn with_drawable(mut self, id: DrawableId, drawable: Drawable) -> Self {
        self.drawables.insert(id, drawable);
        self
    }
}

impl Resources for ResourceTable {
    fn string(&self, id: StringId) -> String {
        match self.strings.get(&id) {
            Some(value) => value.clone(),
            None => panic!("{}", DialogError::UnknownResource(id.0)),
        }
    }

    fn drawable(&self, id: DrawableId) -> Drawable {
        match self.drawables.get(&id) {
            Some(drawable) => drawable.clone(),
            None => panic!("{}", DialogError::UnknownResource(id.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        let table = ResourceTable::new()
            .with_string(StringId(1), "Hello")
            .with_drawable(DrawableId(2), Drawable::from_svg("<circle r=\"4\"/>"));

        assert_eq!(table.string(StringId(1)), "Hello");
        assert_eq!(table.drawable(DrawableId(2)).source(), "<circle r=\"4\"/>");
    }

    #[test]
    fn test_standard_labels() {
        let table = ResourceTable::new();
        assert_eq!(table.ok_label(), "OK");
        assert_eq!(table.cancel_label(), "Cancel");
    }

    #[test]
    #[should_panic(expected = "Unknown resource id")]
    fn test_unknown_string_panics() {
        ResourceTable::new().string(StringId(99));
    }
}
