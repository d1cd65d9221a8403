//! Ambient rendering context
//!
//! A [`Context`] is what the host hands the dialog at construction: the
//! themed attribute colors currently in effect plus a shared [`Resources`]
//! accessor. Attribute resolution is total - every attribute has a
//! determinate default, so color lookup never fails.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::color::Color;
use crate::resource::{Drawable, DrawableId, Resources, StringId};

/// Themed attribute keys resolvable against a context
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorAttr {
    /// Primary body/text color of the host surface
    TextPrimary,
    /// Secondary/caption text color
    TextSecondary,
    /// Host window background
    Background,
    /// Host accent color
    Accent,
}

impl ColorAttr {
    /// Default value used when the host has not overridden the attribute
    fn default_color(self) -> Color {
        match self {
            // Defaults mirror a light ambient surface: dark text on white
            ColorAttr::TextPrimary => Color::from_hex(0x1D1D1F),
            ColorAttr::TextSecondary => Color::from_hex(0x86868B),
            ColorAttr::Background => Color::WHITE,
            ColorAttr::Accent => Color::from_hex(0x007AFF),
        }
    }
}

/// Host context: attribute colors plus the resource accessor
///
/// Cheap to clone; the resource accessor is shared behind `Rc` since all
/// dialog work happens on the UI thread.
#[derive(Clone)]
pub struct Context {
    colors: FxHashMap<ColorAttr, Color>,
    resources: Rc<dyn Resources>,
}

impl Context {
    /// Create a context backed by the given resource accessor
    pub fn new(resources: Rc<dyn Resources>) -> Self {
        Self {
            colors: FxHashMap::default(),
            resources,
        }
    }

    /// Override a themed attribute color
    pub fn with_color(mut self, attr: ColorAttr, color: Color) -> Self {
        self.colors.insert(attr, color);
        self
    }

    /// Resolve a themed attribute color; always yields a determinate value
    pub fn color(&self, attr: ColorAttr) -> Color {
        self.colors
            .get(&attr)
            .copied()
            .unwrap_or_else(|| attr.default_color())
    }

    /// Resolve a string resource
    pub fn string(&self, id: StringId) -> String {
        self.resources.string(id)
    }

    /// Resolve a drawable resource
    pub fn drawable(&self, id: DrawableId) -> Drawable {
        self.resources.drawable(id)
    }

    /// The resource accessor backing this context
    pub fn resources(&self) -> &Rc<dyn Resources> {
        &self.resources
    }
}
