//! Style fragments: small ordered maps of CSS declarations, optionally nested
//! under breakpoint tokens or the hover selector, that can be layered with a
//! shallow later-wins merge and rendered to a CSS rule block.

use core::fmt::Write as _;

use crate::presets::Breakpoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKey {
    Property(&'static str),
    Breakpoint(Breakpoint),
    Hover,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleValue {
    Value(String),
    /// No override: the declaration is omitted and the value from an earlier
    /// layer (or the cascade) stays in effect.
    Unset,
    Nested(StyleFragment),
}

/// An ordered, immutable-by-convention set of style entries.
///
/// Keys are unique. Setting an existing key replaces its value but keeps the
/// key's original position, which mirrors how object spreading orders keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleFragment {
    entries: Vec<(StyleKey, StyleValue)>,
}

impl StyleFragment {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn prop(self, name: &'static str, value: impl Into<String>) -> Self {
        self.with(StyleKey::Property(name), StyleValue::Value(value.into()))
    }

    #[must_use]
    pub fn unset(self, name: &'static str) -> Self {
        self.with(StyleKey::Property(name), StyleValue::Unset)
    }

    /// Sets `name` to `value` when present and to [`StyleValue::Unset`] otherwise.
    #[must_use]
    pub fn prop_or_unset(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.prop(name, value),
            None => self.unset(name),
        }
    }

    #[must_use]
    pub fn at(self, breakpoint: Breakpoint, fragment: Self) -> Self {
        self.with(StyleKey::Breakpoint(breakpoint), StyleValue::Nested(fragment))
    }

    #[must_use]
    pub fn hover(self, fragment: Self) -> Self {
        self.with(StyleKey::Hover, StyleValue::Nested(fragment))
    }

    #[must_use]
    pub fn with(mut self, key: StyleKey, value: StyleValue) -> Self {
        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(pos) => self.entries[pos].1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Shallow-merges `layers` in order; later layers win.
    ///
    /// Nested fragments are replaced wholesale, never merged recursively. An
    /// [`StyleValue::Unset`] entry does not displace a value set by an earlier
    /// layer; it is only recorded when the key is new.
    #[must_use]
    pub fn merge<'a>(layers: impl IntoIterator<Item = &'a Self>) -> Self {
        let mut merged = Self::new();
        for layer in layers {
            for (key, value) in &layer.entries {
                match merged.entries.iter().position(|(k, _)| k == key) {
                    Some(_) if *value == StyleValue::Unset => {}
                    Some(pos) => merged.entries[pos].1 = value.clone(),
                    None => merged.entries.push((*key, value.clone())),
                }
            }
        }
        merged
    }

    /// `self` with `overrides` layered on top.
    #[must_use]
    pub fn layered(&self, overrides: &Self) -> Self {
        Self::merge([self, overrides])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(StyleKey, StyleValue)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn get(&self, key: StyleKey) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (*k == key).then_some(v))
    }

    /// The literal value of top-level property `name`, if one is set.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.entries.iter().find_map(|(k, v)| match (k, v) {
            (StyleKey::Property(prop), StyleValue::Value(value)) if *prop == name => {
                Some(value.as_str())
            }
            _ => None,
        })
    }

    #[must_use]
    pub fn nested(&self, breakpoint: Breakpoint) -> Option<&Self> {
        match self.get(StyleKey::Breakpoint(breakpoint)) {
            Some(StyleValue::Nested(fragment)) => Some(fragment),
            _ => None,
        }
    }

    #[must_use]
    pub fn hover_fragment(&self) -> Option<&Self> {
        match self.get(StyleKey::Hover) {
            Some(StyleValue::Nested(fragment)) => Some(fragment),
            _ => None,
        }
    }

    /// The value of `name` a browser would apply at `viewport_width`.
    ///
    /// Starts from the top-level declaration, then applies each matching
    /// breakpoint block in declaration order. Unset entries are skipped.
    #[must_use]
    pub fn cascaded(&self, name: &str, viewport_width: u16) -> Option<&str> {
        let mut value = self.get_value(name);
        for (key, entry) in &self.entries {
            if let (StyleKey::Breakpoint(bp), StyleValue::Nested(fragment)) = (key, entry) {
                if bp.matches(viewport_width) {
                    if let Some(v) = fragment.cascaded(name, viewport_width) {
                        value = Some(v);
                    }
                }
            }
        }
        value
    }

    /// Renders this fragment as CSS rules scoped to `selector`.
    #[must_use]
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::new();
        self.write_rules(selector, &mut out);
        out
    }

    fn write_rules(&self, selector: &str, out: &mut String) {
        let declarations: Vec<String> = self
            .entries
            .iter()
            .filter_map(|(key, value)| match (key, value) {
                (StyleKey::Property(name), StyleValue::Value(value)) => {
                    Some(format!("{name}:{value}"))
                }
                _ => None,
            })
            .collect();
        if !declarations.is_empty() {
            let _ = writeln!(out, "{selector}{{{}}}", declarations.join(";"));
        }

        for (key, value) in &self.entries {
            let StyleValue::Nested(fragment) = value else {
                continue;
            };
            match key {
                StyleKey::Hover => fragment.write_rules(&format!("{selector}:hover"), out),
                StyleKey::Breakpoint(bp) => {
                    let mut inner = String::new();
                    fragment.write_rules(selector, &mut inner);
                    if !inner.is_empty() {
                        let _ = write!(out, "{}{{\n{inner}}}\n", bp.media_query());
                    }
                }
                StyleKey::Property(_) => {}
            }
        }
    }
}
