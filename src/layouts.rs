use crate::error::{BjResult, BlazeJumpError};
use crate::geometry::KeyboardLayout;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Qwerty,
    Colemak,
    ColemakDH,
    Dvorak,
    Workman,
    Qwertz,
    Azerty,
    Jcuken,
}

impl KnownLayout {
    // Number row first, then the three letter rows.
    pub fn get_str(&self) -> &'static str {
        match self {
            Self::Qwerty => "1234567890 qwertyuiop asdfghjkl zxcvbnm",
            Self::Colemak => "1234567890 qwfpgjluy arstdhneio zxcvbkm",
            Self::ColemakDH => "1234567890 qwfpbjluy arstgmneio zxcdvkh",
            Self::Dvorak => "1234567890 pyfgcrl aoeuidhtns qjkxbmwvz",
            Self::Workman => "1234567890 qdrwbjfup ashtgyneoi zxmcvkl",
            Self::Qwertz => "1234567890 qwertzuiop asdfghjkl yxcvbnm",
            Self::Azerty => "1234567890 azertyuiop qsdfghjklm wxcvbn",

            // Russian standard
            Self::Jcuken => "1234567890 йцукенгшщзхъ фывапролджэ ячсмитьбю",
        }
    }

    /// Resolves a preset name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        name.trim().to_lowercase().parse().ok()
    }
}

pub fn get_all_layouts() -> HashMap<KnownLayout, &'static str> {
    let mut map = HashMap::new();
    for layout in KnownLayout::iter() {
        map.insert(layout, layout.get_str());
    }
    map
}

/// A user-facing layout entry is either a preset name or a raw definition.
pub fn resolve_definition(entry: &str) -> String {
    match KnownLayout::from_name(entry) {
        Some(known) => known.get_str().to_string(),
        None => entry.to_string(),
    }
}

/// Ordered layouts with a switchable cursor.
///
/// Index 0 is the main layout. `current` is what labels are assigned on;
/// `default` is where `reset_to_default` returns after a jump.
#[derive(Debug, Clone)]
pub struct LayoutSet {
    layouts: Vec<KeyboardLayout>,
    current: usize,
    default: usize,
}

impl LayoutSet {
    pub fn new(layouts: Vec<KeyboardLayout>) -> Self {
        Self {
            layouts,
            current: 0,
            default: 0,
        }
    }

    /// Parses every non-blank definition. Blank entries are skipped; an entry
    /// that parses to nothing usable fails the whole set, as does a set with
    /// no entries left.
    pub fn parse<S: AsRef<str>>(definitions: &[S], ignored: &str) -> BjResult<Self> {
        let mut layouts = Vec::with_capacity(definitions.len());
        for def in definitions {
            let def = def.as_ref();
            if def.trim().is_empty() {
                warn!("Skipping blank layout definition");
                continue;
            }
            layouts.push(KeyboardLayout::parse(&resolve_definition(def), ignored)?);
        }
        if layouts.is_empty() {
            return Err(BlazeJumpError::Config("no layout configured".to_string()));
        }
        Ok(Self::new(layouts))
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&KeyboardLayout> {
        self.layouts.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyboardLayout> {
        self.layouts.iter()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn default_index(&self) -> usize {
        self.default
    }

    pub fn set_current(&mut self, index: usize) {
        if index < self.layouts.len() {
            self.current = index;
        }
    }

    /// Steps the cursor forward (`sign > 0`) or backward, wrapping at both ends.
    pub fn toggle(&mut self, sign: i32) -> usize {
        let n = self.layouts.len() as i64;
        if n == 0 {
            return 0;
        }
        let next = (self.current as i64 + sign.signum() as i64).rem_euclid(n);
        self.current = next as usize;
        self.current
    }

    pub fn reset_to_default(&mut self) -> usize {
        self.current = self.default;
        self.current
    }

    pub fn commit_current_as_default(&mut self) {
        self.default = self.current;
    }

    /// Index of the first layout containing `c`, trying `current` before the
    /// others in configured order. Falls back to `current` on a miss.
    pub fn recognize(&self, c: char, current: usize) -> usize {
        if self.layouts.get(current).is_some_and(|l| l.has_char(c)) {
            return current;
        }
        self.layouts
            .iter()
            .position(|l| l.has_char(c))
            .unwrap_or(current)
    }

    /// Applies `recognize` to the cursor.
    pub fn recognize_and_switch(&mut self, c: char) -> usize {
        self.current = self.recognize(c, self.current);
        self.current
    }
}
