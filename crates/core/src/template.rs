//! Bracket-placeholder templates used by the style presets.
//!
//! A template such as `[描きたいもの]の浮世絵` is parsed once into literal
//! segments and named [`Slot`]s. Rendering never fails: a slot without a
//! value renders as an empty string, and bracketed text that is not a known
//! slot label is kept as a literal.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Subject,
    Person,
    Character,
    Emotion,
    Color,
    Background,
}

impl Slot {
    /// Map a placeholder label (Japanese or English) to its slot.
    pub fn from_label(label: &str) -> Option<Self> {
        let slot = match label.trim().to_lowercase().as_str() {
            "描きたいもの" | "被写体" | "subject" => Slot::Subject,
            "人物の説明" | "person description" => Slot::Person,
            "キャラクターの説明" | "character description" => Slot::Character,
            "感情や表情" | "感情" | "emotion/expression" | "emotion" => Slot::Emotion,
            "色" | "color" => Slot::Color,
            "背景" | "background" => Slot::Background,
            _ => return None,
        };
        Some(slot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Slot(Slot),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    segments: Vec<Segment>,
}

/// Values substituted into a [`Template`].
pub type SlotValues = HashMap<Slot, String>;

impl Template {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(open) = rest.find('[') {
            let Some(close) = rest[open..].find(']').map(|offset| open + offset) else {
                break;
            };
            literal.push_str(&rest[..open]);
            let label = &rest[open + 1..close];
            match Slot::from_label(label) {
                Some(slot) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot(slot));
                }
                None => literal.push_str(&rest[open..=close]),
            }
            rest = &rest[close + 1..];
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Slot(slot) => Some(*slot),
            Segment::Literal(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn render(&self, values: &SlotValues) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::Slot(slot) => values.get(slot).map(String::as_str).unwrap_or_default(),
            })
            .collect()
    }
}
