use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeSeq as _};
use serde_json::{Map, Value};

/// Lottie `ty` tag of text layers.
pub const LAYER_TYPE_TEXT: u64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Named view of the Lottie layer `ty` tag.
pub enum LayerKind {
    /// Pre-composition (`ty == 0`), references an asset by `refId`.
    Precomp,
    /// Solid color (`ty == 1`).
    Solid,
    /// Image (`ty == 2`).
    Image,
    /// Null / transform-only (`ty == 3`).
    Null,
    /// Vector shapes (`ty == 4`).
    Shape,
    /// Text (`ty == 5`).
    Text,
    /// Audio (`ty == 6`).
    Audio,
    /// Any tag this crate has no name for.
    Other(u64),
}

impl LayerKind {
    /// Map a raw `ty` tag to its kind.
    pub fn from_ty(ty: u64) -> Self {
        match ty {
            0 => Self::Precomp,
            1 => Self::Solid,
            2 => Self::Image,
            3 => Self::Null,
            4 => Self::Shape,
            LAYER_TYPE_TEXT => Self::Text,
            6 => Self::Audio,
            other => Self::Other(other),
        }
    }

    /// Raw `ty` tag of this kind.
    pub fn ty(self) -> u64 {
        match self {
            Self::Precomp => 0,
            Self::Solid => 1,
            Self::Image => 2,
            Self::Null => 3,
            Self::Shape => 4,
            Self::Text => LAYER_TYPE_TEXT,
            Self::Audio => 6,
            Self::Other(ty) => ty,
        }
    }

    fn of_value(raw: &Value) -> Option<Self> {
        let ty = raw.get("ty")?;
        // Some exporters write integral tags as floats (`5.0`).
        let ty = ty.as_u64().or_else(|| {
            ty.as_f64()
                .filter(|t| t.fract() == 0.0 && *t >= 0.0)
                .map(|t| t as u64)
        })?;
        Some(Self::from_ty(ty))
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Precomp => f.write_str("precomp"),
            Self::Solid => f.write_str("solid"),
            Self::Image => f.write_str("image"),
            Self::Null => f.write_str("null"),
            Self::Shape => f.write_str("shape"),
            Self::Text => f.write_str("text"),
            Self::Audio => f.write_str("audio"),
            Self::Other(ty) => write!(f, "ty={ty}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
/// One layer of an animation or of an asset's sub-composition.
///
/// Only text layers with a usable first style run are modelled; everything else is carried
/// as the raw JSON value it was parsed from and serialized back unchanged.
pub enum Layer {
    /// Text layer whose `t.d.k[0].s.f` is a string.
    Text(TextLayer),
    /// Any other layer, including text-tagged layers with a malformed text payload.
    Other(Value),
}

impl<'de> Deserialize<'de> for Layer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_value(raw))
    }
}

impl Layer {
    /// Classify a raw JSON layer.
    ///
    /// A layer is text when its `ty` tag is [`LAYER_TYPE_TEXT`] and its first style run
    /// carries a string font reference. The tag, the name, later keyframes and every
    /// other field are not inspected.
    pub fn from_value(raw: Value) -> Self {
        if LayerKind::of_value(&raw) == Some(LayerKind::Text)
            && let Ok(text) = TextLayer::deserialize(&raw)
        {
            return Self::Text(text);
        }
        Self::Other(raw)
    }

    /// Layer kind, if the layer carries a numeric `ty` tag.
    pub fn kind(&self) -> Option<LayerKind> {
        match self {
            Self::Text(_) => Some(LayerKind::Text),
            Self::Other(raw) => LayerKind::of_value(raw),
        }
    }

    /// Layer name (`nm`), when it is a string.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Text(text) => text.name(),
            Self::Other(raw) => raw.get("nm").and_then(Value::as_str),
        }
    }

    /// Borrow the text payload of a well-formed text layer.
    pub fn as_text(&self) -> Option<&TextLayer> {
        match self {
            Self::Text(text) => Some(text),
            Self::Other(_) => None,
        }
    }

    /// Font referenced by the first style run, for well-formed text layers.
    pub fn font(&self) -> Option<&str> {
        self.as_text().map(TextLayer::font)
    }

    /// `true` for layers tagged as text that carry no usable style run.
    pub fn is_malformed_text(&self) -> bool {
        match self {
            Self::Text(_) => false,
            Self::Other(raw) => LayerKind::of_value(raw) == Some(LayerKind::Text),
        }
    }
}

impl From<TextLayer> for Layer {
    fn from(value: TextLayer) -> Self {
        Self::Text(value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// A text layer (`ty == 5`).
///
/// `ty`, `nm` and every other layer field live in [`TextLayer::extra`] exactly as they were
/// parsed, so a name of the wrong type or an explicit `null` survives a round trip.
pub struct TextLayer {
    /// Animated text payload.
    #[serde(rename = "t")]
    pub text: TextData,
    /// Remaining layer fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TextLayer {
    /// Build a minimal text layer with one style run referencing `font`.
    pub fn new(name: impl Into<String>, font: impl Into<String>) -> Self {
        let mut extra = Map::new();
        extra.insert("ty".to_owned(), Value::from(LAYER_TYPE_TEXT));
        extra.insert("nm".to_owned(), Value::String(name.into()));
        Self {
            text: TextData {
                document: AnimatedTextDocument {
                    keyframes: TextKeyframes::new(TextDocumentKeyframe {
                        style: TextStyle {
                            font: font.into(),
                            extra: Map::new(),
                        },
                        extra: Map::new(),
                    }),
                    extra: Map::new(),
                },
                extra: Map::new(),
            },
            extra,
        }
    }

    /// Layer name (`nm`), when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.extra.get("nm").and_then(Value::as_str)
    }

    /// Font referenced by the first style run.
    pub fn font(&self) -> &str {
        &self.text.document.keyframes.first.style.font
    }

    pub(crate) fn font_mut(&mut self) -> &mut String {
        &mut self.text.document.keyframes.first.style.font
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Text payload of a text layer (`t`).
pub struct TextData {
    /// Keyframed text document (`d`).
    #[serde(rename = "d")]
    pub document: AnimatedTextDocument,
    /// Animators, path options and other fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Keyframed text document (`t.d`).
pub struct AnimatedTextDocument {
    /// Document keyframes (`k`).
    #[serde(rename = "k")]
    pub keyframes: TextKeyframes,
    /// Remaining fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq)]
/// The keyframe array of a text document (`t.d.k`).
///
/// Only the first keyframe is the layer's primary style run and is typed. Later keyframes
/// are kept as raw JSON, whatever their shape. Serializes back to one JSON array.
pub struct TextKeyframes {
    /// `k[0]`.
    pub first: TextDocumentKeyframe,
    /// `k[1..]`, kept verbatim.
    pub rest: Vec<Value>,
}

impl TextKeyframes {
    /// A keyframe array holding only `first`.
    pub fn new(first: TextDocumentKeyframe) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Number of keyframes, `first` included.
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always `false`: a text document without keyframes is not modelled.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Serialize for TextKeyframes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        seq.serialize_element(&self.first)?;
        for keyframe in &self.rest {
            seq.serialize_element(keyframe)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for TextKeyframes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut all = Vec::<Value>::deserialize(deserializer)?.into_iter();
        let first = all.next().ok_or_else(|| {
            <D::Error as de::Error>::invalid_length(0, &"at least one text keyframe")
        })?;
        let first =
            TextDocumentKeyframe::deserialize(first).map_err(<D::Error as de::Error>::custom)?;
        Ok(Self {
            first,
            rest: all.collect(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// The first text document keyframe (`t.d.k[0]`).
pub struct TextDocumentKeyframe {
    /// Style run (`s`).
    #[serde(rename = "s")]
    pub style: TextStyle,
    /// Keyframe time and other fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Style run of the first text document keyframe (`t.d.k[0].s`).
pub struct TextStyle {
    /// Font reference (`f`), matching a font table entry's `fName`.
    #[serde(rename = "f")]
    pub font: String,
    /// Size, fill, tracking, the text itself and every other field, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
#[path = "../../tests/unit/animation/layer.rs"]
mod tests;
