use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::Path,
};

use serde_json::{Map, Value};

use crate::{
    animation::layer::Layer,
    foundation::error::{LottieFontsError, LottieFontsResult},
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Map<String, Value>")]
/// A Lottie animation document.
///
/// Only the parts the font selector touches are modelled: the font table, top-level layers
/// and assets. Every other field is kept in [`Animation::extra`] and written back as-is.
/// An explicit `"fonts": null` or `"assets": null` is kept there too.
///
/// Font rewrites mutate the document in place (see [`crate::rewrite_font`]); clone it first
/// if the original is still needed.
pub struct Animation {
    /// Font table (`fonts`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontList>,
    /// Top-level layers.
    pub layers: Vec<Layer>,
    /// Assets (images and pre-compositions).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<Asset>>,
    /// Remaining top-level fields (`v`, `fr`, `ip`, `op`, `w`, `h`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(serde::Deserialize)]
struct AnimationFields {
    #[serde(default)]
    fonts: Option<FontList>,
    #[serde(default)]
    layers: Vec<Layer>,
    #[serde(default)]
    assets: Option<Vec<Asset>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Animation {
    type Error = serde_json::Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let (map, nulls) = split_nulls(map, &["fonts", "assets"]);
        let AnimationFields {
            fonts,
            layers,
            assets,
            mut extra,
        } = serde_json::from_value(Value::Object(map))?;
        extra.extend(nulls);
        Ok(Self {
            fonts,
            layers,
            assets,
            extra,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// The `fonts` object of an animation.
pub struct FontList {
    /// Font table entries. The first entry is the active font.
    #[serde(default)]
    pub list: Vec<FontEntry>,
    /// Remaining fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Identifier plus display metadata of a font.
pub struct FontDescriptor {
    /// Stable identifier layers reference (`fName`).
    #[serde(rename = "fName")]
    pub id: String,
    /// Font family (`fFamily`).
    #[serde(rename = "fFamily")]
    pub family: String,
    /// Font style (`fStyle`).
    #[serde(rename = "fStyle")]
    pub style: String,
}

impl FontDescriptor {
    /// Build a descriptor.
    pub fn new(id: impl Into<String>, family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            family: family.into(),
            style: style.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One entry of an animation's font table.
pub struct FontEntry {
    /// Font identifier (`fName`).
    #[serde(rename = "fName")]
    pub id: String,
    /// Font family (`fFamily`).
    #[serde(rename = "fFamily", default)]
    pub family: String,
    /// Font style (`fStyle`).
    #[serde(rename = "fStyle", default)]
    pub style: String,
    /// `fPath`, `ascent`, `origin` and anything else, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FontEntry {
    /// Build an entry with no extra fields.
    pub fn new(descriptor: FontDescriptor) -> Self {
        Self {
            id: descriptor.id,
            family: descriptor.family,
            style: descriptor.style,
            extra: Map::new(),
        }
    }

    /// Identifier, family and style of this entry.
    pub fn descriptor(&self) -> FontDescriptor {
        FontDescriptor::new(&self.id, &self.family, &self.style)
    }

    /// Overwrite identifier, family and style; extra fields are left alone.
    pub fn assign(&mut self, descriptor: &FontDescriptor) {
        self.id.clone_from(&descriptor.id);
        self.family.clone_from(&descriptor.family);
        self.style.clone_from(&descriptor.style);
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Map<String, Value>")]
/// An asset entry. Pre-composition assets own a layer sequence.
pub struct Asset {
    /// Layers of a pre-composition asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<Layer>>,
    /// `id`, image path, size and every other field, kept verbatim. An explicit
    /// `"layers": null` is kept here as well.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(serde::Deserialize)]
struct AssetFields {
    #[serde(default)]
    layers: Option<Vec<Layer>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Asset {
    type Error = serde_json::Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let (map, nulls) = split_nulls(map, &["layers"]);
        let AssetFields { layers, mut extra } = serde_json::from_value(Value::Object(map))?;
        extra.extend(nulls);
        Ok(Self { layers, extra })
    }
}

impl Asset {
    /// Build a pre-composition asset.
    pub fn precomp(id: impl Into<String>, layers: Vec<Layer>) -> Self {
        let mut extra = Map::new();
        extra.insert("id".to_owned(), Value::String(id.into()));
        Self {
            layers: Some(layers),
            extra,
        }
    }

    /// Asset identifier referenced by precomp layers (`refId`), when it is a string.
    pub fn id(&self) -> Option<&str> {
        self.extra.get("id").and_then(Value::as_str)
    }
}

/// Split the `null`-valued `keys` off `map`, keeping the order of everything else.
fn split_nulls(
    map: Map<String, Value>,
    keys: &[&str],
) -> (Map<String, Value>, Map<String, Value>) {
    let (nulls, rest): (Map<String, Value>, Map<String, Value>) = map
        .into_iter()
        .partition(|(key, value)| value.is_null() && keys.contains(&key.as_str()));
    (rest, nulls)
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Where a layer lives inside an animation.
pub enum LayerScope {
    /// The animation's top-level layer list.
    Root,
    /// The layer list of `assets[index]`.
    Asset {
        /// Position in the asset list.
        index: usize,
        /// Asset identifier, when present.
        id: Option<String>,
    },
}

impl std::fmt::Display for LayerScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Root => f.write_str("layers"),
            Self::Asset {
                index,
                id: Some(id),
            } => write!(f, "assets[{index}] ({id})"),
            Self::Asset { index, id: None } => write!(f, "assets[{index}]"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A text layer's font reference, as reported by [`Animation::font_references`].
pub struct FontReference {
    /// Layer list the layer belongs to.
    pub scope: LayerScope,
    /// Position inside that layer list.
    pub index: usize,
    /// Layer name, when present.
    pub layer: Option<String>,
    /// Referenced font identifier.
    pub font: String,
}

impl Animation {
    /// Parse an animation from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> LottieFontsResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| LottieFontsError::serde(format!("parse animation JSON: {e}")))
    }

    /// Parse an animation from a JSON string.
    pub fn from_json_str(s: &str) -> LottieFontsResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| LottieFontsError::serde(format!("parse animation JSON: {e}")))
    }

    /// Parse an animation from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LottieFontsResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LottieFontsError::validation(format!("open animation JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_writer_pretty<W: std::io::Write>(&self, w: W) -> LottieFontsResult<()> {
        serde_json::to_writer_pretty(w, self)
            .map_err(|e| LottieFontsError::serde(format!("write animation JSON: {e}")))
    }

    /// Serialize as a pretty-printed JSON string.
    pub fn to_json_string_pretty(&self) -> LottieFontsResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LottieFontsError::serde(format!("write animation JSON: {e}")))
    }

    /// Write pretty-printed JSON to `path`, replacing any existing file.
    pub fn write_path(&self, path: impl AsRef<Path>) -> LottieFontsResult<()> {
        let path = path.as_ref();
        let f = File::create(path).map_err(|e| {
            LottieFontsError::validation(format!(
                "create animation JSON '{}': {e}",
                path.display()
            ))
        })?;
        let mut w = BufWriter::new(f);
        self.to_writer_pretty(&mut w)?;
        w.flush().map_err(|e| {
            LottieFontsError::validation(format!("flush animation JSON '{}': {e}", path.display()))
        })
    }

    /// The active font: first entry of the font table.
    pub fn active_font(&self) -> Option<&FontEntry> {
        self.fonts.as_ref().and_then(|f| f.list.first())
    }

    pub(crate) fn active_font_mut(&mut self) -> Option<&mut FontEntry> {
        self.fonts.as_mut().and_then(|f| f.list.first_mut())
    }

    /// Every layer in rewrite scope: top-level layers, then the layers of each asset.
    /// Assets are not followed any deeper.
    pub fn scoped_layers(&self) -> impl Iterator<Item = (LayerScope, usize, &Layer)> + '_ {
        let root = self
            .layers
            .iter()
            .enumerate()
            .map(|(i, layer)| (LayerScope::Root, i, layer));
        let nested = self
            .assets
            .iter()
            .flatten()
            .enumerate()
            .filter_map(|(index, asset)| asset.layers.as_ref().map(|layers| (index, asset, layers)))
            .flat_map(|(index, asset, layers)| {
                layers.iter().enumerate().map(move |(i, layer)| {
                    (
                        LayerScope::Asset {
                            index,
                            id: asset.id().map(str::to_owned),
                        },
                        i,
                        layer,
                    )
                })
            });
        root.chain(nested)
    }

    /// Font references of all well-formed text layers in rewrite scope.
    pub fn font_references(&self) -> Vec<FontReference> {
        self.scoped_layers()
            .filter_map(|(scope, index, layer)| {
                layer.font().map(|font| FontReference {
                    scope,
                    index,
                    layer: layer.name().map(str::to_owned),
                    font: font.to_owned(),
                })
            })
            .collect()
    }

    /// Number of text-tagged layers in rewrite scope without a usable style run.
    pub fn malformed_text_layers(&self) -> usize {
        self.scoped_layers()
            .filter(|(_, _, layer)| layer.is_malformed_text())
            .count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/model.rs"]
mod tests;
