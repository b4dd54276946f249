use std::{collections::HashSet, fs::File, io::BufReader, path::Path};

use crate::{
    animation::model::FontDescriptor,
    foundation::error::{LottieFontsError, LottieFontsResult},
};

/// `(id, family, style)` of the fonts offered by default, in display order.
///
/// A curated subset of the Google web fonts mirror.
const BUILTIN_FONTS: &[(&str, &str, &str)] = &[
    ("Righteous-Regular", "Righteous", "Regular"),
    ("BarlowCondensed-Regular", "BarlowCondensed", "Regular"),
    ("Anton-Regular", "Anton", "Regular"),
    ("DMSans-Regular", "DMSans", "Regular"),
    ("KronaOne-Regular", "KronaOne", "Regular"),
    ("BarlowCondensed-SemiBold", "BarlowCondensed", "SemiBold"),
    ("Archivo-BoldItalic", "Archivo", "BoldItalic"),
    ("Montserrat-Bold", "Montserrat", "Bold"),
    ("Syncopate-Bold", "Syncopate", "Bold"),
    ("SairaCondensed-ExtraBold", "SairaCondensed", "ExtraBold"),
    ("LuckiestGuy-Regular", "LuckiestGuy", "Regular"),
    ("Tomorrow-ExtraBoldItalic", "Tomorrow", "ExtraBoldItalic"),
    ("LondrinaSolid-Black", "LondrinaSolid", "Black"),
    ("Montserrat-Black", "Montserrat", "Black"),
    ("TitilliumWeb-Black", "TitilliumWeb", "Black"),
    ("Poppins-BlackItalic", "Poppins", "BlackItalic"),
    ("Comfortaa-Light", "Comfortaa", "Light"),
    ("Boogaloo-Regular", "Boogaloo", "Regular"),
    ("Chewy-Regular", "Chewy", "Regular"),
    ("Overlock-BlackItalic", "Overlock", "BlackItalic"),
    ("FredokaOne-Regular", "FredokaOne", "Regular"),
    ("Shrikhand-Regular", "Shrikhand", "Regular"),
    ("SpicyRice-Regular", "SpicyRice", "Regular"),
    ("Modak-Regular", "Modak", "Regular"),
    ("Chango-Regular", "Chango", "Regular"),
    ("Sniglet-ExtraBold", "Sniglet", "ExtraBold"),
    ("AmaticSC-Bold", "AmaticSC", "Bold"),
    ("CaveatBrush-Regular", "CaveatBrush", "Regular"),
    ("CoveredByYourGrace-Regular", "CoveredByYourGrace", "Regular"),
    ("Knewave-Regular", "Knewave", "Regular"),
    ("PermanentMarker-Regular", "PermanentMarker", "Regular"),
    ("Damion-Regular", "Damion", "Regular"),
    ("Neonderthaw-Regular", "Neonderthaw", "Regular"),
    ("Pacifico-Regular", "Pacifico", "Regular"),
    ("Lobster-Regular", "Lobster", "Regular"),
    ("Molle-Regular", "Molle", "Regular"),
    ("Bahiana-Regular", "Bahiana", "Regular"),
    ("JollyLodger-Regular", "JollyLodger", "Regular"),
    ("LifeSavers-ExtraBold", "LifeSavers", "ExtraBold"),
    ("Warnes-Regular", "Warnes", "Regular"),
    ("Ranchers-Regular", "Ranchers", "Regular"),
    ("Creepster-Regular", "Creepster", "Regular"),
    ("Slackey-Regular", "Slackey", "Regular"),
    ("Monoton-Regular", "Monoton", "Regular"),
    ("NewRocker-Regular", "NewRocker", "Regular"),
    ("ChelaOne-Regular", "ChelaOne", "Regular"),
    ("GermaniaOne-Regular", "GermaniaOne", "Regular"),
    ("Metamorphous-Regular", "Metamorphous", "Regular"),
    ("Spectral-BoldItalic", "Spectral", "BoldItalic"),
    ("Corben-Bold", "Corben", "Bold"),
    ("EBGaramond-Medium", "EBGaramond", "Medium"),
    ("PlayfairDisplay-SemiBoldItalic", "PlayfairDisplay", "SemiBoldItalic"),
    ("Merriweather-Regular", "Merriweather", "Regular"),
    ("AbrilFatface-Regular", "AbrilFatface", "Regular"),
    ("TextMeOne-Regular", "TextMeOne", "Regular"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
/// Read-only, ordered list of selectable fonts.
pub struct FontCatalog {
    fonts: Vec<FontDescriptor>,
}

impl FontCatalog {
    /// The fonts offered by default.
    pub fn builtin() -> Self {
        Self {
            fonts: BUILTIN_FONTS
                .iter()
                .map(|&(id, family, style)| FontDescriptor::new(id, family, style))
                .collect(),
        }
    }

    /// Build a catalog from descriptors, rejecting empty or duplicate identifiers.
    pub fn new(fonts: Vec<FontDescriptor>) -> LottieFontsResult<Self> {
        let mut seen = HashSet::with_capacity(fonts.len());
        for (i, font) in fonts.iter().enumerate() {
            if font.id.trim().is_empty() {
                return Err(LottieFontsError::validation(format!(
                    "catalog font [{i}] fName must be non-empty"
                )));
            }
            if font.family.trim().is_empty() {
                return Err(LottieFontsError::validation(format!(
                    "catalog font '{}' fFamily must be non-empty",
                    font.id
                )));
            }
            if !seen.insert(font.id.as_str()) {
                return Err(LottieFontsError::validation(format!(
                    "catalog font '{}' is listed more than once",
                    font.id
                )));
            }
        }
        Ok(Self { fonts })
    }

    /// Parse a catalog from a JSON array of `{fName, fFamily, fStyle}` objects.
    pub fn from_reader<R: std::io::Read>(r: R) -> LottieFontsResult<Self> {
        let fonts: Vec<FontDescriptor> = serde_json::from_reader(r)
            .map_err(|e| LottieFontsError::serde(format!("parse font catalog JSON: {e}")))?;
        Self::new(fonts)
    }

    /// Parse a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LottieFontsResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LottieFontsError::validation(format!("open font catalog '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Look up a font by identifier.
    pub fn find(&self, id: &str) -> Option<&FontDescriptor> {
        self.fonts.iter().find(|font| font.id == id)
    }

    /// Fonts in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, FontDescriptor> {
        self.fonts.iter()
    }

    /// Number of fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// `true` when the catalog offers no fonts.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl Default for FontCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a FontCatalog {
    type Item = &'a FontDescriptor;
    type IntoIter = std::slice::Iter<'a, FontDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/catalog.rs"]
mod tests;
