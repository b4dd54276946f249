use crate::{animation::model::Animation, fonts::catalog::FontCatalog};

/// Label of the leading option, which selects nothing.
pub const PLACEHOLDER_LABEL: &str = "Select Font";

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// One entry of the font dropdown.
pub struct FontOption {
    /// Option identifier; empty for the placeholder.
    pub id: String,
    /// Value delivered by the selection event.
    pub value: String,
    /// `true` for the animation's active font.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

impl FontOption {
    /// `true` for the leading "Select Font" entry.
    pub fn is_placeholder(&self) -> bool {
        self.id.is_empty()
    }
}

/// Dropdown options for `catalog`: a placeholder, then one option per font in catalog
/// order. The font matching the animation's active font is marked selected.
pub fn font_options(catalog: &FontCatalog, animation: Option<&Animation>) -> Vec<FontOption> {
    let active = animation
        .and_then(Animation::active_font)
        .map(|entry| entry.id.as_str());

    let mut options = Vec::with_capacity(catalog.len() + 1);
    options.push(FontOption {
        id: String::new(),
        value: PLACEHOLDER_LABEL.to_string(),
        selected: false,
    });
    options.extend(catalog.iter().map(|font| FontOption {
        id: font.id.clone(),
        value: font.id.clone(),
        selected: active == Some(font.id.as_str()),
    }));
    options
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/options.rs"]
mod tests;
