use crate::{
    animation::{
        layer::Layer,
        model::{Animation, FontDescriptor},
    },
    fonts::catalog::FontCatalog,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Per-layer-list outcome of a rewrite.
pub struct LayerTally {
    /// Text layers whose font reference was overwritten.
    pub rewritten: usize,
    /// Text-tagged layers skipped because they carry no usable style run.
    pub malformed: usize,
}

impl std::ops::AddAssign for LayerTally {
    fn add_assign(&mut self, rhs: Self) {
        self.rewritten += rhs.rewritten;
        self.malformed += rhs.malformed;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Change record of a successful [`rewrite_font`] call.
pub struct FontRewrite {
    /// Active font before the rewrite.
    pub previous: FontDescriptor,
    /// Active font after the rewrite (the catalog entry).
    pub current: FontDescriptor,
    /// Outcome over the top-level layers.
    pub layers: LayerTally,
    /// Outcome over the layers of all assets.
    pub asset_layers: LayerTally,
}

impl FontRewrite {
    /// Total text layers rewritten at both levels.
    pub fn rewritten(&self) -> usize {
        self.layers.rewritten + self.asset_layers.rewritten
    }

    /// Total malformed text layers skipped at both levels.
    pub fn malformed(&self) -> usize {
        self.layers.malformed + self.asset_layers.malformed
    }
}

/// Replace the animation's active font with `selected_font_id`.
///
/// The active font is the first font table entry. Its `fName`/`fFamily`/`fStyle` are set to
/// the catalog's descriptor, then every text layer whose first style run referenced the old
/// `fName` is pointed at the new one, first in the top-level layers and then in the layers of
/// each asset. Nested assets are not followed.
///
/// The animation is mutated in place. Returns `None` without touching anything when the
/// selection is not in `catalog` or the font table is empty or absent.
#[tracing::instrument(skip(animation, catalog))]
pub fn rewrite_font(
    animation: &mut Animation,
    catalog: &FontCatalog,
    selected_font_id: &str,
) -> Option<FontRewrite> {
    let Some(selected) = catalog.find(selected_font_id) else {
        tracing::warn!(font = selected_font_id, "selected font is not in the catalog");
        return None;
    };
    let Some(entry) = animation.active_font_mut() else {
        tracing::debug!("animation has no font table entries");
        return None;
    };

    let previous = entry.descriptor();
    entry.assign(selected);

    let layers = rewrite_layers(&mut animation.layers, &previous.id, &selected.id);
    let mut asset_layers = LayerTally::default();
    for asset in animation.assets.iter_mut().flatten() {
        if let Some(nested) = asset.layers.as_mut() {
            asset_layers += rewrite_layers(nested, &previous.id, &selected.id);
        }
    }

    let rewrite = FontRewrite {
        previous,
        current: selected.clone(),
        layers,
        asset_layers,
    };
    tracing::debug!(
        from = %rewrite.previous.id,
        to = %rewrite.current.id,
        rewritten = rewrite.rewritten(),
        malformed = rewrite.malformed(),
        "font rewritten"
    );
    Some(rewrite)
}

fn rewrite_layers(layers: &mut [Layer], target: &str, replacement: &str) -> LayerTally {
    let mut tally = LayerTally::default();
    for (index, layer) in layers.iter_mut().enumerate() {
        if layer.is_malformed_text() {
            tracing::warn!(index, name = ?layer.name(), "skipping malformed text layer");
            tally.malformed += 1;
            continue;
        }
        if let Layer::Text(text) = layer
            && text.font() == target
        {
            replacement.clone_into(text.font_mut());
            tally.rewritten += 1;
        }
    }
    tally
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/rewrite.rs"]
mod tests;
