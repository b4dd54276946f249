use crate::{
    animation::model::Animation,
    fonts::{
        catalog::FontCatalog,
        options::{FontOption, font_options},
        rewrite::{FontRewrite, rewrite_font},
    },
};

#[derive(Debug)]
/// Notification delivered after a selection rewrote the animation.
pub struct AnimationUpdated<'a> {
    /// The mutated animation.
    pub animation: &'a Animation,
    /// What changed.
    pub rewrite: &'a FontRewrite,
}

/// Receiver of [`AnimationUpdated`] notifications.
///
/// Implemented for every `FnMut(&AnimationUpdated<'_>)` closure.
pub trait AnimationObserver {
    /// Called once per successful selection, after all mutations are complete.
    fn animation_updated(&mut self, event: &AnimationUpdated<'_>);
}

impl<F> AnimationObserver for F
where
    F: FnMut(&AnimationUpdated<'_>),
{
    fn animation_updated(&mut self, event: &AnimationUpdated<'_>) {
        self(event)
    }
}

/// Font dropdown controller: turns selection values into font rewrites and fans the result
/// out to observers.
///
/// The selector never owns the animation; each call borrows it for the duration of the
/// rewrite.
pub struct FontSelector {
    catalog: FontCatalog,
    observers: Vec<Box<dyn AnimationObserver>>,
}

impl std::fmt::Debug for FontSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSelector")
            .field("catalog_len", &self.catalog.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for FontSelector {
    fn default() -> Self {
        Self::new(FontCatalog::builtin())
    }
}

impl FontSelector {
    /// Selector offering the fonts of `catalog`.
    pub fn new(catalog: FontCatalog) -> Self {
        Self {
            catalog,
            observers: Vec::new(),
        }
    }

    /// Catalog the selector resolves selections against.
    pub fn catalog(&self) -> &FontCatalog {
        &self.catalog
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn subscribe(&mut self, observer: impl AnimationObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Dropdown options, with the animation's active font selected.
    pub fn options(&self, animation: Option<&Animation>) -> Vec<FontOption> {
        font_options(&self.catalog, animation)
    }

    /// Handle a dropdown selection.
    ///
    /// Empty or absent values are ignored. Otherwise the animation is rewritten in place and,
    /// if anything was rewritten, every observer receives exactly one notification.
    #[tracing::instrument(skip(self, animation))]
    pub fn select(&mut self, animation: &mut Animation, value: Option<&str>) -> Option<FontRewrite> {
        let value = value.filter(|v| !v.is_empty())?;
        let rewrite = rewrite_font(animation, &self.catalog, value)?;

        let event = AnimationUpdated {
            animation,
            rewrite: &rewrite,
        };
        for observer in &mut self.observers {
            observer.animation_updated(&event);
        }
        Some(rewrite)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/selector.rs"]
mod tests;
