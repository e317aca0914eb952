// SPDX-License-Identifier: MPL-2.0
//! Tab items and their accessibility strings.

use crate::i18n::I18n;

/// Label announced for items declared without one.
pub const FALLBACK_LABEL: &str = "Tab";

/// A selectable entry of the bar.
///
/// Every item carries an explicit accessibility label. The title doubles as
/// the label unless [`TabItem::with_accessibility_label`] overrides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    index: usize,
    icon: String,
    title: String,
    accessibility_label: String,
}

impl TabItem {
    pub fn new(icon: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        let accessibility_label = checked_label(&title);
        Self {
            index: 0,
            icon: icon.into(),
            title,
            accessibility_label,
        }
    }

    #[must_use]
    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = checked_label(&label.into());
        self
    }

    /// Position in the bar. Assigned when the item list is installed.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Icon reference, resolved by the renderer.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn accessibility_label(&self) -> &str {
        &self.accessibility_label
    }

    /// Hint read after the label.
    #[must_use]
    pub fn accessibility_hint(&self, is_selected: bool, i18n: &I18n) -> String {
        if is_selected {
            i18n.tr("tab-hint-selected")
        } else {
            i18n.tr("tab-hint-unselected")
        }
    }

    /// Value read for the item: "Selected", or nothing.
    #[must_use]
    pub fn accessibility_value(&self, is_selected: bool, i18n: &I18n) -> String {
        if is_selected {
            i18n.tr("tab-value-selected")
        } else {
            String::new()
        }
    }

    /// Stable identifier for UI automation.
    #[must_use]
    pub fn identifier(&self) -> String {
        format!("TabItem-{}", self.index)
    }
}

fn checked_label(label: &str) -> String {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        tracing::warn!("tab item has no accessibility label, using '{FALLBACK_LABEL}'");
        FALLBACK_LABEL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_the_default_label() {
        let item = TabItem::new("house", "Home");
        assert_eq!(item.accessibility_label(), "Home");
        assert_eq!(item.title(), "Home");
        assert_eq!(item.icon(), "house");
    }

    #[test]
    fn empty_label_falls_back() {
        assert_eq!(TabItem::new("star", "").accessibility_label(), FALLBACK_LABEL);
        let item = TabItem::new("star", "Favorites").with_accessibility_label("   ");
        assert_eq!(item.accessibility_label(), FALLBACK_LABEL);
    }

    #[test]
    fn explicit_label_overrides_title() {
        let item = TabItem::new("gear", "⚙").with_accessibility_label("Settings");
        assert_eq!(item.accessibility_label(), "Settings");
        assert_eq!(item.title(), "⚙");
    }

    #[test]
    fn identifier_uses_index() {
        let mut item = TabItem::new("gear", "Settings");
        item.set_index(3);
        assert_eq!(item.identifier(), "TabItem-3");
    }

    #[test]
    fn hints_and_values_are_localized() {
        let i18n = I18n::new(Some("en-US"));
        let item = TabItem::new("house", "Home");
        assert_eq!(item.accessibility_hint(true, &i18n), "Currently selected");
        assert_eq!(
            item.accessibility_hint(false, &i18n),
            "Double tap to switch to this tab"
        );
        assert_eq!(item.accessibility_value(true, &i18n), "Selected");
        assert_eq!(item.accessibility_value(false, &i18n), "");
    }
}
