// SPDX-License-Identifier: MPL-2.0
//! The bubble bar orchestrator.
//!
//! [`BubbleBar`] owns one widget instance's state: the declared
//! [`Configuration`], the latest [`AccessibilitySignals`], the derived
//! [`EffectiveConfiguration`], the [`Pager`] and the indicator animation.
//! Every mutation goes through `&mut self`, so the resolver and the pager
//! never observe a half-updated configuration.
//!
//! # Examples
//!
//! ```
//! use bubble_bar::config::{Configuration, SwipeBehavior};
//! use bubble_bar::ui::bar::{BubbleBar, Event};
//! use bubble_bar::ui::tab_item::TabItem;
//!
//! let items = vec![
//!     TabItem::new("house", "Home"),
//!     TabItem::new("magnifyingglass", "Search"),
//! ];
//! let mut bar = BubbleBar::new(items, Configuration::default());
//! bar.configure(|config| {
//!     config.set_swipe_behavior(SwipeBehavior::Full);
//!     Ok(())
//! })
//! .expect("valid configuration");
//!
//! let event = bar.set_selected_index(1);
//! assert_eq!(
//!     event,
//!     Event::SelectionChanged {
//!         index: 1,
//!         announcement: "Switched to Search".to_string(),
//!     }
//! );
//! ```

use crate::accessibility::{AccessibilitySignals, EffectiveConfiguration};
use crate::config::{ConfigField, Configuration};
use crate::error::Result;
use crate::i18n::I18n;
use crate::ui::indicator::{self, IndicatorTransition, ItemLayout};
use crate::ui::pager::{self, Pager};
use crate::ui::style::Colors;
use crate::ui::tab_item::TabItem;
use crate::ui::theming::ColorScheme;
use iced_core::{Rectangle, Vector};
use std::time::Duration;

/// Input events of the bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The user tapped an item.
    ItemTapped(usize),
    /// A drag began on the paged content at horizontal coordinate `x`.
    DragStarted { x: f32 },
    DragChanged(Vector),
    DragEnded(Vector),
    /// Animation frame.
    Tick(Duration),
    /// The renderer laid out the items.
    LayoutChanged(Vec<ItemLayout>),
}

/// Output of the bar for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The selected tab changed; `announcement` is for the screen reader.
    SelectionChanged { index: usize, announcement: String },
}

#[derive(Debug, Clone, Copy)]
struct IndicatorAnimation {
    transition: IndicatorTransition,
    elapsed: Duration,
}

/// A mounted bubble bar.
#[derive(Debug)]
pub struct BubbleBar {
    items: Vec<TabItem>,
    config: Configuration,
    signals: AccessibilitySignals,
    color_scheme: ColorScheme,
    screen_width: f32,
    effective: EffectiveConfiguration,
    pager: Pager,
    i18n: I18n,
    layouts: Vec<ItemLayout>,
    indicator: Option<IndicatorAnimation>,
}

impl BubbleBar {
    pub fn new(items: Vec<TabItem>, config: Configuration) -> Self {
        let i18n = I18n::new(config.locale());
        let mut bar = Self {
            items: Vec::new(),
            config,
            signals: AccessibilitySignals::default(),
            color_scheme: ColorScheme::default(),
            screen_width: 0.0,
            effective: EffectiveConfiguration::default(),
            pager: Pager::default(),
            i18n,
            layouts: Vec::new(),
            indicator: None,
        };
        bar.config.clear_changes();
        bar.refresh();
        bar.set_items(items);
        bar
    }

    /// Replaces the item list. The selection is clamped into the new range.
    pub fn set_items(&mut self, mut items: Vec<TabItem>) -> Event {
        for (index, item) in items.iter_mut().enumerate() {
            item.set_index(index);
        }
        self.items = items;
        self.layouts.clear();
        self.indicator = None;
        let effect = self.pager.set_item_count(self.items.len());
        self.event_for(effect)
    }

    /// Applies host configuration changes and re-resolves accessibility.
    ///
    /// Returns the fields that changed. On error the configuration keeps the
    /// updates applied before the failing setter.
    ///
    /// # Errors
    ///
    /// Propagates the first setter rejection.
    pub fn configure(
        &mut self,
        update: impl FnOnce(&mut Configuration) -> Result<()>,
    ) -> Result<Vec<ConfigField>> {
        let outcome = update(&mut self.config);
        let changes = self.config.take_changes();
        if changes.contains(&ConfigField::Locale) {
            self.i18n = I18n::new(self.config.locale());
        }
        if !changes.is_empty() {
            tracing::trace!(?changes, "configuration changed");
            self.refresh();
        }
        outcome.map(|()| changes)
    }

    /// Forwards new OS accessibility signals.
    pub fn set_signals(&mut self, signals: AccessibilitySignals) {
        if self.signals != signals {
            self.signals = signals;
            self.refresh();
        }
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.color_scheme = scheme;
    }

    /// Screen width, used for the default bar width and as the page width.
    pub fn set_screen_width(&mut self, width: f32) {
        self.screen_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        self.pager.set_page_width(self.screen_width);
    }

    /// Host-driven navigation. Out-of-range indices are clamped.
    pub fn set_selected_index(&mut self, index: isize) -> Event {
        let effect = self.pager.handle(pager::Message::Select(index));
        self.event_for(effect)
    }

    pub fn update(&mut self, message: Message) -> Event {
        let effect = match message {
            Message::ItemTapped(index) => {
                let index = isize::try_from(index).unwrap_or(isize::MAX);
                self.pager.handle(pager::Message::Select(index))
            }
            Message::DragStarted { x } => self.pager.handle(pager::Message::DragStarted { x }),
            Message::DragChanged(translation) => self
                .pager
                .handle(pager::Message::DragChanged { translation }),
            Message::DragEnded(translation) => {
                self.pager.handle(pager::Message::DragEnded { translation })
            }
            Message::Tick(delta) => {
                if let Some(animation) = self.indicator.as_mut() {
                    animation.elapsed += delta;
                    if animation.transition.is_finished(animation.elapsed) {
                        self.indicator = None;
                    }
                }
                self.pager.handle(pager::Message::Tick(delta))
            }
            Message::LayoutChanged(mut layouts) => {
                if self.config.equal_item_sizing() {
                    indicator::equalize_item_widths(&mut layouts);
                }
                self.layouts = layouts;
                self.indicator = None;
                pager::Effect::None
            }
        };
        self.event_for(effect)
    }

    fn refresh(&mut self) {
        self.effective = self.config.effective(&self.signals);
        self.pager.configure(&self.effective);
        if self.effective.reduce_motion() {
            self.indicator = None;
        }
    }

    fn event_for(&mut self, effect: pager::Effect) -> Event {
        match effect {
            pager::Effect::None => Event::None,
            pager::Effect::Committed { from, to } => {
                self.animate_indicator(from, to);
                let announcement = self.announcement(to);
                tracing::debug!(from, to, %announcement, "selection changed");
                Event::SelectionChanged {
                    index: to,
                    announcement,
                }
            }
        }
    }

    /// Starts the indicator animation. A running one is replaced, starting
    /// from wherever it currently is.
    fn animate_indicator(&mut self, from: usize, to: usize) {
        let Some(mut transition) =
            IndicatorTransition::between(from, to, &self.layouts, &self.effective)
        else {
            self.indicator = None;
            return;
        };
        if let Some(current) = self.indicator {
            transition.from = current.transition.bounds_at(current.elapsed);
        }
        self.indicator = (!transition.instant).then_some(IndicatorAnimation {
            transition,
            elapsed: Duration::ZERO,
        });
    }

    fn announcement(&self, index: usize) -> String {
        let label = self
            .items
            .get(index)
            .map_or(crate::ui::tab_item::FALLBACK_LABEL, TabItem::accessibility_label);
        self.i18n
            .tr_with_args("tab-announcement-switched", &[("label", label)])
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.pager.committed_index()
    }

    #[must_use]
    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    #[must_use]
    pub fn effective(&self) -> &EffectiveConfiguration {
        &self.effective
    }

    #[must_use]
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    #[must_use]
    pub fn signals(&self) -> &AccessibilitySignals {
        &self.signals
    }

    /// Colors for the current scheme.
    #[must_use]
    pub fn colors(&self) -> Colors {
        self.effective.colors(self.color_scheme)
    }

    #[must_use]
    pub fn bar_width(&self) -> f32 {
        self.effective.bar_width(self.screen_width)
    }

    /// Current indicator bounds, or `None` before the first layout.
    #[must_use]
    pub fn indicator_bounds(&self) -> Option<Rectangle> {
        if let Some(animation) = self.indicator {
            return Some(animation.transition.bounds_at(animation.elapsed));
        }
        self.layouts
            .get(self.selected_index())
            .map(|layout| indicator::indicator_bounds(layout, &self.effective))
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.indicator.is_some() || self.pager.is_settling()
    }

    /// Whether the label of item `index` is drawn.
    #[must_use]
    pub fn shows_label(&self, index: usize) -> bool {
        self.config
            .label_visibility()
            .shows_label(index == self.selected_index())
    }

    #[must_use]
    pub fn accessibility_label(&self) -> String {
        self.i18n.tr("bar-label")
    }

    #[must_use]
    pub fn accessibility_hint(&self) -> String {
        self.i18n.tr("bar-hint")
    }

    #[must_use]
    pub fn item_hint(&self, index: usize) -> Option<String> {
        let selected = index == self.selected_index();
        self.items
            .get(index)
            .map(|item| item.accessibility_hint(selected, &self.i18n))
    }

    #[must_use]
    pub fn item_value(&self, index: usize) -> Option<String> {
        let selected = index == self.selected_index();
        self.items
            .get(index)
            .map(|item| item.accessibility_value(selected, &self.i18n))
    }
}
