//! The card's logical render tree and the renderer that builds it.
//!
//! The tree is a plain value: it knows nothing about markup. The `storefront-card` package
//! paints it with Dioxus, but any other painter can walk it just as well.

use crate::{
    attributes::CardAttributes,
    config::CardConfig,
    error::Result,
    format::{pluralize, PriceFormat},
    recency::{Clock, RecencyWindow, SystemClock},
    theme::COLORS,
    variant::{Badge, DisplayVariant, TextDecoration},
};
use serde::Serialize;

/// A fully resolved card, ready to be painted.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RenderTree {
    pub variant: DisplayVariant,
    /// Navigation target of the clickable container.
    pub href: String,
    pub image: ImageRegion,
    /// Gap between the image region and the first row, in px.
    pub spacer: u32,
    pub headline: HeadlineRow,
    pub details: DetailRow,
}

impl RenderTree {
    pub fn badge(&self) -> Option<&Badge> {
        self.image.badge.as_ref()
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ImageRegion {
    pub src: String,
    pub alt: String,
    pub badge: Option<Badge>,
}

/// Name on the left, price on the right.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HeadlineRow {
    pub name: String,
    pub price: PriceLabel,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PriceLabel {
    pub text: String,
    pub color: &'static str,
    pub decoration: TextDecoration,
}

/// Color count on the left, sale price (if any) on the right.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DetailRow {
    pub color_info: String,
    pub sale_price: Option<SalePriceLabel>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SalePriceLabel {
    pub text: String,
    pub color: &'static str,
}

/// Builds [`RenderTree`]s from [`CardAttributes`].
///
/// The renderer holds nothing but configuration and a clock, so one instance can serve any
/// number of renders.
#[derive(Clone, Debug)]
pub struct CardRenderer<C = SystemClock> {
    clock: C,
    window: RecencyWindow,
    price_format: PriceFormat,
    config: CardConfig,
}

impl Default for CardRenderer<SystemClock> {
    fn default() -> Self {
        Self::new(&CardConfig::default())
    }
}

impl CardRenderer<SystemClock> {
    pub fn new(config: &CardConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> CardRenderer<C> {
    pub fn with_clock(config: &CardConfig, clock: C) -> Self {
        Self {
            clock,
            window: config.recency_window(),
            price_format: config.price_format(),
            config: config.clone(),
        }
    }

    pub fn window(&self) -> RecencyWindow {
        self.window
    }

    pub fn format_price(&self, amount: f64) -> String {
        self.price_format.format_price(amount)
    }

    pub fn is_recent_release(&self, attrs: &CardAttributes) -> bool {
        self.window.is_recent_release(attrs.release_date, self.clock.now())
    }

    pub fn variant(&self, attrs: &CardAttributes) -> DisplayVariant {
        let variant =
            DisplayVariant::select(attrs.valid_sale_price(), self.is_recent_release(attrs));
        tracing::debug!(identifier = %attrs.identifier, %variant, "selected card variant");
        variant
    }

    /// Resolve one card.
    ///
    /// Fails only when the attributes are missing something the card can't be drawn without.
    pub fn render(&self, attrs: &CardAttributes) -> Result<RenderTree> {
        attrs.validate()?;

        let variant = self.variant(attrs);
        let style = variant.style();

        let sale_price = match (style.shows_sale_price, attrs.valid_sale_price()) {
            (true, Some(amount)) => Some(SalePriceLabel {
                text: self.format_price(amount),
                color: COLORS.primary,
            }),
            _ => None,
        };

        Ok(RenderTree {
            variant,
            href: self.config.href_for(&attrs.identifier),
            image: ImageRegion {
                src: attrs.image_src.clone(),
                alt: String::new(),
                badge: style.badge,
            },
            spacer: self.config.spacer_size,
            headline: HeadlineRow {
                name: attrs.name.clone(),
                price: PriceLabel {
                    text: self.format_price(attrs.price),
                    color: style.price_color,
                    decoration: style.price_decoration,
                },
            },
            details: DetailRow {
                color_info: pluralize("Color", attrs.num_of_colors),
                sale_price,
            },
        })
    }

    /// Resolve a batch, stopping at the first invalid item.
    pub fn render_all<'a>(
        &self,
        items: impl IntoIterator<Item = &'a CardAttributes>,
    ) -> Result<Vec<RenderTree>> {
        items.into_iter().map(|attrs| self.render(attrs)).collect()
    }
}
