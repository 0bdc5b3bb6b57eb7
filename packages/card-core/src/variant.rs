use crate::theme::COLORS;
use serde::Serialize;
use std::fmt::Display;

/// The three mutually exclusive ways a card can be drawn.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayVariant {
    Default,
    OnSale,
    NewRelease,
}

impl DisplayVariant {
    /// Picks the variant for an item.
    ///
    /// A valid sale price always wins, so an item that is both discounted and freshly
    /// released is shown as on sale.
    pub fn select(sale_price: Option<f64>, recently_released: bool) -> Self {
        match (sale_price.filter(|price| price.is_finite()), recently_released) {
            (Some(_), _) => DisplayVariant::OnSale,
            (None, true) => DisplayVariant::NewRelease,
            (None, false) => DisplayVariant::Default,
        }
    }

    pub const fn style(self) -> VariantStyle {
        match self {
            DisplayVariant::Default => VariantStyle {
                badge: None,
                price_color: COLORS.gray.g900,
                price_decoration: TextDecoration::Initial,
                shows_sale_price: false,
            },
            DisplayVariant::OnSale => VariantStyle {
                badge: Some(Badge {
                    label: "Sale",
                    background: COLORS.primary,
                }),
                price_color: COLORS.gray.g700,
                price_decoration: TextDecoration::LineThrough,
                shows_sale_price: true,
            },
            DisplayVariant::NewRelease => VariantStyle {
                badge: Some(Badge {
                    label: "Just Released!",
                    background: COLORS.secondary,
                }),
                price_color: COLORS.gray.g900,
                price_decoration: TextDecoration::Initial,
                shows_sale_price: false,
            },
        }
    }
}

impl Display for DisplayVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayVariant::Default => write!(f, "default"),
            DisplayVariant::OnSale => write!(f, "on-sale"),
            DisplayVariant::NewRelease => write!(f, "new-release"),
        }
    }
}

/// Everything about a card's look that depends on its variant.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantStyle {
    pub badge: Option<Badge>,
    pub price_color: &'static str,
    pub price_decoration: TextDecoration,
    pub shows_sale_price: bool,
}

/// Overlay label drawn on the image region.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub background: &'static str,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    Initial,
    LineThrough,
}

impl TextDecoration {
    pub const fn as_css(self) -> &'static str {
        match self {
            TextDecoration::Initial => "initial",
            TextDecoration::LineThrough => "line-through",
        }
    }
}
