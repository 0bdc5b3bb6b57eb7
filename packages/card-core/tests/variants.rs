use chrono::{DateTime, Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use storefront_card_core::{
    render::{DetailRow, HeadlineRow, ImageRegion, PriceLabel, SalePriceLabel},
    theme::COLORS,
    CardAttributes, CardConfig, CardRenderer, DisplayVariant, FixedClock, RenderTree,
    TextDecoration,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
}

fn renderer() -> CardRenderer<FixedClock> {
    CardRenderer::with_clock(&CardConfig::default(), FixedClock(now()))
}

fn air_zoom(released: DateTime<Utc>) -> CardAttributes {
    CardAttributes::new("abc", "Air Zoom", "/assets/air-zoom.jpg", 150.0, released, 3)
}

#[test]
fn old_item_without_sale_is_default() {
    let r = renderer();
    let tree = r.render(&air_zoom(now() - Duration::days(730))).unwrap();

    assert_eq!(
        tree,
        RenderTree {
            variant: DisplayVariant::Default,
            href: "/item/abc".to_string(),
            image: ImageRegion {
                src: "/assets/air-zoom.jpg".to_string(),
                alt: String::new(),
                badge: None,
            },
            spacer: 12,
            headline: HeadlineRow {
                name: "Air Zoom".to_string(),
                price: PriceLabel {
                    text: r.format_price(150.0),
                    color: COLORS.gray.g900,
                    decoration: TextDecoration::Initial,
                },
            },
            details: DetailRow {
                color_info: "3 Colors".to_string(),
                sale_price: None,
            },
        }
    );
}

#[test]
fn discounted_item_is_on_sale() {
    let r = renderer();
    let attrs = air_zoom(now() - Duration::days(730)).with_sale_price(110.0);
    let tree = r.render(&attrs).unwrap();

    assert_eq!(tree.variant, DisplayVariant::OnSale);
    assert_eq!(tree.badge().map(|b| b.label), Some("Sale"));
    assert_eq!(tree.headline.price.decoration, TextDecoration::LineThrough);
    assert_eq!(tree.headline.price.color, COLORS.gray.g700);
    assert_eq!(tree.headline.price.text, r.format_price(150.0));
    assert_eq!(
        tree.details.sale_price,
        Some(SalePriceLabel {
            text: r.format_price(110.0),
            color: COLORS.primary,
        })
    );
}

#[test]
fn fresh_item_is_new_release() {
    let tree = renderer()
        .render(&air_zoom(now() - Duration::days(5)))
        .unwrap();

    assert_eq!(tree.variant, DisplayVariant::NewRelease);
    assert_eq!(tree.badge().map(|b| b.label), Some("Just Released!"));
    assert_eq!(tree.headline.price.decoration, TextDecoration::Initial);
    assert_eq!(tree.details.sale_price, None);
}

#[test]
fn sale_wins_over_new_release() {
    let attrs = air_zoom(now() - Duration::days(5)).with_sale_price(110.0);
    assert_eq!(renderer().render(&attrs).unwrap().variant, DisplayVariant::OnSale);

    let future = air_zoom(now() + Duration::days(40)).with_sale_price(1.0);
    assert_eq!(renderer().render(&future).unwrap().variant, DisplayVariant::OnSale);
}

#[test]
fn color_labels_pluralize() {
    let r = renderer();
    let mut attrs = air_zoom(now());

    attrs.num_of_colors = 1;
    assert_eq!(r.render(&attrs).unwrap().details.color_info, "1 Color");

    attrs.num_of_colors = 4;
    assert_eq!(r.render(&attrs).unwrap().details.color_info, "4 Colors");

    attrs.num_of_colors = 0;
    assert_eq!(r.render(&attrs).unwrap().details.color_info, "0 Colors");
}

#[test]
fn window_boundary_is_exclusive() {
    let r = renderer();
    let edge = now() - r.window().span();

    let at_edge = r.render(&air_zoom(edge)).unwrap();
    assert_eq!(at_edge.variant, DisplayVariant::Default);

    let just_inside = r.render(&air_zoom(edge + Duration::seconds(1))).unwrap();
    assert_eq!(just_inside.variant, DisplayVariant::NewRelease);
}

#[test]
fn rendering_is_idempotent() {
    let r = renderer();
    let attrs = air_zoom(now() - Duration::days(2)).with_sale_price(99.0);
    assert_eq!(r.render(&attrs).unwrap(), r.render(&attrs).unwrap());
}

#[test]
fn unusual_values_render_as_is() {
    let r = renderer();
    let mut attrs = air_zoom(now() + Duration::days(3650));
    attrs.price = -20.0;
    attrs.num_of_colors = 0;

    let tree = r.render(&attrs).unwrap();
    assert_eq!(tree.variant, DisplayVariant::NewRelease);
    assert_eq!(tree.headline.price.text, "$-20");
}

#[test]
fn non_finite_price_is_invalid() {
    let mut attrs = air_zoom(now());
    attrs.price = f64::NAN;
    let err = renderer().render(&attrs).unwrap_err();
    assert_eq!(err.field(), Some("price"));
}

#[test]
fn config_drives_window_and_links() {
    let config = CardConfig {
        recent_window_days: 3,
        link_prefix: "/shoe".into(),
        minor_units_per_major: 100,
        ..Default::default()
    };
    let r = CardRenderer::with_clock(&config, FixedClock(now()));
    let tree = r.render(&air_zoom(now() - Duration::days(5))).unwrap();

    assert_eq!(tree.variant, DisplayVariant::Default);
    assert_eq!(tree.href, "/shoe/abc");
    assert_eq!(tree.headline.price.text, "$1.5");
}
