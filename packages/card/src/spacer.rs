use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Fixed-size gap. Without an axis it takes `size` in both directions.
#[component]
pub fn Spacer(size: u32, axis: Option<Axis>) -> Element {
    let width = match axis {
        Some(Axis::Vertical) => 1,
        _ => size,
    };
    let height = match axis {
        Some(Axis::Horizontal) => 1,
        _ => size,
    };

    rsx! {
        span {
            class: "spacer",
            display: "block",
            width: "{width}px",
            min_width: "{width}px",
            height: "{height}px",
            min_height: "{height}px",
        }
    }
}
