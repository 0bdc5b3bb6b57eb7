//! Palette and font weights shared by every card.

/// Named colors used by the card styles.
pub struct Colors {
    pub white: &'static str,
    pub gray: Grays,
    pub primary: &'static str,
    pub secondary: &'static str,
}

pub struct Grays {
    pub g700: &'static str,
    pub g900: &'static str,
}

pub struct Weights {
    pub medium: u16,
}

pub const COLORS: Colors = Colors {
    white: "hsl(0deg 0% 100%)",
    gray: Grays {
        g700: "hsl(220deg 5% 40%)",
        g900: "hsl(220deg 3% 20%)",
    },
    primary: "hsl(340deg 65% 47%)",
    secondary: "hsl(240deg 60% 63%)",
};

pub const WEIGHTS: Weights = Weights { medium: 600 };
