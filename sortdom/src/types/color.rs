use palette::{IntoColor, Mix, Oklch, Srgb};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Perceptual blend toward `other`. `amount` 0.0 keeps self, 1.0 is `other`.
    pub fn mix(&self, other: &Color, amount: f32) -> Self {
        let mixed = self.to_oklch().mix(other.to_oklch(), amount.clamp(0.0, 1.0));
        Self::Oklch {
            l: mixed.l,
            c: mixed.chroma,
            h: mixed.hue.into_positive_degrees(),
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }

    fn to_oklch(&self) -> Oklch {
        match self {
            Self::Oklch { l, c, h } => Oklch::new(*l, *c, *h),
            Self::Rgb { r, g, b } => Srgb::new(*r, *g, *b).into_format::<f32>().into_color(),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
