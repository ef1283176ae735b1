//! Presentation attributes and theming.
//!
//! Styles here are plain data, deliberately independent of any UI toolkit:
//! the host editing surface maps them onto its own span representation.
//! A [`Theme`] is an explicit value passed to the renderer per call; there
//! is no process-wide default.

/// An RGB color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

/// Typography scale for heading text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontScale {
    TitleLarge,
    TitleMedium,
    TitleSmall,
}

/// Font weight attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Bold,
}

/// Font slant attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSlant {
    Italic,
}

/// Font family attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Monospace,
}

/// Text decoration attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Strikethrough,
}

/// A set of presentation attributes for one text span.
///
/// Each field is one attribute kind. When overlapping spans are merged,
/// a set field overrides the same kind from earlier spans while leaving
/// the other kinds intact (see [`SpanStyle::patch`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanStyle {
    pub color: Option<Rgb>,
    pub background: Option<Rgb>,
    pub scale: Option<FontScale>,
    pub weight: Option<FontWeight>,
    pub slant: Option<FontSlant>,
    pub family: Option<FontFamily>,
    pub decoration: Option<Decoration>,
}

impl SpanStyle {
    /// A style that sets no attributes.
    pub const fn new() -> Self {
        Self {
            color: None,
            background: None,
            scale: None,
            weight: None,
            slant: None,
            family: None,
            decoration: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn background(mut self, background: Rgb) -> Self {
        self.background = Some(background);
        self
    }

    /// Set the typography scale.
    #[must_use]
    pub const fn scale(mut self, scale: FontScale) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set the font weight.
    #[must_use]
    pub const fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the font slant.
    #[must_use]
    pub const fn slant(mut self, slant: FontSlant) -> Self {
        self.slant = Some(slant);
        self
    }

    /// Set the font family.
    #[must_use]
    pub const fn family(mut self, family: FontFamily) -> Self {
        self.family = Some(family);
        self
    }

    /// Set the text decoration.
    #[must_use]
    pub const fn decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = Some(decoration);
        self
    }

    /// Merge `other` over `self`: attributes set in `other` win, the rest
    /// are kept. This is the last-applied-wins rule for same-kind
    /// conflicts; different kinds simply combine.
    #[must_use]
    pub const fn patch(mut self, other: Self) -> Self {
        if other.color.is_some() {
            self.color = other.color;
        }
        if other.background.is_some() {
            self.background = other.background;
        }
        if other.scale.is_some() {
            self.scale = other.scale;
        }
        if other.weight.is_some() {
            self.weight = other.weight;
        }
        if other.slant.is_some() {
            self.slant = other.slant;
        }
        if other.family.is_some() {
            self.family = other.family;
        }
        if other.decoration.is_some() {
            self.decoration = other.decoration;
        }
        self
    }

    /// True when no attribute is set.
    pub const fn is_plain(&self) -> bool {
        self.color.is_none()
            && self.background.is_none()
            && self.scale.is_none()
            && self.weight.is_none()
            && self.slant.is_none()
            && self.family.is_none()
            && self.decoration.is_none()
    }
}

/// Color roles and composed styles for markdown rendering.
///
/// Role colors: `primary` for heading markers, emphasis delimiters and
/// link urls; `secondary` for parens and quoted text; `tertiary` for
/// structural markers (lists, links, rules, task boxes, code fences).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary accent color
    pub primary: Rgb,
    /// Secondary (de-emphasized) color
    pub secondary: Rgb,
    /// Tertiary (marker) color
    pub tertiary: Rgb,
    /// Level-1 heading style
    pub title_large: SpanStyle,
    /// Level-2 heading style
    pub title_medium: SpanStyle,
    /// Level-3+ heading style
    pub title_small: SpanStyle,
    /// Strong (bold) style
    pub bold: SpanStyle,
    /// Emphasis (italic) style
    pub emphasis: SpanStyle,
    /// Strikethrough style (decoration plus dimmed color)
    pub strikethrough: SpanStyle,
    /// Inline code style (monospace plus a background wash)
    pub inline_code: SpanStyle,
    /// List bullet/number marker style
    pub list_marker: SpanStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a theme for dark surfaces.
    pub const fn dark() -> Self {
        Self::from_roles(
            Rgb::new(0x82, 0xAA, 0xFF),
            Rgb::new(0x9E, 0x9E, 0x9E),
            Rgb::new(0xE5, 0xC0, 0x7B),
            Rgb::new(0x80, 0x80, 0x80),
            Rgb::new(0x2D, 0x2D, 0x2D),
        )
    }

    /// Create a theme for light surfaces.
    pub const fn light() -> Self {
        Self::from_roles(
            Rgb::new(0x1A, 0x56, 0xDB),
            Rgb::new(0x6B, 0x72, 0x80),
            Rgb::new(0xB4, 0x59, 0x09),
            Rgb::new(0xA0, 0xA0, 0xA0),
            Rgb::new(0xE8, 0xE8, 0xE8),
        )
    }

    /// The heading style for a given level: 1 → large, 2 → medium,
    /// everything else → small.
    pub const fn title(&self, level: u8) -> SpanStyle {
        match level {
            1 => self.title_large,
            2 => self.title_medium,
            _ => self.title_small,
        }
    }

    const fn from_roles(
        primary: Rgb,
        secondary: Rgb,
        tertiary: Rgb,
        dim: Rgb,
        code_bg: Rgb,
    ) -> Self {
        Self {
            primary,
            secondary,
            tertiary,
            title_large: SpanStyle::new().scale(FontScale::TitleLarge),
            title_medium: SpanStyle::new().scale(FontScale::TitleMedium),
            title_small: SpanStyle::new().scale(FontScale::TitleSmall),
            bold: SpanStyle::new().weight(FontWeight::Bold),
            emphasis: SpanStyle::new().slant(FontSlant::Italic),
            strikethrough: SpanStyle::new()
                .decoration(Decoration::Strikethrough)
                .color(dim),
            inline_code: SpanStyle::new()
                .family(FontFamily::Monospace)
                .background(code_bg),
            list_marker: SpanStyle::new()
                .color(tertiary)
                .weight(FontWeight::Bold)
                .family(FontFamily::Monospace),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_same_kind_last_wins() {
        let red = SpanStyle::new().color(Rgb::new(255, 0, 0));
        let blue = SpanStyle::new().color(Rgb::new(0, 0, 255));
        assert_eq!(red.patch(blue).color, Some(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn test_patch_different_kinds_combine() {
        let bold = SpanStyle::new().weight(FontWeight::Bold);
        let italic = SpanStyle::new().slant(FontSlant::Italic);
        let merged = bold.patch(italic);
        assert_eq!(merged.weight, Some(FontWeight::Bold));
        assert_eq!(merged.slant, Some(FontSlant::Italic));
    }

    #[test]
    fn test_patch_unset_does_not_clear() {
        let mono = SpanStyle::new().family(FontFamily::Monospace);
        assert_eq!(
            mono.patch(SpanStyle::new()).family,
            Some(FontFamily::Monospace)
        );
    }

    #[test]
    fn test_plain_style() {
        assert!(SpanStyle::new().is_plain());
        assert!(!SpanStyle::new().weight(FontWeight::Bold).is_plain());
    }

    #[test]
    fn test_title_scale_by_level() {
        let theme = Theme::dark();
        assert_eq!(theme.title(1).scale, Some(FontScale::TitleLarge));
        assert_eq!(theme.title(2).scale, Some(FontScale::TitleMedium));
        assert_eq!(theme.title(3).scale, Some(FontScale::TitleSmall));
        assert_eq!(theme.title(6).scale, Some(FontScale::TitleSmall));
    }

    #[test]
    fn test_themes_compare_by_value() {
        assert_eq!(Theme::dark(), Theme::default());
        assert_ne!(Theme::dark(), Theme::light());
    }

    #[test]
    fn test_patch_background_last_wins() {
        let dark = SpanStyle::new().background(Rgb::new(0x2D, 0x2D, 0x2D));
        let light = SpanStyle::new().background(Rgb::new(0xE8, 0xE8, 0xE8));
        assert_eq!(
            dark.patch(light).background,
            Some(Rgb::new(0xE8, 0xE8, 0xE8))
        );
        assert!(!dark.is_plain());
    }

    #[test]
    fn test_inline_code_style_has_background_wash() {
        for theme in [Theme::dark(), Theme::light()] {
            assert_eq!(theme.inline_code.family, Some(FontFamily::Monospace));
            assert!(theme.inline_code.background.is_some());
        }
        assert_ne!(
            Theme::dark().inline_code.background,
            Theme::light().inline_code.background
        );
    }

    #[test]
    fn test_strikethrough_style_is_dimmed() {
        let theme = Theme::dark();
        assert_eq!(
            theme.strikethrough.decoration,
            Some(Decoration::Strikethrough)
        );
        assert!(theme.strikethrough.color.is_some());
    }
}
