// Theme palette: page chrome plus the three market-band colors.
// The band colors are semantic, not decorative: green marks the
// cheaper-than-market threshold, yellow the normal range, red the
// expensive threshold. Both palettes keep that association.

use shared::models::MarketCategory;

#[derive(Debug, Clone, PartialEq)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub panel_background: String,
    pub panel_border: String,
    pub band_cheap: String,
    pub band_normal: String,
    pub band_expensive: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            panel_background: "#808080".to_string(),
            panel_border: "#dddddd".to_string(),
            band_cheap: "#008000".to_string(),
            band_normal: "#ffff00".to_string(),
            band_expensive: "#ff0000".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#1e1e1e".to_string(),
            panel_background: "#e8e8e8".to_string(),
            panel_border: "#bbbbbb".to_string(),
            band_cheap: "#2e7d32".to_string(),
            band_normal: "#b58900".to_string(),
            band_expensive: "#c62828".to_string(),
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::default_light(),
            _ => Self::default_dark(),
        }
    }

    pub fn color_for(&self, category: MarketCategory) -> &str {
        match category {
            MarketCategory::BelowMarket => &self.band_cheap,
            MarketCategory::InRange => &self.band_normal,
            MarketCategory::AboveMarket => &self.band_expensive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_color_association_holds_in_both_palettes() {
        for palette in [ThemePalette::default_dark(), ThemePalette::default_light()] {
            assert_eq!(
                palette.color_for(MarketCategory::BelowMarket),
                palette.band_cheap
            );
            assert_eq!(
                palette.color_for(MarketCategory::InRange),
                palette.band_normal
            );
            assert_eq!(
                palette.color_for(MarketCategory::AboveMarket),
                palette.band_expensive
            );
        }
    }

    #[test]
    fn unknown_theme_name_falls_back_to_dark() {
        assert_eq!(ThemePalette::from_name("solarized"), ThemePalette::default_dark());
    }
}
