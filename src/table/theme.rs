/// Built-in themes and the process-wide theme store.
use console::Style;

use super::errors::RenderError;

/// Name of the theme used when neither the flag nor the environment
/// override is set.
pub const DEFAULT_THEME: &str = "solarized-dark";

// Solarized accent colors on the xterm-256 palette.
const SOLARIZED_BLUE: u8 = 33;
const SOLARIZED_CYAN: u8 = 37;
const SOLARIZED_YELLOW: u8 = 136;
const SOLARIZED_BASE0: u8 = 244;

/// Box-drawing glyph set for a theme's borders.
///
/// The junction glyphs (`*_tee`, `cross`) are what let a full-width title
/// bar, the header separator, and per-row separators meet the column
/// dividers cleanly.
#[derive(Debug, Clone, Copy)]
pub struct BorderGlyphs {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub left_tee: char,
    pub right_tee: char,
    pub top_tee: char,
    pub bottom_tee: char,
    pub cross: char,
}

/// Unicode box-drawing borders.
pub const UNICODE_BORDERS: BorderGlyphs = BorderGlyphs {
    horizontal: '─',
    vertical: '│',
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    left_tee: '├',
    right_tee: '┤',
    top_tee: '┬',
    bottom_tee: '┴',
    cross: '┼',
};

/// Plain ASCII borders for terminals without box-drawing glyphs.
pub const ASCII_BORDERS: BorderGlyphs = BorderGlyphs {
    horizontal: '-',
    vertical: '|',
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    left_tee: '+',
    right_tee: '+',
    top_tee: '+',
    bottom_tee: '+',
    cross: '+',
};

/// A named, immutable bundle of border glyphs and cell styles.
///
/// Themes are loaded once into the [`ThemeStore`] at process start and
/// borrowed by every render call; nothing mutates them afterwards, so a
/// single `&Theme` is safe to share across concurrent renders.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Unique theme name, used for store lookup.
    pub name: &'static str,
    /// Border glyph set.
    pub borders: BorderGlyphs,
    /// Glyph drawn between the label and value columns of a detail view.
    pub key_value_separator: &'static str,
    /// Whether to draw a separator rule between data rows.
    pub row_separators: bool,
    /// Style for the title bar text.
    pub title_style: Style,
    /// Style for header cells.
    pub header_style: Style,
    /// Style for key (label) cells.
    pub key_style: Style,
    /// Style for value and data cells.
    pub value_style: Style,
}

fn solarized_dark() -> Theme {
    Theme {
        name: "solarized-dark",
        borders: UNICODE_BORDERS,
        key_value_separator: " : ",
        row_separators: false,
        title_style: Style::new().color256(SOLARIZED_BLUE).bold(),
        header_style: Style::new().color256(SOLARIZED_YELLOW).bold(),
        key_style: Style::new().color256(SOLARIZED_CYAN),
        value_style: Style::new().color256(SOLARIZED_BASE0),
    }
}

fn plain() -> Theme {
    Theme {
        name: "plain",
        borders: ASCII_BORDERS,
        key_value_separator: " : ",
        row_separators: false,
        title_style: Style::new(),
        header_style: Style::new(),
        key_style: Style::new(),
        value_style: Style::new(),
    }
}

fn no_color() -> Theme {
    Theme {
        name: "no-color",
        borders: UNICODE_BORDERS,
        key_value_separator: " : ",
        row_separators: false,
        title_style: Style::new(),
        header_style: Style::new(),
        key_style: Style::new(),
        value_style: Style::new(),
    }
}

/// The fixed registry of built-in themes.
///
/// Constructed once in `main` and passed by reference into every render
/// call. Lookup is the only operation; there is no I/O and no mutation
/// after construction.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    themes: Vec<Theme>,
}

impl ThemeStore {
    /// Build the store with all built-in themes.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            themes: vec![solarized_dark(), plain(), no_color()],
        }
    }

    /// Look up a theme by name.
    ///
    /// No fallback substitution is performed; callers decide whether to
    /// retry with a default.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownTheme`] when no theme has the name.
    pub fn load(&self, name: &str) -> Result<&Theme, RenderError> {
        self.themes
            .iter()
            .find(|theme| theme.name == name)
            .ok_or_else(|| RenderError::UnknownTheme {
                name: name.to_owned(),
            })
    }

    /// Theme names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.themes.iter().map(|theme| theme.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_solarized_dark() {
        let store = ThemeStore::builtin();
        let theme = store.load("solarized-dark").unwrap();
        assert_eq!(theme.name, "solarized-dark");
    }

    #[test]
    fn test_load_unknown_theme() {
        let store = ThemeStore::builtin();
        let result = store.load("does-not-exist");
        assert!(matches!(
            result,
            Err(RenderError::UnknownTheme { ref name }) if name == "does-not-exist"
        ));
    }

    #[test]
    fn test_default_theme_is_registered() {
        let store = ThemeStore::builtin();
        assert!(store.load(DEFAULT_THEME).is_ok());
    }

    #[test]
    fn test_names_in_registration_order() {
        let store = ThemeStore::builtin();
        let names: Vec<&str> = store.names().collect();
        assert_eq!(names, ["solarized-dark", "plain", "no-color"]);
    }

    #[test]
    fn test_repeated_load_returns_same_theme() {
        let store = ThemeStore::builtin();
        let first = store.load("plain").unwrap();
        let second = store.load("plain").unwrap();
        assert!(std::ptr::eq(first, second));
    }
}
