use console::Style;
use once_cell::sync::Lazy;

pub static BANNER: Lazy<Style> = Lazy::new(|| Style::new().blue().bold());
pub static QUESTION: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static KEYWORD: Lazy<Style> = Lazy::new(|| Style::new().color256(208));
pub static MENU_HINT: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static CURRENT_VALUE: Lazy<Style> = Lazy::new(|| Style::new().cyan().italic());

/// `(or 'n' to skip)` with the keyword highlighted.
pub fn skip_hint() -> String {
    format!("(or '{}' to skip)", KEYWORD.apply_to("n"))
}
