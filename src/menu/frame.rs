//! Fixed-width frame pieces shared by every menu screen.
//!
//! Every row is 57 visible columns wide: an outer `|`, 55 inner columns and a
//! closing `|`. Two-column rows split the inner area into 27-column cells.

use crate::core::style::Palette;

pub const TOP_BORDER: &str = "/=======================================================\\";
pub const BOTTOM_BORDER: &str = "\\=======================================================/";
pub const SEPARATOR: &str = "|-------------------------------------------------------|";

/// Visible width of a title field (the inner area minus its two margin spaces).
pub const TITLE_WIDTH: usize = 53;

/// Visible width of a cell's text, excluding the leading margin space.
const CELL_TEXT_WIDTH: usize = 26;

/// ANSI sequence that homes the cursor and clears the screen.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Center `text` in `width` columns, padding with `fill`.
///
/// Odd padding puts the extra column on the right.
pub fn center(text: &str, fill: char, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = width - len;
    let left = pad / 2;
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(fill, pad - left));
    out
}

/// A full-width row whose content has already been painted.
fn framed(painted: &str) -> String {
    format!("| {painted} |\n")
}

/// Menu title row, e.g. `| ~~~ [ Remove Menu ] ~~~ |`.
pub fn title_row(title: &str, paint: impl Fn(&str) -> String) -> String {
    framed(&paint(&center(&format!(" [ {title} ] "), '~', TITLE_WIDTH)))
}

/// One 27-column cell. `plain` decides the padding, `painted` is what gets printed.
pub fn cell(plain: &str, painted: &str) -> String {
    let pad = CELL_TEXT_WIDTH.saturating_sub(plain.chars().count());
    format!(" {painted}{}", " ".repeat(pad))
}

/// A two-column row of plain text.
pub fn two_column_row(left: &str, right: &str) -> String {
    format!("|{}|{}|\n", cell(left, left), cell(right, right))
}

/// The KIAUH banner printed above menus that have a header.
pub fn header(palette: Palette) -> String {
    let mut out = String::new();
    out.push_str(TOP_BORDER);
    out.push('\n');
    out.push_str(&framed(&palette.cyan(&center(" [ KIAUH ] ", '~', TITLE_WIDTH))));
    out.push_str(&framed(&palette.cyan(&center(
        "Klipper Installation And Update Helper",
        ' ',
        TITLE_WIDTH,
    ))));
    out.push_str(&framed(&palette.cyan(&"~".repeat(TITLE_WIDTH))));
    out.push_str(BOTTOM_BORDER);
    out.push('\n');
    out
}

/// Footer offering `B) « Back` and `Q) Quit`.
pub fn back_footer(palette: Palette) -> String {
    const BACK: &str = "B) « Back";
    const QUIT: &str = "Q) Quit";
    format!(
        "{SEPARATOR}\n|{}|{}|\n{BOTTOM_BORDER}\n",
        cell(BACK, &palette.green(BACK)),
        cell(QUIT, &palette.red(QUIT)),
    )
}

/// Prompt shown after the footer.
pub fn prompt(palette: Palette) -> String {
    palette.cyan("###### Perform action: ")
}

/// Message for input that selects nothing.
pub fn invalid_input(palette: Palette, choice: &str, min: usize, max: usize) -> String {
    if !choice.is_empty() && choice.chars().all(char::is_alphabetic) {
        palette.red("Invalid input.")
    } else {
        palette.red(&format!("Invalid input. Select a number between {min} and {max}."))
    }
}
