//! Text menus and the input loop they share.
//!
//! A menu renders itself into a string, names the numbers it answers to, and
//! handles a selection. [`run`] owns everything else: clearing the screen,
//! the header banner, the back/quit footer, the prompt, and invalid input.

pub mod frame;
pub mod remove;

use std::io::{self, BufRead, BufReader, Read, Write};

use crate::core::style::Palette;
use crate::delegate::DelegateError;

pub use remove::RemoveMenu;

/// How a menu was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// Return to the parent menu
    Back,
    /// Leave the program
    Quit,
}

/// What the loop does after a selection was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Redisplay the current menu
    Stay,
    /// Leave the current menu
    Exit(MenuExit),
}

/// Terminal input and output for one interactive session.
pub struct Session<'io> {
    input: &'io mut dyn BufRead,
    output: &'io mut dyn Write,
    palette: Palette,
    clear_screen: bool,
}

impl<'io> Session<'io> {
    pub fn new(input: &'io mut dyn BufRead, output: &'io mut dyn Write, palette: Palette) -> Self {
        Self {
            input,
            output,
            palette,
            clear_screen: false,
        }
    }

    /// Clear the screen before each menu is drawn.
    pub fn clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Write text as-is.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())
    }

    /// Write one line.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    /// Read one answer, trimmed. `None` at end of input.
    pub fn read_choice(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}

/// Line reader that never consumes input past the newline it stops at.
///
/// Delegated programs read the same stdin after a selection, so the menu
/// must leave every byte after its answer for them.
pub fn line_reader<R: Read>(inner: R) -> BufReader<R> {
    BufReader::with_capacity(1, inner)
}

/// A screen of numbered options.
pub trait Menu {
    /// Title used in diagnostics.
    fn title(&self) -> &str;

    /// Whether the KIAUH banner is drawn above this menu.
    fn has_header(&self) -> bool {
        true
    }

    /// The menu body, between the header and the footer.
    fn render(&self, palette: Palette) -> String;

    /// Selection numbers this menu answers to, ascending.
    fn options(&self) -> Vec<usize>;

    /// Handle a selection that is one of [`Menu::options`].
    fn select(&mut self, choice: usize, session: &mut Session<'_>) -> Result<Flow, DelegateError>;
}

/// Something that can be entered from a menu and eventually returns to it.
pub trait MenuEntry {
    fn enter(&mut self, session: &mut Session<'_>) -> Result<MenuExit, DelegateError>;
}

/// Drive `menu` until the user goes back or quits.
///
/// End of input counts as quitting. A failed selection is reported on the
/// session output and the menu is drawn again.
pub fn run(menu: &mut dyn Menu, session: &mut Session<'_>) -> io::Result<MenuExit> {
    let options = menu.options();
    let min = options.first().copied().unwrap_or(0);
    let max = options.last().copied().unwrap_or(0);

    loop {
        let palette = session.palette();
        let mut screen = String::new();
        if session.clear_screen {
            screen.push_str(frame::CLEAR_SCREEN);
        }
        if menu.has_header() {
            screen.push_str(&frame::header(palette));
        }
        screen.push_str(&menu.render(palette));
        screen.push_str(&frame::back_footer(palette));
        screen.push_str(&frame::prompt(palette));
        session.write_str(&screen)?;
        session.flush()?;

        let Some(choice) = session.read_choice()? else {
            tracing::debug!(menu = menu.title(), "end of input");
            session.line("")?;
            return Ok(MenuExit::Quit);
        };

        match choice.to_lowercase().as_str() {
            "q" => return Ok(MenuExit::Quit),
            "b" => return Ok(MenuExit::Back),
            _ => {}
        }

        let selected = choice.parse::<usize>().ok().filter(|n| options.contains(n));
        let Some(number) = selected else {
            tracing::debug!(menu = menu.title(), choice = %choice, "invalid selection");
            let message = frame::invalid_input(palette, &choice, min, max);
            session.line(&message)?;
            continue;
        };

        tracing::debug!(menu = menu.title(), number, "selected");
        match menu.select(number, session) {
            Ok(Flow::Stay) => {}
            Ok(Flow::Exit(exit)) => return Ok(exit),
            Err(e) => {
                tracing::warn!(menu = menu.title(), number, error = %e, "selection failed");
                let message = format!("{} {}", palette.red("error:"), e);
                session.line(&message)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Two-option menu that records what it was asked to do.
    struct Recorder {
        picked: Vec<usize>,
        fail_on: Option<usize>,
        exit_on: Option<(usize, MenuExit)>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                picked: Vec::new(),
                fail_on: None,
                exit_on: None,
            }
        }
    }

    impl Menu for Recorder {
        fn title(&self) -> &str {
            "recorder"
        }

        fn has_header(&self) -> bool {
            false
        }

        fn render(&self, _palette: Palette) -> String {
            "<body>\n".to_string()
        }

        fn options(&self) -> Vec<usize> {
            vec![1, 2]
        }

        fn select(&mut self, choice: usize, _session: &mut Session<'_>) -> Result<Flow, DelegateError> {
            self.picked.push(choice);
            if self.fail_on == Some(choice) {
                return Err(DelegateError::EmptyCommand("recorder"));
            }
            match self.exit_on {
                Some((n, exit)) if n == choice => Ok(Flow::Exit(exit)),
                _ => Ok(Flow::Stay),
            }
        }
    }

    fn drive(menu: &mut Recorder, input: &str) -> (MenuExit, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let exit = {
            let mut session = Session::new(&mut reader, &mut out, Palette::PLAIN);
            run(menu, &mut session).unwrap()
        };
        (exit, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_back_returns_back() {
        let mut menu = Recorder::new();
        let (exit, _) = drive(&mut menu, "b\n");
        assert_eq!(exit, MenuExit::Back);
        assert!(menu.picked.is_empty());
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        let mut menu = Recorder::new();
        let (exit, _) = drive(&mut menu, "  Q \n");
        assert_eq!(exit, MenuExit::Quit);
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut menu = Recorder::new();
        let (exit, _) = drive(&mut menu, "");
        assert_eq!(exit, MenuExit::Quit);
    }

    #[test]
    fn test_selection_dispatches_then_redraws() {
        let mut menu = Recorder::new();
        let (exit, out) = drive(&mut menu, "2\n1\nb\n");
        assert_eq!(exit, MenuExit::Back);
        assert_eq!(menu.picked, vec![2, 1]);
        assert_eq!(out.matches("<body>").count(), 3);
        assert_eq!(out.matches("###### Perform action: ").count(), 3);
    }

    #[test]
    fn test_invalid_number_reports_range() {
        let mut menu = Recorder::new();
        let (_, out) = drive(&mut menu, "7\nb\n");
        assert!(out.contains("Invalid input. Select a number between 1 and 2.\n"));
        assert!(menu.picked.is_empty());
    }

    #[test]
    fn test_invalid_letters_report_plain_message() {
        let mut menu = Recorder::new();
        let (_, out) = drive(&mut menu, "x\nb\n");
        assert!(out.contains("Invalid input.\n"));
        assert!(!out.contains("between"));
    }

    #[test]
    fn test_failed_selection_keeps_menu_open() {
        let mut menu = Recorder::new();
        menu.fail_on = Some(1);
        let (exit, out) = drive(&mut menu, "1\nb\n");
        assert_eq!(exit, MenuExit::Back);
        assert!(out.contains("error: empty command configured for recorder\n"));
    }

    #[test]
    fn test_selection_can_exit_menu() {
        let mut menu = Recorder::new();
        menu.exit_on = Some((2, MenuExit::Quit));
        let (exit, _) = drive(&mut menu, "2\n1\n");
        assert_eq!(exit, MenuExit::Quit);
        assert_eq!(menu.picked, vec![2]);
    }

    #[test]
    fn test_screen_layout_without_header() {
        let mut menu = Recorder::new();
        let (_, out) = drive(&mut menu, "b\n");
        let expected = format!(
            "<body>\n{}###### Perform action: ",
            frame::back_footer(Palette::PLAIN)
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_line_reader_leaves_rest_of_input() {
        let mut reader = line_reader(Cursor::new(b"2\n1\n".to_vec()));
        let mut out = Vec::new();
        {
            let mut session = Session::new(&mut reader, &mut out, Palette::PLAIN);
            assert_eq!(session.read_choice().unwrap().as_deref(), Some("2"));
        }
        assert_eq!(reader.get_ref().position(), 2);
        assert_eq!(reader.buffer(), b"");
    }

    #[test]
    fn test_clear_screen_prefix() {
        let mut menu = Recorder::new();
        let mut reader = Cursor::new(b"b\n".to_vec());
        let mut out = Vec::new();
        {
            let mut session =
                Session::new(&mut reader, &mut out, Palette::PLAIN).clear_screen(true);
            run(&mut menu, &mut session).unwrap();
        }
        assert!(out.starts_with(frame::CLEAR_SCREEN.as_bytes()));
    }
}
