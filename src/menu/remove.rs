//! The Remove Menu.
//!
//! Lists every removable component by category and hands a selection to the
//! routine responsible for it. Configurations and backups are never touched
//! from here.

use crate::component::{Category, Component};
use crate::core::style::Palette;
use crate::delegate::{DelegateError, Delegates, SetupIntent};

use super::frame::{self, SEPARATOR, TOP_BORDER};
use super::{Flow, Menu, MenuExit, Session};

/// A removal carried out in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// Run the Klipper setup entry point with the removal intent
    Klipper,
    /// Routine without a body yet; announces itself and returns
    Placeholder(Component),
}

/// A nested menu that takes over until the user leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubMenu {
    MoonrakerRemove,
    MainsailRemove,
}

/// What selecting a component does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Perform(Removal),
    Enter(SubMenu),
}

/// The handler for each component.
pub fn action_for(component: Component) -> MenuAction {
    match component {
        Component::Klipper => MenuAction::Perform(Removal::Klipper),
        Component::Moonraker => MenuAction::Enter(SubMenu::MoonrakerRemove),
        Component::Mainsail => MenuAction::Enter(SubMenu::MainsailRemove),
        Component::Fluidd
        | Component::KlipperScreen
        | Component::Crowsnest
        | Component::MjpgStreamer
        | Component::PrettyGcode
        | Component::TelegramBot
        | Component::Obico
        | Component::OctoEverywhere
        | Component::Mobileraker
        | Component::Nginx => MenuAction::Perform(Removal::Placeholder(component)),
    }
}

/// One line of a menu column.
#[derive(Clone, Copy)]
enum Entry {
    Heading(Category),
    Item(Component),
    Blank,
}

const LEFT_COLUMN: [Entry; 12] = [
    Entry::Heading(Category::FirmwareApi),
    Entry::Item(Component::Klipper),
    Entry::Item(Component::Moonraker),
    Entry::Blank,
    Entry::Heading(Category::WebInterface),
    Entry::Item(Component::Mainsail),
    Entry::Item(Component::Fluidd),
    Entry::Blank,
    Entry::Heading(Category::TouchscreenGui),
    Entry::Item(Component::KlipperScreen),
    Entry::Blank,
    Entry::Blank,
];

const RIGHT_COLUMN: [Entry; 12] = [
    Entry::Heading(Category::WebcamStreamer),
    Entry::Item(Component::Crowsnest),
    Entry::Item(Component::MjpgStreamer),
    Entry::Blank,
    Entry::Heading(Category::Other),
    Entry::Item(Component::PrettyGcode),
    Entry::Item(Component::TelegramBot),
    Entry::Item(Component::Obico),
    Entry::Item(Component::OctoEverywhere),
    Entry::Item(Component::Mobileraker),
    Entry::Item(Component::Nginx),
    Entry::Blank,
];

impl Entry {
    fn text(self) -> String {
        match self {
            Entry::Heading(category) => category.heading().to_string(),
            Entry::Item(component) => {
                format!("{:>2}) [{}]", component.selection(), component.display_name())
            }
            Entry::Blank => String::new(),
        }
    }
}

/// Render the Remove Menu body.
pub fn render(palette: Palette) -> String {
    let mut out = String::new();
    out.push_str(TOP_BORDER);
    out.push('\n');
    out.push_str(&frame::title_row("Remove Menu", |s| palette.red(s)));
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str("| INFO: Configurations and/or any backups will be kept! |\n");
    out.push_str(SEPARATOR);
    out.push('\n');
    for (left, right) in LEFT_COLUMN.iter().zip(RIGHT_COLUMN.iter()) {
        out.push_str(&frame::two_column_row(&left.text(), &right.text()));
    }
    out
}

/// Menu listing every removable component.
pub struct RemoveMenu {
    delegates: Delegates,
}

impl RemoveMenu {
    pub fn new(delegates: Delegates) -> Self {
        Self { delegates }
    }

    /// Run the handler for `component` exactly once.
    pub fn dispatch(
        &mut self,
        component: Component,
        session: &mut Session<'_>,
    ) -> Result<Flow, DelegateError> {
        match action_for(component) {
            MenuAction::Perform(Removal::Klipper) => {
                self.delegates.klipper_setup.run_setup(SetupIntent::Remove)?;
                Ok(Flow::Stay)
            }
            MenuAction::Perform(Removal::Placeholder(component)) => {
                session.line(component.handler_label())?;
                Ok(Flow::Stay)
            }
            MenuAction::Enter(sub) => {
                let entry = match sub {
                    SubMenu::MoonrakerRemove => &mut self.delegates.moonraker_remove,
                    SubMenu::MainsailRemove => &mut self.delegates.mainsail_remove,
                };
                match entry.enter(session)? {
                    MenuExit::Back => Ok(Flow::Stay),
                    MenuExit::Quit => Ok(Flow::Exit(MenuExit::Quit)),
                }
            }
        }
    }
}

impl Menu for RemoveMenu {
    fn title(&self) -> &str {
        "Remove Menu"
    }

    fn render(&self, palette: Palette) -> String {
        render(palette)
    }

    fn options(&self) -> Vec<usize> {
        Component::ALL.iter().map(|c| c.selection()).collect()
    }

    fn select(&mut self, choice: usize, session: &mut Session<'_>) -> Result<Flow, DelegateError> {
        match Component::from_selection(choice) {
            Some(component) => self.dispatch(component, session),
            None => Ok(Flow::Stay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delegate::KlipperSetup;
    use crate::menu::MenuEntry;
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;

    const EXPECTED_PLAIN: &str = concat!(
        "/=======================================================\\\n",
        "| ~~~~~~~~~~~~~~~~~~ [ Remove Menu ] ~~~~~~~~~~~~~~~~~~ |\n",
        "|-------------------------------------------------------|\n",
        "| INFO: Configurations and/or any backups will be kept! |\n",
        "|-------------------------------------------------------|\n",
        "| Firmware & API:           | Webcam Streamer:          |\n",
        "|  1) [Klipper]             |  6) [Crowsnest]           |\n",
        "|  2) [Moonraker]           |  7) [MJPG-Streamer]       |\n",
        "|                           |                           |\n",
        "| Klipper Webinterface:     | Other:                    |\n",
        "|  3) [Mainsail]            |  8) [PrettyGCode]         |\n",
        "|  4) [Fluidd]              |  9) [Telegram Bot]        |\n",
        "|                           | 10) [Obico for Klipper]   |\n",
        "| Touchscreen GUI:          | 11) [OctoEverywhere]      |\n",
        "|  5) [KlipperScreen]       | 12) [Mobileraker]         |\n",
        "|                           | 13) [NGINX]               |\n",
        "|                           |                           |\n",
    );

    /// Every handler invocation, in order.
    type Calls = Rc<RefCell<Vec<String>>>;

    struct FakeSetup(Calls);

    impl KlipperSetup for FakeSetup {
        fn run_setup(&mut self, intent: SetupIntent) -> Result<(), DelegateError> {
            self.0.borrow_mut().push(format!("klipper_setup:{}", intent.as_arg()));
            Ok(())
        }
    }

    struct FakeEntry {
        name: &'static str,
        calls: Calls,
        exit: MenuExit,
    }

    impl MenuEntry for FakeEntry {
        fn enter(&mut self, _session: &mut Session<'_>) -> Result<MenuExit, DelegateError> {
            self.calls.borrow_mut().push(self.name.to_string());
            Ok(self.exit)
        }
    }

    fn fake_menu(sub_exit: MenuExit) -> (RemoveMenu, Calls) {
        let calls: Calls = Rc::default();
        let delegates = Delegates {
            klipper_setup: Box::new(FakeSetup(calls.clone())),
            moonraker_remove: Box::new(FakeEntry {
                name: "moonraker_remove",
                calls: calls.clone(),
                exit: sub_exit,
            }),
            mainsail_remove: Box::new(FakeEntry {
                name: "mainsail_remove",
                calls: calls.clone(),
                exit: sub_exit,
            }),
        };
        (RemoveMenu::new(delegates), calls)
    }

    fn select(menu: &mut RemoveMenu, choice: usize) -> (Flow, String) {
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let flow = {
            let mut session = Session::new(&mut input, &mut out, Palette::PLAIN);
            menu.select(choice, &mut session).unwrap()
        };
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_render_plain_matches_template() {
        assert_eq!(render(Palette::PLAIN), EXPECTED_PLAIN);
    }

    #[test]
    fn test_render_colored_only_changes_title() {
        let colored = render(Palette::COLORED);
        let title = "| \x1b[31m~~~~~~~~~~~~~~~~~~ [ Remove Menu ] ~~~~~~~~~~~~~~~~~~\x1b[39m |\n";
        assert!(colored.contains(title));
        let plain_title = "| ~~~~~~~~~~~~~~~~~~ [ Remove Menu ] ~~~~~~~~~~~~~~~~~~ |\n";
        assert_eq!(colored.replace(title, plain_title), EXPECTED_PLAIN);
    }

    #[test]
    fn test_every_row_is_57_columns() {
        for line in render(Palette::PLAIN).lines() {
            assert_eq!(line.chars().count(), 57, "{line:?}");
        }
    }

    #[test]
    fn test_printed_number_selects_printed_label() {
        let body = render(Palette::PLAIN);
        for component in Component::ALL {
            let label = format!("{:>2}) [{}]", component.selection(), component.display_name());
            assert_eq!(body.matches(&label).count(), 1, "{label}");
        }
    }

    #[test]
    fn test_each_component_listed_under_its_category() {
        for column in [LEFT_COLUMN, RIGHT_COLUMN] {
            let mut current = None;
            for entry in column {
                match entry {
                    Entry::Heading(category) => current = Some(category),
                    Entry::Item(component) => assert_eq!(Some(component.category()), current),
                    Entry::Blank => {}
                }
            }
        }
    }

    #[test]
    fn test_klipper_calls_setup_once_with_remove_intent() {
        let (mut menu, calls) = fake_menu(MenuExit::Back);
        let (flow, out) = select(&mut menu, 1);
        assert_eq!(flow, Flow::Stay);
        assert_eq!(*calls.borrow(), vec!["klipper_setup:remove"]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_sub_menus_are_entered() {
        let (mut menu, calls) = fake_menu(MenuExit::Back);
        assert_eq!(select(&mut menu, 2).0, Flow::Stay);
        assert_eq!(select(&mut menu, 3).0, Flow::Stay);
        assert_eq!(*calls.borrow(), vec!["moonraker_remove", "mainsail_remove"]);
    }

    #[test]
    fn test_quit_in_sub_menu_propagates() {
        let (mut menu, _) = fake_menu(MenuExit::Quit);
        assert_eq!(select(&mut menu, 2).0, Flow::Exit(MenuExit::Quit));
    }

    #[test]
    fn test_placeholders_print_exactly_their_label() {
        for component in &Component::ALL[3..] {
            let (mut menu, calls) = fake_menu(MenuExit::Back);
            let (flow, out) = select(&mut menu, component.selection());
            assert_eq!(flow, Flow::Stay);
            assert_eq!(out, format!("{}\n", component.handler_label()));
            assert!(calls.borrow().is_empty(), "{component} reached a delegate");
        }
    }

    #[test]
    fn test_nginx_label() {
        let (mut menu, _) = fake_menu(MenuExit::Back);
        assert_eq!(select(&mut menu, 13).1, "remove_nginx\n");
    }

    #[test]
    fn test_action_table() {
        assert_eq!(action_for(Component::Klipper), MenuAction::Perform(Removal::Klipper));
        assert_eq!(action_for(Component::Moonraker), MenuAction::Enter(SubMenu::MoonrakerRemove));
        assert_eq!(action_for(Component::Mainsail), MenuAction::Enter(SubMenu::MainsailRemove));
        assert_eq!(
            action_for(Component::Fluidd),
            MenuAction::Perform(Removal::Placeholder(Component::Fluidd))
        );
    }

    #[test]
    fn test_options_cover_one_to_thirteen() {
        let (menu, _) = fake_menu(MenuExit::Back);
        assert_eq!(menu.options(), (1..=13).collect::<Vec<_>>());
    }

    #[test]
    fn test_full_screen_through_menu_loop() {
        let (mut menu, calls) = fake_menu(MenuExit::Back);
        let mut input = Cursor::new(b"13\n1\nb\n".to_vec());
        let mut out = Vec::new();
        let exit = {
            let mut session = Session::new(&mut input, &mut out, Palette::PLAIN);
            crate::menu::run(&mut menu, &mut session).unwrap()
        };
        let out = String::from_utf8(out).unwrap();

        assert_eq!(exit, MenuExit::Back);
        assert_eq!(*calls.borrow(), vec!["klipper_setup:remove"]);
        assert_eq!(out.matches("remove_nginx\n").count(), 1);

        let first_screen = format!(
            "{}{}{}###### Perform action: ",
            frame::header(Palette::PLAIN),
            EXPECTED_PLAIN,
            frame::back_footer(Palette::PLAIN)
        );
        assert!(out.starts_with(&first_screen));
    }
}
