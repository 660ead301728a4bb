//! Removal targets known to the Remove Menu.

use std::fmt;
use std::str::FromStr;

/// Menu column a component is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FirmwareApi,
    WebInterface,
    TouchscreenGui,
    WebcamStreamer,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::FirmwareApi,
        Category::WebInterface,
        Category::TouchscreenGui,
        Category::WebcamStreamer,
        Category::Other,
    ];

    /// Heading as printed in the menu, including the trailing colon.
    pub fn heading(self) -> &'static str {
        match self {
            Category::FirmwareApi => "Firmware & API:",
            Category::WebInterface => "Klipper Webinterface:",
            Category::TouchscreenGui => "Touchscreen GUI:",
            Category::WebcamStreamer => "Webcam Streamer:",
            Category::Other => "Other:",
        }
    }
}

/// A piece of software the installer can remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Klipper,
    Moonraker,
    Mainsail,
    Fluidd,
    KlipperScreen,
    Crowsnest,
    MjpgStreamer,
    PrettyGcode,
    TelegramBot,
    Obico,
    OctoEverywhere,
    Mobileraker,
    Nginx,
}

impl Component {
    /// All components in selection order.
    pub const ALL: [Component; 13] = [
        Component::Klipper,
        Component::Moonraker,
        Component::Mainsail,
        Component::Fluidd,
        Component::KlipperScreen,
        Component::Crowsnest,
        Component::MjpgStreamer,
        Component::PrettyGcode,
        Component::TelegramBot,
        Component::Obico,
        Component::OctoEverywhere,
        Component::Mobileraker,
        Component::Nginx,
    ];

    /// Number the user types to select this component.
    pub fn selection(self) -> usize {
        match self {
            Component::Klipper => 1,
            Component::Moonraker => 2,
            Component::Mainsail => 3,
            Component::Fluidd => 4,
            Component::KlipperScreen => 5,
            Component::Crowsnest => 6,
            Component::MjpgStreamer => 7,
            Component::PrettyGcode => 8,
            Component::TelegramBot => 9,
            Component::Obico => 10,
            Component::OctoEverywhere => 11,
            Component::Mobileraker => 12,
            Component::Nginx => 13,
        }
    }

    /// Inverse of [`Component::selection`].
    pub fn from_selection(number: usize) -> Option<Component> {
        Component::ALL.into_iter().find(|c| c.selection() == number)
    }

    /// Name as shown between brackets in the menu.
    pub fn display_name(self) -> &'static str {
        match self {
            Component::Klipper => "Klipper",
            Component::Moonraker => "Moonraker",
            Component::Mainsail => "Mainsail",
            Component::Fluidd => "Fluidd",
            Component::KlipperScreen => "KlipperScreen",
            Component::Crowsnest => "Crowsnest",
            Component::MjpgStreamer => "MJPG-Streamer",
            Component::PrettyGcode => "PrettyGCode",
            Component::TelegramBot => "Telegram Bot",
            Component::Obico => "Obico for Klipper",
            Component::OctoEverywhere => "OctoEverywhere",
            Component::Mobileraker => "Mobileraker",
            Component::Nginx => "NGINX",
        }
    }

    /// Command-line identifier (kebab-case).
    pub fn id(self) -> &'static str {
        match self {
            Component::Klipper => "klipper",
            Component::Moonraker => "moonraker",
            Component::Mainsail => "mainsail",
            Component::Fluidd => "fluidd",
            Component::KlipperScreen => "klipperscreen",
            Component::Crowsnest => "crowsnest",
            Component::MjpgStreamer => "mjpg-streamer",
            Component::PrettyGcode => "pretty-gcode",
            Component::TelegramBot => "telegram-bot",
            Component::Obico => "obico",
            Component::OctoEverywhere => "octoeverywhere",
            Component::Mobileraker => "mobileraker",
            Component::Nginx => "nginx",
        }
    }

    /// Name of the removal routine, printed by routines that have no body yet.
    pub fn handler_label(self) -> &'static str {
        match self {
            Component::Klipper => "remove_klipper",
            Component::Moonraker => "remove_moonraker",
            Component::Mainsail => "remove_mainsail",
            Component::Fluidd => "remove_fluidd",
            Component::KlipperScreen => "remove_klipperscreen",
            Component::Crowsnest => "remove_crowsnest",
            Component::MjpgStreamer => "remove_mjpgstreamer",
            Component::PrettyGcode => "remove_pretty_gcode",
            Component::TelegramBot => "remove_telegram_bot",
            Component::Obico => "remove_obico",
            Component::OctoEverywhere => "remove_octoeverywhere",
            Component::Mobileraker => "remove_mobileraker",
            Component::Nginx => "remove_nginx",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Component::Klipper | Component::Moonraker => Category::FirmwareApi,
            Component::Mainsail | Component::Fluidd => Category::WebInterface,
            Component::KlipperScreen => Category::TouchscreenGui,
            Component::Crowsnest | Component::MjpgStreamer => Category::WebcamStreamer,
            Component::PrettyGcode
            | Component::TelegramBot
            | Component::Obico
            | Component::OctoEverywhere
            | Component::Mobileraker
            | Component::Nginx => Category::Other,
        }
    }

    /// Menu label, e.g. `4) [Fluidd]`.
    pub fn menu_label(self) -> String {
        format!("{}) [{}]", self.selection(), self.display_name())
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a string names no known component.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown component '{0}'")]
pub struct UnknownComponent(pub String);

impl FromStr for Component {
    type Err = UnknownComponent;

    /// Accepts the id, the display name (case-insensitive) or the selection number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        if let Ok(number) = needle.parse::<usize>() {
            return Component::from_selection(number)
                .ok_or_else(|| UnknownComponent(s.to_string()));
        }
        Component::ALL
            .into_iter()
            .find(|c| c.id() == needle || c.display_name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownComponent(s.to_string()))
    }
}
