//! Built-in themes seeded into an empty catalog.

use super::theme::RgbaColor;

/// A theme template: name, color, pair count, glyph pool.
pub type ThemeSeed = (&'static str, RgbaColor, usize, &'static str);

/// The default catalog, in display order.
pub const DEFAULT_THEMES: &[ThemeSeed] = &[
    (
        "Vehicles",
        RgbaColor::BLUE,
        6,
        "🚙🚗🚘🚕🚖🏎🚚🛻🚛🚐🚓🚔🚑🚒🚀✈️🛫🛬🛩🚁🛸🚲🏍🛶⛵️🚤🛥🛳⛴🚢🚂🚝🚅🚆🚊🚉🚇🛺🚜",
    ),
    ("Sports", RgbaColor::RED, 6, "🏈⚾️🏀⚽️🎾🏐🥏🏓⛳️🥅🥌🏂⛷🎳"),
    ("Music", RgbaColor::RED, 4, "🎼🎤🎹🪘🥁🎺🪗🪕🎻"),
    (
        "Animals",
        RgbaColor::GREEN,
        12,
        "🐥🐣🐂🐄🐎🐖🐏🐑🦙🐐🐓🐁🐀🐒🦆🦅🦉🦇🐢🐍🦎🦖🦕🐅🐆🦓🦍🦧🦣🐘🦛🦏🐪🐫🦒🦘🦬🐃🦌🐕🐩🦮🐈🦤🦢🦩🕊🦝🦨🦡🦫🦦🦥🐿🦔",
    ),
    (
        "Animal Faces",
        RgbaColor::BROWN,
        8,
        "🐵🙈🙊🙉🐶🐱🐭🐹🐰🦊🐻🐼🐻‍❄️🐨🐯🦁🐮🐷🐸🐲",
    ),
    ("Flora", RgbaColor::GREEN, 7, "🌲🌴🌿☘️🍀🍁🍄🌾💐🌷🌹🥀🌺🌸🌼🌻"),
    ("Weather", RgbaColor::CYAN, 8, "☀️🌤⛅️🌥☁️🌦🌧⛈🌩🌨❄️💨☔️💧💦🌊☂️🌫🌪"),
    ("COVID", RgbaColor::GRAY, 5, "💉🦠😷🤧🤒"),
    (
        "Faces",
        RgbaColor::YELLOW,
        16,
        "😀😃😄😁😆😅😂🤣🥲☺️😊😇🙂🙃😉😌😍🥰😘😗😙😚😋😛😝😜🤪🤨🧐🤓😎🥸🤩🥳😏😞😔😟😕🙁☹️😣😖😫😩🥺😢😭😤😠😡🤯😳🥶😥😓🤗🤔🤭🤫🤥😬🙄😯😧🥱😴🤮😷🤧",
    ),
];
