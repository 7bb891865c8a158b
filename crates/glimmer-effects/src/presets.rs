#![forbid(unsafe_code)]

//! Read-only preset tables: spinner cycles, package-manager themes, bar
//! styles, and matrix charsets.
//!
//! All lookups fall back to a documented default on unknown names; an
//! unrecognized preset must never interrupt the caller's visual feedback.

use glimmer_render::cell::{ColorRef, NamedColor};

/// The default spinner cycle (`classic`).
pub const CLASSIC: &[&str] = &["|", "/", "-", "\\"];
/// Braille dot cycle.
pub const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
/// Heavier braille cycle.
pub const BRAILLE: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
/// Sliding block cycle.
pub const BLOCKS: &[&str] = &[
    "▉", "▊", "▋", "▌", "▍", "▎", "▏", "▎", "▍", "▌", "▋", "▊", "▉",
];
/// Compass arrow cycle.
pub const ARROWS: &[&str] = &["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"];
/// Two-dot bounce cycle.
pub const BOUNCE: &[&str] = &["⠁", "⠂", "⠄", "⠂"];
/// Filling circle cycle.
pub const PULSE: &[&str] = &["◐", "◓", "◑", "◒"];
/// Rising bar cycle.
pub const WAVE: &[&str] = &[
    "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃", "▂",
];
/// Twinkling star cycle.
pub const STAR: &[&str] = &["✶", "✸", "✹", "✺", "✹", "✷"];
/// Clock face cycle.
pub const CLOCK: &[&str] = &[
    "🕐", "🕑", "🕒", "🕓", "🕔", "🕕", "🕖", "🕗", "🕘", "🕙", "🕚", "🕛",
];
/// Moon phase cycle.
pub const MOON: &[&str] = &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"];
/// Rotating globe cycle.
pub const EARTH: &[&str] = &["🌍", "🌎", "🌏"];

/// Look up a spinner cycle by preset name. Unknown names get [`CLASSIC`].
#[must_use]
pub fn spinner_cycle(name: &str) -> &'static [&'static str] {
    match name {
        "classic" => CLASSIC,
        "dots" => DOTS,
        "braille" => BRAILLE,
        "blocks" => BLOCKS,
        "arrows" => ARROWS,
        "bounce" => BOUNCE,
        "pulse" => PULSE,
        "wave" => WAVE,
        "star" => STAR,
        "clock" => CLOCK,
        "moon" => MOON,
        "earth" => EARTH,
        _ => CLASSIC,
    }
}

/// Visual theme for one package manager.
#[derive(Debug, Clone, Copy)]
pub struct PackageManagerTheme {
    /// Tool name shown before the message.
    pub prefix: &'static str,
    /// Spinner cycle.
    pub cycle: &'static [&'static str],
    /// Brand color.
    pub color: ColorRef,
    /// Status messages rotated while spinning.
    pub messages: &'static [&'static str],
}

/// npm: braille dots, red.
pub const NPM: PackageManagerTheme = PackageManagerTheme {
    prefix: "npm",
    cycle: DOTS,
    color: ColorRef::Named(NamedColor::Red),
    messages: &[
        "Installing dependencies",
        "Resolving packages",
        "Building project",
    ],
};

/// yarn: quarter circles, blue.
pub const YARN: PackageManagerTheme = PackageManagerTheme {
    prefix: "yarn",
    cycle: PULSE,
    color: ColorRef::Named(NamedColor::Blue),
    messages: &[
        "Installing packages",
        "Resolving dependencies",
        "Building bundles",
    ],
};

/// pnpm: alternating dots, yellow.
pub const PNPM: PackageManagerTheme = PackageManagerTheme {
    prefix: "pnpm",
    cycle: &["●", "○", "◉", "○"],
    color: ColorRef::Named(NamedColor::Yellow),
    messages: &[
        "Installing from store",
        "Linking dependencies",
        "Running scripts",
    ],
};

/// bun: moon phases, magenta.
pub const BUN: PackageManagerTheme = PackageManagerTheme {
    prefix: "bun",
    cycle: MOON,
    color: ColorRef::Named(NamedColor::Magenta),
    messages: &[
        "Installing at light speed",
        "Bundling assets",
        "Optimizing build",
    ],
};

/// cargo: progress blocks, rust orange.
pub const CARGO: PackageManagerTheme = PackageManagerTheme {
    prefix: "cargo",
    cycle: &["▱▱▱", "▰▱▱", "▰▰▱", "▰▰▰", "▱▰▰", "▱▱▰", "▱▱▱"],
    color: ColorRef::Rgb(222, 165, 132),
    messages: &[
        "Compiling crates",
        "Building dependencies",
        "Linking binaries",
    ],
};

/// apt: bracket sweep, green.
pub const APT: PackageManagerTheme = PackageManagerTheme {
    prefix: "apt",
    cycle: &[
        "[    ]", "[=   ]", "[==  ]", "[=== ]", "[====]", "[ ===]", "[  ==]", "[   =]",
    ],
    color: ColorRef::Named(NamedColor::Green),
    messages: &[
        "Updating package lists",
        "Installing packages",
        "Configuring system",
    ],
};

/// snap: arc sweep, teal.
pub const SNAP: PackageManagerTheme = PackageManagerTheme {
    prefix: "snap",
    cycle: &["◜", "◠", "◝", "◞", "◡", "◟"],
    color: ColorRef::Rgb(0, 179, 152),
    messages: &["Downloading snap", "Mounting snap", "Installing snap"],
};

/// Look up a package-manager theme. Unknown names get [`NPM`].
#[must_use]
pub fn package_manager(name: &str) -> PackageManagerTheme {
    match name {
        "npm" => NPM,
        "yarn" => YARN,
        "pnpm" => PNPM,
        "bun" => BUN,
        "cargo" => CARGO,
        "apt" => APT,
        "snap" => SNAP,
        _ => NPM,
    }
}

/// Fill/empty glyph pair for a progress bar style.
#[derive(Debug, Clone, Copy)]
pub struct BarStyle {
    /// Glyph for the filled portion.
    pub fill: char,
    /// Glyph for the unfilled portion.
    pub empty: char,
}

/// Look up a progress bar style by name. Unknown names get `blocks`.
#[must_use]
pub fn bar_style(name: &str) -> BarStyle {
    match name {
        "arrows" => BarStyle {
            fill: '▶',
            empty: '▷',
        },
        "dots" => BarStyle {
            fill: '●',
            empty: '○',
        },
        "lines" => BarStyle {
            fill: '═',
            empty: '─',
        },
        _ => BarStyle {
            fill: '█',
            empty: '░',
        },
    }
}

/// Matrix rain charsets. An unknown name is treated as a literal custom
/// charset, matching the original behavior of passing characters directly.
#[must_use]
pub fn matrix_charset(name: &str) -> Vec<char> {
    let chars: &str = match name {
        "matrix" | "hex" => "0123456789ABCDEF",
        "binary" => "01",
        "katakana" => {
            "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン"
        }
        "symbols" => "!@#$%^&*()_+-=[]{}|;:,.<>?",
        custom => custom,
    };
    chars.chars().collect()
}
