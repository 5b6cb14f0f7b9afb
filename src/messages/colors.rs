/// ANSI escape codes for colored terminal output.
pub struct Colors;

impl Colors {
    pub const ERROR: &'static str = "\x1b[91m";
    pub const WARN: &'static str = "\x1b[93m";
    pub const OK: &'static str = "\x1b[92m";
    /// Resets the color.
    pub const NORM: &'static str = "\x1b[0m";

    /// Wraps a message in a color, unless colors are disabled.
    pub fn paint(msg: &str, color: &str, no_color: bool) -> String {
        if no_color {
            String::from(msg)
        } else {
            format!("{}{}{}", color, msg, Colors::NORM)
        }
    }
}
