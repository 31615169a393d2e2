pub const GREETING: &str =
    "Hi! Send me the name of a city and I'll tell you what the weather is like there ☀️🌧️❄️";

/// What an incoming text asks the bot to do.
#[derive(Debug, PartialEq)]
pub enum Command<'a> {
    Start,
    Lookup(&'a str),
}

impl<'a> Command<'a> {
    /// `None` for blank texts, which get no reply.
    pub fn parse(text: &'a str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let head = text.split_whitespace().next().unwrap_or_default();
        let name = head.split('@').next().unwrap_or_default();
        if name == "/start" {
            return Some(Command::Start);
        }

        Some(Command::Lookup(text))
    }
}
