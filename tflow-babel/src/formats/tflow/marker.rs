//! Line markers
//!
//! Every non-blank T-Flow line starts with one of five marker characters that
//! decides where its payload goes.

use crate::record::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `@` metadata line
    Meta,
    /// `<` source text
    Source,
    /// `~` machine translation
    Mt,
    /// `>` post-edited target
    Target,
    /// `#` free-form comment
    Comment,
}

impl Marker {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '@' => Some(Marker::Meta),
            '<' => Some(Marker::Source),
            '~' => Some(Marker::Mt),
            '>' => Some(Marker::Target),
            '#' => Some(Marker::Comment),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Marker::Meta => '@',
            Marker::Source => '<',
            Marker::Mt => '~',
            Marker::Target => '>',
            Marker::Comment => '#',
        }
    }

    /// The text role this marker feeds, if any.
    pub fn role(self) -> Option<Role> {
        match self {
            Marker::Source => Some(Role::Source),
            Marker::Mt => Some(Role::Mt),
            Marker::Target => Some(Role::Target),
            Marker::Meta | Marker::Comment => None,
        }
    }

    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Source => Marker::Source,
            Role::Mt => Marker::Mt,
            Role::Target => Marker::Target,
        }
    }

    /// Split a line into its marker and payload.
    ///
    /// A single space right after the marker is a separator and is dropped; any other
    /// text (including further spaces) is kept verbatim. Returns `None` when the line
    /// does not start with a marker.
    pub fn split_line(line: &str) -> Option<(Marker, &str)> {
        let marker = Marker::from_char(line.chars().next()?)?;
        // all markers are ASCII, so byte 1 is a char boundary
        let rest = &line[1..];
        Some((marker, rest.strip_prefix(' ').unwrap_or(rest)))
    }

    /// Render one output line: `<marker> <text>`, or the bare marker for empty text.
    pub fn line(self, text: &str) -> String {
        if text.is_empty() {
            self.as_char().to_string()
        } else {
            format!("{} {}", self.as_char(), text)
        }
    }
}
