/// Character set used to draw tree connectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Charset {
    #[default]
    Utf8,
    Ascii,
}

/// The four segments a tree line is built from. Each is 4 columns wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Connector for an entry with later siblings
    pub tee: &'static str,
    /// Connector for the last entry of a directory
    pub corner: &'static str,
    /// Prefix segment below an entry that has later siblings
    pub pipe: &'static str,
    /// Prefix segment below a last entry
    pub blank: &'static str,
}

pub const UTF8: Glyphs = Glyphs {
    tee: "├── ",
    corner: "└── ",
    pipe: "│   ",
    blank: "    ",
};

pub const ASCII: Glyphs = Glyphs {
    tee: "|-- ",
    corner: "`-- ",
    pipe: "|   ",
    blank: "    ",
};

impl Glyphs {
    pub fn for_charset(charset: Charset) -> Self {
        match charset {
            Charset::Utf8 => UTF8,
            Charset::Ascii => ASCII,
        }
    }

    pub fn connector(&self, is_last: bool) -> &'static str {
        if is_last {
            self.corner
        } else {
            self.tee
        }
    }

    /// Prefix handed to the children of an entry.
    pub fn child_prefix(&self, prefix: &str, is_last: bool) -> String {
        let segment = if is_last { self.blank } else { self.pipe };
        format!("{}{}", prefix, segment)
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        UTF8
    }
}

impl Charset {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "utf8" | "utf-8" | "unicode" => Some(Charset::Utf8),
            "ascii" => Some(Charset::Ascii),
            _ => None,
        }
    }
}
