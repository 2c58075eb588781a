//! Room and unit short codes used in panel labels.
//!
//! A name resolves through an ordered table: exact match first, then the first
//! entry whose key and the name contain one another, then the first two
//! characters of the name. All matching is case-insensitive.

/// Ordered lookup table from display names to short codes.
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    entries: &'static [(&'static str, &'static str)],
    /// Code used for a blank name.
    default_code: &'static str,
}

pub const ROOM_CODES: CodeTable = CodeTable::new(
    &[
        ("master bedroom", "MB"),
        ("guest bedroom", "GB"),
        ("kids bedroom", "KB"),
        ("kids room", "KR"),
        ("bedroom", "BR"),
        ("living room", "LR"),
        ("kitchen", "KT"),
        ("dining room", "DR"),
        ("study room", "SR"),
        ("pooja room", "PR"),
        ("foyer", "FY"),
        ("utility", "UT"),
        ("balcony", "BL"),
    ],
    "RM",
);

pub const UNIT_CODES: CodeTable = CodeTable::new(
    &[
        ("wardrobe", "WD"),
        ("kitchen", "KT"),
        ("tv unit", "TV"),
        ("loft", "LF"),
        ("study table", "ST"),
        ("shoe rack", "SR"),
        ("crockery unit", "CU"),
        ("dresser", "DR"),
        ("bookshelf", "BS"),
        ("vanity", "VN"),
        ("pooja unit", "PU"),
    ],
    "UN",
);

impl CodeTable {
    pub const fn new(
        entries: &'static [(&'static str, &'static str)],
        default_code: &'static str,
    ) -> Self {
        Self {
            entries,
            default_code,
        }
    }

    pub fn exact(&self, name: &str) -> Option<&'static str> {
        let name = name.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, code)| *code)
    }

    pub fn partial(&self, name: &str) -> Option<&'static str> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(key, _)| name.contains(key) || key.contains(name.as_str()))
            .map(|(_, code)| *code)
    }

    /// First two characters of the name, uppercased.
    pub fn truncated(name: &str) -> String {
        name.trim().chars().take(2).collect::<String>().to_uppercase()
    }

    pub fn code_for(&self, name: &str) -> String {
        if name.trim().is_empty() {
            return self.default_code.to_string();
        }
        self.exact(name)
            .or_else(|| self.partial(name))
            .map(str::to_string)
            .unwrap_or_else(|| Self::truncated(name))
    }
}

pub fn room_code(room_name: &str) -> String {
    ROOM_CODES.code_for(room_name)
}

pub fn unit_code(unit_name: &str) -> String {
    UNIT_CODES.code_for(unit_name)
}
