// SPDX-License-Identifier: MIT

//!
//! The fixed set of event icons
//!

use serde::{Deserialize, Serialize};

/// An icon that can be attached to an event
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, Serialize, Deserialize)]
pub enum Icon {
    Calendar,
    BookOpen,
    GraduationCap,
    Globe,
    FileText,
    AlertCircle,
    Clock,
    Award,
}

impl Icon {
    pub const ALL: [Icon; 8] = [
        Icon::Calendar,
        Icon::BookOpen,
        Icon::GraduationCap,
        Icon::Globe,
        Icon::FileText,
        Icon::AlertCircle,
        Icon::Clock,
        Icon::Award,
    ];

    /// A single character glyph for plain text output
    pub fn glyph(&self) -> char {
        match self {
            Icon::Calendar => '📅',
            Icon::BookOpen => '📖',
            Icon::GraduationCap => '🎓',
            Icon::Globe => '🌐',
            Icon::FileText => '📄',
            Icon::AlertCircle => '❗',
            Icon::Clock => '⏰',
            Icon::Award => '🏆',
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.to_string() == name.trim())
    }
}
