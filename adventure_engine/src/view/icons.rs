//! module Icons
//!
//! Unicode icons used to mark the different kinds of output lines.

pub(crate) const ICON_SUCCESS: &str = "\u{2611}"; // ✔
pub(crate) const ICON_FAILURE: &str = "\u{274C}"; // ✖
pub(crate) const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
pub(crate) const ICON_HINT: &str = "?";
pub(crate) const ICON_ENGINE: &str = "⚙";
pub(crate) const ICON_POSITIVE: &str = "➕";
pub(crate) const ICON_UNLOCKED: &str = "\u{1F513}"; // open lock
pub(crate) const ICON_HARMED: &str = "\u{2623}"; // biohazard sign
pub(crate) const ICON_HEALED: &str = "\u{2624}"; // caduceus
pub(crate) const ICON_DEATH: &str = "☠";
pub(crate) const ICON_VICTORY: &str = "🎉"; // U+1F389
