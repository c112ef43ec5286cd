//! Role-dependent cell presentation.
//!
//! The same [`SlotState`] is communicated differently to each party, so the
//! label/color table is keyed by (state, role). The table is injected as a
//! [`Theme`] so one engine serves every deployment; visibility rules are
//! fixed policy and live outside the theme.

use std::collections::HashMap;

use fixwise_domain::{Role, SlotState};
use serde::{Deserialize, Serialize};

/// Color classes understood by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorToken {
    /// Bookable / open.
    Green,
    /// The viewer's own booking.
    Blue,
    /// Occupied by another party.
    Red,
    /// Cancellation involving the viewer.
    Orange,
    /// Not offerable.
    Gray,
    /// States the viewer has no stake in.
    Neutral,
}

/// Label and color for one (state, role) table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellStyle {
    /// Display text for the cell.
    pub label: String,
    /// Color class for the cell.
    pub color: ColorToken,
}

impl CellStyle {
    fn new(label: &str, color: ColorToken) -> Self {
        Self { label: label.to_owned(), color }
    }
}

/// Injected (state, role) → style table.
///
/// Entries missing from a custom theme fall back to a neutral
/// "not available" style rather than leaving a combination unhandled.
#[derive(Debug, Clone)]
pub struct Theme {
    entries: HashMap<(SlotState, Role), CellStyle>,
    fallback: CellStyle,
}

impl Theme {
    /// Build a theme from explicit entries and a fallback style.
    pub fn new(entries: HashMap<(SlotState, Role), CellStyle>, fallback: CellStyle) -> Self {
        Self { entries, fallback }
    }

    /// The production label table (Spanish labels as shipped).
    pub fn default_es() -> Self {
        use Role::{Fixer, Requester};
        use SlotState as S;

        let mut entries = HashMap::new();
        let mut put = |state: S, role: Role, label: &str, color: ColorToken| {
            entries.insert((state, role), CellStyle::new(label, color));
        };

        // Requester view of a fixer's calendar.
        put(S::Available, Requester, "Disponible", ColorToken::Green);
        put(S::BookedBySelf, Requester, "Reservado", ColorToken::Blue);
        put(S::BookedByOther, Requester, "Ocupado", ColorToken::Red);
        put(S::BookedOccupiedView, Requester, "Ocupado", ColorToken::Red);
        put(S::Disabled, Requester, "No Disponible", ColorToken::Gray);
        put(S::CancelledByFixer, Requester, "Cancelado", ColorToken::Orange);
        put(S::CancelledByRequester, Requester, "Cancelado", ColorToken::Orange);
        // Another party's cancellation is not the requester's business: it
        // surfaces as plain unavailability or availability.
        put(S::CancelledByOtherFixer, Requester, "No Disponible", ColorToken::Neutral);
        put(S::CancelledByOtherRequester, Requester, "Disponible", ColorToken::Green);

        // Fixer view of their own calendar.
        put(S::Available, Fixer, "Disponible", ColorToken::Green);
        put(S::BookedBySelf, Fixer, "Reservado", ColorToken::Blue);
        put(S::BookedByOther, Fixer, "Ocupado", ColorToken::Red);
        put(S::BookedOccupiedView, Fixer, "Ocupado", ColorToken::Red);
        put(S::Disabled, Fixer, "No Disponible", ColorToken::Gray);
        put(S::CancelledByFixer, Fixer, "Cancelado", ColorToken::Orange);
        put(S::CancelledByRequester, Fixer, "Cancelado", ColorToken::Orange);
        put(S::CancelledByOtherFixer, Fixer, "Cancelado", ColorToken::Neutral);
        put(S::CancelledByOtherRequester, Fixer, "Cancelado", ColorToken::Neutral);

        Self { entries, fallback: CellStyle::new("No Disponible", ColorToken::Neutral) }
    }

    /// Style for a (state, role) pair, falling back when unmapped.
    pub fn style(&self, state: SlotState, role: Role) -> &CellStyle {
        self.entries.get(&(state, role)).unwrap_or(&self.fallback)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_es()
    }
}

/// What the rendering layer needs to draw one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellPresentation {
    /// Whether the cell is shown at all.
    pub visible: bool,
    /// Display text.
    pub label: String,
    /// Color class.
    pub color: ColorToken,
}

/// Maps (state, role, past-ness) to a [`CellPresentation`].
#[derive(Debug, Clone, Default)]
pub struct RenderPolicy {
    theme: Theme,
}

impl RenderPolicy {
    /// Policy backed by the given theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Present one cell for the viewer.
    ///
    /// Past slots are never visible. A fixer's own `Available` slots are
    /// hidden (no call-to-action needed on open slots in this view); every
    /// other state is visible to the fixer, and all non-past states are
    /// visible to a requester. A viewer with no resolved role sees nothing.
    pub fn present(&self, state: SlotState, role: Option<Role>, is_past: bool) -> CellPresentation {
        let Some(role) = role else {
            let style = &self.theme.fallback;
            return CellPresentation { visible: false, label: style.label.clone(), color: style.color };
        };

        let style = self.theme.style(state, role);
        let visible = !is_past && !(role == Role::Fixer && state == SlotState::Available);

        CellPresentation { visible, label: style.label.clone(), color: style.color }
    }
}
