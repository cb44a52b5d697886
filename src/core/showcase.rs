//! Feature showcase: tab/panel selection with seamless looping.
//!
//! Two independent concerns live here:
//!
//! - [`TabShowcase`] holds the *real* state: the active tab index, the
//!   transition flag and the one-way autoplay gate. Index math is plain
//!   wrapping.
//! - [`CloneStrip`] describes the visual-continuity trick used on narrow
//!   layouts, where a few tabs are cloned onto each end of the scrolling
//!   strip. Clones always resolve to a real index and carry no state.

use crate::config;
use crate::core::index::{crosses_boundary, step};
use crate::core::scheduler::TimerCommand;

/// Viewport class the showcase is laid out for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// All tabs visible; navigation activates directly.
    #[default]
    Wide,
    /// Scrolling tab strip with boundary clones.
    Narrow,
}

impl Layout {
    pub fn for_width(width: f64) -> Self {
        if width < config::NARROW_BREAKPOINT_PX {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    /// Like [`Layout::for_width`], but without a strip to scroll there is
    /// nothing to pad with clones and navigation always switches directly.
    pub fn for_strip(width: f64, has_strip: bool) -> Self {
        if has_strip {
            Self::for_width(width)
        } else {
            Self::Wide
        }
    }
}

// ============================================================================
// CloneStrip
// ============================================================================

/// One element of the rendered tab strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StripSlot {
    Real(usize),
    Clone { of: usize },
}

impl StripSlot {
    /// Real tab index this slot activates.
    pub fn target(self) -> usize {
        match self {
            Self::Real(index) | Self::Clone { of: index } => index,
        }
    }
}

/// Layout of a tab strip extended with boundary clones.
///
/// For `len` tabs and up to `k` clones per side the strip is
/// `[len-k .. len) ++ [0 .. len) ++ [0 .. k)`, where the outer runs are clones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CloneStrip {
    len: usize,
    per_side: usize,
}

impl CloneStrip {
    pub fn new(len: usize, max_clones: usize) -> Self {
        Self {
            len,
            per_side: max_clones.min(len),
        }
    }

    /// Real indices cloned before the first real tab, in strip order.
    fn leading(&self) -> std::ops::Range<usize> {
        self.len - self.per_side..self.len
    }

    /// Real indices cloned after the last real tab, in strip order.
    fn trailing(&self) -> std::ops::Range<usize> {
        0..self.per_side
    }

    /// Every strip slot, in order.
    pub fn slots(&self) -> Vec<StripSlot> {
        self.leading()
            .map(|of| StripSlot::Clone { of })
            .chain((0..self.len).map(StripSlot::Real))
            .chain(self.trailing().map(|of| StripSlot::Clone { of }))
            .collect()
    }

    /// Strip position of real tab `index`.
    pub fn real_position(&self, index: usize) -> usize {
        self.per_side + index
    }

    /// Strip position of the clone to scroll to when wrapping in `direction`.
    ///
    /// Wrapping forward lands on the clone of the first tab after the end;
    /// wrapping backward lands on the clone of the last tab before the start.
    pub fn wrap_position(&self, direction: i64) -> Option<usize> {
        if self.per_side == 0 {
            return None;
        }
        Some(if direction > 0 {
            self.per_side + self.len
        } else {
            self.per_side - 1
        })
    }
}

// ============================================================================
// TabShowcase
// ============================================================================

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Activate `index` directly (scrolling smoothly on narrow layouts).
    Direct { index: usize },
    /// Narrow-layout boundary crossing. Activate `index`'s panel now, scroll
    /// smoothly to strip position `clone_position`, then call
    /// [`TabShowcase::finish_transition`] after `settle_ms`.
    Wrap {
        index: usize,
        clone_position: usize,
        settle_ms: u32,
    },
    /// A boundary crossing is already in flight.
    Blocked,
}

impl Navigation {
    /// Tab index the navigation made active, if any.
    #[cfg(test)]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Direct { index } | Self::Wrap { index, .. } => Some(index),
            Self::Blocked => None,
        }
    }
}

/// Keyboard command on the tab strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabKey {
    Step(i64),
    First,
    Last,
}

impl TabKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "ArrowUp" => Some(Self::Step(-1)),
            "ArrowRight" | "ArrowDown" => Some(Self::Step(1)),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Autoplay {
    #[default]
    Idle,
    Running,
    /// Terminal state: the user has interacted.
    Disabled,
}

/// Tab showcase over a fixed list of feature ids.
#[derive(Clone, Debug)]
pub struct TabShowcase {
    tabs: Vec<String>,
    panels: Vec<String>,
    current: usize,
    layout: Layout,
    transitioning: bool,
    autoplay: Autoplay,
    section_visible: bool,
}

impl TabShowcase {
    /// Creates a showcase from the tabs' and panels' `data-feature` values.
    /// Returns `None` when there are no tabs.
    pub fn new(tabs: Vec<String>, panels: Vec<String>, layout: Layout) -> Option<Self> {
        if tabs.is_empty() {
            return None;
        }
        Some(Self {
            tabs,
            panels,
            current: 0,
            layout,
            transitioning: false,
            autoplay: Autoplay::Idle,
            section_visible: false,
        })
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    #[cfg(test)]
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Clone layout for the current layout; `None` on wide layouts.
    pub fn strip(&self) -> Option<CloneStrip> {
        (self.layout == Layout::Narrow)
            .then(|| CloneStrip::new(self.len(), config::showcase::MAX_CLONES))
    }

    pub fn set_section_visible(&mut self, visible: bool) {
        self.section_visible = visible;
    }

    /// Whether activating a tab should scroll the strip to it.
    pub fn scrolls_strip(&self) -> bool {
        self.layout == Layout::Narrow && self.section_visible
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    /// Activates tab `index`. Rejects out-of-range indices.
    pub fn activate(&mut self, index: usize) -> Option<Navigation> {
        if index >= self.len() {
            return None;
        }
        self.current = index;
        Some(Navigation::Direct { index })
    }

    /// Moves `direction` tabs from the current one, wrapping.
    pub fn navigate(&mut self, direction: i64) -> Navigation {
        let len = self.len();
        let index = step(self.current, direction, len).unwrap_or(0);

        let wrap_position = match self.strip() {
            Some(strip) if crosses_boundary(self.current, direction, len) => {
                strip.wrap_position(direction)
            }
            _ => None,
        };

        match wrap_position {
            Some(_) if self.transitioning => Navigation::Blocked,
            Some(clone_position) => {
                self.transitioning = true;
                self.current = index;
                Navigation::Wrap {
                    index,
                    clone_position,
                    settle_ms: config::showcase::SETTLE_MS,
                }
            }
            None => {
                self.current = index;
                Navigation::Direct { index }
            }
        }
    }

    /// The settle delay after a wrap elapsed. Returns the tab to snap to.
    pub fn finish_transition(&mut self) -> Option<usize> {
        if !self.transitioning {
            return None;
        }
        self.transitioning = false;
        Some(self.current)
    }

    /// Handles a key press on the strip. Unrelated keys return `None`.
    pub fn handle_key(&mut self, key: &str) -> Option<Navigation> {
        match TabKey::from_key(key)? {
            TabKey::Step(direction) => Some(self.navigate(direction)),
            TabKey::First => self.activate(0),
            TabKey::Last => self.activate(self.len() - 1),
        }
    }

    /// Feature id of tab `index`.
    pub fn feature(&self, index: usize) -> Option<&str> {
        self.tabs.get(index).map(String::as_str)
    }

    /// Panel showing tab `index`'s feature, if one exists.
    pub fn panel_for(&self, index: usize) -> Option<usize> {
        let feature = self.feature(index)?;
        self.panels.iter().position(|panel| panel == feature)
    }

    /// Panel for the current tab.
    #[cfg(test)]
    pub fn active_panel(&self) -> Option<usize> {
        self.panel_for(self.current)
    }

    // ------------------------------------------------------------------------
    // Autoplay
    // ------------------------------------------------------------------------

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay == Autoplay::Running
    }

    /// Starts autoplay unless it is running or has been disabled.
    pub fn start_autoplay(&mut self) -> Option<TimerCommand> {
        if self.autoplay != Autoplay::Idle {
            return None;
        }
        self.autoplay = Autoplay::Running;
        Some(TimerCommand::StartAutoplay {
            period_ms: config::showcase::AUTOPLAY_MS,
        })
    }

    /// Records a user interaction, permanently disabling autoplay.
    pub fn interact(&mut self) -> Option<TimerCommand> {
        let was_running = self.autoplay == Autoplay::Running;
        self.autoplay = Autoplay::Disabled;
        was_running.then_some(TimerCommand::StopAutoplay)
    }

    /// Autoplay timer fired.
    pub fn tick(&mut self) -> Option<Navigation> {
        self.is_autoplaying().then(|| self.navigate(1))
    }
}

// ============================================================================
// ImageCycler
// ============================================================================

/// Cross-fade index for multi-image showcase panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageCycler {
    len: usize,
    index: usize,
}

impl ImageCycler {
    /// Needs at least two images to cycle.
    pub fn new(len: usize) -> Option<Self> {
        (len >= 2).then_some(Self { len, index: 0 })
    }

    /// Advances, returning `(previous, next)` image indices.
    pub fn advance(&mut self) -> (usize, usize) {
        let previous = self.index;
        self.index = (self.index + 1) % self.len;
        (previous, self.index)
    }
}
