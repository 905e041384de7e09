use crate::format::{format_human_number, times_label};
use log::*;

/// Total electoral votes; the trump side gets whatever the clinton side doesn't.
pub const ELECTORAL_VOTES: u16 = 538;

/// One bar of the electoral-vote distribution as read from the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// Number of simulations that produced this outcome.
    pub n: f64,
    /// Clinton electoral votes, in `[0, 538]`.
    pub count: u16,
}

/// Horizontal extent of a bar, supplied by whoever lays the bars out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub left: f64,
    pub width: f64,
}

impl Extent {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn midpoint(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TooltipText {
    pub clinton: String,
    pub trump: String,
    pub n: String,
    pub unit: &'static str,
}

impl TooltipText {
    pub fn for_bar(bar: &Bar) -> Self {
        Self {
            clinton: bar.count.to_string(),
            trump: (ELECTORAL_VOTES.saturating_sub(bar.count)).to_string(),
            n: format_human_number(bar.n),
            unit: times_label(bar.n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipPlacement {
    /// Tooltip centred on `center`, in container coordinates.
    Centered { center: f64 },
    FlushLeft,
    FlushRight,
}

/// What the tooltip widget needs from the thing that displays it.
pub trait TooltipSurface {
    /// Bar extents in container coordinates, in bar order.
    fn bar_extents(&self) -> &[Extent];

    /// Offset of the bars' parent container from the pointer's origin.
    fn container_origin(&self) -> f64;

    fn container_width(&self) -> f64;

    fn set_bar_focus(&mut self, index: usize, focused: bool);

    fn set_tooltip_text(&mut self, text: &TooltipText);

    /// Width of the tooltip with its current text.
    fn tooltip_width(&self) -> f64;

    fn place_tooltip(&mut self, placement: TooltipPlacement);
}

/// Binary search for the bar under `x`.
///
/// Extents must be sorted by position. A bar matches when `x` lies within
/// `[left, right]` inclusive. When the search runs out without a hit (past
/// either end, or in a gap) the last bar is returned. Returns `None` only for
/// an empty slice.
pub fn find_bar_at_x(extents: &[Extent], x: f64) -> Option<usize> {
    let mut min = 0;
    let mut max = extents.len();

    while min < max {
        let mid = (min + max) / 2;
        let extent = &extents[mid];
        if extent.left <= x && extent.right() >= x {
            return Some(mid);
        } else if extent.right() < x {
            min = mid + 1;
        } else {
            max = mid;
        }
    }

    extents.len().checked_sub(1)
}

/// First bar whose running total of `n` reaches half the overall total.
pub fn find_median_bar(bars: &[Bar]) -> Option<usize> {
    if bars.is_empty() {
        return None;
    }

    let running_totals: Vec<f64> = bars
        .iter()
        .scan(0.0, |total, bar| {
            *total += bar.n;
            Some(*total)
        })
        .collect();

    let median = running_totals.last().copied().unwrap_or(0.0) / 2.0;

    Some(
        running_totals
            .iter()
            .position(|&total| total >= median)
            .unwrap_or(0),
    )
}

/// Hover tooltip over the electoral-vote distribution.
#[derive(Debug)]
pub struct VoteCountTooltip {
    bars: Vec<Bar>,
    default_bar: usize,
    focal_bar: usize,
}

impl VoteCountTooltip {
    /// Focuses the median bar. Returns `None` when there is nothing to show.
    pub fn setup<S: TooltipSurface>(bars: Vec<Bar>, surface: &mut S) -> Option<Self> {
        let Some(default_bar) = find_median_bar(&bars) else {
            warn!("No vote-count bars, tooltip disabled");
            return None;
        };
        if surface.bar_extents().len() != bars.len() {
            warn!(
                "Bar layout has {} extents for {} bars, tooltip disabled",
                surface.bar_extents().len(),
                bars.len()
            );
            return None;
        }

        info!(
            "Vote-count tooltip: {} bars, median bar {} ({} votes)",
            bars.len(),
            default_bar,
            bars[default_bar].count
        );

        let mut tooltip = Self {
            bars,
            default_bar,
            focal_bar: default_bar,
        };
        surface.set_bar_focus(default_bar, true);
        tooltip.focus_bar(default_bar, surface);
        Some(tooltip)
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    #[cfg(test)]
    pub fn default_bar(&self) -> usize {
        self.default_bar
    }

    #[cfg(test)]
    pub fn focal_bar(&self) -> usize {
        self.focal_bar
    }

    pub fn focus_bar<S: TooltipSurface>(&mut self, index: usize, surface: &mut S) {
        let Some(bar) = self.bars.get(index) else {
            return;
        };

        surface.set_bar_focus(self.focal_bar, false);
        self.focal_bar = index;
        surface.set_bar_focus(self.focal_bar, true);

        surface.set_tooltip_text(&TooltipText::for_bar(bar));

        self.reposition_tooltip(surface);
    }

    pub fn reposition_tooltip<S: TooltipSurface>(&self, surface: &mut S) {
        let Some(extent) = surface.bar_extents().get(self.focal_bar).copied() else {
            return;
        };
        let center = extent.midpoint();
        let width = surface.tooltip_width();
        let left = center - width / 2.0;

        let placement = if left < 0.0 {
            TooltipPlacement::FlushLeft
        } else if left + width > surface.container_width() {
            TooltipPlacement::FlushRight
        } else {
            TooltipPlacement::Centered { center }
        };
        surface.place_tooltip(placement);
    }

    /// `client_x` is in pointer coordinates; the container origin is subtracted here.
    pub fn pointer_move<S: TooltipSurface>(&mut self, client_x: f64, surface: &mut S) {
        let x = client_x - surface.container_origin();
        if let Some(index) = find_bar_at_x(surface.bar_extents(), x) {
            if index != self.focal_bar {
                debug!("Pointer at {:.1} focuses bar {}", x, index);
            }
            self.focus_bar(index, surface);
        }
    }

    pub fn pointer_leave<S: TooltipSurface>(&mut self, surface: &mut S) {
        self.focus_bar(self.default_bar, surface);
    }
}
