use crate::histogram::{BucketColor, Histogram, WinProbabilities};
use crate::vote_counts::{Bar, TooltipText, find_median_bar};
use log::*;
use textplots::{Chart, Plot, Shape};

/// Prints the widgets' default state as plain text.
pub struct DistributionVisualizer {
    width: u32,
    height: u32,
}

impl Default for DistributionVisualizer {
    fn default() -> Self {
        Self {
            width: 120,
            height: 40,
        }
    }
}

impl DistributionVisualizer {
    /// Sizes the charts to `columns` terminal columns.
    pub fn for_columns(columns: u16) -> Self {
        Self {
            width: (columns as u32 * 2).saturating_sub(24).max(32),
            ..Default::default()
        }
    }

    pub fn display_default_tooltip(&self, bars: &[Bar]) {
        let Some(index) = find_median_bar(bars) else {
            warn!("No vote-count bars to summarize");
            return;
        };
        let text = TooltipText::for_bar(&bars[index]);
        println!("Median outcome (bar {} of {}):", index + 1, bars.len());
        println!("  Clinton {}", text.clinton);
        println!("  Trump {}", text.trump);
        println!("  {} {}", text.n, text.unit);
    }

    pub fn display_histograms(&self, win_probabilities: &WinProbabilities) {
        println!("\nBucket colors:");
        for color in [
            BucketColor::StrongDem,
            BucketColor::MutedDem,
            BucketColor::TossUp,
            BucketColor::MutedGop,
            BucketColor::StrongGop,
        ] {
            println!("  {} {:?} {}", color_char(color), color, color.hex());
        }
        for histogram in win_probabilities.histograms() {
            self.plot_histogram(histogram);
        }
        info!(
            "Summarized {} histograms, max bucket fraction {:.4}",
            win_probabilities.histograms().len(),
            win_probabilities.max_fraction()
        );
    }

    fn plot_histogram(&self, histogram: &Histogram) {
        println!(
            "\n{} ({}): mean {:+.1}, stddev {:.1}",
            histogram.name,
            histogram.category.label(),
            histogram.mean,
            histogram.stddev
        );
        println!("  {}", color_strip(histogram));

        let points: Vec<(f32, f32)> = histogram
            .buckets
            .iter()
            .map(|b| (((b.start + b.end) / 2.0) as f32, b.fraction as f32))
            .collect();
        if points.is_empty() {
            return;
        }

        let (lo, hi) = if histogram.min <= histogram.max {
            (histogram.min, histogram.max)
        } else {
            (histogram.max, histogram.min)
        };
        Chart::new(self.width, self.height, lo as f32, hi as f32)
            .lineplot(&Shape::Bars(&points))
            .display();
    }
}

/// One character per bucket, in domain order.
pub fn color_strip(histogram: &Histogram) -> String {
    histogram
        .buckets
        .iter()
        .map(|b| color_char(b.color))
        .collect()
}

fn color_char(color: BucketColor) -> char {
    match color {
        BucketColor::StrongDem => 'D',
        BucketColor::MutedDem => 'd',
        BucketColor::StrongGop => 'R',
        BucketColor::MutedGop => 'r',
        BucketColor::TossUp => '~',
    }
}
