use crate::debounce::Debouncer;
use crate::normal::bar_fraction;
use crate::page::Race;
use log::*;
use std::time::{Duration, Instant};

/// Horizontal pixels per bucket: a 4px bar plus a 1px gap.
pub const BUCKET_WIDTH: u32 = 5;
pub const BAR_WIDTH: f64 = 4.0;
pub const RESIZE_DELAY: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    LikelyClinton,
    Battlegrounds,
    LikelyTrump,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::LikelyClinton,
        Category::Battlegrounds,
        Category::LikelyTrump,
    ];

    /// Margin axis `(min, max)`. Battlegrounds run from +20 down to -20.
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Category::LikelyClinton => (0.0, 40.0),
            Category::Battlegrounds => (20.0, -20.0),
            Category::LikelyTrump => (0.0, -40.0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::LikelyClinton => "Likely Clinton",
            Category::Battlegrounds => "Battlegrounds",
            Category::LikelyTrump => "Likely Trump",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketColor {
    StrongDem,
    MutedDem,
    StrongGop,
    MutedGop,
    TossUp,
}

impl BucketColor {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            BucketColor::StrongDem => (0x4c, 0x7d, 0xe0),
            BucketColor::MutedDem => (0xaf, 0xba, 0xf9),
            BucketColor::StrongGop => (0xe5, 0x24, 0x26),
            BucketColor::MutedGop => (0xf1, 0x91, 0x92),
            BucketColor::TossUp => (0x99, 0x99, 0x99),
        }
    }

    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Colour of the bucket spanning `bar_min..bar_max`.
///
/// "Straddles" is `(min <= t) == (max >= t)` rather than a range check, so
/// it also holds for buckets on a reversed axis.
pub fn bucket_color(bar_min: f64, bar_max: f64, mean: f64) -> BucketColor {
    let straddles = |t: f64| (bar_min <= t) == (bar_max >= t);

    if straddles(0.0) {
        return BucketColor::TossUp;
    }
    let strong = straddles(mean);
    match (bar_max >= 0.0, strong) {
        (true, true) => BucketColor::StrongDem,
        (true, false) => BucketColor::MutedDem,
        (false, true) => BucketColor::StrongGop,
        (false, false) => BucketColor::MutedGop,
    }
}

/// Number of buckets that fit in `width` pixels, forced odd so the middle
/// bucket is centred.
pub fn bucket_count(width: u32) -> usize {
    let n = ((width + 1) / BUCKET_WIDTH) as usize;
    if n % 2 == 0 { n.saturating_sub(1) } else { n }
}

/// Left edge of the first bar so the whole run is centred in `width`.
///
/// The first slot is only 4px wide, so the run is `5 * n - 1` pixels.
pub fn first_bar_offset(width: u32, n_buckets: usize) -> f64 {
    let run = (BUCKET_WIDTH as f64) * n_buckets as f64 - 1.0;
    ((width as f64 - run) / 2.0).floor()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub start: f64,
    pub end: f64,
    pub color: BucketColor,
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub name: String,
    pub category: Category,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stddev: f64,
    pub buckets: Vec<Bucket>,
}

impl Histogram {
    pub fn new(name: &str, category: Category, mean: f64, stddev: f64) -> Self {
        let (min, max) = category.domain();
        Self {
            name: name.to_string(),
            category,
            min,
            max,
            mean,
            stddev,
            buckets: Vec::new(),
        }
    }

    /// Splits the domain into `n_buckets` equal buckets and returns the
    /// largest bucket fraction.
    pub fn compute_buckets(&mut self, n_buckets: usize) -> f64 {
        self.buckets.clear();
        let size = (self.max - self.min) / n_buckets as f64;
        let point_mass = self.point_mass_bucket(n_buckets);
        let mut max_fraction: f64 = 0.0;
        for i in 0..n_buckets {
            let start = self.min + size * i as f64;
            let end = self.min + size * (i + 1) as f64;
            let fraction = if self.stddev > 0.0 {
                bar_fraction(start, end, self.mean, self.stddev)
            } else if point_mass == Some(i) {
                1.0
            } else {
                0.0
            };
            max_fraction = max_fraction.max(fraction);
            self.buckets.push(Bucket {
                start,
                end,
                color: bucket_color(start, end, self.mean),
                fraction,
            });
        }
        max_fraction
    }

    // With no spread the mean takes the whole mass. The far edge belongs to
    // the last bucket.
    fn point_mass_bucket(&self, n_buckets: usize) -> Option<usize> {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        if n_buckets == 0 || !(lo..=hi).contains(&self.mean) || lo == hi {
            return None;
        }
        let offset = (self.mean - self.min) / (self.max - self.min) * n_buckets as f64;
        Some((offset.floor() as usize).min(n_buckets - 1))
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Size of a container's drawable area, padding excluded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: u32,
    pub height: f64,
}

pub trait Canvas {
    fn resize(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: PixelRect, color: BucketColor);
}

/// Where histograms are measured and drawn, indexed in registration order.
pub trait HistogramSurface {
    type Canvas: Canvas;

    fn container_size(&self, index: usize) -> Option<Size>;
    fn canvas_mut(&mut self, index: usize) -> Option<&mut Self::Canvas>;
}

/// All race sparklines on the page. Bar heights share one scale.
#[derive(Debug)]
pub struct WinProbabilities {
    histograms: Vec<Histogram>,
    max_fraction: f64,
    resize: Debouncer,
}

impl Default for WinProbabilities {
    fn default() -> Self {
        Self::new()
    }
}

impl WinProbabilities {
    pub fn new() -> Self {
        Self {
            histograms: Vec::new(),
            max_fraction: 0.0,
            resize: Debouncer::new(RESIZE_DELAY),
        }
    }

    pub fn collect_histograms(&mut self, category: Category, races: &[Race]) {
        for race in races {
            self.histograms
                .push(Histogram::new(&race.name, category, race.mean, race.stddev));
        }
        debug!("Collected {} {} histograms", races.len(), category.label());
    }

    pub fn histograms(&self) -> &[Histogram] {
        &self.histograms
    }

    pub fn max_fraction(&self) -> f64 {
        self.max_fraction
    }

    /// The first histogram is the legend, so the second is measured when present.
    pub fn reference_index(&self) -> Option<usize> {
        match self.histograms.len() {
            0 => None,
            1 => Some(0),
            _ => Some(1),
        }
    }

    /// Recomputes every histogram's buckets for `width` pixels.
    pub fn compute(&mut self, width: u32) -> usize {
        let n_buckets = bucket_count(width);
        self.max_fraction = self
            .histograms
            .iter_mut()
            .map(|h| h.compute_buckets(n_buckets))
            .fold(0.0, f64::max);
        n_buckets
    }

    pub fn refresh<S: HistogramSurface>(&mut self, surface: &mut S) {
        let Some(reference) = self.reference_index() else {
            return;
        };
        let Some(size) = surface.container_size(reference) else {
            warn!("Histogram container {} has no size, skipping refresh", reference);
            return;
        };

        let n_buckets = self.compute(size.width);
        let x0 = first_bar_offset(size.width, n_buckets);
        debug!(
            "Refresh {} histograms: {}x{:.0}, {} buckets, max fraction {:.4}",
            self.histograms.len(),
            size.width,
            size.height,
            n_buckets,
            self.max_fraction
        );

        for (index, histogram) in self.histograms.iter().enumerate() {
            let Some(canvas) = surface.canvas_mut(index) else {
                continue;
            };
            canvas.resize(size.width, size.height as u32);
            canvas.clear();

            if self.max_fraction <= 0.0 {
                continue;
            }
            for (i, bucket) in histogram.buckets.iter().enumerate() {
                let h = size.height * bucket.fraction / self.max_fraction;
                let rect = PixelRect {
                    x: x0 + (BUCKET_WIDTH as usize * i) as f64,
                    y: size.height - h,
                    width: BAR_WIDTH,
                    height: h,
                };
                canvas.fill_rect(rect, bucket.color);
            }
        }
    }

    pub fn on_resize(&mut self, now: Instant) {
        if self.resize.trigger(now) {
            debug!("Resize refresh scheduled");
        } else {
            trace!("Resize absorbed, {:?}", self.resize.state());
        }
    }

    /// Runs the deferred refresh when due. Returns true if it ran.
    pub fn tick<S: HistogramSurface>(&mut self, now: Instant, surface: &mut S) -> bool {
        if self.resize.poll(now) {
            self.refresh(surface);
            true
        } else {
            false
        }
    }

    pub fn pending_refresh(&self, now: Instant) -> Option<Duration> {
        self.resize.remaining(now)
    }
}
