use crate::Error;
use crate::histogram::{BucketColor, Category, HistogramSurface, Size, WinProbabilities};
use crate::page::Page;
use crate::pixels::PixelGrid;
use crate::vote_counts::{
    Bar, Extent, TooltipPlacement, TooltipSurface, TooltipText, VoteCountTooltip, find_bar_at_x,
};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::*;
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};
use std::io;
use std::time::{Duration, Instant};

const TICK_RATE: Duration = Duration::from_millis(50);
/// Tooltip box (three lines plus borders) and the caret row under it.
const TOOLTIP_BOX_HEIGHT: u16 = 5;
const TOOLTIP_AREA_HEIGHT: u16 = TOOLTIP_BOX_HEIGHT + 1;
const BARS_HEIGHT: u16 = 10;
const VOTE_PANEL_HEIGHT: u16 = TOOLTIP_AREA_HEIGHT + BARS_HEIGHT + 2;
const LABEL_WIDTH: u16 = 18;
const RACE_ROWS: u16 = 2;
const VOTES_TO_WIN: u16 = 270;
const BAR_SYMBOLS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

// Helper struct for timing
struct Timer {
    start: Instant,
    name: &'static str,
}

impl Timer {
    fn start(name: &'static str) -> Self {
        Timer {
            start: Instant::now(),
            name,
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        debug!("Finished: {} in {:?}", self.name, self.start.elapsed());
    }
}

macro_rules! time_it {
    ($name:expr, $block:block) => {{
        let _timer = Timer::start($name);
        $block
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PointerMove { column: u16, row: u16 },
    Resize(u16, u16),
    None,
}

pub fn poll_event(timeout: Duration) -> Result<InputEvent, Error> {
    if !event::poll(timeout)? {
        return Ok(InputEvent::None);
    }
    Ok(match event::read()? {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        Event::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    })
}

fn translate_key(key: KeyEvent) -> InputEvent {
    if key.kind != KeyEventKind::Press {
        return InputEvent::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputEvent::Quit;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputEvent::Quit,
        _ => InputEvent::None,
    }
}

fn translate_mouse(mouse: MouseEvent) -> InputEvent {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => InputEvent::PointerMove {
            column: mouse.column,
            row: mouse.row,
        },
        _ => InputEvent::None,
    }
}

/// Terminal-side state of the vote-count chart.
#[derive(Debug)]
pub struct VoteCountView {
    bar_count: usize,
    bars: Rect,
    tooltip_area: Rect,
    extents: Vec<Extent>,
    focused: Option<usize>,
    text: TooltipText,
    placement: TooltipPlacement,
}

impl VoteCountView {
    fn new(bar_count: usize) -> Self {
        Self {
            bar_count,
            bars: Rect::default(),
            tooltip_area: Rect::default(),
            extents: Vec::new(),
            focused: None,
            text: TooltipText::default(),
            placement: TooltipPlacement::FlushLeft,
        }
    }

    /// Spreads the bars evenly over the container.
    fn set_area(&mut self, bars: Rect, tooltip_area: Rect) {
        self.bars = bars;
        self.tooltip_area = tooltip_area;
        let width = if self.bar_count == 0 {
            0.0
        } else {
            bars.width as f64 / self.bar_count as f64
        };
        self.extents = (0..self.bar_count)
            .map(|i| Extent {
                left: i as f64 * width,
                width,
            })
            .collect();
    }

    fn lines(&self) -> [Line<'_>; 3] {
        let dem = Style::default()
            .fg(rgb(BucketColor::StrongDem.rgb()))
            .add_modifier(Modifier::BOLD);
        let gop = Style::default()
            .fg(rgb(BucketColor::StrongGop.rgb()))
            .add_modifier(Modifier::BOLD);
        [
            Line::from(vec![
                Span::raw("Clinton "),
                Span::styled(self.text.clinton.as_str(), dem),
            ]),
            Line::from(vec![
                Span::raw("Trump "),
                Span::styled(self.text.trump.as_str(), gop),
            ]),
            Line::from(vec![
                Span::styled(
                    self.text.n.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::raw(self.text.unit),
            ]),
        ]
    }

    /// Tooltip box in terminal coordinates.
    fn tooltip_rect(&self) -> Rect {
        let width = (self.tooltip_width() as u16).min(self.bars.width);
        let left = match self.placement {
            TooltipPlacement::Centered { center } => (center - width as f64 / 2.0).round() as u16,
            TooltipPlacement::FlushLeft => 0,
            TooltipPlacement::FlushRight => self.bars.width.saturating_sub(width),
        };
        Rect::new(
            self.bars.x + left,
            self.tooltip_area.y,
            width,
            TOOLTIP_BOX_HEIGHT.min(self.tooltip_area.height),
        )
    }

    fn caret_position(&self) -> Option<Position> {
        let extent = self.extents.get(self.focused?)?;
        if self.tooltip_area.height <= TOOLTIP_BOX_HEIGHT {
            return None;
        }
        let column = (extent.midpoint().floor() as u16).min(self.bars.width.saturating_sub(1));
        Some(Position::new(
            self.bars.x + column,
            self.tooltip_area.y + TOOLTIP_BOX_HEIGHT,
        ))
    }
}

impl TooltipSurface for VoteCountView {
    fn bar_extents(&self) -> &[Extent] {
        &self.extents
    }

    fn container_origin(&self) -> f64 {
        self.bars.x as f64
    }

    fn container_width(&self) -> f64 {
        self.bars.width as f64
    }

    fn set_bar_focus(&mut self, index: usize, focused: bool) {
        if focused {
            self.focused = Some(index);
        } else if self.focused == Some(index) {
            self.focused = None;
        }
    }

    fn set_tooltip_text(&mut self, text: &TooltipText) {
        self.text = text.clone();
    }

    fn tooltip_width(&self) -> f64 {
        let widest = self.lines().iter().map(Line::width).max().unwrap_or(0);
        (widest + 2) as f64
    }

    fn place_tooltip(&mut self, placement: TooltipPlacement) {
        self.placement = placement;
    }
}

struct VoteBars<'a> {
    bars: &'a [Bar],
    view: &'a VoteCountView,
}

impl Widget for VoteBars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let max_n = self.bars.iter().map(|b| b.n).fold(0.0, f64::max);
        if max_n <= 0.0 {
            return;
        }
        let levels = area.height as f64 * 8.0;

        for col in 0..area.width {
            let Some(index) = find_bar_at_x(&self.view.extents, col as f64 + 0.5) else {
                continue;
            };
            let Some(bar) = self.bars.get(index) else {
                continue;
            };
            let eighths = (bar.n / max_n * levels).round() as u16;
            let color = if self.view.focused == Some(index) {
                Color::Yellow
            } else if bar.count >= VOTES_TO_WIN {
                rgb(BucketColor::StrongDem.rgb())
            } else {
                rgb(BucketColor::StrongGop.rgb())
            };

            for row in 0..area.height {
                let from_bottom = area.height - 1 - row;
                let fill = eighths.saturating_sub(from_bottom * 8).min(8);
                if fill == 0 {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(BAR_SYMBOLS[fill as usize]).set_fg(color);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RaceRow {
    label: Rect,
    canvas: Rect,
}

/// Terminal-side state of the race sparklines, in histogram order.
#[derive(Debug, Default)]
pub struct RacesView {
    rows: Vec<RaceRow>,
    canvases: Vec<PixelGrid>,
}

impl RacesView {
    fn set_rows(&mut self, rows: Vec<RaceRow>) {
        self.canvases.resize_with(rows.len(), || PixelGrid::new(0, 0));
        self.rows = rows;
    }
}

impl HistogramSurface for RacesView {
    type Canvas = PixelGrid;

    fn container_size(&self, index: usize) -> Option<Size> {
        self.rows.get(index).map(|row| Size {
            width: row.canvas.width as u32,
            height: row.canvas.height as f64 * 2.0,
        })
    }

    fn canvas_mut(&mut self, index: usize) -> Option<&mut PixelGrid> {
        self.canvases.get_mut(index)
    }
}

#[derive(Debug, Default)]
struct Areas {
    vote_panel: Rect,
    tooltip: Rect,
    bars: Rect,
    races_panel: Rect,
    headings: Vec<(Category, Rect)>,
    rows: Vec<RaceRow>,
}

fn layout(area: Rect, race_groups: &[(Category, usize)]) -> Areas {
    let [vote_panel, races_panel] =
        Layout::vertical([Constraint::Length(VOTE_PANEL_HEIGHT), Constraint::Min(0)]).areas(area);
    let [tooltip, bars] = Layout::vertical([
        Constraint::Length(TOOLTIP_AREA_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(Block::bordered().inner(vote_panel));

    let inner = Block::bordered().inner(races_panel);
    let bottom = inner.bottom();
    let mut y = inner.y;
    let mut take = |height: u16| {
        let top = y.min(bottom);
        y = y.saturating_add(height);
        Rect::new(inner.x, top, inner.width, y.min(bottom) - top)
    };

    let mut headings = Vec::new();
    let mut rows = Vec::new();
    for &(category, count) in race_groups {
        if count == 0 {
            continue;
        }
        headings.push((category, take(1)));
        for _ in 0..count {
            let row = take(RACE_ROWS);
            let [label, canvas] =
                Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(0)])
                    .areas(row);
            rows.push(RaceRow { label, canvas });
        }
    }

    Areas {
        vote_panel,
        tooltip,
        bars,
        races_panel,
        headings,
        rows,
    }
}

pub struct App {
    tooltip: Option<VoteCountTooltip>,
    vote_view: VoteCountView,
    win_probabilities: Option<WinProbabilities>,
    races_view: RacesView,
    race_groups: Vec<(Category, usize)>,
    areas: Areas,
    pointer_inside: bool,
    should_quit: bool,
}

impl App {
    pub fn new(page: Page, area: Rect) -> Self {
        let bars = page
            .vote_counts
            .as_ref()
            .map(|v| v.bars())
            .unwrap_or_default();
        let race_groups = Category::ALL
            .iter()
            .map(|&c| (c, page.races.as_ref().map_or(0, |r| r.category(c).len())))
            .collect();

        let mut app = Self {
            tooltip: None,
            vote_view: VoteCountView::new(bars.len()),
            win_probabilities: None,
            races_view: RacesView::default(),
            race_groups,
            areas: Areas::default(),
            pointer_inside: false,
            should_quit: false,
        };
        app.relayout(area);

        if page.vote_counts.is_some() {
            app.tooltip = VoteCountTooltip::setup(bars, &mut app.vote_view);
        } else {
            warn!("Page has no vote counts, tooltip disabled");
        }

        match &page.races {
            Some(races) if !races.is_empty() => {
                let mut win_probabilities = WinProbabilities::new();
                for category in Category::ALL {
                    win_probabilities.collect_histograms(category, races.category(category));
                }
                time_it!("Initial refresh", {
                    win_probabilities.refresh(&mut app.races_view);
                });
                app.win_probabilities = Some(win_probabilities);
            }
            _ => warn!("Page has no races, histograms disabled"),
        }

        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn relayout(&mut self, area: Rect) {
        self.areas = layout(area, &self.race_groups);
        self.vote_view.set_area(self.areas.bars, self.areas.tooltip);
        self.races_view.set_rows(self.areas.rows.clone());
        if let Some(tooltip) = &self.tooltip {
            tooltip.reposition_tooltip(&mut self.vote_view);
        }
    }

    pub fn handle_event(&mut self, event: InputEvent, now: Instant) {
        match event {
            InputEvent::Quit => self.should_quit = true,
            InputEvent::PointerMove { column, row } => self.pointer_moved(column, row),
            InputEvent::Resize(width, height) => {
                debug!("Resize to {}x{}", width, height);
                self.relayout(Rect::new(0, 0, width, height));
                if let Some(win_probabilities) = self.win_probabilities.as_mut() {
                    win_probabilities.on_resize(now);
                }
            }
            InputEvent::None => {}
        }
    }

    fn pointer_moved(&mut self, column: u16, row: u16) {
        let Some(tooltip) = self.tooltip.as_mut() else {
            return;
        };
        if self.vote_view.bars.contains(Position::new(column, row)) {
            self.pointer_inside = true;
            // Pointer sits at the centre of its cell.
            tooltip.pointer_move(column as f64 + 0.5, &mut self.vote_view);
        } else if self.pointer_inside {
            self.pointer_inside = false;
            tooltip.pointer_leave(&mut self.vote_view);
        }
    }

    /// Runs a deferred histogram refresh when one is due.
    pub fn tick(&mut self, now: Instant) {
        let Some(win_probabilities) = self.win_probabilities.as_mut() else {
            return;
        };
        if win_probabilities.pending_refresh(now) == Some(Duration::ZERO) {
            time_it!("Deferred refresh", {
                win_probabilities.tick(now, &mut self.races_view);
            });
        }
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        self.win_probabilities
            .as_ref()
            .and_then(|w| w.pending_refresh(now))
            .map_or(TICK_RATE, |remaining| remaining.min(TICK_RATE))
    }

    pub fn draw(&self, frame: &mut Frame) {
        let bounds = frame.area();
        let clip = |rect: Rect| rect.intersection(bounds);

        frame.render_widget(
            Block::bordered().title(" Electoral votes "),
            clip(self.areas.vote_panel),
        );
        match &self.tooltip {
            Some(tooltip) => {
                frame.render_widget(
                    VoteBars {
                        bars: tooltip.bars(),
                        view: &self.vote_view,
                    },
                    clip(self.areas.bars),
                );
                let tooltip_rect = clip(self.vote_view.tooltip_rect());
                frame.render_widget(Clear, tooltip_rect);
                frame.render_widget(
                    Paragraph::new(self.vote_view.lines().to_vec()).block(Block::bordered()),
                    tooltip_rect,
                );
                if let Some(caret) = self.vote_view.caret_position() {
                    if bounds.contains(caret) {
                        frame.buffer_mut()[caret].set_symbol("▼");
                    }
                }
            }
            None => frame.render_widget(
                Paragraph::new("No vote counts").style(Style::default().fg(Color::DarkGray)),
                clip(self.areas.bars),
            ),
        }

        frame.render_widget(
            Block::bordered().title(" Win probabilities "),
            clip(self.areas.races_panel),
        );
        let Some(win_probabilities) = &self.win_probabilities else {
            return;
        };
        for (category, heading) in &self.areas.headings {
            frame.render_widget(
                Paragraph::new(category.label()).style(Style::default().add_modifier(Modifier::BOLD)),
                clip(*heading),
            );
        }
        for ((histogram, row), canvas) in win_probabilities
            .histograms()
            .iter()
            .zip(&self.races_view.rows)
            .zip(&self.races_view.canvases)
        {
            frame.render_widget(Paragraph::new(histogram.name.as_str()), clip(row.label));
            frame.render_widget(canvas, clip(row.canvas));
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), Error> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, page: Page) -> Result<(), Error> {
    let size = terminal.size()?;
    let mut app = App::new(page, Rect::new(0, 0, size.width, size.height));

    while !app.should_quit() {
        terminal.draw(|frame| app.draw(frame))?;
        let event = poll_event(app.poll_timeout(Instant::now()))?;
        let now = Instant::now();
        app.handle_event(event, now);
        app.tick(now);
    }
    Ok(())
}

pub fn run(page: Page) -> Result<(), Error> {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    info!("Dashboard started");
    let result = run_loop(&mut terminal, page);
    restore_terminal(&mut terminal)?;
    info!("Dashboard stopped");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{BarRecord, Race, Races, VoteCounts};
    use ratatui::backend::TestBackend;

    fn race(name: &str, mean: f64, stddev: f64) -> Race {
        Race {
            name: name.to_string(),
            mean,
            stddev,
        }
    }

    fn page() -> Page {
        Page {
            vote_counts: Some(VoteCounts {
                bars: (0..10)
                    .map(|i| BarRecord {
                        n: 1.0 + i as f64,
                        count: 250 + 5 * i,
                    })
                    .collect(),
            }),
            races: Some(Races {
                likely_clinton: vec![race("Key", 15.0, 6.0), race("California", 25.0, 5.0)],
                battlegrounds: vec![race("Florida", 1.5, 4.0), race("Ohio", -2.0, 4.0)],
                likely_trump: vec![race("Texas", -9.0, 4.5)],
            }),
        }
    }

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 82,
        height: 40,
    };

    #[test]
    fn translate_keys() {
        let key = |code, modifiers| KeyEvent::new(code, modifiers);
        assert_eq!(
            translate_key(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            InputEvent::Quit
        );
        assert_eq!(
            translate_key(key(KeyCode::Esc, KeyModifiers::NONE)),
            InputEvent::Quit
        );
        assert_eq!(
            translate_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputEvent::Quit
        );
        assert_eq!(
            translate_key(key(KeyCode::Char('x'), KeyModifiers::NONE)),
            InputEvent::None
        );
    }

    #[test]
    fn translate_mouse_moves() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            translate_mouse(mouse),
            InputEvent::PointerMove { column: 12, row: 7 }
        );
        let click = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            ..mouse
        };
        assert_eq!(translate_mouse(click), InputEvent::None);
    }

    #[test]
    fn startup_focuses_median_bar() {
        let app = App::new(page(), AREA);
        // Running totals of 1..=10 reach half of 55 at the seventh bar.
        let tooltip = app.tooltip.as_ref().unwrap();
        assert_eq!(tooltip.default_bar(), 6);
        assert_eq!(app.vote_view.focused, Some(6));
        assert_eq!(app.vote_view.text.clinton, "280");
        assert_eq!(app.vote_view.text.trump, "258");
    }

    #[test]
    fn bars_fill_container() {
        let app = App::new(page(), AREA);
        let bars = app.vote_view.bars;
        assert_eq!(bars.x, 1);
        assert_eq!(bars.width, 80);
        assert_eq!(bars.height, BARS_HEIGHT);
        assert_eq!(app.vote_view.extents.len(), 10);
        assert_eq!(app.vote_view.extents[9].right(), 80.0);
    }

    #[test]
    fn hover_then_leave_restores_median() {
        let mut app = App::new(page(), AREA);
        let now = Instant::now();
        let bars = app.vote_view.bars;

        // Columns 1..=80 hold ten bars of eight columns each.
        app.handle_event(
            InputEvent::PointerMove {
                column: bars.x + 3,
                row: bars.y + 2,
            },
            now,
        );
        assert_eq!(app.tooltip.as_ref().unwrap().focal_bar(), 0);
        assert_eq!(app.vote_view.focused, Some(0));
        assert_eq!(app.vote_view.placement, TooltipPlacement::FlushLeft);

        app.handle_event(
            InputEvent::PointerMove {
                column: bars.x + 79,
                row: bars.y,
            },
            now,
        );
        assert_eq!(app.vote_view.focused, Some(9));
        assert_eq!(app.vote_view.placement, TooltipPlacement::FlushRight);

        app.handle_event(InputEvent::PointerMove { column: 5, row: 0 }, now);
        assert_eq!(app.vote_view.focused, Some(6));
    }

    #[test]
    fn moves_outside_bars_without_entering_do_nothing() {
        let mut app = App::new(page(), AREA);
        app.handle_event(InputEvent::PointerMove { column: 0, row: 0 }, Instant::now());
        assert_eq!(app.vote_view.focused, Some(6));
        assert!(!app.pointer_inside);
    }

    #[test]
    fn startup_paints_histograms() {
        let app = App::new(page(), AREA);
        let races = &app.races_view;
        assert_eq!(races.rows.len(), 5);
        // 80 inner columns minus the label.
        let size = races.container_size(1).unwrap();
        assert_eq!(size.width, 62);
        assert_eq!(size.height, 4.0);
        for canvas in &races.canvases {
            assert_eq!(canvas.width(), 62);
            assert_eq!(canvas.height(), 4);
        }
    }

    #[test]
    fn resize_refresh_is_debounced() {
        let mut app = App::new(page(), AREA);
        let start = Instant::now();

        for (i, width) in [90u16, 100, 110].into_iter().enumerate() {
            let now = start + Duration::from_millis(50 * i as u64);
            app.handle_event(InputEvent::Resize(width, 40), now);
            app.tick(now);
        }
        // Bars follow the layout immediately, canvases wait for the refresh.
        assert_eq!(app.vote_view.bars.width, 108);
        assert_eq!(app.races_view.canvases[1].width(), 62);

        app.tick(start + Duration::from_millis(250));
        assert_eq!(app.races_view.canvases[1].width(), 90);
    }

    #[test]
    fn page_without_sections_is_inert() {
        let mut app = App::new(Page::default(), AREA);
        assert!(app.tooltip.is_none());
        assert!(app.win_probabilities.is_none());
        app.handle_event(InputEvent::PointerMove { column: 10, row: 10 }, Instant::now());
        app.handle_event(InputEvent::Resize(60, 30), Instant::now());
        app.tick(Instant::now());

        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
    }

    #[test]
    fn draw_renders_tooltip_and_labels() {
        let app = App::new(page(), AREA);
        let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = (0..AREA.height)
            .map(|y| {
                (0..AREA.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Clinton 280"));
        assert!(text.contains("Trump 258"));
        assert!(text.contains("7 times"));
        assert!(text.contains("Battlegrounds"));
        assert!(text.contains("Florida"));
        assert!(text.contains("▼"));
    }
}
