//! Drawing surface contract
//!
//! The renderer only needs a small immediate-mode 2D API. [`CanvasSurface`]
//! maps it onto the browser canvas; [`RecordingSurface`] keeps the command
//! stream in memory so rendering can be checked without a browser.
//!
//! [`CanvasSurface`]: crate::CanvasSurface

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Alphabetic => "alphabetic",
        }
    }
}

/// Immediate-mode 2D drawing API
pub trait DrawSurface {
    /// Intrinsic width in surface pixels
    fn width(&self) -> f64;
    /// Intrinsic height in surface pixels
    fn height(&self) -> f64;

    fn set_stroke_color(&mut self, color: &str);
    fn set_fill_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Full circle path around `(x, y)`
    fn circle(&mut self, x: f64, y: f64, radius: f64);
    fn stroke(&mut self);
    fn fill(&mut self);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    /// Advance width of `text` in the current font
    fn measure_text(&mut self, text: &str) -> f64;

    /// Stroke a single segment as its own path
    fn segment(&mut self, from: (f64, f64), to: (f64, f64)) {
        self.begin_path();
        self.move_to(from.0, from.1);
        self.line_to(to.0, to.1);
        self.stroke();
    }
}

// ============================================================================
// RECORDING SURFACE
// ============================================================================

/// One call made on a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    StrokeColor(String),
    FillColor(String),
    LineWidth(f64),
    Font(String),
    TextAlign(TextAlign),
    TextBaseline(TextBaseline),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Circle { x: f64, y: f64, radius: f64 },
    Stroke,
    Fill,
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    FillText { text: String, x: f64, y: f64 },
}

/// In-memory surface that records every command
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    /// Advance width per character used by `measure_text`
    char_width: f64,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            char_width: 7.0,
            commands: Vec::new(),
        }
    }

    /// Texts drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Texts drawn at a given x
    pub fn texts_at(&self, x: f64) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillText { text, x: at, .. } if *at == x => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Circles filled, as `(x, y, radius)`
    pub fn circles(&self) -> Vec<(f64, f64, f64)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Circle { x, y, radius } => Some((*x, *y, *radius)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, command: &DrawCommand) -> usize {
        self.commands.iter().filter(|c| *c == command).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::StrokeColor(color.to_string()));
    }

    fn set_fill_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillColor(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(DrawCommand::TextAlign(align));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.commands.push(DrawCommand::TextBaseline(baseline));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo(x, y));
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64) {
        self.commands.push(DrawCommand::Circle { x, y, radius });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }
}
