//! Drawing surface abstraction
//!
//! The game never touches pixels. A frame is a sequence of primitive calls
//! on a [`Canvas`]; the platform decides how to rasterize them. [`DrawList`]
//! is a canvas that only records, used by tests and the headless binary.

use std::collections::HashSet;

use glam::Vec2;

use crate::sim::Rect;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Images the scene may ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    SpinoStand,
    SpinoDuck,
    Cactus,
    Pteranodon,
    /// Tree image by variant index
    Tree(usize),
}

/// Font sizes used by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Score line (20 px)
    Hud,
    /// Buttons and stats (36 px)
    Big,
    /// Titles and the countdown number (72 px, bold)
    Huge,
}

impl Font {
    pub fn pixel_size(self) -> u32 {
        match self {
            Font::Hud => 20,
            Font::Big => 36,
            Font::Huge => 72,
        }
    }
}

/// How text is positioned relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// Text request
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub font: Font,
    pub pos: Vec2,
    pub anchor: Anchor,
    pub color: Color,
    /// Outline color and width in pixels
    pub outline: Option<(Color, u32)>,
}

impl Text {
    pub fn new(content: impl Into<String>, font: Font, pos: Vec2, anchor: Anchor) -> Self {
        Self {
            content: content.into(),
            font,
            pos,
            anchor,
            color: Color::WHITE,
            outline: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn outlined(mut self, color: Color, width: u32) -> Self {
        self.outline = Some((color, width));
        self
    }
}

/// Rendering collaborator
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Rectangle border with rounded corners
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32, radius: f32);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32);
    /// Ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn circle_outline(&mut self, center: Vec2, radius: f32, color: Color, width: f32);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);
    /// Draw an image stretched to `rect`; false if the image is not available
    fn blit(&mut self, sprite: SpriteId, rect: Rect) -> bool;
    fn text(&mut self, text: &Text);
    /// Translucent full-frame fill
    fn overlay(&mut self, color: Color);
    /// Downscale everything drawn so far by `factor`, then upscale it back
    fn pixelate(&mut self, factor: u32);
}

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect(Rect, Color),
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f32,
        radius: f32,
    },
    FillPolygon(Vec<Vec2>, Color),
    StrokePolygon(Vec<Vec2>, Color, f32),
    FillEllipse(Rect, Color),
    FillCircle(Vec2, f32, Color),
    CircleOutline(Vec2, f32, Color, f32),
    Line(Vec2, Vec2, Color, f32),
    Blit(SpriteId, Rect),
    Text(Text),
    Overlay(Color),
    Pixelate(u32),
}

/// Canvas that records commands instead of drawing
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    sprites: HashSet<SpriteId>,
}

impl DrawList {
    /// Recorder with no images; every blit reports a missing sprite
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder that accepts blits of the given sprites
    pub fn with_sprites(sprites: impl IntoIterator<Item = SpriteId>) -> Self {
        Self {
            commands: Vec::new(),
            sprites: sprites.into_iter().collect(),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every text string drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(t) => Some(t.content.as_str()),
            _ => None,
        })
    }

    /// Index of the first command matching `pred`
    pub fn position(&self, pred: impl Fn(&DrawCommand) -> bool) -> Option<usize> {
        self.commands.iter().position(pred)
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32, radius: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            width,
            radius,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands
            .push(DrawCommand::FillPolygon(points.to_vec(), color));
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32) {
        self.commands
            .push(DrawCommand::StrokePolygon(points.to_vec(), color, width));
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillEllipse(rect, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::FillCircle(center, radius, color));
    }

    fn circle_outline(&mut self, center: Vec2, radius: f32, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::CircleOutline(center, radius, color, width));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line(from, to, color, width));
    }

    fn blit(&mut self, sprite: SpriteId, rect: Rect) -> bool {
        if !self.sprites.contains(&sprite) {
            return false;
        }
        self.commands.push(DrawCommand::Blit(sprite, rect));
        true
    }

    fn text(&mut self, text: &Text) {
        self.commands.push(DrawCommand::Text(text.clone()));
    }

    fn overlay(&mut self, color: Color) {
        self.commands.push(DrawCommand::Overlay(color));
    }

    fn pixelate(&mut self, factor: u32) {
        self.commands.push(DrawCommand::Pixelate(factor));
    }
}
