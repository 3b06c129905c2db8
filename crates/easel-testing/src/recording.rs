//! Paint capture

use easel_scene::{Color, ImageHandle, Surface};

/// One recorded paint call, with the arguments it was made with.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    OutlineRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    FillOval {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        baseline: f32,
        font_size: f32,
        color: Color,
    },
    Image {
        image: ImageHandle,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    SetClip {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    ClearClip,
}

/// A [`Surface`] that records every call in order.
#[derive(Default)]
pub struct RecordingSurface {
    ops: Vec<PaintOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ops.push(PaintOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn outline_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ops.push(PaintOp::OutlineRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_oval(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ops.push(PaintOp::FillOval {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
        self.ops.push(PaintOp::Line {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }

    fn draw_string(&mut self, text: &str, x: f32, baseline: f32, font_size: f32, color: Color) {
        self.ops.push(PaintOp::Text {
            text: text.to_owned(),
            x,
            baseline,
            font_size,
            color,
        });
    }

    fn draw_image(&mut self, image: ImageHandle, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(PaintOp::Image {
            image,
            x,
            y,
            width,
            height,
        });
    }

    fn set_clip(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(PaintOp::SetClip {
            x,
            y,
            width,
            height,
        });
    }

    fn clear_clip(&mut self) {
        self.ops.push(PaintOp::ClearClip);
    }
}
