//! Single channel slider (0.0–1.0).
//!
//! Renders a horizontal gradient from black (left) to the channel's primary
//! color (right) as a rasterized image, avoiding vger's broken linear
//! gradient coordinate handling.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;
use crate::math;

/// Rasterize a horizontal gradient: black on the left → `(r, g, b)` on the right.
fn rasterize_channel_gradient(width: u32, height: u32, r: f64, g: f64, b: f64) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64; // 0 at left, 1 at right
        let cr = math::channel_to_byte(t * r);
        let cg = math::channel_to_byte(t * g);
        let cb = math::channel_to_byte(t * b);
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = cr;
            buf[offset + 1] = cg;
            buf[offset + 2] = cb;
            buf[offset + 3] = 255;
        }
    }
    buf
}

/// Map a pointer x to a value, keeping the thumb inside the track.
fn value_at(x: f64, width: f64, thumb_radius: f64) -> Option<f64> {
    let usable = width - 2.0 * thumb_radius;
    if usable > 0.0 {
        Some(((x - thumb_radius) / usable).clamp(0.0, 1.0))
    } else {
        None
    }
}

pub struct ChannelSlider {
    id: ViewId,
    held: bool,
    /// `None` until the slider has reported; the thumb is hidden meanwhile.
    value: Option<f64>,
    primary: (f64, f64, f64),
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64)>,
    /// Cached gradient image.
    grad_img: Option<peniko::Image>,
    grad_hash: Vec<u8>,
    cached_dims: (u32, u32),
}

/// Creates a horizontal channel slider.
///
/// - `value`: 0.0 (black, left) to 1.0 (full `primary`, right). Written on
///   pointer down and drag, read back whenever it changes elsewhere.
/// - `primary`: the channel's unit color, e.g. `(1.0, 0.0, 0.0)` for red.
pub fn channel_slider(value: RwSignal<Option<f64>>, primary: (f64, f64, f64)) -> ChannelSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let v = value.get();
        id.update_state(v);
    });

    ChannelSlider {
        id,
        held: false,
        value: value.get_untracked(),
        primary,
        size: Default::default(),
        on_change: Box::new(move |v| {
            value.set(Some(v));
        }),
        grad_img: None,
        grad_hash: Vec::new(),
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ChannelSlider {
    fn update_from_pointer(&mut self, x: f64) {
        if let Some(v) = value_at(x, self.size.width as f64, constants::THUMB_RADIUS) {
            self.value = Some(v);
            (self.on_change)(v);
        }
    }

    fn ensure_gradient_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let dims = (pw, ph);
        if self.cached_dims == dims {
            return;
        }

        let (r, g, b) = self.primary;
        let pixels = rasterize_channel_gradient(pw, ph, r, g, b);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        let id = blob.id();
        self.grad_hash = id.to_le_bytes().to_vec();
        self.grad_img = Some(img);
        self.cached_dims = dims;
    }
}

impl View for ChannelSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(value) = state.downcast::<Option<f64>>() {
            self.value = *value;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.held = false;
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        // Clip to rounded rect for rounded ends
        cx.save();
        cx.clip(&rrect);

        let scale = cx.scale();
        self.ensure_gradient_image(scale);
        if let Some(ref img) = self.grad_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.grad_hash,
                },
                rect,
            );
        }

        cx.restore();

        // Slider outline
        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        let Some(value) = self.value else {
            return;
        };

        // Thumb (circular ring; left = 0.0, right = 1.0)
        let radius = constants::THUMB_RADIUS;
        let thumb_x = radius + value.clamp(0.0, 1.0) * (w - 2.0 * radius);
        let thumb_cy = h / 2.0;
        let circle = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let innermost = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 3.0);
        cx.stroke(
            &innermost,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
