//! Command recording seam between the pass driver and the graphics backend.
//!
//! [`TargetRecorder`] begins a render target and hands back the active pass;
//! [`RenderCommands`] is everything that may be recorded while the target is
//! active. Ending consumes the pass, so a target is ended exactly once and
//! anything that only borrows the pass (an overlay) cannot end it.

use std::ops::Range;

use crate::backend::TargetExtent;

/// Clear values applied when a target begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetClear {
    pub color: wgpu::Color,
    /// Applied only when the target has a depth attachment.
    pub depth: f32,
}

impl TargetClear {
    /// Opaque black, depth 1.0.
    pub const OPAQUE_BLACK: TargetClear = TargetClear {
        color: wgpu::Color::BLACK,
        depth: 1.0,
    };
}

/// Viewport rectangle. A negative `height` flips the vertical axis, with `y`
/// then naming the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Full-extent viewport with origin at the bottom and height negated.
    pub fn flipped(extent: TargetExtent) -> Self {
        Self {
            x: 0.0,
            y: extent.height as f32,
            width: extent.width as f32,
            height: -(extent.height as f32),
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }

    /// The covered rectangle as `(x, y, width, height)` with non-negative size.
    pub fn covered_rect(&self) -> (f32, f32, f32, f32) {
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        (self.x, y, self.width, height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScissorRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ScissorRect {
    pub fn full(extent: TargetExtent) -> Self {
        Self {
            x: 0,
            y: 0,
            width: extent.width,
            height: extent.height,
        }
    }
}

/// Commands recordable inside an active render target.
pub trait RenderCommands {
    type Pipeline: ?Sized;
    type Source: ?Sized;

    fn set_viewport(&mut self, viewport: &Viewport);
    fn set_scissor(&mut self, scissor: &ScissorRect);
    fn bind_pipeline(&mut self, pipeline: &Self::Pipeline);
    fn bind_source(&mut self, slot: u32, source: &Self::Source);
    fn push_fragment_constants(&mut self, offset: u32, data: &[u8]);
    fn draw(&mut self, vertices: Range<u32>, instances: Range<u32>);

    /// Open a named scope on the GPU timeline. Must be closed before `end`.
    fn push_debug_group(&mut self, label: &str);
    fn pop_debug_group(&mut self);

    /// End the render target.
    fn end(self)
    where
        Self: Sized;
}

/// Something that can begin a render target for the current frame.
pub trait TargetRecorder {
    type Pass: RenderCommands;

    fn begin_target(&mut self, clear: &TargetClear) -> Self::Pass;
}

/// Records into a `wgpu::CommandEncoder`, targeting the presentation color
/// view and, if present, its depth view.
pub struct WgpuTargetRecorder<'a> {
    encoder: &'a mut wgpu::CommandEncoder,
    color_view: &'a wgpu::TextureView,
    depth_view: Option<&'a wgpu::TextureView>,
}

impl<'a> WgpuTargetRecorder<'a> {
    pub fn new(
        encoder: &'a mut wgpu::CommandEncoder,
        color_view: &'a wgpu::TextureView,
        depth_view: Option<&'a wgpu::TextureView>,
    ) -> Self {
        Self {
            encoder,
            color_view,
            depth_view,
        }
    }
}

impl TargetRecorder for WgpuTargetRecorder<'_> {
    type Pass = wgpu::RenderPass<'static>;

    fn begin_target(&mut self, clear: &TargetClear) -> Self::Pass {
        let depth_stencil_attachment =
            self.depth_view
                .map(|view| wgpu::RenderPassDepthStencilAttachment {
                    view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear.depth),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                });

        // The encoder stays locked by wgpu until the pass is dropped.
        self.encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("FXAA Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: self.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear.color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment,
                ..Default::default()
            })
            .forget_lifetime()
    }
}

impl RenderCommands for wgpu::RenderPass<'_> {
    type Pipeline = wgpu::RenderPipeline;
    type Source = wgpu::BindGroup;

    fn set_viewport(&mut self, viewport: &Viewport) {
        // wgpu clip space is already y-up and rejects negative viewport
        // heights, so a flipped viewport maps onto the rect it covers.
        let (x, y, width, height) = viewport.covered_rect();
        wgpu::RenderPass::set_viewport(
            self,
            x,
            y,
            width,
            height,
            viewport.min_depth,
            viewport.max_depth,
        );
    }

    fn set_scissor(&mut self, scissor: &ScissorRect) {
        self.set_scissor_rect(scissor.x, scissor.y, scissor.width, scissor.height);
    }

    fn bind_pipeline(&mut self, pipeline: &wgpu::RenderPipeline) {
        self.set_pipeline(pipeline);
    }

    fn bind_source(&mut self, slot: u32, source: &wgpu::BindGroup) {
        self.set_bind_group(slot, source, &[]);
    }

    fn push_fragment_constants(&mut self, offset: u32, data: &[u8]) {
        self.set_push_constants(wgpu::ShaderStages::FRAGMENT, offset, data);
    }

    fn draw(&mut self, vertices: Range<u32>, instances: Range<u32>) {
        wgpu::RenderPass::draw(self, vertices, instances);
    }

    fn push_debug_group(&mut self, label: &str) {
        wgpu::RenderPass::push_debug_group(self, label);
    }

    fn pop_debug_group(&mut self) {
        wgpu::RenderPass::pop_debug_group(self);
    }

    fn end(self) {
        drop(self);
    }
}
