//! Recording doubles for exercising the pass driver without a GPU.

use std::cell::{Cell, RefCell};
use std::ops::Range;
use std::rc::Rc;

use crate::recorder::{RenderCommands, ScissorRect, TargetClear, TargetRecorder, Viewport};
use crate::source::UpstreamOutput;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceId {
    DeferredShading,
    Shadows,
    AmbientOcclusion,
    Reflections,
    GlobalIllumination,
    Reference,
}

/// Provider that counts how often its output is read.
pub struct CountingSource {
    id: SourceId,
    calls: Cell<u32>,
}

impl CountingSource {
    pub fn new(id: SourceId) -> Self {
        Self { id, calls: Cell::new(0) }
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl UpstreamOutput<SourceId> for CountingSource {
    fn output(&self) -> &SourceId {
        self.calls.set(self.calls.get() + 1);
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Begin(TargetClear),
    Viewport(Viewport),
    Scissor(ScissorRect),
    BindPipeline(String),
    BindSource { slot: u32, source: SourceId },
    PushConstants { offset: u32, data: Vec<u8> },
    Draw { vertices: Range<u32>, instances: Range<u32> },
    PushDebugGroup(String),
    PopDebugGroup,
    Marker(&'static str),
    End,
}

#[derive(Default)]
pub struct MockRecorder {
    log: Rc<RefCell<Vec<Command>>>,
}

impl MockRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<Command> {
        self.log.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Command) -> bool) -> usize {
        self.log.borrow().iter().filter(|c| pred(*c)).count()
    }
}

impl TargetRecorder for MockRecorder {
    type Pass = MockPass;

    fn begin_target(&mut self, clear: &TargetClear) -> MockPass {
        self.log.borrow_mut().push(Command::Begin(*clear));
        MockPass { log: Rc::clone(&self.log) }
    }
}

pub struct MockPass {
    log: Rc<RefCell<Vec<Command>>>,
}

impl MockPass {
    /// Lets an overlay leave a trace in the command log.
    pub fn mark(&mut self, label: &'static str) {
        self.log.borrow_mut().push(Command::Marker(label));
    }
}

impl RenderCommands for MockPass {
    type Pipeline = str;
    type Source = SourceId;

    fn set_viewport(&mut self, viewport: &Viewport) {
        self.log.borrow_mut().push(Command::Viewport(*viewport));
    }

    fn set_scissor(&mut self, scissor: &ScissorRect) {
        self.log.borrow_mut().push(Command::Scissor(*scissor));
    }

    fn bind_pipeline(&mut self, pipeline: &str) {
        self.log.borrow_mut().push(Command::BindPipeline(pipeline.to_string()));
    }

    fn bind_source(&mut self, slot: u32, source: &SourceId) {
        self.log.borrow_mut().push(Command::BindSource { slot, source: *source });
    }

    fn push_fragment_constants(&mut self, offset: u32, data: &[u8]) {
        self.log.borrow_mut().push(Command::PushConstants {
            offset,
            data: data.to_vec(),
        });
    }

    fn draw(&mut self, vertices: Range<u32>, instances: Range<u32>) {
        self.log.borrow_mut().push(Command::Draw { vertices, instances });
    }

    fn push_debug_group(&mut self, label: &str) {
        self.log.borrow_mut().push(Command::PushDebugGroup(label.to_string()));
    }

    fn pop_debug_group(&mut self) {
        self.log.borrow_mut().push(Command::PopDebugGroup);
    }

    fn end(self) {
        self.log.borrow_mut().push(Command::End);
    }
}
