//! Overlay hook: extra drawing inside the FXAA pass's active render target.

/// Draws on top of the filtered image while the target is still active.
///
/// The overlay only borrows the pass. It may rebind pipelines, resources,
/// viewport or scissor, but it cannot begin another target or end this one.
pub trait Overlay<P: ?Sized> {
    fn render(&mut self, pass: &mut P);
}

impl<P: ?Sized, F> Overlay<P> for F
where
    F: FnMut(&mut P),
{
    fn render(&mut self, pass: &mut P) {
        self(pass)
    }
}
