use crate::{
    engine::{background::AnimatedBackground, config::BackgroundConfig, pointer::PointerCell},
    foundation::{core::Viewport, error::WanderResult},
    render::backend::{FrameRGBA, RenderBackend},
};

/// Handle to one pending "run once at the next display refresh" request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host side of the per-frame repaint callback.
pub trait FrameScheduler {
    /// Ask for one callback at the next refresh.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a request that has not fired yet.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Headless scheduler: requests queue up until the driver fires them.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
}

impl ManualScheduler {
    /// Scheduler with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that have neither fired nor been cancelled.
    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    /// Fire the oldest pending request.
    pub fn next_due(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            return None;
        }
        Some(self.pending.remove(0))
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
    }
}

/// Mount/unmount glue driving an [`AnimatedBackground`] from a [`FrameScheduler`].
///
/// Keeps at most one frame request outstanding: every tick requests the next one only after
/// painting, and a resize cancels the outstanding request before registering a new one.
pub struct BackgroundLoop<S: FrameScheduler> {
    background: AnimatedBackground,
    scheduler: S,
    pointer: PointerCell,
    pending: Option<FrameHandle>,
    mounted: bool,
}

impl<S: FrameScheduler> BackgroundLoop<S> {
    /// Build the state bundle, size it and request the first frame.
    pub fn mount(
        config: BackgroundConfig,
        viewport: Viewport,
        pointer: PointerCell,
        mut scheduler: S,
    ) -> WanderResult<Self> {
        let mut background = AnimatedBackground::new(config)?;
        background.resize(viewport)?;
        let pending = Some(scheduler.request_frame());
        Ok(Self {
            background,
            scheduler,
            pointer,
            pending,
            mounted: true,
        })
    }

    /// The animation state bundle.
    pub fn background(&self) -> &AnimatedBackground {
        &self.background
    }

    /// The host scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The host's writer handle for pointer updates.
    pub fn pointer(&self) -> &PointerCell {
        &self.pointer
    }

    /// Outstanding frame request, if any.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Whether the loop is still running.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Scheduler callback for `handle`.
    ///
    /// Stale or cancelled handles are ignored. Without a surface the tick is skipped and
    /// retried on the next refresh. Paint failures are logged and never stop the loop.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        surface: Option<&mut dyn RenderBackend>,
    ) -> Option<FrameRGBA> {
        if !self.mounted || self.pending != Some(handle) {
            tracing::trace!(?handle, "dropping stale frame request");
            return None;
        }
        self.pending = None;

        let frame = match surface {
            None => {
                tracing::debug!("no drawing surface attached; skipping tick");
                None
            }
            Some(surface) => {
                let plan = self.background.tick(self.pointer.get());
                if plan.is_blank() {
                    None
                } else {
                    match surface.render_plan(&plan) {
                        Ok(frame) => Some(frame),
                        Err(err) => {
                            tracing::warn!(%err, "frame failed to rasterize");
                            None
                        }
                    }
                }
            }
        };

        self.pending = Some(self.scheduler.request_frame());
        frame
    }

    /// Viewport resize from the host.
    pub fn resize(&mut self, viewport: Viewport) -> WanderResult<bool> {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        let regenerated = self.background.resize(viewport);
        if self.mounted {
            self.pending = Some(self.scheduler.request_frame());
        }
        regenerated
    }

    /// Stop the loop; the pending request is cancelled.
    pub fn unmount(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.mounted = false;
    }
}

impl<S: FrameScheduler> Drop for BackgroundLoop<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl BackgroundLoop<ManualScheduler> {
    /// Fire the next due request against `surface`.
    pub fn pump(&mut self, surface: Option<&mut dyn RenderBackend>) -> Option<FrameRGBA> {
        let handle = self.scheduler.next_due()?;
        self.on_frame(handle, surface)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/lifecycle.rs"]
mod tests;
