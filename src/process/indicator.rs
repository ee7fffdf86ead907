use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use futures_timer::Delay;

use crate::surface::ElementHandle;

use super::state::{ProcessResult, ProcessState, transition};

pub const DEFAULT_CLEAR_DELAY: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IndicatorOptions {
    pub clear_delay: Duration,
}

impl Default for IndicatorOptions {
    fn default() -> Self {
        Self {
            clear_delay: DEFAULT_CLEAR_DELAY,
        }
    }
}

pub type ClearFuture = Pin<Box<dyn Future<Output = ProcessResult<()>> + Send + 'static>>;

/// Drives the four-state process animation on an element handle. Carries no
/// state of its own; every operation takes the element explicitly.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessIndicator {
    options: IndicatorOptions,
}

impl ProcessIndicator {
    pub fn new(options: IndicatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> IndicatorOptions {
        self.options
    }

    /// Marks the element as processing and disables interaction. Opens a new
    /// clear epoch, so timers scheduled by a previous cycle cannot touch it.
    pub fn start(&self, element: &ElementHandle) -> ProcessResult<()> {
        let mut visual = element.write("starting process cycle")?;
        visual.process = transition(visual.process, ProcessState::Processing)?;
        visual.disabled = true;
        visual.clear_epoch = visual.clear_epoch.wrapping_add(1);
        Ok(())
    }

    pub fn error(&self, element: &ElementHandle) -> ProcessResult<ClearFuture> {
        self.finish(element, ProcessState::Errored)
    }

    pub fn success(&self, element: &ElementHandle) -> ProcessResult<ClearFuture> {
        self.finish(element, ProcessState::Succeeded)
    }

    /// Schedules an independent timer that returns the element to idle and
    /// re-enables it once the clear delay elapses. Idempotent; every pending
    /// clear of the same cycle converges on the same idle state.
    pub fn clear(&self, element: &ElementHandle) -> ClearFuture {
        match element.read("scheduling clear") {
            Ok(visual) => {
                let epoch = visual.clear_epoch;
                drop(visual);
                self.schedule_clear(element.clone(), epoch)
            }
            Err(error) => Box::pin(async move { Err(error) }),
        }
    }

    fn finish(&self, element: &ElementHandle, terminal: ProcessState) -> ProcessResult<ClearFuture> {
        let epoch = {
            let mut visual = element.write("finishing process cycle")?;
            visual.process = transition(visual.process, terminal)?;
            visual.clear_epoch
        };
        Ok(self.schedule_clear(element.clone(), epoch))
    }

    fn schedule_clear(&self, element: ElementHandle, epoch: u64) -> ClearFuture {
        let delay = self.options.clear_delay;
        Box::pin(async move {
            Delay::new(delay).await;
            let mut visual = element.write("clearing process indicators")?;
            if visual.clear_epoch != epoch {
                // A newer cycle owns the element; this timer is stale.
                return Ok(());
            }
            visual.process = transition(visual.process, ProcessState::Idle)?;
            visual.disabled = false;
            Ok(())
        })
    }
}
