/// Progress events emitted while a simulation runs.
///
/// The engine has a single long-running task (the integration loop), so the
/// vocabulary is small: a task starts with a known step count, advances one
/// step at a time, and finishes. `Message` carries free-form status text.
#[derive(Debug, Clone)]
pub enum Progress {
    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Dispatches [`Progress`] events to an optional callback.
///
/// The default reporter is a no-op, so library callers that don't care about
/// progress pay nothing but a branch per event.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
