//! The sort engine: owns a dataset, steps an algorithm over it, and paces itself on a render surface.
//!
//! # Lifecycle
//!
//! An engine starts [`EngineState::Idle`]. Every pulled step moves it to
//! [`EngineState::Stepping`] with the step's sequence number. Pulling past the last step moves it
//! to [`EngineState::Finished`] and fires [`SortHooks::on_finish`] exactly once. An engine never
//! leaves `Finished`; sorting again requires a new engine.
//!
//! Steps can be consumed two ways:
//!
//! * [`SortEngine::run`], a lazy synchronous iterator that never renders, and
//! * [`SortEngine::advance`], which renders the step on the bound surface and awaits it before
//!   returning. The algorithm does not run again until the caller asks for the next step, so the
//!   data is never mutated while a frame is in flight.
//!
//! Dropping an engine (or simply not asking for more steps) is always safe: the data is left as
//! whatever permutation the last step committed.
//!
//! # Example
//! ```
//! use sortviz::algorithms::Algorithm;
//! use sortviz::engine::SortEngine;
//!
//! let mut engine = SortEngine::new(vec![3, 1, 2], Algorithm::Selection).unwrap();
//! let steps = engine.run().count();
//! assert!(steps > 0);
//! assert_eq!(engine.data(), &[1, 2, 3]);
//! ```

use crate::algorithms::{Algorithm, StepSource};
use crate::dataset::Dataset;
use crate::error::SortError;
use crate::legend::Legend;
use crate::step::Step;
use crate::surface::{Frame, Headless, RenderSurface};
use log::{debug, info, warn};

/// Where an engine is in its single run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Constructed, no step pulled yet.
    Idle,
    /// The step with this sequence number was the last one produced.
    Stepping(usize),
    /// The algorithm is exhausted.
    Finished,
    /// The render surface failed. No further steps will be produced.
    Aborted,
}

/// Lifecycle callbacks. All methods default to doing nothing.
pub trait SortHooks<T> {
    /// Called once per step; after its frame has been rendered when stepping with
    /// [`SortEngine::advance`], and before the next step begins.
    fn on_step(&mut self, _seq: usize, _step: &Step, _data: &[T]) {}

    /// Called exactly once, when the step sequence is exhausted.
    fn on_finish(&mut self, _data: &[T]) {}
}

/// An engine for one run of one algorithm over one dataset.
pub struct SortEngine<T, R = Headless> {
    data: Dataset<T>,
    source: Box<dyn StepSource<T>>,
    legend: Legend,
    surface: Option<R>,
    hooks: Option<Box<dyn SortHooks<T>>>,
    state: EngineState,
}

impl<T: PartialOrd + 'static> SortEngine<T> {
    /// Creates an engine for a built-in algorithm, with that algorithm's legend.
    pub fn new(data: Vec<T>, algorithm: Algorithm) -> Result<Self, SortError> {
        Self::from_source(data, algorithm.source(), algorithm.legend())
    }
}

impl<T: 'static> SortEngine<T> {
    /// Creates an engine for any step source.
    ///
    /// Fails if `data` or `legend` is empty.
    pub fn from_source(
        data: Vec<T>,
        source: Box<dyn StepSource<T>>,
        legend: Legend,
    ) -> Result<Self, SortError> {
        if legend.is_empty() {
            return Err(SortError::Configuration("legend must not be empty"));
        }
        let data = Dataset::new(data)?;
        Ok(Self {
            data,
            source,
            legend,
            surface: None,
            hooks: None,
            state: EngineState::Idle,
        })
    }
}

impl<T: 'static, R> SortEngine<T, R> {
    /// Binds a render surface that [`advance`](Self::advance) will draw every step on.
    pub fn with_surface<S: RenderSurface<T>>(self, surface: S) -> SortEngine<T, S> {
        SortEngine {
            data: self.data,
            source: self.source,
            legend: self.legend,
            surface: Some(surface),
            hooks: self.hooks,
            state: self.state,
        }
    }

    pub fn with_hooks(mut self, hooks: impl SortHooks<T> + 'static) -> Self {
        self.hooks = Some(Box::new(hooks));
        self
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn data(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, EngineState::Finished | EngineState::Aborted)
    }

    pub fn surface(&self) -> Option<&R> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut R> {
        self.surface.as_mut()
    }

    /// Hands back the data in whatever order the last step left it.
    pub fn into_data(self) -> Vec<T> {
        self.data.into_inner()
    }

    /// The remaining steps as a lazy iterator. Nothing is rendered.
    ///
    /// Each `next()` performs exactly one unit of algorithm progress. The sequence is shared with
    /// [`advance`](Self::advance) and cannot be rewound.
    pub fn run(&mut self) -> Steps<'_, T, R> {
        Steps { engine: self }
    }

    /// Pulls the next step from the algorithm, updating the lifecycle state.
    ///
    /// # Panics
    /// If the algorithm produces a marker outside the dataset.
    fn pull(&mut self) -> Option<(usize, Step)> {
        let seq = match self.state {
            EngineState::Idle => 0,
            EngineState::Stepping(seq) => seq + 1,
            EngineState::Finished | EngineState::Aborted => return None,
        };
        match self.source.next_step(&mut self.data) {
            Some(step) => {
                if let Err(err) = step.markers.validate(self.data.len()) {
                    panic!("algorithm produced an invalid step {step:?}: {err}");
                }
                debug!("step {seq}: {:?} {:?}", step.kind, step.markers);
                self.state = EngineState::Stepping(seq);
                Some((seq, step))
            }
            None => {
                info!("finished after {seq} steps");
                self.state = EngineState::Finished;
                if let Some(hooks) = self.hooks.as_mut() {
                    hooks.on_finish(self.data.as_slice());
                }
                None
            }
        }
    }

    fn notify_step(&mut self, seq: usize, step: &Step) {
        if let Some(hooks) = self.hooks.as_mut() {
            hooks.on_step(seq, step, self.data.as_slice());
        }
    }
}

impl<T: 'static, R: RenderSurface<T>> SortEngine<T, R> {
    /// Produces the next step, renders it, and waits for the render to complete.
    ///
    /// Returns `Ok(None)` once the algorithm is exhausted. A render failure aborts the run and is
    /// returned as [`SortError::Render`]; the engine does not retry.
    pub async fn advance(&mut self) -> Result<Option<Step>, SortError> {
        let Some((seq, step)) = self.pull() else {
            return Ok(None);
        };
        if let Some(surface) = self.surface.as_mut() {
            let frame = Frame::new(seq, step, self.data.as_slice(), &self.legend);
            if let Err(err) = surface.render(frame).await {
                warn!("render of step {seq} failed, aborting: {err}");
                self.state = EngineState::Aborted;
                return Err(err.into());
            }
        }
        self.notify_step(seq, &step);
        Ok(Some(step))
    }

    /// Advances until the algorithm is exhausted.
    pub async fn play(&mut self) -> Result<(), SortError> {
        while self.advance().await?.is_some() {}
        Ok(())
    }
}

/// Iterator returned by [`SortEngine::run`].
pub struct Steps<'a, T, R> {
    engine: &'a mut SortEngine<T, R>,
}

impl<T: 'static, R> Iterator for Steps<'_, T, R> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let (seq, step) = self.engine.pull()?;
        self.engine.notify_step(seq, &step);
        Some(step)
    }
}
