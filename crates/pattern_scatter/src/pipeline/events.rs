//! Event types and sinks for observing generation runs.
//!
//! [`Generator::generate_with_events`](crate::pipeline::runner::Generator::generate_with_events)
//! emits [`GenerationEvent`]s in pipeline order: started, shapes generated, optional
//! structure and symmetry passes, finished. Warnings may appear anywhere in between.
use crate::config::{DistributionMode, Style};
use crate::symmetry::SymmetryGroup;

/// Describes events emitted while generating a layer.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationEvent {
    /// Emitted before the style generator runs.
    Started {
        style: Style,
        seed: u32,
        width: f64,
        height: f64,
    },

    /// Emitted after the style generator returns.
    ShapesGenerated {
        style: Style,
        /// Number of shapes emitted.
        count: usize,
        /// Highest index used plus one; exceeds `count` when cells were skipped.
        index_span: u32,
    },

    /// Emitted after the structure post-processor ran.
    StructureApplied {
        mode: DistributionMode,
        count: usize,
    },

    /// Emitted after symmetry replication.
    SymmetryApplied {
        group: SymmetryGroup,
        before: usize,
        after: usize,
    },

    /// Non-fatal problem, such as an unavailable raster lookup.
    Warning {
        /// Context string (e.g. style name).
        context: String,
        message: String,
    },

    /// Emitted when the final shape sequence is ready.
    Finished { count: usize },
}

/// Discriminant of [`GenerationEvent`] used for sink filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationEventKind {
    Started,
    ShapesGenerated,
    StructureApplied,
    SymmetryApplied,
    Warning,
    Finished,
}

impl GenerationEvent {
    pub fn kind(&self) -> GenerationEventKind {
        match self {
            GenerationEvent::Started { .. } => GenerationEventKind::Started,
            GenerationEvent::ShapesGenerated { .. } => GenerationEventKind::ShapesGenerated,
            GenerationEvent::StructureApplied { .. } => GenerationEventKind::StructureApplied,
            GenerationEvent::SymmetryApplied { .. } => GenerationEventKind::SymmetryApplied,
            GenerationEvent::Warning { .. } => GenerationEventKind::Warning,
            GenerationEvent::Finished { .. } => GenerationEventKind::Finished,
        }
    }
}

/// A generic event sink that accepts [`GenerationEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: GenerationEvent);

    /// Lets the pipeline skip building events nobody listens to.
    fn wants(&self, _kind: GenerationEventKind) -> bool {
        true
    }

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = GenerationEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: GenerationEvent) {}

    #[inline]
    fn wants(&self, _kind: GenerationEventKind) -> bool {
        false
    }
}

/// Forwards events to a closure.
pub struct FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    #[inline]
    fn send(&mut self, event: GenerationEvent) {
        (self.f)(event);
    }
}

/// Collects events in a `Vec`, optionally restricted to some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<GenerationEvent>,
    only: Option<Vec<GenerationEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only records events whose kind is in `kinds`.
    pub fn filtered(kinds: impl IntoIterator<Item = GenerationEventKind>) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.into_iter().collect()),
        }
    }

    pub fn into_inner(self) -> Vec<GenerationEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[GenerationEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: GenerationEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: GenerationEventKind) -> bool {
        self.only.as_ref().is_none_or(|only| only.contains(&kind))
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn into_sinks(self) -> Vec<S> {
        self.sinks
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: GenerationEvent) {
        let Some((last, rest)) = self.sinks.split_last_mut() else {
            return;
        };
        for sink in rest {
            sink.send(event.clone());
        }
        last.send(event);
    }

    fn wants(&self, kind: GenerationEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
