use crate::parser::Node;

/// One step of the matcher, as seen by a [`Trace`] sink.
#[derive(Debug, Clone, Copy)]
pub enum TraceEvent<'a> {
    /// `node` is about to be tested against `candidate`.
    Enter {
        depth: usize,
        node: &'a Node,
        candidate: &'a str,
    },
    /// The test that started with the matching `Enter` has finished.
    Exit {
        depth: usize,
        node: &'a Node,
        accepted: bool,
    },
}

/// Receives matcher events. Sinks observe only; they cannot change the
/// outcome of a match.
pub trait Trace {
    fn event(&self, event: TraceEvent<'_>);
}

/// Forwards every event to `tracing` at debug level, indented by depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl Trace for LogTrace {
    fn event(&self, event: TraceEvent<'_>) {
        match event {
            TraceEvent::Enter {
                depth,
                node,
                candidate,
            } => {
                tracing::debug!(
                    "{:indent$}RUNNING: {} WITH {:?}",
                    "",
                    node,
                    candidate,
                    indent = depth * 2
                );
            }
            TraceEvent::Exit {
                depth,
                node,
                accepted,
            } => {
                tracing::debug!(
                    "{:indent$}RETURNED: {} -> {}",
                    "",
                    node,
                    accepted,
                    indent = depth * 2
                );
            }
        }
    }
}
