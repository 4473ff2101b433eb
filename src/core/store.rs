use crate::config::CaptureConfig;
use crate::domain::model::CapturedEvent;
use crate::domain::ports::{EventSink, NullSink};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::Level;

pub(crate) fn level_index(level: Level) -> usize {
    if level == Level::TRACE {
        0
    } else if level == Level::DEBUG {
        1
    } else if level == Level::INFO {
        2
    } else if level == Level::WARN {
        3
    } else {
        4
    }
}

#[derive(Default)]
struct TargetState {
    level: Option<Level>,
    sink: Option<Arc<dyn EventSink>>,
    buffers: [VecDeque<Arc<CapturedEvent>>; 5],
}

/// Shared storage behind the layer and every handle: per-target buffers keyed
/// by level, plus the level/sink configuration that routing consults.
pub(crate) struct EventStore {
    targets: Mutex<HashMap<String, TargetState>>,
    default_level: Mutex<Level>,
    default_sink: Mutex<Arc<dyn EventSink>>,
    next_seq: AtomicU64,
    max_buffered: Option<usize>,
}

impl EventStore {
    pub(crate) fn new(config: &CaptureConfig) -> Self {
        Self {
            targets: Mutex::new(HashMap::new()),
            default_level: Mutex::new(config.default_level),
            default_sink: Mutex::new(Arc::new(NullSink)),
            next_seq: AtomicU64::new(0),
            max_buffered: config.max_buffered,
        }
    }

    fn lock_targets(&self) -> MutexGuard<'_, HashMap<String, TargetState>> {
        self.targets.lock().expect("capture store poisoned")
    }

    pub(crate) fn next_seq(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Buffers the event and notifies the responsible sink. The sink runs
    /// outside the store lock so it may query the store itself.
    pub(crate) fn record(&self, event: CapturedEvent) {
        let event = Arc::new(event);
        let sink = {
            let mut targets = self.lock_targets();
            let state = targets.entry(event.target.clone()).or_default();
            let buffer = &mut state.buffers[level_index(event.level)];
            if let Some(cap) = self.max_buffered {
                // floor of 1: the latest event must always stay queryable
                while buffer.len() >= cap.max(1) {
                    buffer.pop_front();
                }
            }
            buffer.push_back(Arc::clone(&event));
            match &state.sink {
                Some(sink) => Arc::clone(sink),
                None => Arc::clone(&self.default_sink.lock().expect("capture store poisoned")),
            }
        };
        sink.on_event(&event);
    }

    pub(crate) fn events_at(&self, target: &str, level: Level) -> Vec<Arc<CapturedEvent>> {
        self.lock_targets()
            .get(target)
            .map(|state| state.buffers[level_index(level)].iter().cloned().collect())
            .unwrap_or_default()
    }

    pub(crate) fn all_events(&self, target: &str) -> Vec<Arc<CapturedEvent>> {
        let mut events: Vec<Arc<CapturedEvent>> = self
            .lock_targets()
            .get(target)
            .map(|state| state.buffers.iter().flatten().cloned().collect())
            .unwrap_or_default();
        events.sort_by_key(|event| event.seq);
        events
    }

    pub(crate) fn all_events_at(&self, level: Level) -> Vec<Arc<CapturedEvent>> {
        let targets = self.lock_targets();
        let mut events: Vec<Arc<CapturedEvent>> = targets
            .values()
            .flat_map(|state| state.buffers[level_index(level)].iter().cloned())
            .collect();
        drop(targets);
        events.sort_by_key(|event| event.seq);
        events
    }

    pub(crate) fn clear_at(&self, target: &str, level: Level) {
        if let Some(state) = self.lock_targets().get_mut(target) {
            state.buffers[level_index(level)].clear();
        }
    }

    pub(crate) fn reset(&self, target: &str) {
        if let Some(state) = self.lock_targets().get_mut(target) {
            for buffer in &mut state.buffers {
                buffer.clear();
            }
        }
    }

    pub(crate) fn reset_all(&self) {
        for state in self.lock_targets().values_mut() {
            for buffer in &mut state.buffers {
                buffer.clear();
            }
        }
    }

    pub(crate) fn default_level(&self) -> Level {
        *self.default_level.lock().expect("capture store poisoned")
    }

    pub(crate) fn set_default_level(&self, level: Level) {
        *self.default_level.lock().expect("capture store poisoned") = level;
    }

    pub(crate) fn effective_level(&self, target: &str) -> Level {
        self.lock_targets()
            .get(target)
            .and_then(|state| state.level)
            .unwrap_or_else(|| self.default_level())
    }

    pub(crate) fn level_override(&self, target: &str) -> Option<Level> {
        self.lock_targets().get(target).and_then(|state| state.level)
    }

    pub(crate) fn set_level_override(&self, target: &str, level: Option<Level>) {
        self.lock_targets().entry(target.to_string()).or_default().level = level;
    }

    pub(crate) fn sink_override(&self, target: &str) -> Option<Arc<dyn EventSink>> {
        self.lock_targets()
            .get(target)
            .and_then(|state| state.sink.clone())
    }

    pub(crate) fn set_sink_override(&self, target: &str, sink: Option<Arc<dyn EventSink>>) {
        self.lock_targets().entry(target.to_string()).or_default().sink = sink;
    }

    pub(crate) fn set_default_sink(&self, sink: Arc<dyn EventSink>) {
        *self.default_sink.lock().expect("capture store poisoned") = sink;
    }
}
