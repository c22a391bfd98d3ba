#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    PairStart {
        group_in: usize,
        group_out: usize,
    },
    /// Energy pair inside the single-scattering window `[e_min, e_max]`.
    AdmissiblePoint {
        e_in: f64,
        e_out: f64,
        e_min: f64,
        e_max: f64,
        chi: f64,
    },
    PairFinish {
        group_in: usize,
        group_out: usize,
        value: f64,
    },
}

pub type DiagnosticCallback<'a> = Box<dyn Fn(Diagnostic) + Send + Sync + 'a>;

#[derive(Default)]
pub struct DiagnosticReporter<'a> {
    callback: Option<DiagnosticCallback<'a>>,
}

impl<'a> DiagnosticReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: DiagnosticCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.callback.is_some()
    }

    #[inline]
    pub fn report(&self, event: Diagnostic) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn default_reporter_is_disabled_and_ignores_events() {
        let reporter = DiagnosticReporter::new();
        assert!(!reporter.is_enabled());
        reporter.report(Diagnostic::PairStart {
            group_in: 0,
            group_out: 0,
        });
    }

    #[test]
    fn callback_receives_reported_events_in_order() {
        let events = Mutex::new(Vec::new());
        let reporter = DiagnosticReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        assert!(reporter.is_enabled());

        reporter.report(Diagnostic::PairStart {
            group_in: 1,
            group_out: 2,
        });
        reporter.report(Diagnostic::PairFinish {
            group_in: 1,
            group_out: 2,
            value: 0.5,
        });
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], Diagnostic::PairStart { group_in: 1, group_out: 2 }));
        assert!(matches!(events[1], Diagnostic::PairFinish { value, .. } if value == 0.5));
    }
}
