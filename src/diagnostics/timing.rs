use serde::Serialize;
use std::time::Instant;

/// Wall-clock duration of one labelled stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: String,
    pub elapsed_ms: f64,
}

/// Ordered list of stage timings.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Run `f`, record its duration under `stage`, and return its output.
    pub fn measure<R>(&mut self, stage: impl Into<String>, f: impl FnOnce() -> R) -> R {
        let start = Instant::now();
        let out = f();
        self.stages.push(StageTiming {
            stage: stage.into(),
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        });
        out
    }

    pub fn total_ms(&self) -> f64 {
        self.stages.iter().map(|s| s.elapsed_ms).sum()
    }
}
