use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sortviz_playback_core::{
    ChartRenderer, ChartTheme, Config, Controller, ScenePatch, Step, Surface, Viewport,
};

struct NullSurface;

impl Surface for NullSurface {
    fn viewport(&mut self) -> Viewport {
        Viewport {
            width: 960.0,
            height: 540.0,
        }
    }

    fn apply(&mut self, patch: &ScenePatch) {
        black_box(patch.ops.len());
    }
}

// Synthetic bubble-style trace: each step swaps one adjacent pair.
fn synthetic_trace(len: usize, steps: usize) -> Vec<Step> {
    let mut array: Vec<f32> = (0..len).rev().map(|v| v as f32).collect();
    (0..steps)
        .map(|s| {
            let j = s % (len - 1);
            array.swap(j, j + 1);
            Step {
                array: array.clone(),
                pivot: None,
                compared: vec![j, j + 1],
            }
        })
        .collect()
}

fn bench_playback_run(c: &mut Criterion) {
    let trace = synthetic_trace(32, 64);
    let delay_ms = 100;

    c.bench_function("playback_full_run", |b| {
        b.iter(|| {
            let mut ctl = Controller::new(Config::default());
            let mut renderer = ChartRenderer::new();
            let mut surface = NullSurface;
            ctl.start(trace.clone(), delay_ms);
            while ctl.is_sorting() {
                let out = ctl.update(delay_ms as f32 / 1000.0);
                if let Some(frame) = &out.frame {
                    renderer.render(
                        &mut surface,
                        &Config::default(),
                        &ChartTheme::default(),
                        &frame.array,
                        frame.pivot,
                        &frame.compared,
                        delay_ms,
                    );
                }
            }
        })
    });
}

criterion_group!(benches, bench_playback_run);
criterion_main!(benches);
