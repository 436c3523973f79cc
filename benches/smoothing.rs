use criterion::{black_box, criterion_group, criterion_main, Criterion};
use freelook::core::{Devices, PadAxis};
use freelook::math::{smooth, Smoothing};
use freelook::{Camera, CameraController, ControllerConfig, InputSample};
use glam::Vec3;
use winit::keyboard::KeyCode;

const DT: f32 = 1.0 / 60.0;

fn bench_filter(c: &mut Criterion) {
    c.bench_function("smooth_default", |b| {
        b.iter(|| smooth(black_box(0.25), black_box(1.0), black_box(DT)))
    });

    let tuned = Smoothing::new(0.5, 0.9, 120.0);
    c.bench_function("smoothing_apply", |b| {
        let mut prev = 0.0;
        b.iter(|| {
            let mut target = black_box(1.0);
            tuned.apply(&mut prev, &mut target, black_box(DT));
            target
        })
    });
}

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller_frame");

    group.bench_function("apply", |b| {
        let mut controller =
            CameraController::with_default_bindings(Camera::default(), ControllerConfig::default());
        let input = InputSample {
            move_km: Vec3::new(1.0, 0.0, 1.0),
            pad_pitch: 0.3,
            pad_yaw: -0.6,
            ..Default::default()
        };
        b.iter(|| controller.apply(black_box(&input), black_box(DT)))
    });

    group.bench_function("update_from_devices", |b| {
        let mut controller =
            CameraController::with_default_bindings(Camera::default(), ControllerConfig::default());
        let mut devices = Devices::new();
        devices.keyboard.set(KeyCode::KeyW, true);
        devices.pad.connect();
        devices.pad.set_axis(PadAxis::RightStickX, 0.5);
        b.iter(|| controller.update(black_box(&devices), black_box(DT)))
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_controller);
criterion_main!(benches);
