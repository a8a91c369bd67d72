//! Headless demo driver: orbiting targets framed by a group camera.
//!
//! Runs the controller for a number of frames and logs the camera state.
//! Set `RUST_LOG=info` (or `debug`/`trace`) to see output.

use std::f32::consts::TAU;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use glam::Vec3;
use groupcam::camera::{Camera, Projection};
use groupcam::controller::GroupCameraController;
use groupcam::options::Options;
use groupcam::tracking::{BodyTarget, TargetId, TrackedObject};
use groupcam::util::frame_timing::FrameTiming;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;

#[derive(Parser, Debug)]
#[command(name = "groupcam")]
#[command(
    about = "Frame a group of moving targets with a follow-and-zoom camera",
    long_about = None
)]
struct Cli {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Fixed frame delta in seconds; ignored with --realtime
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Drive the loop from the wall clock at roughly 60 FPS
    #[arg(long)]
    realtime: bool,

    /// Number of orbiting targets
    #[arg(long, default_value_t = 4)]
    targets: u32,

    /// Seed for the target layout
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Options preset (TOML)
    #[arg(long)]
    options: Option<PathBuf>,

    /// Use an orthographic camera
    #[arg(long)]
    orthographic: bool,

    /// Do not supply a camera; exercise the fallback camera path
    #[arg(long)]
    no_camera: bool,
}

/// A target circling a fixed point.
struct Orbiter {
    tracker: TrackedObject,
    center: Vec3,
    radius: f32,
    angular_speed: f32,
    phase: f32,
    size: Vec3,
}

impl Orbiter {
    fn random(id: u32, rng: &mut StdRng) -> Self {
        Self {
            tracker: TrackedObject::new(TargetId(id)),
            center: Vec3::new(
                rng.random_range(-15.0..15.0),
                0.0,
                rng.random_range(-15.0..15.0),
            ),
            radius: rng.random_range(1.0..6.0),
            angular_speed: rng.random_range(0.2..1.5),
            phase: rng.random_range(0.0..TAU),
            size: Vec3::splat(rng.random_range(0.5..2.0)),
        }
    }

    fn body_at(&self, time: f32) -> BodyTarget {
        let angle = self.phase + self.angular_speed * time;
        let offset = Vec3::new(angle.cos(), 0.0, angle.sin()) * self.radius;
        BodyTarget::new(self.center + offset, self.size)
    }
}

fn build_camera(cli: &Cli, options: &Options) -> Option<Camera> {
    if cli.no_camera {
        return None;
    }
    let projection = if cli.orthographic {
        Projection::Orthographic {
            size: options.camera.orthographic_size,
        }
    } else {
        Projection::Perspective {
            fovy: options.camera.fovy,
        }
    };
    let camera = Camera::new(
        projection,
        options.camera.aspect,
        options.camera.znear,
        options.camera.zfar,
    )
    .looking_at(Vec3::new(0.0, 25.0, 25.0), Vec3::ZERO, Vec3::Y);
    Some(camera)
}

fn load_options(cli: &Cli) -> Options {
    let Some(path) = &cli.options else {
        return Options::default();
    };
    match Options::load(path) {
        Ok(options) => {
            log::info!("Loaded options from {}", path.display());
            options
        }
        Err(e) => {
            log::error!("Failed to load options from {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = load_options(&cli);

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut orbiters: Vec<Orbiter> =
        (0..cli.targets).map(|id| Orbiter::random(id, &mut rng)).collect();

    let mut controller =
        GroupCameraController::new(build_camera(&cli, &options), &options);
    for orbiter in &mut orbiters {
        orbiter.tracker.on_enable(&mut controller);
    }

    let mut scene: FxHashMap<TargetId, BodyTarget> = FxHashMap::default();
    let mut timing = FrameTiming::default();
    let mut time = 0.0_f32;

    for frame in 0..cli.frames {
        let dt = if cli.realtime {
            thread::sleep(Duration::from_millis(16));
            timing.tick()
        } else {
            cli.dt
        };
        time += dt;

        // Game logic: move the targets, then let the camera react.
        for orbiter in &orbiters {
            let _ = scene.insert(orbiter.tracker.id(), orbiter.body_at(time));
        }

        // Drop the first target out of the group halfway through.
        if frame == cli.frames / 2 {
            if let Some(first) = orbiters.first_mut() {
                first.tracker.on_disable(&mut controller);
                log::info!("{} left the group", first.tracker.id());
            }
        }

        let report = controller.late_update(&scene, dt);

        if frame % 60 == 0 {
            let camera = controller.camera();
            log::info!(
                "frame {frame:4}: camera {:?} dolly {:7.2} zoom {:?} \
                 ({} targets)",
                camera.position,
                report.dolly,
                report.zoom,
                report.resolved
            );
        }
    }

    if cli.realtime {
        log::info!("average {:.1} FPS", timing.fps());
    }
    log::info!(
        "final rig position {:?}, follow target {:?}",
        controller.rig().position(),
        controller.target_position()
    );
}
