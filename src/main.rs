//! Bounce Demo entry point
//!
//! Runs the demo headless: frames are produced at a fixed render rate,
//! independent of the simulation tick rate, and optionally traced to JSON.

use glam::DVec2;
use serde::Serialize;

use bounce_demo::platform::{FixedStepLoop, IdleInput, InputSource, ScriptedInput};
use bounce_demo::renderer::Camera;
use bounce_demo::{BounceDemo, Settings};

/// One traced frame
#[derive(Debug, Serialize)]
struct TraceSample {
    frame: u64,
    ticks: u32,
    interpolation: f64,
    position: DVec2,
    velocity: DVec2,
    render_position: DVec2,
}

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };

    log::info!("{} (headless) starting...", settings.project_name);
    let mut demo = BounceDemo::new(Camera::new(settings.world_height));
    let mut driver = FixedStepLoop::new(settings.sim_dt(), settings.max_substeps);
    driver.draw_list_mut().circle_segments = settings.circle_segments;

    log::info!(
        "Tick length {:.4}s, render rate {} Hz, {} frames",
        driver.sim_dt(),
        settings.render_hz,
        settings.frames
    );
    let mut input: Box<dyn InputSource> = if settings.scripted_input {
        Box::new(ScriptedInput::new(settings.seed))
    } else {
        Box::new(IdleInput)
    };

    let frame_dt = settings.frame_dt();
    let frames_per_second = settings.render_hz.round().max(1.0) as u64;
    let mut trace = Vec::new();

    for _ in 0..settings.frames {
        let report = driver.frame(
            &mut demo,
            input.as_mut(),
            frame_dt,
            settings.target_size(),
        );

        if settings.trace_path.is_some() {
            trace.push(TraceSample {
                frame: report.frame,
                ticks: report.ticks,
                interpolation: report.interpolation,
                position: demo.body.position,
                velocity: demo.body.velocity,
                render_position: demo.render_position(report.interpolation),
            });
        }

        if (report.frame + 1) % frames_per_second == 0 {
            log::info!(
                "t={:.0}s ticks={} pos={:.2} vel={:.3} wall_hits={}",
                (report.frame + 1) as f64 * frame_dt,
                demo.ticks(),
                demo.body.position,
                demo.body.velocity,
                demo.wall_hits()
            );
        }
    }

    log::info!(
        "Done: {} frames, {} ticks, {} wall hits, final pos {:.3} vel {:.3}",
        driver.frames(),
        driver.total_ticks(),
        demo.wall_hits(),
        demo.body.position,
        demo.body.velocity
    );

    if let Some(path) = &settings.trace_path {
        write_trace(path, &trace);
    }
    if let Some(path) = &settings.frame_dump_path {
        let draw = driver.draw_list();
        match std::fs::write(path, draw.as_bytes()) {
            Ok(()) => log::info!("Frame dump written to {} ({} triangles)", path, draw.triangle_count()),
            Err(e) => log::warn!("Could not write frame dump to {}: {}", path, e),
        }
    }
}

fn write_trace(path: &str, trace: &[TraceSample]) {
    let json = match serde_json::to_string_pretty(trace) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Could not serialize trace: {}", e);
            return;
        }
    };
    match std::fs::write(path, json) {
        Ok(()) => log::info!("Trace written to {} ({} frames)", path, trace.len()),
        Err(e) => log::warn!("Could not write trace to {}: {}", path, e),
    }
}
