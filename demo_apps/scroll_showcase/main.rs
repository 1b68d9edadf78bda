//! Drives the whole showcase without a window: a procedural scooter flies in,
//! the page "scrolls" the camera around it, and the end track toggles the
//! particle reveal on and off again.
//!
//! Usage: `scroll_showcase [settings.json]`

use glam::{Vec2, Vec3};

use scooter_reveal::animation::{SequencerEvent, SequencerState};
use scooter_reveal::particles::Ray;
use scooter_reveal::resources::primitives::{CylinderOptions, create_box, create_cylinder};
use scooter_reveal::{
    FrameClock, FrameScheduler, MeshRegistry, Node, NodeHandle, ParticleField, Scene, ScrollRegion, Sequencer,
    ShowcaseSettings, VehicleRig,
};
#[cfg(test)]
use scooter_reveal::settings::ParticleCounts;

const FRAME_DT: f32 = 1.0 / 60.0;
const SCROLL_SECONDS: f32 = 6.0;

fn build_scooter(scene: &mut Scene) -> NodeHandle {
    let root = scene.add_node(Node::new("Scooter"));

    let mut body = Node::with_mesh("Scooter_Body", create_box(0.16, 0.12, 0.6));
    body.transform.position = Vec3::new(0.0, 0.12, 0.0);
    let body = scene.add_to_parent(body, root);

    let mut steer = Node::with_mesh("Steer_Column", create_box(0.04, 0.5, 0.04));
    steer.transform.position = Vec3::new(0.0, 0.3, 0.26);
    scene.add_to_parent(steer, body);

    let wheel = CylinderOptions {
        radius: 0.111_663 / 2.0,
        width: 0.04,
        radial_segments: 24,
    };
    for (name, z) in [("Wheel_Front", 0.28), ("Wheel_Rear", -0.28)] {
        let mut node = Node::with_mesh(name, create_cylinder(wheel));
        node.transform.position = Vec3::new(0.0, 0.056, z);
        scene.add_to_parent(node, root);
    }

    root
}

/// What one headless run produced.
struct RunSummary {
    particles: usize,
    bounds: (Vec3, Vec3),
    frames_rendered: u64,
    reveal_frames: u32,
    events: Vec<SequencerEvent>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => ShowcaseSettings::load(&path)?,
        None => ShowcaseSettings::default(),
    };

    let summary = run(&settings)?;
    println!(
        "{} particles in {:?}..{:?}; {} frames rendered; {} frames with live particle uniforms",
        summary.particles, summary.bounds.0, summary.bounds.1, summary.frames_rendered, summary.reveal_frames
    );
    Ok(())
}

fn run(settings: &ShowcaseSettings) -> anyhow::Result<RunSummary> {
    // === 1. Model ready: scene, registry, particles ===
    let mut scene = Scene::new();
    let root = build_scooter(&mut scene);
    let registry = MeshRegistry::build(&scene);
    let mut field = ParticleField::from_scene(&mut scene, &registry, &settings.particles);
    let rig = VehicleRig::resolve(&mut scene, &registry, root)?;

    // === 2. Timeline ===
    let mut sequencer = Sequencer::new(settings)?.with_body_attachment(rig.attachment());
    let mut scheduler = FrameScheduler::new();
    scheduler.request(sequencer.mount());

    let mut clock = FrameClock::new();
    let mut elapsed = 0.0f32;
    let mut armed_at: Option<f32> = None;
    let mut events = Vec::new();
    let mut reveal_frames = 0u32;

    // === 3. Frame loop ===
    while sequencer.state() != SequencerState::Aborted {
        // Alternate frame lengths to exercise frame-rate independence.
        let dt = if sequencer.state() == SequencerState::ScrollArmed && (elapsed * 10.0) as u32 % 2 == 1 {
            FRAME_DT * 2.0
        } else {
            FRAME_DT
        };
        elapsed += dt;

        if let Some(start) = armed_at {
            let scrolled = elapsed - start;
            sequencer.push_scroll(ScrollRegion::MainTrack, (scrolled / SCROLL_SECONDS).min(1.0));

            if scrolled >= SCROLL_SECONDS {
                sequencer.push_scroll(ScrollRegion::EndTrack, 1.0);
            }
            if scrolled >= SCROLL_SECONDS + 6.0 {
                sequencer.push_scroll(ScrollRegion::EndTrack, 0.0);
            }
            if scrolled >= SCROLL_SECONDS + 11.0 {
                sequencer.abort();
            }

            let pose = sequencer.camera_pose();
            let sweep = (scrolled * 0.5).sin();
            field.set_pointer(&Ray::from_camera(&pose, Vec2::new(sweep * 0.3, 0.1), 45f32.to_radians(), 16.0 / 9.0));
        }

        let report = sequencer.tick(dt);
        scheduler.request(report.redraw);

        if report.vehicle_moved {
            scheduler.request(rig.apply(&mut scene, sequencer.vehicle_frame()));
        }
        if scheduler.request(field.tick(elapsed, dt, sequencer.reveal_value())) {
            reveal_frames += 1;
        }

        events.extend(report.events.iter().copied());
        for event in &report.events {
            match event {
                SequencerEvent::IntroCompleted => {
                    let root_pos = scene.get_node(root).map(|n| n.transform.world_position());
                    log::info!("[{elapsed:6.2}s] intro completed, scooter at {root_pos:?}");
                }
                SequencerEvent::ScrollArmed => {
                    armed_at = Some(elapsed);
                    log::info!("[{elapsed:6.2}s] scroll armed");
                }
                SequencerEvent::RevealChanged(on) => {
                    log::info!("[{elapsed:6.2}s] reveal -> {on}");
                }
            }
        }

        if sequencer.material_mut().take_needs_update() {
            let material = sequencer.material();
            log::info!(
                "[{elapsed:6.2}s] body material pipeline change: transparent={} alpha_hash={}",
                material.is_transparent(),
                material.alpha_hash()
            );
        }

        if scheduler.take_redraw() && scheduler.frames_requested() % 120 == 0 {
            let pose = sequencer.camera_pose();
            log::debug!(
                "[{elapsed:6.2}s] camera {:?} -> {:?}, reveal {:.3}, opacity {:.3}",
                pose.position,
                pose.look_at,
                sequencer.reveal_value(),
                sequencer.material().opacity
            );
        }
    }

    clock.tick();
    log::info!("Simulated {elapsed:.1}s in {:.3}s wall time", clock.elapsed_seconds());

    let uniforms = field.uniforms();
    Ok(RunSummary {
        particles: field.buffer().len(),
        bounds: (uniforms.bounding_min, uniforms.bounding_max),
        frames_rendered: scheduler.frames_requested(),
        reveal_frames,
        events,
    })
}
