//! Spino Run entry point
//!
//! Without a window backend the binary runs attract mode: the autopilot
//! plays the game headlessly for a fixed number of frames, records are kept
//! as usual, and progress goes to the log (`RUST_LOG=info`).

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use spino_run::audio::AudioManager;
    use spino_run::autopilot::Autopilot;
    use spino_run::consts::*;
    use spino_run::records::FileRecordStore;
    use spino_run::renderer::{DrawList, SceneOptions, draw_session};
    use spino_run::settings::{SETTINGS_FILE, Settings};
    use spino_run::sim::RunEvent;
    use spino_run::Session;

    /// Two minutes of play at the target frame rate
    const DEMO_FRAMES: u32 = FPS * 120;

    env_logger::init();
    log::info!("Spino Run (headless attract mode) starting...");

    let settings = Settings::load(SETTINGS_FILE);
    let store = FileRecordStore::new(&settings.records_path);
    let seed = settings.seed.unwrap_or_else(rand::random);

    let mut session = Session::new(Box::new(store), seed).with_fixed_seed(settings.seed.is_some());
    let mut audio = AudioManager::silent();
    audio.apply_settings(&settings);
    let pilot = Autopilot::default();
    let mut opts = SceneOptions::from_settings(&settings);
    // Headless frames are not timed; report the nominal rate
    opts.fps = settings.show_fps.then_some(FPS as f32);
    let mut canvas = DrawList::new();

    let mut frames = 0u32;
    while session.is_running() && frames < DEMO_FRAMES {
        let input = pilot.input(&session);
        let out = session.frame(&input, SIM_DT);
        audio.play_all(&out.cues);

        if out.events.contains(&RunEvent::Crashed) {
            if let Some(run) = &session.run {
                log::info!(
                    "Run {} ended after {} ticks: score {}, distance {}",
                    session.runs_started(),
                    run.ticks,
                    run.score,
                    run.distance_units()
                );
            }
        }

        canvas.clear();
        draw_session(&mut canvas, &session, &opts);
        log::trace!("Frame {}: {} draw commands", frames, canvas.len());
        frames += 1;
    }

    if let Some(run) = session.run.as_ref().filter(|_| session.phase.run_is_live()) {
        log::info!(
            "Demo stopped mid-run: score {}, distance {}",
            run.score,
            run.distance_units()
        );
    }
    log::info!(
        "Attract mode finished: {} frames, {} runs, best score {}, best distance {}",
        frames,
        session.runs_started(),
        session.records.best_score,
        session.records.best_distance
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build is driven by the host page, not by main
}
