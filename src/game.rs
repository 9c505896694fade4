//! Game session state machine
//!
//! A `Session` owns everything that outlives a single run: the current
//! phase, the menus, the best records and where they are stored. The driver
//! calls [`Session::frame`] once per rendered frame and gets back the sound
//! cues that frame produced.

use crate::audio::SoundEffect;
use crate::consts::*;
use crate::input::{FrameInput, Key};
use crate::records::{RecordStore, Records};
use crate::sim::{Background, RunEvent, RunState, TickInput, tick};
use crate::ui::{Menu, MenuAction, MenuResponse};

/// Golden-ratio step between successive run seeds
const SEED_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen over a scrolling background
    Menu,
    /// Active gameplay
    Playing,
    /// Run frozen under the pause menu
    Paused,
    /// Run frozen while the resume timer runs down
    Countdown,
    /// Run ended by a collision
    GameOver,
}

impl GamePhase {
    /// Phases in which a run exists and has not ended
    pub fn run_is_live(self) -> bool {
        matches!(
            self,
            GamePhase::Playing | GamePhase::Paused | GamePhase::Countdown
        )
    }
}

/// What a frame produced for the outside world
#[derive(Debug, Clone, Default)]
pub struct FrameOutput {
    /// Sound cues to play, in order
    pub cues: Vec<SoundEffect>,
    /// Run events from this frame's tick, if one ran
    pub events: Vec<RunEvent>,
}

pub struct Session {
    pub phase: GamePhase,
    /// Current run; kept frozen while paused, counting down or game over
    pub run: Option<RunState>,
    pub records: Records,
    store: Box<dyn RecordStore>,
    pub main_menu: Menu,
    pub pause_menu: Menu,
    pub game_over_menu: Menu,
    /// Seconds left before play resumes
    pub countdown: f32,
    /// Scenery behind the title screen
    pub menu_background: Background,
    /// The last finished run set a record
    pub new_best: bool,
    tree_variants: usize,
    base_seed: u64,
    fixed_seed: bool,
    runs_started: u64,
    running: bool,
}

impl Session {
    /// Create a session at the title screen, loading records from `store`
    pub fn new(store: Box<dyn RecordStore>, seed: u64) -> Self {
        let records = store.load();
        Self {
            phase: GamePhase::Menu,
            run: None,
            records,
            store,
            main_menu: Menu::main(),
            pause_menu: Menu::pause(),
            game_over_menu: Menu::game_over(),
            countdown: 0.0,
            menu_background: Background::new(seed.wrapping_add(1), 1),
            new_best: false,
            tree_variants: 1,
            base_seed: seed,
            fixed_seed: false,
            runs_started: 0,
            running: true,
        }
    }

    /// Number of decoded tree images available to billboards
    pub fn with_tree_variants(mut self, variants: usize) -> Self {
        self.tree_variants = variants.max(1);
        self.menu_background = Background::new(self.base_seed.wrapping_add(1), self.tree_variants);
        self
    }

    /// Reuse the same seed for every run instead of deriving a new one
    pub fn with_fixed_seed(mut self, fixed: bool) -> Self {
        self.fixed_seed = fixed;
        self
    }

    /// False once the player chose Exit or closed the window
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Runs started since the session was created
    pub fn runs_started(&self) -> u64 {
        self.runs_started
    }

    /// Number shown during the resume countdown
    pub fn countdown_number(&self) -> Option<u32> {
        (self.phase == GamePhase::Countdown).then(|| (self.countdown.ceil() as u32).max(1))
    }

    /// Advance the session by one rendered frame
    pub fn frame(&mut self, input: &FrameInput, dt: f32) -> FrameOutput {
        let mut out = FrameOutput::default();
        if !self.running {
            return out;
        }
        // The countdown follows wall-clock time; only the run is clamped
        let wall_dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let dt = wall_dt.min(MAX_FRAME_DT);

        if input.quit_requested() {
            if self.phase.run_is_live() {
                self.commit_records();
            }
            log::info!("Quit requested in {:?}", self.phase);
            self.running = false;
            return out;
        }

        match self.phase {
            GamePhase::Menu => {
                self.menu_background.update();
                let response = self.main_menu.navigate(input);
                push_menu_cues(&response, &mut out);
                match response.activated {
                    Some(MenuAction::Play) => self.start_run(),
                    Some(MenuAction::Exit) => {
                        log::info!("Exit selected");
                        self.running = false;
                    }
                    _ => {}
                }
            }
            GamePhase::Playing => self.frame_playing(input, dt, &mut out),
            GamePhase::Paused => {
                let response = self.pause_menu.navigate(input);
                push_menu_cues(&response, &mut out);
                match response.activated {
                    Some(MenuAction::Resume) => {
                        self.countdown = COUNTDOWN_SECS;
                        self.phase = GamePhase::Countdown;
                    }
                    Some(MenuAction::ExitToMenu) => {
                        self.commit_records();
                        self.enter_menu();
                    }
                    _ => {}
                }
            }
            GamePhase::Countdown => {
                self.countdown -= wall_dt;
                if self.countdown <= 0.0 {
                    self.countdown = 0.0;
                    self.phase = GamePhase::Playing;
                }
            }
            GamePhase::GameOver => {
                let response = self.game_over_menu.navigate(input);
                push_menu_cues(&response, &mut out);
                match response.activated {
                    Some(MenuAction::Restart) => self.start_run(),
                    Some(MenuAction::GoToMenu) => self.enter_menu(),
                    _ => {}
                }
            }
        }

        out
    }

    fn frame_playing(&mut self, input: &FrameInput, dt: f32, out: &mut FrameOutput) {
        let Some(run) = self.run.as_mut() else {
            log::warn!("Playing without a run, returning to menu");
            self.enter_menu();
            return;
        };

        if input.keys_down().any(|k| k == Key::Escape) {
            self.pause_menu.reset();
            self.phase = GamePhase::Paused;
            return;
        }

        let tick_input = TickInput {
            jump: input.keys_down().any(|k| k.is_jump()),
            duck_held: input.duck_held,
        };
        let events = tick(run, &tick_input, dt);

        for event in &events {
            match event {
                RunEvent::Jumped => out.cues.push(SoundEffect::Jump),
                RunEvent::Checkpoint(index) => {
                    log::debug!("Checkpoint {}", index);
                    out.cues.push(SoundEffect::Checkpoint);
                }
                RunEvent::Crashed => out.cues.push(SoundEffect::Death),
                RunEvent::ObstaclePassed => {}
            }
        }

        if events.contains(&RunEvent::Crashed) {
            log::info!(
                "Run over: score {} / distance {}",
                run.score,
                run.distance_units()
            );
            self.commit_records();
            self.game_over_menu.reset();
            self.phase = GamePhase::GameOver;
        }

        out.events = events;
    }

    fn start_run(&mut self) {
        let seed = if self.fixed_seed {
            self.base_seed
        } else {
            self.base_seed
                .wrapping_add(self.runs_started.wrapping_mul(SEED_STEP))
        };
        self.runs_started += 1;
        log::info!("Starting run #{} (seed {})", self.runs_started, seed);
        self.run = Some(RunState::new(seed, self.tree_variants));
        self.new_best = false;
        self.pause_menu.reset();
        self.game_over_menu.reset();
        self.phase = GamePhase::Playing;
    }

    fn enter_menu(&mut self) {
        self.run = None;
        self.main_menu.reset();
        self.phase = GamePhase::Menu;
    }

    /// Fold the current run into the records and persist them on a new best
    fn commit_records(&mut self) {
        let Some(run) = &self.run else {
            return;
        };
        if !self.records.update(run.score, run.distance_units()) {
            return;
        }
        self.new_best = true;
        log::info!(
            "New record: score {} / distance {}",
            self.records.best_score,
            self.records.best_distance
        );
        if let Err(e) = self.store.save(&self.records) {
            log::warn!("Failed to save records: {}", e);
        }
    }
}

fn push_menu_cues(response: &MenuResponse, out: &mut FrameOutput) {
    if response.selection_changed {
        out.cues.push(SoundEffect::MenuHover);
    }
    if response.activated.is_some() {
        out.cues.push(SoundEffect::MenuClick);
    }
}
