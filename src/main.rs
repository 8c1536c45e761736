//! Nova Strike entry point
//!
//! Headless demo driver for the deterministic simulation. A scripted
//! autopilot plays one session at a fixed timestep, which makes any run
//! reproducible from its seed without a renderer attached.
//!
//! Usage: nova-strike [--seed N] [--frames N] [--dump]

use std::env;
use std::process::ExitCode;

use nova_strike::consts::*;
use nova_strike::sim::{GamePhase, GameSession, tick};

/// Wall-clock milliseconds per driver frame (60 Hz host loop)
const FRAME_DT_MS: f32 = 1000.0 / 60.0;
/// Frames the driver keeps running after a victory so the last burst plays out
const VICTORY_GRACE_FRAMES: u32 = 120;
/// Default run cap; ten minutes of simulated play
const DEFAULT_FRAME_CAP: u32 = 36_000;

struct Options {
    seed: u64,
    frames: u32,
    dump: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut opts = Options {
        seed: 0,
        frames: DEFAULT_FRAME_CAP,
        dump: false,
    };
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or_else(|| "--seed needs a value".to_string())?;
                opts.seed = value.parse().map_err(|_| format!("bad seed: {value}"))?;
            }
            "--frames" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--frames needs a value".to_string())?;
                opts.frames = value.parse().map_err(|_| format!("bad frame count: {value}"))?;
            }
            "--dump" => opts.dump = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(opts)
}

/// Steer toward the lowest enemy and fire on a fixed cadence
fn autopilot(session: &mut GameSession, frame: u32) {
    let craft_center = session.store.craft.pos.x + CRAFT_SIZE.x / 2.0;
    let target = session
        .store
        .enemies
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|enemy| enemy.center().x);
    match target {
        Some(x) if x < craft_center - ENEMY_SIZE.x / 2.0 => session.move_left(true),
        Some(x) if x > craft_center + ENEMY_SIZE.x / 2.0 => session.move_right(true),
        _ => session.move_left(false),
    }
    if frame % 12 == 0 {
        session.fire();
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let opts = match parse_args() {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: nova-strike [--seed N] [--frames N] [--dump]");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Nova Strike (headless) starting with seed {}", opts.seed);

    let mut session = GameSession::new(opts.seed);
    session.start();

    let mut accumulator = 0.0f32;
    let mut grace = VICTORY_GRACE_FRAMES;
    for frame in 0..opts.frames {
        autopilot(&mut session, frame);
        session.advance_spawn_timer(FRAME_DT_MS);

        // Fixed-substep catch-up, same shape a render-loop host would use;
        // the substep cap keeps a stalled frame from producing a tick burst
        accumulator += FRAME_DT_MS;
        let mut substeps = 0;
        while accumulator >= SIM_DT_MS && substeps < MAX_SUBSTEPS {
            tick(&mut session, SIM_DT_MS);
            accumulator -= SIM_DT_MS;
            substeps += 1;
        }

        match session.phase {
            GamePhase::GameOver => break,
            GamePhase::Victory => {
                if grace == 0 {
                    break;
                }
                grace -= 1;
            }
            GamePhase::Idle | GamePhase::Running => {}
        }
    }

    log::info!(
        "run finished: phase {:?}, score {}, lives {}, {} ticks",
        session.phase,
        session.score,
        session.lives,
        session.time_ticks
    );

    if opts.dump {
        match serde_json::to_string_pretty(&session.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                log::error!("snapshot serialization failed: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!(
            "{:?}: score {} lives {} after {} ticks",
            session.phase, session.score, session.lives, session.time_ticks
        );
    }

    ExitCode::SUCCESS
}
