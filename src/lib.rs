//! Split search and win-rate estimation for 13-card three-row poker.
//!
//! A hand of thirteen cards is set into a 3-card front, a 5-card middle and
//! a 5-card back, each ranked as a poker hand, with front <= middle <= back.
//! Given the cards and an iteration budget, [`simulate`] returns the split
//! with the highest estimated chance of beating a randomly dealt opponent
//! in all three rows, or a guaranteed win for quads and straight flushes.
pub mod api;
pub mod arrange;
pub mod cards;
pub mod simulation;

pub use simulation::simulate;

/// Win rates and other sampled frequencies.
pub type Probability = f32;

// ============================================================================
// HAND SHAPE
// ============================================================================
/// Cards dealt to the player.
pub const HAND_SIZE: usize = 13;
/// Cards in the front row.
pub const FRONT_SIZE: usize = 3;
/// Cards in the middle row.
pub const MIDDLE_SIZE: usize = 5;
/// Cards in the back row.
pub const BACK_SIZE: usize = 5;

// ============================================================================
// SEARCH PARAMETERS
// ============================================================================
/// Candidate splits kept after heuristic pruning (bounds Monte Carlo cost).
pub const TOP_SPLITS: usize = 50;
/// Opponent deals sampled per candidate when the caller does not say.
pub const DEFAULT_ITERATIONS: usize = 5000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
