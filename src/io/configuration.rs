//! Generation constants and runtime configuration defaults

// Level dimensions used when the CLI is given no size
/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 128;
/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 128;

// Room matrix
/// Default number of room columns
pub const DEFAULT_ROOM_COLUMNS: usize = 7;
/// Default number of room rows
pub const DEFAULT_ROOM_ROWS: usize = 7;

/// Default corridor width in cells
pub const DEFAULT_CORRIDOR_WIDTH: usize = 1;

/// Smallest room size as a fraction of its partition span
pub const DEFAULT_MIN_ROOM_RATIO: f64 = 0.3;
/// Largest room size (exclusive) as a fraction of its partition span
pub const DEFAULT_MAX_ROOM_RATIO: f64 = 0.8;

// Exit offsets are drawn from [lo + 1, hi - 1), which needs a half-size of at least 2
/// Smallest half-size a room may be sampled with
pub const MIN_ROOM_HALF_SIZE: usize = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of levels generated per run
pub const DEFAULT_LEVEL_COUNT: usize = 1;

/// Side length of the local window printed around the start cell
pub const DEFAULT_WINDOW_SIZE: usize = 21;

// Progress bar display settings
/// Minimum batch size before a progress bar is shown
pub const MIN_LEVELS_FOR_PROGRESS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Pixels per cell in exported PNG renders
pub const PNG_CELL_SCALE: u32 = 4;
/// Suffix added before the level number in output filenames
pub const OUTPUT_SUFFIX: &str = "_level";
