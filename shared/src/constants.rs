pub const SPIN_ENDPOINT: &str = "/api/spin";
pub const HISTORY_ENDPOINT: &str = "/api/history";
pub const RESET_ENDPOINT: &str = "/api/reset";
pub const STATISTICS_ENDPOINT: &str = "/api/statistics";
pub const COLORS_ENDPOINT: &str = "/api/colors";

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

pub const HISTORY_LIMIT: usize = 20;
pub const BATCH_SPINS: usize = 10;
pub const BATCH_PAUSE_MS: u32 = 100;
pub const SPIN_ANIMATION_MS: u32 = 2500;

// Wheel geometry, degrees measured clockwise from the pointer
pub const STOP_JITTER_DEG: f64 = 5.0;
pub const MIN_REVOLUTIONS: f64 = 3.0;
pub const MAX_REVOLUTIONS: f64 = 5.0;
pub const YELLOW_STOP_DEG: f64 = 2.88;
pub const PURPLE_STOP_DEG: f64 = 29.16;
pub const BLUE_STOP_DEG: f64 = 180.0;
pub const YELLOW_SECTOR_END_DEG: f64 = 5.76;
pub const PURPLE_SECTOR_END_DEG: f64 = 52.56;

pub const SPIN_LABEL_IDLE: &str = "GIRAR RULETA";
pub const SPIN_LABEL_BUSY: &str = "GIRANDO...";
pub const BATCH_LABEL_IDLE: &str = "TIRAR 10";
pub const BATCH_LABEL_BUSY: &str = "GIRANDO 10...";
pub const RESET_LABEL: &str = "REINICIAR";

pub const SPIN_FAILED_ALERT: &str = "Error al conectar con el servidor";
pub const RESET_FAILED_ALERT: &str = "Error al reiniciar el juego";
pub const RESET_CONFIRM_PROMPT: &str = "¿Estás seguro de que quieres reiniciar el juego?";
