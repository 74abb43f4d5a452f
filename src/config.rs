use serde::Deserialize;

const DEFAULT_SYNC_STAGES: usize = 3;
const DEFAULT_WAKEUP_COUNT: u8 = 3;
const DEFAULT_MEM_WORDS: usize = 256;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub general: GeneralConfig,

    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub timer: TimerConfig,

    #[serde(default)]
    pub memory: MemoryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneralConfig {
    pub trace_ticks: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SyncConfig {
    /// Depth of each request synchronizer in local clock ticks.
    #[serde(default = "default_sync_stages")]
    pub stages: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            stages: DEFAULT_SYNC_STAGES,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TimerConfig {
    /// Count the wakeup timer holds at; completion needs `wakeup_count + 1`
    /// consecutive enabled ticks.
    #[serde(default = "default_wakeup_count")]
    pub wakeup_count: u8,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            wakeup_count: DEFAULT_WAKEUP_COUNT,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MemoryConfig {
    /// Backing store size in 32-bit words; addresses index words modulo this.
    #[serde(default = "default_mem_words")]
    pub words: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            words: DEFAULT_MEM_WORDS,
        }
    }
}

impl Config {
    /// Returns a configuration with every field at its default, tracing off.
    ///
    /// Used by tests and library consumers that do not load a TOML file.
    pub fn defaults() -> Self {
        Self {
            general: GeneralConfig { trace_ticks: false },
            sync: SyncConfig::default(),
            timer: TimerConfig::default(),
            memory: MemoryConfig::default(),
        }
    }
}

fn default_sync_stages() -> usize {
    DEFAULT_SYNC_STAGES
}

fn default_wakeup_count() -> u8 {
    DEFAULT_WAKEUP_COUNT
}

fn default_mem_words() -> usize {
    DEFAULT_MEM_WORDS
}
