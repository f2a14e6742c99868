// Adapters layer: concrete implementations of the domain ports.

pub mod file_store;
pub mod memory_store;
pub mod terminal;
pub mod toast;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use terminal::{ConsoleInput, ConsolePrompt, TerminalSurface};
pub use toast::{RecordingNotifier, ToastNotifier};
