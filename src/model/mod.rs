pub mod board;
pub mod bookmark;
pub mod finance;
pub mod habit;
pub mod mindmap;
pub mod notes;
pub mod notification;
pub mod pomodoro;
pub mod prefs;
pub mod quran;
pub mod state;
pub mod timeline;
pub mod todo;

pub use board::*;
pub use bookmark::*;
pub use finance::*;
pub use habit::*;
pub use mindmap::*;
pub use notes::*;
pub use notification::*;
pub use pomodoro::*;
pub use prefs::*;
pub use quran::*;
pub use state::*;
pub use timeline::*;
pub use todo::*;
