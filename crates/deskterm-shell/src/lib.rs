pub mod command;
pub mod history;
pub mod input;
pub mod scrollback;
pub mod session;

pub use command::{BuiltinCommand, Dispatch, DispatchOutcome, Dispatcher};
pub use history::{CommandHistory, RecallDirection};
pub use input::InputLine;
pub use scrollback::ScrollbackBuffer;
pub use session::{KeyInput, ShellSession};
