//! Custom widget components

mod background;
mod error_panel;
mod header;
mod key_hints;
mod password_input;
mod result_panel;
mod submit_button;
mod wrap;

pub use background::{pointer_boost, quantize, shade, wave_intensity, DitherBackground};
pub use error_panel::ErrorPanel;
pub use header::{Header, TITLE};
pub use key_hints::KeyHints;
pub use password_input::{PasswordField, MASK_CHAR, PLACEHOLDER};
pub use result_panel::{ResultPanel, SUGGESTION_HEADING};
pub use submit_button::{spinner_frame, SubmitButton, BUSY_LABEL, LABEL};
pub use wrap::wrap_text;
