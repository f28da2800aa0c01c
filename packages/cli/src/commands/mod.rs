pub mod export;
pub mod init;
pub mod lint;
pub mod new;
pub mod show;
pub mod templates;

pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use lint::{lint, LintArgs};
pub use new::{new, NewArgs};
pub use show::{show, ShowArgs};
pub use templates::{templates, TemplatesArgs};
