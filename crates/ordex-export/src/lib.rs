pub mod csv;
pub mod currency;
pub mod drive;
pub mod error;
pub mod filename;
pub mod sink;

pub use csv::{ensure_exportable, generate_csv_export, orders_to_csv, CsvExport};
pub use currency::{format_currency, parse_currency};
pub use drive::{export_to_drive, DriveClient, EnvTokenProvider, TokenProvider, DRIVE_FILE_SCOPE};
pub use error::ExportError;
pub use filename::export_filename;
pub use sink::write_csv;
