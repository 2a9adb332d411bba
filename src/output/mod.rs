//! Report export functionality

pub mod csv_export;
pub mod excel;
pub mod json_export;

pub use csv_export::CsvExporter;
pub use excel::ExcelExporter;
pub use json_export::JsonExporter;

/// Report column headers, shared by the tabular sinks
pub(crate) const HEADERS: [&str; 5] = [
    "Tamanho do Grafo",
    "Número de Threads",
    "Tempo Médio Sequencial (s)",
    "Tempo Médio Paralelo (s)",
    "Aceleração",
];
