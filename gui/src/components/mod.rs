// GUI components module
pub mod chart;
pub mod header;
pub mod markdown;
pub mod metric_card;
pub mod results_table;
pub mod toolbar;
pub mod upgrade_assistant;

pub use chart::PredictionChart;
pub use header::Header;
pub use metric_card::MetricCard;
pub use results_table::ResultsTable;
pub use toolbar::IntervalSelector;
pub use upgrade_assistant::UpgradeAssistant;
