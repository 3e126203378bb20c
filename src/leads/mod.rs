mod export;
mod filter;
pub use export::export_filename;
pub use export::leads_to_xlsx;
pub use export::EXPORT_COLUMNS;
pub use filter::DateFilter;
pub use filter::LeadFilter;
pub use filter::LeadFilterParams;
