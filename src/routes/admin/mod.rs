mod export;
mod leads;
mod logout;

pub use export::export_leads;
pub use export::ExportError;
pub use leads::leads_panel;
pub use leads::LeadsPanelError;
pub use logout::logout;
