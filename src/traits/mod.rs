pub mod renderer;

// Re-export traits
pub use renderer::ReportRenderer;
