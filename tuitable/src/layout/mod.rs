mod widths;

pub use widths::resolve_widths;
