pub mod pdfs;
pub mod urls;
